//! In-process document store
//!
//! Mirrors the subset of MongoDB semantics the service relies on: top-level
//! equality filters, `$set` updates, store-assigned ObjectIds, insertion-order
//! reads. Used by tests and by `STORE_BACKEND=memory`.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use parking_lot::RwLock;

use super::{DocumentStore, RepoError, RepoResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RwLock<Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

fn check_filter(filter: &Document) -> RepoResult<()> {
    match filter.keys().find(|k| k.starts_with('$')) {
        Some(op) => Err(RepoError::Database(format!(
            "unsupported filter operator '{}'",
            op
        ))),
        None => Ok(()),
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

/// Validate an update expression and return its `$set` fields
fn set_fields(update: &Document) -> RepoResult<&Document> {
    if let Some(key) = update.keys().find(|k| k.as_str() != "$set") {
        return Err(RepoError::Database(format!(
            "unsupported update operator '{}'",
            key
        )));
    }
    let fields = update
        .get_document("$set")
        .map_err(|_| RepoError::Database("update document requires '$set'".to_string()))?;
    if fields.contains_key("_id") {
        return Err(RepoError::Database(
            "performing an update on the path '_id' would modify the immutable field '_id'"
                .to_string(),
        ));
    }
    Ok(fields)
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find(&self, filter: Document) -> RepoResult<Vec<Document>> {
        check_filter(&filter)?;
        Ok(self
            .documents
            .read()
            .iter()
            .filter(|d| matches(d, &filter))
            .cloned()
            .collect())
    }

    async fn find_one(&self, filter: Document) -> RepoResult<Option<Document>> {
        check_filter(&filter)?;
        Ok(self
            .documents
            .read()
            .iter()
            .find(|d| matches(d, &filter))
            .cloned())
    }

    async fn insert_one(&self, document: Document) -> RepoResult<Bson> {
        let id = document
            .get("_id")
            .cloned()
            .unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));

        let mut documents = self.documents.write();
        if documents.iter().any(|d| d.get("_id") == Some(&id)) {
            return Err(RepoError::Database(format!(
                "E11000 duplicate key error: _id {}",
                id
            )));
        }

        let mut stored = doc! { "_id": id.clone() };
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }
        documents.push(stored);
        Ok(id)
    }

    async fn find_one_and_update(
        &self,
        filter: Document,
        update: Document,
    ) -> RepoResult<Option<Document>> {
        check_filter(&filter)?;
        let fields = set_fields(&update)?;

        let mut documents = self.documents.write();
        let Some(document) = documents.iter_mut().find(|d| matches(d, &filter)) else {
            return Ok(None);
        };
        let before = document.clone();
        for (key, value) in fields {
            document.insert(key.clone(), value.clone());
        }
        Ok(Some(before))
    }

    async fn delete_one(&self, filter: Document) -> RepoResult<u64> {
        check_filter(&filter)?;
        let mut documents = self.documents.write();
        match documents.iter().position(|d| matches(d, &filter)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
