//! MongoDB-backed document store

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use super::{DocumentStore, RepoResult};

/// Document store over one MongoDB collection
///
/// `mongodb::Client` is connection-pooled and cheap to clone; a single
/// instance is shared by every request.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    database: String,
    collection: Collection<Document>,
}

impl MongoStore {
    /// Connect and verify the deployment is reachable
    ///
    /// `timeout` bounds connection setup and server selection only, request
    /// operations use the driver defaults.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
        timeout: Duration,
    ) -> RepoResult<Self> {
        let mut options = ClientOptions::parse(uri).await?;
        options.app_name = Some("hrms-server".to_string());
        options.connect_timeout = Some(timeout);
        options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(options)?;
        let store = Self::from_client(client, database, collection);
        store.ping().await?;
        Ok(store)
    }

    /// Wrap an existing client
    pub fn from_client(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection::<Document>(collection);
        Self {
            client,
            database: database.to_string(),
            collection,
        }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, filter: Document) -> RepoResult<Vec<Document>> {
        let cursor = self.collection.find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn find_one(&self, filter: Document) -> RepoResult<Option<Document>> {
        Ok(self.collection.find_one(filter).await?)
    }

    async fn insert_one(&self, document: Document) -> RepoResult<Bson> {
        let result = self.collection.insert_one(document).await?;
        Ok(result.inserted_id)
    }

    async fn find_one_and_update(
        &self,
        filter: Document,
        update: Document,
    ) -> RepoResult<Option<Document>> {
        Ok(self.collection.find_one_and_update(filter, update).await?)
    }

    async fn delete_one(&self, filter: Document) -> RepoResult<u64> {
        let result = self.collection.delete_one(filter).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> RepoResult<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }
}
