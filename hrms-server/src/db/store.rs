//! Document Store Client contract
//!
//! A store instance is bound to a single collection. Filters and updates are
//! plain BSON documents built by [`crate::db::mapper`].

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};

use super::RepoResult;

/// Collection-scoped document store
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// All documents matching `filter` (an empty filter matches everything)
    async fn find(&self, filter: Document) -> RepoResult<Vec<Document>>;

    /// First document matching `filter`
    async fn find_one(&self, filter: Document) -> RepoResult<Option<Document>>;

    /// Insert a document, returning the `_id` the store assigned
    async fn insert_one(&self, document: Document) -> RepoResult<Bson>;

    /// Apply `update` to the first match, returning the document as it was
    /// before the update, or `None` when nothing matched
    async fn find_one_and_update(
        &self,
        filter: Document,
        update: Document,
    ) -> RepoResult<Option<Document>>;

    /// Delete the first match, returning the number of deleted documents
    async fn delete_one(&self, filter: Document) -> RepoResult<u64>;

    /// Round-trip to the backing database
    async fn ping(&self) -> RepoResult<()>;

    /// Release connections. Called once at process shutdown.
    async fn shutdown(&self) {}
}
