//! Database Module
//!
//! Document store abstraction, the employee record mapper and the repository
//! that sequences them.

pub mod mapper;
pub mod memory;
pub mod models;
pub mod mongo;
pub mod repository;
pub mod store;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::DocumentStore;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::core::{Config, StoreBackend};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Decode failure: {0}")]
    Decode(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<mongodb::error::Error> for RepoError {
    fn from(err: mongodb::error::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<mongodb::bson::de::Error> for RepoError {
    fn from(err: mongodb::bson::de::Error) -> Self {
        RepoError::Decode(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for RepoError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        RepoError::Database(format!("failed to encode document: {}", err))
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Open the configured document store
///
/// For MongoDB this parses the connection string, applies the connect timeout
/// and pings the database before returning.
pub async fn connect(config: &Config) -> RepoResult<Arc<dyn DocumentStore>> {
    match config.store_backend {
        StoreBackend::MongoDb => {
            let store = MongoStore::connect(
                &config.mongodb_uri,
                &config.database_name,
                &config.collection,
                Duration::from_millis(config.connect_timeout_ms),
            )
            .await?;
            tracing::info!(
                database = %config.database_name,
                collection = %config.collection,
                "MongoDB connection established"
            );
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
