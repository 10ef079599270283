pub mod item;

pub use item::ItemError;

use thiserror::Error;

use crate::stores::Collection;

/// Internal error type for store and coordinator operations
///
/// Infrastructure failures (`Storage`, `Corrupt`, `Serialize`, `Task`) all
/// surface to clients as a generic 500. Domain failures live in `Item`.
///
/// This error type is NOT exposed via API. Endpoints convert it to
/// `ItemsError` explicitly.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Reading or writing a backing file failed
    #[error("Storage error: {operation} {collection} failed: {source}")]
    Storage {
        collection: Collection,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Backing data is not a JSON array of records
    #[error("Corrupt collection {collection}: {source}")]
    Corrupt {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be turned back into JSON
    #[error("Serialization error: {collection}: {source}")]
    Serialize {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    /// A blocking worker panicked or was cancelled
    #[error("Task error: {operation} did not complete: {message}")]
    Task { operation: String, message: String },

    #[error(transparent)]
    Item(#[from] ItemError),
}

impl InternalError {
    pub fn storage(collection: Collection, operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Storage {
            collection,
            operation: operation.into(),
            source,
        }
    }

    pub fn corrupt(collection: Collection, source: serde_json::Error) -> Self {
        Self::Corrupt { collection, source }
    }

    pub fn serialize(collection: Collection, source: serde_json::Error) -> Self {
        Self::Serialize { collection, source }
    }

    pub fn task(operation: impl Into<String>, source: tokio::task::JoinError) -> Self {
        Self::Task {
            operation: operation.into(),
            message: source.to_string(),
        }
    }
}
