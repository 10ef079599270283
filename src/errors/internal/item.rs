use thiserror::Error;

use crate::stores::Collection;

/// Item workflow errors
#[derive(Error, Debug)]
pub enum ItemError {
    /// The requested position does not hold a record
    #[error("No {collection} item at index {index}")]
    NotFound { collection: Collection, index: String },
}

impl ItemError {
    pub fn not_found(collection: Collection, index: impl Into<String>) -> Self {
        Self::NotFound {
            collection,
            index: index.into(),
        }
    }
}
