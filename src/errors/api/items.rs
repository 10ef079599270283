use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

use crate::errors::InternalError;
use crate::types::dto::common::MessageResponse;

pub const ITEM_NOT_FOUND: &str = "Item not found";

/// Errors returned by the submission and admin endpoints
///
/// Both variants carry the same `{message}` body as a success so clients can
/// show the text without inspecting the status code.
#[derive(ApiResponse, Debug)]
pub enum ItemsError {
    /// The index does not resolve to a record
    #[oai(status = 404)]
    NotFound(Json<MessageResponse>),

    /// The collection could not be read or written
    #[oai(status = 500)]
    StorageFailure(Json<MessageResponse>),
}

impl ItemsError {
    pub fn not_found() -> Self {
        ItemsError::NotFound(Json(MessageResponse::new(ITEM_NOT_FOUND)))
    }

    pub fn storage_failure(message: impl Into<String>) -> Self {
        ItemsError::StorageFailure(Json(MessageResponse::new(message)))
    }

    /// Map an internal error, using `failure_message` for storage problems
    ///
    /// The internal error is logged here; its details never reach the client.
    pub fn from_internal(err: InternalError, failure_message: &str) -> Self {
        match err {
            InternalError::Item(item_err) => {
                tracing::debug!("{}", item_err);
                ItemsError::not_found()
            }
            other => {
                tracing::error!("{}", other);
                ItemsError::storage_failure(failure_message)
            }
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ItemsError::NotFound(json) => json.0.message.clone(),
            ItemsError::StorageFailure(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
