use poem_openapi::{ApiResponse, Object, payload::Json};
use serde_json::Value;

use crate::errors::InternalError;
use crate::types::db::{FoundItem, ItemRecord, LostItem};

/// Request body for reporting a lost item
///
/// Every field is optional; anything missing is stored as an empty string.
#[derive(Object, Debug, Default)]
pub struct ReportLostRequest {
    /// What was lost
    pub item: Option<String>,

    /// British spelling of the color field, consulted first
    pub colour: Option<String>,

    /// Color of the item
    pub color: Option<String>,

    /// Free-text description
    pub details: Option<String>,

    /// Where the item was last seen
    pub location: Option<String>,
}

/// Request body for handing in a found item
#[derive(Object, Debug, Default)]
pub struct ReportFoundRequest {
    /// What was found
    pub item: Option<String>,

    /// Where it was found
    pub location: Option<String>,
}

/// Records as listed to clients
///
/// Each record is sent as stored, including fields this build does not model.
pub fn listing<R: ItemRecord>(records: &[R]) -> Result<Vec<Value>, InternalError> {
    records
        .iter()
        .map(|record| serde_json::to_value(record).map_err(|e| InternalError::serialize(R::COLLECTION, e)))
        .collect()
}

/// Listing of the lost collection
///
/// A storage failure still answers with a JSON array (always empty) so
/// clients can render it without special-casing the error.
#[derive(ApiResponse, Debug)]
pub enum LostListResponse {
    /// Current contents of the lost collection
    #[oai(status = 200)]
    Ok(Json<Vec<Value>>),

    /// The collection could not be read
    #[oai(status = 500)]
    StorageFailure(Json<Vec<Value>>),
}

/// Listing of the found collection
#[derive(ApiResponse, Debug)]
pub enum FoundListResponse {
    /// Current contents of the found collection
    #[oai(status = 200)]
    Ok(Json<Vec<Value>>),

    /// The collection could not be read
    #[oai(status = 500)]
    StorageFailure(Json<Vec<Value>>),
}

/// First of the given values that is present and non-empty
fn first_non_empty(candidates: [Option<String>; 2]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

impl From<ReportLostRequest> for LostItem {
    fn from(request: ReportLostRequest) -> Self {
        LostItem::reported(
            request.item.unwrap_or_default(),
            first_non_empty([request.colour, request.color]),
            request.details.unwrap_or_default(),
            request.location.unwrap_or_default(),
        )
    }
}

impl From<ReportFoundRequest> for FoundItem {
    fn from(request: ReportFoundRequest) -> Self {
        FoundItem::reported(
            request.item.unwrap_or_default(),
            request.location.unwrap_or_default(),
        )
    }
}
