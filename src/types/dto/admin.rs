use poem_openapi::Object;
use serde_json::Value;

/// Request naming a record by its current position in a collection
///
/// The index is accepted as raw JSON: integers and digit strings resolve to a
/// position, anything else is treated as an index that matches nothing.
#[derive(Object, Debug, Default)]
pub struct ItemIndexRequest {
    /// Zero-based position of the record at the time the list was rendered
    pub index: Option<Value>,
}
