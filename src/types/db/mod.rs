// Persisted record shapes
pub mod found_item;
pub mod item_status;
pub mod lost_item;

pub use found_item::FoundItem;
pub use item_status::ItemStatus;
pub use lost_item::LostItem;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::stores::Collection;

/// A record type that lives in exactly one collection and carries a status
pub trait ItemRecord: Serialize + DeserializeOwned + Clone + Send + 'static {
    /// Collection this record type is stored in
    const COLLECTION: Collection;

    fn status(&self) -> &ItemStatus;

    fn set_status(&mut self, status: ItemStatus);
}

/// Read a text field written by any version of the service
///
/// Strings pass through, numbers and booleans become their JSON text, and
/// `null` or nested values read as empty.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(Value::deserialize(deserializer)?))
}

pub(crate) fn value_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}
