use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ItemRecord, ItemStatus, lenient_string};
use crate::stores::Collection;

/// A reported lost item as persisted in `lost.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LostItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub item: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub color: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub details: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,

    #[serde(default)]
    pub status: ItemStatus,

    /// Fields written by other versions of the service
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LostItem {
    /// Build a freshly reported record; new records always start out pending
    pub fn reported(item: String, color: String, details: String, location: String) -> Self {
        Self {
            item,
            color,
            details,
            location,
            status: ItemStatus::Pending,
            extra: Map::new(),
        }
    }
}

impl ItemRecord for LostItem {
    const COLLECTION: Collection = Collection::Lost;

    fn status(&self) -> &ItemStatus {
        &self.status
    }

    fn set_status(&mut self, status: ItemStatus) {
        self.status = status;
    }
}
