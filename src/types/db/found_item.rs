use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{ItemRecord, ItemStatus, lenient_string};
use crate::stores::Collection;

/// A handed-in found item as persisted in `found.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub item: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub location: String,

    /// Always empty on submission; uploads are not handled by this service
    #[serde(default, deserialize_with = "lenient_string")]
    pub picture: String,

    #[serde(default)]
    pub status: ItemStatus,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FoundItem {
    pub fn reported(item: String, location: String) -> Self {
        Self {
            item,
            location,
            picture: String::new(),
            status: ItemStatus::Pending,
            extra: Map::new(),
        }
    }
}

impl ItemRecord for FoundItem {
    const COLLECTION: Collection = Collection::Found;

    fn status(&self) -> &ItemStatus {
        &self.status
    }

    fn set_status(&mut self, status: ItemStatus) {
        self.status = status;
    }
}
