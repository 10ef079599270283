use std::sync::Arc;

use crate::errors::InternalError;
use crate::stores::{Collection, CollectionStore};
use crate::types::db::ItemRecord;

/// Typed view over a `CollectionStore`
///
/// Converts between raw JSON records and `LostItem`/`FoundItem`. A record
/// that cannot be read as its collection's type makes the whole collection
/// unreadable.
#[derive(Clone)]
pub struct ItemStore {
    backend: Arc<dyn CollectionStore>,
}

impl ItemStore {
    pub fn new(backend: Arc<dyn CollectionStore>) -> Self {
        Self { backend }
    }

    /// Make sure every collection exists, creating empty ones as needed
    pub fn initialize(&self) -> Result<(), InternalError> {
        for collection in Collection::ALL {
            self.backend.initialize(collection)?;
        }
        Ok(())
    }

    /// Load the full collection for record type `R`
    pub fn load<R: ItemRecord>(&self) -> Result<Vec<R>, InternalError> {
        self.backend
            .load(R::COLLECTION)?
            .into_iter()
            .map(|raw| serde_json::from_value(raw).map_err(|e| InternalError::corrupt(R::COLLECTION, e)))
            .collect()
    }

    /// Overwrite the full collection for record type `R`
    pub fn save<R: ItemRecord>(&self, records: &[R]) -> Result<(), InternalError> {
        let raw = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| InternalError::serialize(R::COLLECTION, e))?;

        self.backend.save(R::COLLECTION, &raw)
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("backend", &"<collection store>")
            .finish()
    }
}
