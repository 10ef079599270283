use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::sync::{Mutex, MutexGuard};

use serde_json::Value;

use crate::errors::InternalError;
use crate::stores::{Collection, CollectionStore};

/// Keeps collections in process memory
///
/// Follows the same contract as the file store, including failing loads of a
/// collection that was never initialized.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn collections(&self) -> MutexGuard<'_, HashMap<Collection, Vec<Value>>> {
        // A panic while holding the lock cannot leave a half-written Vec
        self.collections.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CollectionStore for MemoryStore {
    fn initialize(&self, collection: Collection) -> Result<(), InternalError> {
        self.collections().entry(collection).or_default();
        Ok(())
    }

    fn load(&self, collection: Collection) -> Result<Vec<Value>, InternalError> {
        self.collections().get(&collection).cloned().ok_or_else(|| {
            InternalError::storage(
                collection,
                "read",
                Error::new(ErrorKind::NotFound, "collection not initialized"),
            )
        })
    }

    fn save(&self, collection: Collection, records: &[Value]) -> Result<(), InternalError> {
        self.collections().insert(collection, records.to_vec());
        Ok(())
    }
}
