use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::InternalError;
use crate::stores::{Collection, CollectionStore};

/// Stores each collection as a pretty-printed JSON array in its own file
///
/// Saves overwrite the file in place; a crash mid-write can leave a truncated
/// file behind, which the next load reports as corrupt.
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `collection`
    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }
}

impl CollectionStore for JsonFileStore {
    fn initialize(&self, collection: Collection) -> Result<(), InternalError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| InternalError::storage(collection, "create data directory for", e))?;

        let path = self.path_for(collection);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(b"[]")
                    .map_err(|e| InternalError::storage(collection, "initialize", e))?;
                tracing::info!("Created empty {} collection at {}", collection, path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(InternalError::storage(collection, "initialize", e)),
        }
    }

    fn load(&self, collection: Collection) -> Result<Vec<Value>, InternalError> {
        let path = self.path_for(collection);
        let data = fs::read_to_string(&path)
            .map_err(|e| InternalError::storage(collection, "read", e))?;

        serde_json::from_str(&data).map_err(|e| InternalError::corrupt(collection, e))
    }

    fn save(&self, collection: Collection, records: &[Value]) -> Result<(), InternalError> {
        let data = serde_json::to_string_pretty(records)
            .map_err(|e| InternalError::serialize(collection, e))?;

        fs::write(self.path_for(collection), data)
            .map_err(|e| InternalError::storage(collection, "write", e))
    }
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("data_dir", &self.data_dir)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_initialize_creates_empty_array_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.initialize(Collection::Lost).unwrap();

        let contents = fs::read_to_string(dir.path().join("lost.json")).unwrap();
        assert_eq!(contents, "[]");
        assert!(store.load(Collection::Lost).unwrap().is_empty());
    }

    #[test]
    fn test_initialize_leaves_existing_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("found.json"), r#"[{"item":"Keys"}]"#).unwrap();
        let store = JsonFileStore::new(dir.path());

        store.initialize(Collection::Found).unwrap();

        assert_eq!(store.load(Collection::Found).unwrap(), vec![json!({ "item": "Keys" })]);
    }

    #[test]
    fn test_initialize_creates_missing_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("var").join("lostfound");
        let store = JsonFileStore::new(&nested);

        store.initialize(Collection::Found).unwrap();

        assert!(nested.join("found.json").exists());
    }

    #[test]
    fn test_save_writes_two_space_indented_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        store
            .save(Collection::Found, &[json!({ "item": "Keys" })])
            .unwrap();

        let contents = fs::read_to_string(dir.path().join("found.json")).unwrap();
        assert_eq!(contents, "[\n  {\n    \"item\": \"Keys\"\n  }\n]");
    }

    #[test]
    fn test_load_missing_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());

        let err = store.load(Collection::Lost).unwrap_err();

        assert!(matches!(err, InternalError::Storage { .. }));
    }

    #[test]
    fn test_load_rejects_non_array_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lost.json"), r#"{"item":"Wallet"}"#).unwrap();
        let store = JsonFileStore::new(dir.path());

        let err = store.load(Collection::Lost).unwrap_err();

        assert!(matches!(err, InternalError::Corrupt { .. }));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("lost.json"), "[{").unwrap();
        let store = JsonFileStore::new(dir.path());

        assert!(matches!(
            store.load(Collection::Lost).unwrap_err(),
            InternalError::Corrupt { .. }
        ));
    }
}
