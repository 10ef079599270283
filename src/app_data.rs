use std::sync::Arc;

use crate::config::ServerSettings;
use crate::errors::InternalError;
use crate::stores::{CollectionStore, ItemStore, JsonFileStore};

/// Centralized application data, created once in main.rs
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(settings)
///   ↓ creates once
///   └─ item_store (ItemStore over JsonFileStore in DATA_DIR)
///   ↓ wrapped in Arc<AppData>
///   ├─ ItemsCoordinator::new(app_data)
///   └─ ModerationCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub item_store: ItemStore,
}

impl AppData {
    /// Open the file-backed collections in the configured data directory
    ///
    /// Missing collection files are created as empty arrays.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when the data directory or a collection file
    /// cannot be created
    pub fn init(settings: &ServerSettings) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData in {}", settings.data_dir().display());
        Self::with_backend(Arc::new(JsonFileStore::new(settings.data_dir())))
    }

    /// Build AppData over any collection backend
    pub fn with_backend(backend: Arc<dyn CollectionStore>) -> Result<Self, InternalError> {
        let item_store = ItemStore::new(backend);
        item_store.initialize()?;

        tracing::debug!("Collections ready");
        Ok(Self { item_store })
    }
}
