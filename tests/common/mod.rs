// Common test utilities for integration tests
#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use lostfound_backend::api::build_routes;
use lostfound_backend::app_data::AppData;
use lostfound_backend::stores::{JsonFileStore, MemoryStore};
use poem::Endpoint;
use poem::test::TestClient;
use serde_json::Value;

/// Route tree over an in-memory store
pub fn setup_memory_client() -> (Arc<AppData>, TestClient<impl Endpoint>) {
    let app_data = Arc::new(
        AppData::with_backend(Arc::new(MemoryStore::new())).expect("Failed to create app data"),
    );
    let client = TestClient::new(build_routes(app_data.clone()));
    (app_data, client)
}

/// Route tree over JSON files in `data_dir`
pub fn setup_file_client(data_dir: &Path) -> (Arc<AppData>, TestClient<impl Endpoint>) {
    let app_data = Arc::new(
        AppData::with_backend(Arc::new(JsonFileStore::new(data_dir))).expect("Failed to create app data"),
    );
    let client = TestClient::new(build_routes(app_data.clone()));
    (app_data, client)
}

/// Parse a collection file straight from disk
pub fn read_collection_file(data_dir: &Path, file_name: &str) -> Value {
    let contents = std::fs::read_to_string(data_dir.join(file_name)).expect("Failed to read collection file");
    serde_json::from_str(&contents).expect("Collection file is not valid JSON")
}
