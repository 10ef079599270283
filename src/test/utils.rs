// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use crate::app_data::AppData;
use crate::stores::MemoryStore;
use crate::types::db::{FoundItem, LostItem};

/// AppData over an in-memory store with both collections empty
pub fn setup_test_app_data() -> Arc<AppData> {
    let app_data = AppData::with_backend(Arc::new(MemoryStore::new()))
        .expect("Failed to create test app data");
    Arc::new(app_data)
}

/// Append pending lost items with the given names and no other details
pub fn seed_lost(app_data: &AppData, names: &[&str]) {
    let mut records = app_data.item_store.load::<LostItem>().expect("Failed to load lost items");
    records.extend(
        names
            .iter()
            .map(|name| LostItem::reported(name.to_string(), String::new(), String::new(), String::new())),
    );
    app_data.item_store.save(&records).expect("Failed to seed lost items");
}

/// Append pending found items with the given names and no location
pub fn seed_found(app_data: &AppData, names: &[&str]) {
    let mut records = app_data.item_store.load::<FoundItem>().expect("Failed to load found items");
    records.extend(names.iter().map(|name| FoundItem::reported(name.to_string(), String::new())));
    app_data.item_store.save(&records).expect("Failed to seed found items");
}
