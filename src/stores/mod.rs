// Stores layer - Whole-collection persistence
pub mod collection_store;
pub mod item_store;
pub mod json_file_store;
pub mod memory_store;

pub use collection_store::{Collection, CollectionStore};
pub use item_store::ItemStore;
pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;

#[cfg(test)]
mod item_store_test;
