use std::fmt;

use serde_json::Value;

use crate::errors::InternalError;

/// The two independent record collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Lost,
    Found,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Lost, Collection::Found];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Lost => "lost",
            Collection::Found => "found",
        }
    }

    /// Name of the backing file inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Lost => "lost.json",
            Collection::Found => "found.json",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whole-collection persistence contract
///
/// Every call reads or replaces an entire collection. Implementations do not
/// lock across a load and the following save, so two callers cycling the same
/// collection at once can overwrite each other (last writer wins).
pub trait CollectionStore: Send + Sync {
    /// Create the collection as an empty sequence if it does not exist yet
    fn initialize(&self, collection: Collection) -> Result<(), InternalError>;

    /// Read every record of the collection, in order
    fn load(&self, collection: Collection) -> Result<Vec<Value>, InternalError>;

    /// Replace the collection with `records`
    fn save(&self, collection: Collection, records: &[Value]) -> Result<(), InternalError>;
}
