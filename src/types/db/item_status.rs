use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value_text;

/// Lifecycle tag of a stored record
///
/// Lost items move between `Pending`, `Approved` and `Rejected`; found items
/// between `Pending` and `Accepted`. Nothing enforces that split, and a status
/// string this build does not recognise is kept as `Other` so it survives a
/// load/save cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "String")]
pub enum ItemStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Accepted,
    Other(String),
}

impl ItemStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Approved => "approved",
            ItemStatus::Rejected => "rejected",
            ItemStatus::Accepted => "accepted",
            ItemStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for ItemStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => ItemStatus::Pending,
            "approved" => ItemStatus::Approved,
            "rejected" => ItemStatus::Rejected,
            "accepted" => ItemStatus::Accepted,
            _ => ItemStatus::Other(value),
        }
    }
}

impl From<Value> for ItemStatus {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ItemStatus::Pending,
            other => ItemStatus::from(value_text(other)),
        }
    }
}

impl From<ItemStatus> for String {
    fn from(status: ItemStatus) -> Self {
        match status {
            ItemStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
