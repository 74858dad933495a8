use serde::{Deserialize, Serialize};

/// An accepted (name, location) pair shown as one table row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub location: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Case- and whitespace-insensitive key used when comparing names for uniqueness.
pub fn normalized_name(name: &str) -> String {
    name.trim().to_lowercase()
}
