use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A coffee on the menu.
///
/// Both fields default to the empty string when missing from a JSON body;
/// an empty `id` means "let the store assign one".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coffee {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Coffee {
    /// New coffee with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(generate_id(), name)
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Random unique identifier for a coffee (UUIDv4, hyphenated).
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
