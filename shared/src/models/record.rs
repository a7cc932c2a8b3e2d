//! Catalog Record Model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Catalog record (door, hardware kit, handle, limiter or named option)
///
/// There is no fixed schema: business fields live in `properties`, which the
/// store may hand over as a JSON object, a JSON-encoded string, or not at all.
/// Decoding is the configurator's job; this type keeps the raw value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    #[serde(default = "default_true", deserialize_with = "bool_true")]
    pub is_active: bool,
    /// Raw attribute map (object, encoded string, or null)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

impl CatalogRecord {
    /// Create an active record with the given raw properties
    pub fn new(id: impl Into<String>, properties: Value) -> Self {
        Self {
            id: id.into(),
            is_active: true,
            properties: Some(properties),
        }
    }

    /// Mark the record inactive
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

fn default_true() -> bool {
    true
}

/// Deserialize bool that treats null as true
fn bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(true))
}
