//! Catalog Snapshot Model

use super::record::CatalogRecord;
use serde::{Deserialize, Serialize};

/// Immutable catalog snapshot handed to the configurator by its caller
///
/// Each collection is already filtered to one catalog category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub doors: Vec<CatalogRecord>,
    pub hardware_kits: Vec<CatalogRecord>,
    pub handles: Vec<CatalogRecord>,
    pub limiters: Vec<CatalogRecord>,
    pub options: Vec<CatalogRecord>,
}

impl CatalogSnapshot {
    pub fn record_count(&self) -> usize {
        self.doors.len()
            + self.hardware_kits.len()
            + self.handles.len()
            + self.limiters.len()
            + self.options.len()
    }
}
