//! Accessory lookups
//!
//! Hardware kits and handles arrive as plain collections. Limiters and named
//! options are looked up through [`AccessoryLookup`] so callers decide how
//! they are stored.

use crate::attributes::{AttributeMap, decode, keys};
use shared::models::{CatalogRecord, CatalogSnapshot};

/// Caller-supplied lookup for accessories fetched by id
pub trait AccessoryLookup {
    fn limiter(&self, id: &str) -> Option<CatalogRecord>;

    /// Records for the ids that exist; unknown ids are skipped
    fn options(&self, ids: &[String]) -> Vec<CatalogRecord>;
}

/// Lookup that knows no accessories
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAccessories;

impl AccessoryLookup for NoAccessories {
    fn limiter(&self, _id: &str) -> Option<CatalogRecord> {
        None
    }

    fn options(&self, _ids: &[String]) -> Vec<CatalogRecord> {
        Vec::new()
    }
}

/// Slice-backed lookup over already-fetched records
#[derive(Debug, Clone, Copy)]
pub struct SnapshotLookup<'a> {
    limiters: &'a [CatalogRecord],
    options: &'a [CatalogRecord],
}

impl<'a> SnapshotLookup<'a> {
    pub fn new(limiters: &'a [CatalogRecord], options: &'a [CatalogRecord]) -> Self {
        Self { limiters, options }
    }

    pub fn from_snapshot(snapshot: &'a CatalogSnapshot) -> Self {
        Self::new(&snapshot.limiters, &snapshot.options)
    }
}

impl AccessoryLookup for SnapshotLookup<'_> {
    fn limiter(&self, id: &str) -> Option<CatalogRecord> {
        find_active(self.limiters, id).cloned()
    }

    fn options(&self, ids: &[String]) -> Vec<CatalogRecord> {
        ids.iter()
            .filter_map(|id| find_active(self.options, id))
            .cloned()
            .collect()
    }
}

/// Accessory sources for one price calculation
#[derive(Clone, Copy)]
pub struct Accessories<'a> {
    pub hardware_kits: &'a [CatalogRecord],
    pub handles: &'a [CatalogRecord],
    pub lookup: &'a dyn AccessoryLookup,
}

impl<'a> Accessories<'a> {
    /// No accessories at all; every accessory id resolves to nothing
    pub fn none() -> Accessories<'static> {
        Accessories {
            hardware_kits: &[],
            handles: &[],
            lookup: &NoAccessories,
        }
    }

    pub fn new(
        hardware_kits: &'a [CatalogRecord],
        handles: &'a [CatalogRecord],
        lookup: &'a dyn AccessoryLookup,
    ) -> Self {
        Self {
            hardware_kits,
            handles,
            lookup,
        }
    }

    pub fn hardware_kit(&self, id: &str) -> Option<&'a CatalogRecord> {
        find_active(self.hardware_kits, id)
    }

    pub fn handle(&self, id: &str) -> Option<&'a CatalogRecord> {
        find_active(self.handles, id)
    }
}

impl std::fmt::Debug for Accessories<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accessories")
            .field("hardware_kits", &self.hardware_kits.len())
            .field("handles", &self.handles.len())
            .finish_non_exhaustive()
    }
}

fn find_active<'a>(records: &'a [CatalogRecord], id: &str) -> Option<&'a CatalogRecord> {
    let id = id.trim();
    records.iter().find(|r| r.is_active && r.id == id)
}

/// An accessory record with its display name and price
#[derive(Debug, Clone, PartialEq)]
pub struct PricedAccessory {
    pub name: String,
    pub price: f64,
    pub attrs: AttributeMap,
}

impl PricedAccessory {
    /// Display name from the `name` attribute, else the record id;
    /// price from the group price, else the generic base price
    pub fn from_record(record: &CatalogRecord) -> Self {
        let attrs = decode(record.properties.as_ref());
        let name = attrs
            .text(keys::NAME)
            .unwrap_or_else(|| record.id.clone());
        let price = accessory_price_of(&attrs);

        Self { name, price, attrs }
    }
}

/// Group price when positive, else the generic base price
pub fn accessory_price_of(attrs: &AttributeMap) -> f64 {
    attrs
        .positive(keys::GROUP_PRICE)
        .or_else(|| attrs.positive(keys::BASE_PRICE))
        .unwrap_or(0.0)
}
