//! Cart Line Model

use super::price::PriceResult;
use super::selection::Selection;
use serde::{Deserialize, Serialize};

/// Line kind, as derived from the line's shape at export time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// Configurable item (a door)
    Door,
    Handle,
    Backplate,
    Limiter,
}

/// Cart line as stored by the cart
///
/// `item_type` is the persisted discriminant. It has been wrong in stored data
/// before and is kept for diagnostics only; export re-derives the kind from
/// the line's shape.
///
/// `price` is the price charged when the line was added. Export prefers it
/// over a fresh calculation, so a later catalog change does not rewrite what
/// the customer was quoted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Catalog / supplier name captured when the line was added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(flatten)]
    pub selection: Selection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceResult>,
}

fn default_quantity() -> u32 {
    1
}
