//! Price Result Model
//!
//! The shape below is consumed by export and by UI price display;
//! renaming a field is a breaking change for both.

use serde::{Deserialize, Serialize};

/// Currency of every catalog price
pub const CURRENCY_RUB: &str = "RUB";

/// One labeled component of a price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLine {
    pub label: String,
    pub amount: f64,
}

impl PriceLine {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Itemized price of one configuration
///
/// `breakdown[0]` is always the base item price; `total` is the rounded sum
/// of every breakdown amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub currency: String,
    pub base: f64,
    pub breakdown: Vec<PriceLine>,
    pub total: f64,
    pub sku: Option<String>,
}

impl PriceResult {
    /// Amount of the first breakdown line with exactly this label
    pub fn amount_of(&self, label: &str) -> Option<f64> {
        self.breakdown
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.amount)
    }
}
