//! Money helpers
//!
//! Prices travel as f64 and are computed with rust_decimal.
//! Totals are rounded half away from zero to whole currency units.

use rust_decimal::prelude::*;

/// Decimal places of a stored breakdown amount
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round to whole currency units
#[inline]
pub fn round_whole(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `round(base * pct / 100)`, used for the height-band surcharges
pub fn percent_of(base: f64, pct: f64) -> f64 {
    round_whole(to_decimal(base) * to_decimal(pct) / Decimal::ONE_HUNDRED)
}

/// Rounded sum of amounts
pub fn rounded_sum<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    round_whole(amounts.into_iter().map(to_decimal).sum())
}
