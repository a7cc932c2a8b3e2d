//! Price Composition Engine
//!
//! Composes the price of one configuration as an itemized breakdown:
//! the resolved door first, then every requested surcharge that applies.
//! Amounts keep their catalog values; the total is rounded once at the end.
//! Unknown or unpriced optional ids add no line and never fail.

use super::accessories::{Accessories, PricedAccessory};
use super::matcher::resolve;
use super::money::{percent_of, rounded_sum};
use crate::attributes::{AttributeMap, keys, same_text};
use crate::error::EngineResult;
use crate::height::HeightBand;
use shared::models::{
    CURRENCY_RUB, CatalogRecord, MirrorOption, PriceLine, PriceResult, Selection,
};

/// Breakdown labels
pub mod labels {
    use crate::height::HeightBand;

    pub const DOOR: &str = "Door";
    pub const HEIGHT_2301_2500: &str = "Height 2301-2500 mm";
    pub const HEIGHT_2501_3000: &str = "Height 2501-3000 mm";
    pub const REVERSAL: &str = "Reversal";
    pub const MIRROR_PREFIX: &str = "Mirror";
    pub const MIRROR_ONE_SIDE: &str = "Mirror (one side)";
    pub const MIRROR_BOTH_SIDES: &str = "Mirror (both sides)";
    pub const THRESHOLD: &str = "Threshold";

    pub const EDGE_PREFIX: &str = "Edge: ";
    pub const HARDWARE_KIT_PREFIX: &str = "Hardware kit: ";
    pub const HANDLE_PREFIX: &str = "Handle: ";
    pub const BACKPLATE_PREFIX: &str = "Backplate: ";
    pub const LIMITER_PREFIX: &str = "Limiter: ";
    pub const OPTION_PREFIX: &str = "Option: ";
    /// Reserved for filling surcharges; `calculate` does not emit one yet
    pub const FILLING_PREFIX: &str = "Filling: ";

    pub const fn height(band: HeightBand) -> &'static str {
        match band {
            HeightBand::Upto2500 => HEIGHT_2301_2500,
            HeightBand::Upto3000 => HEIGHT_2501_3000,
        }
    }

    pub fn prefixed(prefix: &str, name: &str) -> String {
        format!("{prefix}{name}")
    }
}

/// Price a selection against door records and accessory sources
pub fn calculate(
    records: &[CatalogRecord],
    selection: &Selection,
    accessories: &Accessories<'_>,
) -> EngineResult<PriceResult> {
    let resolution = resolve(records, selection)?;
    let attrs = &resolution.candidate.attrs;
    let base = resolution.price;

    let mut breakdown = vec![PriceLine::new(labels::DOOR, base)];

    add_height_surcharge(&mut breakdown, attrs, selection, base);
    add_door_options(&mut breakdown, attrs, selection);
    add_edge(&mut breakdown, attrs, selection);
    add_accessories(&mut breakdown, selection, accessories);

    let total = rounded_sum(breakdown.iter().map(|line| line.amount));

    tracing::debug!(
        record_id = %resolution.candidate.id(),
        base,
        lines = breakdown.len(),
        total,
        "Price calculated"
    );

    Ok(PriceResult {
        currency: CURRENCY_RUB.to_string(),
        base,
        breakdown,
        total,
        sku: attrs.text(keys::INTERNAL_SKU),
    })
}

/// Percentage surcharge for a virtual band height, rounded on its own
fn add_height_surcharge(
    breakdown: &mut Vec<PriceLine>,
    attrs: &AttributeMap,
    selection: &Selection,
    base: f64,
) {
    let Some(band) = selection.height.and_then(HeightBand::from_height) else {
        return;
    };
    if let Some(pct) = attrs.positive(band.surcharge_key()) {
        push_positive(breakdown, labels::height(band), percent_of(base, pct));
    }
}

/// Reversal, mirror and threshold: fixed surcharges read from the door
fn add_door_options(breakdown: &mut Vec<PriceLine>, attrs: &AttributeMap, selection: &Selection) {
    if selection.wants_reversal()
        && let Some(amount) = attrs.positive(keys::REVERSAL_SURCHARGE)
    {
        push_positive(breakdown, labels::REVERSAL, amount);
    }

    let mirror = match selection.mirror() {
        MirrorOption::None => None,
        MirrorOption::One => Some((labels::MIRROR_ONE_SIDE, keys::MIRROR_ONE_SIDE_SURCHARGE)),
        MirrorOption::Both => Some((labels::MIRROR_BOTH_SIDES, keys::MIRROR_TWO_SIDES_SURCHARGE)),
    };
    if let Some((label, key)) = mirror
        && let Some(amount) = attrs.positive(key)
    {
        push_positive(breakdown, label, amount);
    }

    if selection.wants_threshold()
        && let Some(amount) = attrs.positive(keys::THRESHOLD_SURCHARGE)
    {
        push_positive(breakdown, labels::THRESHOLD, amount);
    }
}

/// Edge color: the base color is included in the door price, alternates
/// carry their own surcharge, anything else contributes nothing
fn add_edge(breakdown: &mut Vec<PriceLine>, attrs: &AttributeMap, selection: &Selection) {
    let Some(edge_id) = selection
        .edge_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    else {
        return;
    };

    if attrs
        .text(keys::EDGE_BASE_COLOR)
        .is_some_and(|base| same_text(&base, edge_id))
    {
        return;
    }

    let slot = keys::EDGE_ALTERNATE_SLOTS
        .iter()
        .find_map(|(color_key, surcharge_key)| {
            let color = attrs.text(color_key)?;
            same_text(&color, edge_id).then(|| (color, attrs.positive(surcharge_key)))
        });

    match slot {
        Some((color, Some(amount))) => {
            let label = labels::prefixed(labels::EDGE_PREFIX, &color);
            push_positive(breakdown, &label, amount);
        }
        Some((_, None)) => {}
        None => tracing::debug!(edge_id, "Unknown edge color, no surcharge"),
    }
}

/// Hardware kit, handle (+ backplate), limiter and named options
fn add_accessories(
    breakdown: &mut Vec<PriceLine>,
    selection: &Selection,
    accessories: &Accessories<'_>,
) {
    if let Some(id) = present(&selection.hardware_kit_id) {
        match accessories.hardware_kit(id) {
            Some(record) => {
                push_accessory(breakdown, labels::HARDWARE_KIT_PREFIX, record);
            }
            None => tracing::debug!(id, "Unknown hardware kit"),
        }
    }

    if let Some(id) = present(&selection.handle_id) {
        match accessories.handle(id) {
            Some(record) => {
                let handle = push_accessory(breakdown, labels::HANDLE_PREFIX, record);
                // The backplate is priced on the handle record, never on its own
                if selection.wants_backplate()
                    && let Some(amount) = handle.attrs.positive(keys::BACKPLATE_PRICE)
                {
                    let label = labels::prefixed(labels::BACKPLATE_PREFIX, &handle.name);
                    push_positive(breakdown, &label, amount);
                }
            }
            None => tracing::debug!(id, "Unknown handle"),
        }
    }

    if let Some(id) = present(&selection.limiter_id) {
        match accessories.lookup.limiter(id) {
            Some(record) => {
                push_accessory(breakdown, labels::LIMITER_PREFIX, &record);
            }
            None => tracing::debug!(id, "Unknown limiter"),
        }
    }

    let option_ids = selection.option_ids();
    if !option_ids.is_empty() {
        let found = accessories.lookup.options(option_ids);
        if found.len() < option_ids.len() {
            tracing::debug!(
                requested = option_ids.len(),
                found = found.len(),
                "Some named options are unknown"
            );
        }
        for record in &found {
            push_accessory(breakdown, labels::OPTION_PREFIX, record);
        }
    }
}

fn push_accessory(
    breakdown: &mut Vec<PriceLine>,
    prefix: &str,
    record: &CatalogRecord,
) -> PricedAccessory {
    let priced = PricedAccessory::from_record(record);
    push_positive(breakdown, &labels::prefixed(prefix, &priced.name), priced.price);
    priced
}

/// Zero surcharges are omitted rather than listed
fn push_positive(breakdown: &mut Vec<PriceLine>, label: &str, amount: f64) {
    if amount > 0.0 {
        breakdown.push(PriceLine::new(label, amount));
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
