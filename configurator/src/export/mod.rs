//! Export Field Projection
//!
//! Maps a cart line, its resolved record (if it still resolves) and its
//! price (if priced) to a display name and the fixed export columns.
//! Rows are rebuilt from source data on every export and never stored.

mod classify;
mod columns;
mod name;

pub use classify::*;
pub use columns::*;
pub use name::*;

use crate::attributes::{decode, keys};
use crate::pricing::money::{to_decimal, to_f64};
use crate::pricing::{accessory_price_of, resolved_price_of};
use serde::Serialize;
use shared::models::{CartLine, CatalogRecord, LineKind, MirrorOption, PriceResult};

/// Export row of one cart line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    pub name: String,
    pub kind: LineKind,
    /// One cell per [`ExportColumn::ALL`] entry, in order
    pub cells: Vec<ExportCell>,
}

impl ExportRow {
    pub fn get(&self, column: ExportColumn) -> Option<&str> {
        self.cells
            .iter()
            .find(|cell| cell.column == column.header())
            .map(|cell| cell.value.as_str())
    }
}

/// Project a cart line onto the export columns
///
/// Without a resolved record, columns fall back to the raw fields on the line;
/// `fallback_model_name` is the last resort for the model label.
pub fn project(
    line: &CartLine,
    record: Option<&CatalogRecord>,
    price: Option<&PriceResult>,
    fallback_model_name: Option<&str>,
) -> ExportRow {
    let attrs = record.map(|r| decode(r.properties.as_ref()));
    let ctx = NameContext {
        line,
        record: attrs.as_ref(),
        price,
        fallback_model_name,
    };

    let kind = classify_line(line);
    let name = display_name(&ctx, kind);

    let cells = ExportColumn::ALL
        .into_iter()
        .map(|column| ExportCell {
            column: column.header(),
            value: cell_value(column, &ctx, kind, &name).unwrap_or_default(),
        })
        .collect();

    ExportRow { name, kind, cells }
}

fn cell_value(
    column: ExportColumn,
    ctx: &NameContext<'_>,
    kind: LineKind,
    name: &str,
) -> Option<String> {
    if let Some(rule) = column.price_rule() {
        return price_column(ctx.price, rule);
    }

    let selection = &ctx.line.selection;
    let record_text = |key: &str| ctx.record.and_then(|attrs| attrs.text(key));
    let line_or_record = |value: &Option<String>, key: &str| {
        value
            .as_deref()
            .and_then(meaningful)
            .or_else(|| record_text(key))
    };
    let is_door = kind == LineKind::Door;

    match column {
        ExportColumn::ModelName => {
            if is_door {
                model_label(ctx)
            } else {
                meaningful(name)
            }
        }
        ExportColumn::Supplier => line_or_record(&selection.supplier, keys::SUPPLIER),
        ExportColumn::WholesalePrice => ctx
            .record
            .filter(|_| kind != LineKind::Backplate)
            .and_then(|attrs| attrs.positive(keys::WHOLESALE_PRICE))
            .map(format_amount),
        ExportColumn::RetailPrice => match ctx.price {
            Some(price) => Some(format_amount(price.total)),
            None => ctx
                .record
                .map(|attrs| match kind {
                    LineKind::Door => resolved_price_of(attrs),
                    // Projected against the handle record
                    LineKind::Backplate => attrs.positive(keys::BACKPLATE_PRICE).unwrap_or(0.0),
                    LineKind::Handle | LineKind::Limiter => accessory_price_of(attrs),
                })
                .filter(|p| *p > 0.0)
                .map(format_amount),
        },
        ExportColumn::MaterialFinish => finish(ctx),
        ExportColumn::Width => selection
            .width
            .or_else(|| ctx.record.and_then(|attrs| attrs.millimetres(keys::WIDTH)))
            .map(|w| w.to_string()),
        ExportColumn::Height => selection
            .height
            .or_else(|| ctx.record.and_then(|attrs| attrs.millimetres(keys::HEIGHT)))
            .map(height_display),
        ExportColumn::Color => color(ctx),
        ExportColumn::InternalSku => ctx
            .price
            .and_then(|p| p.sku.clone())
            .or_else(|| record_text(keys::INTERNAL_SKU)),
        ExportColumn::Edge => ctx
            .record
            .map(|attrs| attrs.texts(keys::EDGE).join(", "))
            .and_then(|edge| meaningful(&edge)),
        ExportColumn::EdgeColor => selection.edge_id.as_deref().and_then(meaningful),
        ExportColumn::Reversal => selection.wants_reversal().then(|| YES.to_string()),
        ExportColumn::Mirror => match selection.mirror() {
            MirrorOption::None => None,
            MirrorOption::One => Some("One side".to_string()),
            MirrorOption::Both => Some("Both sides".to_string()),
        },
        ExportColumn::GlassColor => record_text(keys::GLASS_COLOR),
        ExportColumn::Threshold => selection.wants_threshold().then(|| YES.to_string()),
        ExportColumn::Options => {
            let names = option_names(ctx);
            (!names.is_empty()).then(|| names.join(", "))
        }
        ExportColumn::Filling => line_or_record(&selection.filling, keys::FILLING),
        ExportColumn::ModelCode => line_or_record(&selection.model, keys::MODEL_CODE),
        ExportColumn::Thickness => record_text(keys::THICKNESS),
        ExportColumn::GlassType => record_text(keys::GLASS_TYPE),
        ExportColumn::EdgeInBasePrice => ctx
            .record
            .filter(|attrs| attrs.get(keys::EDGE_IN_BASE_PRICE).is_some())
            .map(|attrs| yes_no(attrs.flag(keys::EDGE_IN_BASE_PRICE))),
        ExportColumn::Style => line_or_record(&selection.style, keys::STYLE),
        ExportColumn::HardwareKit => is_door.then(|| hardware_kit_name(ctx)),
        // Price columns are handled above
        ExportColumn::EdgePrice
        | ExportColumn::ReversalPrice
        | ExportColumn::MirrorPrice
        | ExportColumn::ThresholdPrice
        | ExportColumn::OptionsPrice
        | ExportColumn::FillingPrice
        | ExportColumn::HardwareKitPrice => None,
    }
}

const YES: &str = "Yes";
const NO: &str = "No";

fn yes_no(value: bool) -> String {
    (if value { YES } else { NO }).to_string()
}

/// Sum of the breakdown lines a price column reads; empty when none match
fn price_column(price: Option<&PriceResult>, rule: LabelRule) -> Option<String> {
    let amounts: Vec<f64> = price?
        .breakdown
        .iter()
        .filter(|line| rule.matches(&line.label))
        .map(|line| line.amount)
        .collect();

    if amounts.is_empty() {
        return None;
    }
    let sum = amounts.into_iter().map(to_decimal).sum();
    Some(format_amount(to_f64(sum)))
}

/// Whole amounts print without decimals
pub fn format_amount(amount: f64) -> String {
    amount.to_string()
}
