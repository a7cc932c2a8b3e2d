//! Export columns
//!
//! Every export destination (table, document, print) renders exactly these
//! columns in exactly this order. Price columns are read back from the price
//! breakdown and never recomputed, so an exported line always reconciles to
//! what was charged.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportColumn {
    ModelName,
    Supplier,
    WholesalePrice,
    RetailPrice,
    MaterialFinish,
    Width,
    Height,
    Color,
    InternalSku,
    Edge,
    EdgeColor,
    EdgePrice,
    Reversal,
    ReversalPrice,
    Mirror,
    MirrorPrice,
    GlassColor,
    Threshold,
    ThresholdPrice,
    Options,
    OptionsPrice,
    Filling,
    FillingPrice,
    ModelCode,
    Thickness,
    GlassType,
    EdgeInBasePrice,
    Style,
    HardwareKit,
    HardwareKitPrice,
}

impl ExportColumn {
    /// Every column, in export order
    pub const ALL: [ExportColumn; 30] = [
        ExportColumn::ModelName,
        ExportColumn::Supplier,
        ExportColumn::WholesalePrice,
        ExportColumn::RetailPrice,
        ExportColumn::MaterialFinish,
        ExportColumn::Width,
        ExportColumn::Height,
        ExportColumn::Color,
        ExportColumn::InternalSku,
        ExportColumn::Edge,
        ExportColumn::EdgeColor,
        ExportColumn::EdgePrice,
        ExportColumn::Reversal,
        ExportColumn::ReversalPrice,
        ExportColumn::Mirror,
        ExportColumn::MirrorPrice,
        ExportColumn::GlassColor,
        ExportColumn::Threshold,
        ExportColumn::ThresholdPrice,
        ExportColumn::Options,
        ExportColumn::OptionsPrice,
        ExportColumn::Filling,
        ExportColumn::FillingPrice,
        ExportColumn::ModelCode,
        ExportColumn::Thickness,
        ExportColumn::GlassType,
        ExportColumn::EdgeInBasePrice,
        ExportColumn::Style,
        ExportColumn::HardwareKit,
        ExportColumn::HardwareKitPrice,
    ];

    /// Column header as rendered by every destination
    pub const fn header(self) -> &'static str {
        match self {
            Self::ModelName => "Model name",
            Self::Supplier => "Supplier",
            Self::WholesalePrice => "Wholesale price",
            Self::RetailPrice => "Retail price",
            Self::MaterialFinish => "Material/finish",
            Self::Width => "Width",
            Self::Height => "Height",
            Self::Color => "Color",
            Self::InternalSku => "Internal SKU",
            Self::Edge => "Edge",
            Self::EdgeColor => "Edge color",
            Self::EdgePrice => "Edge price",
            Self::Reversal => "Reversal",
            Self::ReversalPrice => "Reversal price",
            Self::Mirror => "Mirror",
            Self::MirrorPrice => "Mirror price",
            Self::GlassColor => "Glass color",
            Self::Threshold => "Threshold",
            Self::ThresholdPrice => "Threshold price",
            Self::Options => "Options",
            Self::OptionsPrice => "Options price",
            Self::Filling => "Filling",
            Self::FillingPrice => "Filling price",
            Self::ModelCode => "Model code",
            Self::Thickness => "Thickness",
            Self::GlassType => "Glass type",
            Self::EdgeInBasePrice => "Edge in base price",
            Self::Style => "Style",
            Self::HardwareKit => "Hardware kit",
            Self::HardwareKitPrice => "Hardware kit price",
        }
    }

    /// Breakdown label rule feeding a price column
    pub const fn price_rule(self) -> Option<LabelRule> {
        use crate::pricing::labels;
        match self {
            Self::EdgePrice => Some(LabelRule::Prefix(labels::EDGE_PREFIX)),
            Self::ReversalPrice => Some(LabelRule::Exact(labels::REVERSAL)),
            Self::MirrorPrice => Some(LabelRule::Prefix(labels::MIRROR_PREFIX)),
            Self::ThresholdPrice => Some(LabelRule::Exact(labels::THRESHOLD)),
            Self::OptionsPrice => Some(LabelRule::Prefix(labels::OPTION_PREFIX)),
            Self::FillingPrice => Some(LabelRule::Prefix(labels::FILLING_PREFIX)),
            Self::HardwareKitPrice => Some(LabelRule::Prefix(labels::HARDWARE_KIT_PREFIX)),
            _ => None,
        }
    }
}

/// How a price column picks breakdown lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRule {
    Exact(&'static str),
    Prefix(&'static str),
}

impl LabelRule {
    pub fn matches(self, label: &str) -> bool {
        match self {
            Self::Exact(expected) => label == expected,
            Self::Prefix(prefix) => label.starts_with(prefix),
        }
    }
}

/// One exported value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportCell {
    pub column: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_column_order_and_headers() {
        assert_eq!(ExportColumn::ALL.len(), 30);
        assert_eq!(ExportColumn::ALL[0].header(), "Model name");
        assert_eq!(ExportColumn::ALL[29].header(), "Hardware kit price");

        let headers: HashSet<&str> = ExportColumn::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(headers.len(), 30);
    }

    #[test]
    fn test_label_rules() {
        let edge = ExportColumn::EdgePrice.price_rule().unwrap();
        assert!(edge.matches("Edge: Accent"));
        assert!(!edge.matches("Edge"));

        let mirror = ExportColumn::MirrorPrice.price_rule().unwrap();
        assert!(mirror.matches("Mirror (one side)"));
        assert!(mirror.matches("Mirror (both sides)"));

        assert!(ExportColumn::Width.price_rule().is_none());
    }

    #[test]
    fn test_price_rules_follow_calculator_labels() {
        use crate::pricing::labels;

        let filling = ExportColumn::FillingPrice.price_rule().unwrap();
        assert!(filling.matches(&labels::prefixed(labels::FILLING_PREFIX, "Honeycomb")));
        assert!(!filling.matches(labels::DOOR));

        let mirror = ExportColumn::MirrorPrice.price_rule().unwrap();
        assert!(mirror.matches(labels::MIRROR_ONE_SIDE));
        assert!(mirror.matches(labels::MIRROR_BOTH_SIDES));

        let kit = ExportColumn::HardwareKitPrice.price_rule().unwrap();
        assert!(kit.matches(&labels::prefixed(labels::HARDWARE_KIT_PREFIX, "Standard")));
    }
}
