//! Available option collection

use super::filter::{allows_mirror, allows_reversal, allows_threshold};
use crate::attributes::{Candidate, keys, same_text};
use crate::height::HeightBand;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Option values still selectable for the remaining candidates
///
/// Every collection is deduplicated and sorted so identical inputs always
/// serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AvailableOptions {
    /// True if any candidate can be reversed
    pub reversible: bool,
    pub fillings: Vec<String>,
    pub widths: Vec<u32>,
    /// Stored heights plus the virtual band heights on offer
    pub heights: Vec<u32>,
    pub finishes: Vec<String>,
    /// Colors are finish-scoped, keyed by finish type
    pub colors_by_finish: BTreeMap<String, Vec<String>>,
    pub edges: Vec<String>,
    pub mirror: bool,
    pub threshold: bool,
}

impl AvailableOptions {
    /// Colors offered for one finish (case-insensitive lookup)
    pub fn colors_for(&self, finish: &str) -> &[String] {
        self.colors_by_finish
            .iter()
            .find(|(f, _)| same_text(f, finish))
            .map(|(_, colors)| colors.as_slice())
            .unwrap_or(&[])
    }
}

/// Derive the still-available option values from the remaining candidates
pub fn collect_options(candidates: &[Candidate<'_>]) -> AvailableOptions {
    let mut fillings = BTreeSet::new();
    let mut widths = BTreeSet::new();
    let mut heights = BTreeSet::new();
    let mut finishes = BTreeSet::new();
    let mut colors: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut edges = BTreeSet::new();

    let mut options = AvailableOptions::default();

    for candidate in candidates {
        let attrs = &candidate.attrs;

        options.reversible |= allows_reversal(candidate);
        options.mirror |= allows_mirror(candidate);
        options.threshold |= allows_threshold(candidate);

        if let Some(filling) = attrs.text(keys::FILLING) {
            fillings.insert(filling);
        }
        if let Some(width) = attrs.millimetres(keys::WIDTH) {
            widths.insert(width);
        }
        if let Some(height) = attrs.millimetres(keys::HEIGHT) {
            heights.insert(height);
        }
        for band in HeightBand::ALL {
            if attrs.positive(band.surcharge_key()).is_some() {
                heights.insert(band.virtual_height());
            }
        }

        let finish = attrs.text(keys::FINISH);
        if let Some(finish) = &finish {
            finishes.insert(finish.clone());
        }
        // A color without a finish has no scope to live in
        if let (Some(finish), Some(color)) = (finish, attrs.text(keys::COLOR_FINISH)) {
            colors.entry(finish).or_default().insert(color);
        }

        edges.extend(edge_values(candidate));
    }

    options.fillings = fillings.into_iter().collect();
    options.widths = widths.into_iter().collect();
    options.heights = heights.into_iter().collect();
    options.finishes = finishes.into_iter().collect();
    options.colors_by_finish = colors
        .into_iter()
        .map(|(finish, set)| (finish, set.into_iter().collect()))
        .collect();
    options.edges = edges.into_iter().collect();

    options
}

/// Edge display values of one record
///
/// Factory-painted finishes only fill the direct attribute; the others only
/// fill the base color and numbered slots.
pub fn edge_values(candidate: &Candidate<'_>) -> Vec<String> {
    let attrs = &candidate.attrs;

    let direct = attrs.texts(keys::EDGE);
    if !direct.is_empty() {
        return direct;
    }
    if !attrs.flag(keys::EDGE_IN_BASE_PRICE) {
        return Vec::new();
    }

    attrs
        .text(keys::EDGE_BASE_COLOR)
        .into_iter()
        .chain(
            keys::EDGE_ALTERNATE_SLOTS
                .iter()
                .filter_map(|(color_key, _)| attrs.text(color_key)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::candidates;
    use crate::options::{Narrowing, narrow, select_by_model_and_style};
    use serde_json::json;
    use shared::models::{CatalogRecord, Selection};

    fn make_catalog() -> Vec<CatalogRecord> {
        vec![
            CatalogRecord::new(
                "a",
                json!({
                    "model code": "DM_1", "width": 800, "height": 2000,
                    "finish type": "Enamel", "color/finish": "White",
                    "filling": "Honeycomb", "reversal surcharge": 1500,
                    "height 2301-2500 surcharge %": 10,
                    "edge": "ABS White"
                }),
            ),
            CatalogRecord::new(
                "b",
                json!({
                    "model code": "DM_1", "width": 900, "height": 2000,
                    "finish type": "Enamel", "color/finish": "Grey",
                    "filling": "Solid", "mirror": "yes",
                    "edge in base price": "yes", "edge base color": "Base",
                    "edge color 2": "Accent", "edge color 2 surcharge": 300
                }),
            ),
            CatalogRecord::new(
                "c",
                json!({
                    "model code": "DM_1", "width": 800, "height": 2100,
                    "finish type": "Veneer", "color/finish": "Oak",
                    "threshold surcharge": 900
                }),
            ),
            CatalogRecord::new(
                "d",
                json!({"model code": "DM_1", "width": 700, "color/finish": "Loose"}),
            ),
        ]
    }

    #[test]
    fn test_collect_sorted_unique() {
        let records = make_catalog();
        let options = collect_options(&candidates(&records));

        assert_eq!(options.widths, vec![700, 800, 900]);
        assert_eq!(options.heights, vec![2000, 2100, 2350]);
        assert_eq!(options.fillings, vec!["Honeycomb", "Solid"]);
        assert_eq!(options.finishes, vec!["Enamel", "Veneer"]);
        assert!(options.reversible);
        assert!(options.mirror);
        assert!(options.threshold);
    }

    #[test]
    fn test_colors_are_scoped_per_finish() {
        let records = make_catalog();
        let options = collect_options(&candidates(&records));

        assert_eq!(options.colors_for("Enamel"), ["Grey", "White"]);
        assert_eq!(options.colors_for("veneer"), ["Oak"]);
        // "Loose" has no finish and is not reported anywhere
        assert_eq!(options.colors_by_finish.len(), 2);
        assert!(options.colors_for("Glass").is_empty());
    }

    #[test]
    fn test_edges_union_both_sources() {
        let records = make_catalog();
        let options = collect_options(&candidates(&records));
        assert_eq!(options.edges, vec!["ABS White", "Accent", "Base"]);
    }

    #[test]
    fn test_edge_slots_ignored_without_base_price_flag() {
        let records = vec![CatalogRecord::new(
            "x",
            json!({"edge base color": "Base", "edge color 2": "Accent"}),
        )];
        let options = collect_options(&candidates(&records));
        assert!(options.edges.is_empty());
    }

    #[test]
    fn test_collect_is_deterministic() {
        let records = make_catalog();
        let first = collect_options(&candidates(&records));
        let second = collect_options(&candidates(&records));
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_empty_candidates() {
        let options = collect_options(&[]);
        assert_eq!(options, AvailableOptions::default());
    }

    #[test]
    fn test_narrowing_never_adds_values() {
        let records = make_catalog();
        let selection = Selection {
            reversible: Some(true),
            width: Some(800),
            height: Some(2350),
            finish: Some("enamel".into()),
            color: Some("White".into()),
            ..Default::default()
        };

        let mut current = select_by_model_and_style(&records, "DM_1", None);
        let mut previous = collect_options(&current);

        for step in Narrowing::from_selection(&selection) {
            current = step.apply(current);
            let next = collect_options(&current);

            assert!(next.widths.iter().all(|w| previous.widths.contains(w)));
            assert!(next.heights.iter().all(|h| previous.heights.contains(h)));
            assert!(next.fillings.iter().all(|f| previous.fillings.contains(f)));
            assert!(next.finishes.iter().all(|f| previous.finishes.contains(f)));
            assert!(next.edges.iter().all(|e| previous.edges.contains(e)));
            assert!(!next.reversible || previous.reversible);
            assert!(!next.mirror || previous.mirror);
            assert!(!next.threshold || previous.threshold);

            previous = next;
        }

        assert_eq!(current.len(), 1);
        assert_eq!(current[0].id(), "a");
        let root = select_by_model_and_style(&records, "DM_1", None);
        assert_eq!(narrow(root, &selection).len(), 1);
    }
}
