//! Configuration Resolver
//!
//! Turns a selection into the catalog record that represents it.
//!
//! Matching runs through a relaxation ladder; a looser stage is tried only
//! when the stricter one yields nothing:
//!
//! 1. style and finish required
//! 2. style required, finish relaxed
//! 3. model alone
//!
//! Model, color (equality or absent), construction type, width and height
//! apply at every stage when the selection carries them. When several records
//! survive, the highest resolved price wins.

use crate::attributes::{AttributeMap, Candidate, candidates, keys, same_text};
use crate::error::{EngineError, EngineResult};
use crate::height::height_for_matching;
use shared::models::{CatalogRecord, Selection};

/// Characters compared by the style-prefix match
const STYLE_PREFIX_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    StyleAndFinish,
    StyleOnly,
    ModelOnly,
}

impl MatchStage {
    /// Stages from strictest to loosest
    pub const LADDER: [MatchStage; 3] = [
        MatchStage::StyleAndFinish,
        MatchStage::StyleOnly,
        MatchStage::ModelOnly,
    ];

    pub const fn requires_style(self) -> bool {
        matches!(self, Self::StyleAndFinish | Self::StyleOnly)
    }

    pub const fn requires_finish(self) -> bool {
        matches!(self, Self::StyleAndFinish)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::StyleAndFinish => "style_and_finish",
            Self::StyleOnly => "style_only",
            Self::ModelOnly => "model_only",
        }
    }
}

/// Outcome of a successful resolution
#[derive(Debug, Clone)]
pub struct Resolution<'a> {
    /// Ladder stage that produced the candidates
    pub stage: MatchStage,
    /// Winning record
    pub candidate: Candidate<'a>,
    /// Resolved price of the winning record
    pub price: f64,
    /// Number of records that matched at `stage`
    pub matched: usize,
}

/// Resolve a selection to a single record
pub fn resolve<'a>(
    records: &'a [CatalogRecord],
    selection: &Selection,
) -> EngineResult<Resolution<'a>> {
    let (stage, matched) = match_candidates(records, selection)?;
    let count = matched.len();

    let candidate = pick_highest_price(matched)
        .ok_or_else(|| EngineError::no_matching_record(selection))?;
    let price = resolved_price(&candidate);

    tracing::debug!(
        stage = stage.name(),
        matched = count,
        record_id = %candidate.id(),
        price,
        "Configuration resolved"
    );

    Ok(Resolution {
        stage,
        candidate,
        price,
        matched: count,
    })
}

/// Every record matching the selection at the first non-empty ladder stage
pub fn match_candidates<'a>(
    records: &'a [CatalogRecord],
    selection: &Selection,
) -> EngineResult<(MatchStage, Vec<Candidate<'a>>)> {
    let all = candidates(records);

    for stage in MatchStage::LADDER {
        let matched: Vec<Candidate<'a>> = all
            .iter()
            .filter(|c| matches_at(c, selection, stage))
            .cloned()
            .collect();

        if !matched.is_empty() {
            return Ok((stage, matched));
        }
        tracing::debug!(stage = stage.name(), "No match, relaxing");
    }

    Err(EngineError::no_matching_record(selection))
}

/// Whether a candidate satisfies the selection at one ladder stage
pub fn matches_at(candidate: &Candidate<'_>, selection: &Selection, stage: MatchStage) -> bool {
    let attrs = &candidate.attrs;

    if let Some(model) = present(&selection.model)
        && !matches_model(candidate, model)
    {
        return false;
    }

    if stage.requires_style()
        && let Some(style) = present(&selection.style)
        && !attrs
            .text(keys::STYLE)
            .is_some_and(|s| matches_style(&s, style))
    {
        return false;
    }

    if stage.requires_finish()
        && let Some(finish) = present(&selection.finish)
        && !attrs.text(keys::FINISH).is_some_and(|f| same_text(&f, finish))
    {
        return false;
    }

    // Color is equality-or-absent: records without a color are not excluded
    if let Some(color) = present(&selection.color)
        && let Some(stored) = attrs.text(keys::COLOR_FINISH)
        && !same_text(&stored, color)
    {
        return false;
    }

    if let Some(construction) = present(&selection.construction_type)
        && !attrs
            .text(keys::CONSTRUCTION_TYPE)
            .is_some_and(|c| same_text(&c, construction))
    {
        return false;
    }

    if let Some(width) = selection.width
        && attrs.millimetres(keys::WIDTH) != Some(width)
    {
        return false;
    }

    if let Some(height) = selection.height
        && attrs.millimetres(keys::HEIGHT) != Some(height_for_matching(height))
    {
        return false;
    }

    true
}

/// Model code equality, display-name equality, or substring of either
fn matches_model(candidate: &Candidate<'_>, model: &str) -> bool {
    let code = candidate.attrs.text(keys::MODEL_CODE);
    let name = candidate.attrs.text(keys::MODEL_NAME);

    if code.as_deref() == Some(model) {
        return true;
    }
    if name.as_deref().is_some_and(|n| same_text(n, model)) {
        return true;
    }

    let needle = model.to_lowercase();
    [code, name]
        .into_iter()
        .flatten()
        .any(|hay| hay.to_lowercase().contains(&needle))
}

/// Equal styles, or equal in their first eight characters
fn matches_style(stored: &str, wanted: &str) -> bool {
    if same_text(stored, wanted) {
        return true;
    }

    let prefix = |s: &str| -> String {
        s.trim()
            .to_lowercase()
            .chars()
            .take(STYLE_PREFIX_LEN)
            .collect()
    };
    let (a, b) = (prefix(stored), prefix(wanted));
    a.chars().count() == STYLE_PREFIX_LEN && a == b
}

/// Reported retail price when positive, else the listed price
pub fn resolved_price(candidate: &Candidate<'_>) -> f64 {
    resolved_price_of(&candidate.attrs)
}

pub fn resolved_price_of(attrs: &AttributeMap) -> f64 {
    attrs
        .positive(keys::RETAIL_PRICE)
        .or_else(|| attrs.positive(keys::LIST_PRICE))
        .unwrap_or(0.0)
}

/// Highest resolved price wins; among equal prices the first record wins
///
/// Duplicate SKUs for one configuration are quoted at the higher price.
pub fn pick_highest_price<'a>(matched: Vec<Candidate<'a>>) -> Option<Candidate<'a>> {
    let mut best: Option<(f64, Candidate<'a>)> = None;

    for candidate in matched {
        let price = resolved_price(&candidate);
        if best.as_ref().is_none_or(|(best_price, _)| price > *best_price) {
            best = Some((price, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_door(id: &str, props: serde_json::Value) -> CatalogRecord {
        CatalogRecord::new(id, props)
    }

    fn make_selection() -> Selection {
        Selection {
            style: Some("Modern".into()),
            model: Some("DM_Base_1".into()),
            finish: Some("Enamel".into()),
            width: Some(800),
            height: Some(2000),
            ..Default::default()
        }
    }

    #[test]
    fn test_tie_break_picks_highest_price() {
        let records = vec![
            make_door("A", json!({"model code": "DM_Base_1", "retail price": 10000})),
            make_door("B", json!({"model code": "DM_Base_1", "retail price": 18000})),
            make_door("C", json!({"model code": "DM_Base_1", "retail price": 12000})),
        ];
        let resolution = resolve(&records, &Selection::for_model("DM_Base_1")).unwrap();
        assert_eq!(resolution.candidate.id(), "B");
        assert_eq!(resolution.price, 18000.0);
        assert_eq!(resolution.matched, 3);
    }

    #[test]
    fn test_tie_break_first_wins_on_equal_price() {
        let records = vec![
            make_door("A", json!({"model code": "DM_Base_1", "retail price": 9000})),
            make_door("B", json!({"model code": "DM_Base_1", "list price": 9000})),
        ];
        let resolution = resolve(&records, &Selection::for_model("DM_Base_1")).unwrap();
        assert_eq!(resolution.candidate.id(), "A");
    }

    #[test]
    fn test_resolved_price_falls_back_to_list_price() {
        let records = vec![
            make_door("A", json!({"retail price": 0, "list price": 7000})),
            make_door("B", json!({"retail price": "12 500"})),
            make_door("C", json!({})),
        ];
        let decoded = candidates(&records);
        assert_eq!(resolved_price(&decoded[0]), 7000.0);
        assert_eq!(resolved_price(&decoded[1]), 12500.0);
        assert_eq!(resolved_price(&decoded[2]), 0.0);
    }

    #[test]
    fn test_strict_stage_when_everything_matches() {
        let records = vec![make_door(
            "exact",
            json!({"model code": "DM_Base_1", "style": "Modern", "finish type": "enamel",
                "width": 800, "height": 2000, "retail price": 15000}),
        )];
        let resolution = resolve(&records, &make_selection()).unwrap();
        assert_eq!(resolution.stage, MatchStage::StyleAndFinish);
    }

    #[test]
    fn test_relaxes_finish_when_missing_on_record() {
        let records = vec![make_door(
            "no-finish",
            json!({"model code": "DM_Base_1", "style": "Modern", "width": 800,
                "height": 2000, "retail price": 15000}),
        )];
        let resolution = resolve(&records, &make_selection()).unwrap();
        assert_eq!(resolution.candidate.id(), "no-finish");
        assert_eq!(resolution.stage, MatchStage::StyleOnly);
    }

    #[test]
    fn test_relaxes_to_model_only() {
        let records = vec![make_door(
            "other-style",
            json!({"model code": "DM_Base_1", "style": "Classic", "width": 800,
                "height": 2000}),
        )];
        let resolution = resolve(&records, &make_selection()).unwrap();
        assert_eq!(resolution.stage, MatchStage::ModelOnly);
    }

    #[test]
    fn test_strict_match_shadows_pricier_relaxed_match() {
        let records = vec![
            make_door(
                "strict",
                json!({"model code": "DM_Base_1", "style": "Modern", "finish type": "Enamel",
                    "width": 800, "height": 2000, "retail price": 10000}),
            ),
            make_door(
                "relaxed",
                json!({"model code": "DM_Base_1", "style": "Modern", "finish type": "Veneer",
                    "width": 800, "height": 2000, "retail price": 20000}),
            ),
        ];
        let resolution = resolve(&records, &make_selection()).unwrap();
        assert_eq!(resolution.candidate.id(), "strict");
    }

    #[test]
    fn test_size_is_never_relaxed() {
        let records = vec![make_door(
            "wide",
            json!({"model code": "DM_Base_1", "style": "Modern", "width": 900, "height": 2000}),
        )];
        let err = resolve(&records, &make_selection()).unwrap_err();
        let EngineError::NoMatchingRecord { selection } = err;
        assert_eq!(selection.width, Some(800));
    }

    #[test]
    fn test_virtual_height_matches_stored_height() {
        let records = vec![make_door(
            "tall",
            json!({"model code": "DM_Base_1", "height": 2000}),
        )];
        let mut selection = Selection::for_model("DM_Base_1");
        selection.height = Some(2750);
        assert!(resolve(&records, &selection).is_ok());
    }

    #[test]
    fn test_model_matches_by_name_and_substring() {
        let records = vec![
            make_door("by-name", json!({"model code": "X_1", "model name": "Aurora"})),
            make_door("by-substring", json!({"model code": "DM_Base_1_Glass"})),
        ];
        let decoded = candidates(&records);
        let stage = MatchStage::ModelOnly;

        assert!(matches_at(&decoded[0], &Selection::for_model("aurora"), stage));
        assert!(matches_at(&decoded[1], &Selection::for_model("DM_Base_1"), stage));
        assert!(!matches_at(&decoded[0], &Selection::for_model("DM_Base_1"), stage));
        assert!(!matches_at(&decoded[1], &Selection::for_model("Aurora"), stage));
    }

    #[test]
    fn test_style_prefix_match() {
        assert!(matches_style("Modern Line Pro", "modern l"));
        assert!(matches_style("Modern Line Pro", "Modern Line Lite"));
        assert!(!matches_style("Modern", "Modern Line"));
        assert!(matches_style(" Modern ", "modern"));
    }

    #[test]
    fn test_color_equality_or_absent() {
        let records = vec![
            make_door("white", json!({"model code": "M_1", "color/finish": "White"})),
            make_door("uncolored", json!({"model code": "M_1"})),
            make_door("grey", json!({"model code": "M_1", "color/finish": "Grey"})),
        ];
        let mut selection = Selection::for_model("M_1");
        selection.color = Some("white".into());

        let (_, matched) = match_candidates(&records, &selection).unwrap();
        let ids: Vec<&str> = matched.iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["white", "uncolored"]);
    }

    #[test]
    fn test_construction_type_must_match() {
        let records = vec![
            make_door("hidden", json!({"model code": "M_1", "construction type": "Hidden"})),
            make_door("plain", json!({"model code": "M_1"})),
        ];
        let mut selection = Selection::for_model("M_1");
        selection.construction_type = Some("hidden".into());

        let (_, matched) = match_candidates(&records, &selection).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id(), "hidden");
    }

    #[test]
    fn test_inactive_records_never_resolve() {
        let records = vec![
            make_door("gone", json!({"model code": "M_1", "retail price": 99000})).inactive(),
            make_door("live", json!({"model code": "M_1", "retail price": 1000})),
        ];
        let resolution = resolve(&records, &Selection::for_model("M_1")).unwrap();
        assert_eq!(resolution.candidate.id(), "live");
    }

    #[test]
    fn test_empty_catalog_is_not_found() {
        let err = resolve(&[], &Selection::for_model("M_1")).unwrap_err();
        assert_eq!(err.selection().model.as_deref(), Some("M_1"));
    }
}
