//! Candidate narrowing

use crate::attributes::{Candidate, candidates, keys, same_text};
use crate::height::height_for_matching;
use shared::models::{CatalogRecord, Selection};

/// Root of every cascade: exact model code, and exact style when given
pub fn select_by_model_and_style<'a>(
    records: &'a [CatalogRecord],
    model_code: &str,
    style: Option<&str>,
) -> Vec<Candidate<'a>> {
    let model_code = model_code.trim();
    let style = style.map(str::trim).filter(|s| !s.is_empty());

    candidates(records)
        .into_iter()
        .filter(|c| c.attrs.text(keys::MODEL_CODE).as_deref() == Some(model_code))
        .filter(|c| match style {
            Some(style) => c.attrs.text(keys::STYLE).as_deref() == Some(style),
            None => true,
        })
        .collect()
}

/// One narrowing predicate over the candidate set
#[derive(Debug, Clone, PartialEq)]
pub enum Narrowing {
    /// Only candidates that can be reversed
    Reversible,
    /// Exact filling name
    Filling(String),
    /// Exact width (mm)
    Width(u32),
    /// Exact height (mm), after height-band mapping
    Height(u32),
    /// Case-insensitive finish type
    Finish(String),
    /// Exact finish-scoped color; the legacy color attribute is never read
    Color(String),
}

impl Narrowing {
    /// Steps present in the selection, in their fixed application order:
    /// reversible, filling, width, height, finish, color
    pub fn from_selection(selection: &Selection) -> Vec<Narrowing> {
        let mut steps = Vec::new();

        if selection.wants_reversal() {
            steps.push(Narrowing::Reversible);
        }
        if let Some(filling) = non_empty(&selection.filling) {
            steps.push(Narrowing::Filling(filling));
        }
        if let Some(width) = selection.width {
            steps.push(Narrowing::Width(width));
        }
        if let Some(height) = selection.height {
            steps.push(Narrowing::Height(height));
        }
        if let Some(finish) = non_empty(&selection.finish) {
            steps.push(Narrowing::Finish(finish));
        }
        if let Some(color) = non_empty(&selection.color) {
            steps.push(Narrowing::Color(color));
        }

        steps
    }

    pub fn matches(&self, candidate: &Candidate<'_>) -> bool {
        let attrs = &candidate.attrs;
        match self {
            Narrowing::Reversible => allows_reversal(candidate),
            Narrowing::Filling(filling) => {
                attrs.text(keys::FILLING).as_deref() == Some(filling.as_str())
            }
            Narrowing::Width(width) => attrs.millimetres(keys::WIDTH) == Some(*width),
            Narrowing::Height(height) => {
                attrs.millimetres(keys::HEIGHT) == Some(height_for_matching(*height))
            }
            Narrowing::Finish(finish) => attrs
                .text(keys::FINISH)
                .is_some_and(|f| same_text(&f, finish)),
            Narrowing::Color(color) => {
                attrs.text(keys::COLOR_FINISH).as_deref() == Some(color.as_str())
            }
        }
    }

    pub fn apply<'a>(&self, candidates: Vec<Candidate<'a>>) -> Vec<Candidate<'a>> {
        candidates.into_iter().filter(|c| self.matches(c)).collect()
    }
}

/// Apply every narrowing step present in the selection, in order
pub fn narrow<'a>(candidates: Vec<Candidate<'a>>, selection: &Selection) -> Vec<Candidate<'a>> {
    Narrowing::from_selection(selection)
        .iter()
        .fold(candidates, |remaining, step| step.apply(remaining))
}

pub fn allows_reversal(candidate: &Candidate<'_>) -> bool {
    candidate.attrs.flag(keys::REVERSIBLE)
        || candidate.attrs.positive(keys::REVERSAL_SURCHARGE).is_some()
}

pub fn allows_mirror(candidate: &Candidate<'_>) -> bool {
    let attrs = &candidate.attrs;
    attrs.flag(keys::MIRROR)
        || attrs.positive(keys::MIRROR_ONE_SIDE_SURCHARGE).is_some()
        || attrs.positive(keys::MIRROR_TWO_SIDES_SURCHARGE).is_some()
}

pub fn allows_threshold(candidate: &Candidate<'_>) -> bool {
    candidate.attrs.flag(keys::THRESHOLD)
        || candidate.attrs.positive(keys::THRESHOLD_SURCHARGE).is_some()
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
