//! Line classification
//!
//! Stored type tags have been wrong in historical cart data, so the kind of a
//! line is always derived from its shape. Every export consumer calls
//! [`classify_line`] instead of reading `CartLine::item_type`.

use shared::models::{CartLine, LineKind, Selection};

/// Identifier prefix of standalone backplate lines
pub const BACKPLATE_ID_PREFIX: &str = "backplate";

/// Derive the kind of a cart line from its fields
///
/// Door first (size, finish, style or a model-code-like model), then limiter,
/// backplate, handle; anything else is a door.
pub fn classify_line(line: &CartLine) -> LineKind {
    let selection = &line.selection;

    if has_door_shape(selection) {
        return LineKind::Door;
    }
    if filled(&selection.limiter_id) {
        return LineKind::Limiter;
    }
    if line
        .id
        .trim()
        .to_lowercase()
        .starts_with(BACKPLATE_ID_PREFIX)
    {
        return LineKind::Backplate;
    }
    if filled(&selection.handle_id) {
        return LineKind::Handle;
    }

    LineKind::Door
}

fn has_door_shape(selection: &Selection) -> bool {
    selection.width.is_some()
        || selection.height.is_some()
        || filled(&selection.finish)
        || filled(&selection.style)
        || selection.model.as_deref().is_some_and(is_model_code)
}

/// Model codes look like `DM_Base_1`: no whitespace, and an underscore with
/// an alphanumeric character on each side of the first one
pub fn is_model_code(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some(pos) = value.find('_') else {
        return false;
    };
    let before = value[..pos].chars().next_back();
    let after = value[pos + 1..].chars().next();

    before.is_some_and(char::is_alphanumeric) && after.is_some_and(char::is_alphanumeric)
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
