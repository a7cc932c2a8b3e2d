//! Display names for exported lines

use crate::attributes::{AttributeMap, keys};
use crate::height::HeightBand;
use crate::pricing::labels;
use shared::models::{CartLine, LineKind, MirrorOption, PriceResult};

/// Values treated as "nothing here" when assembling names and columns
const PLACEHOLDERS: [&str; 6] = ["", "-", "—", "null", "undefined", "n/a"];

/// Hardware kit shown when a door has none
pub const DEFAULT_HARDWARE_KIT: &str = "Basic";

/// Separator between name parts
pub const PART_SEPARATOR: &str = "; ";

pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    PLACEHOLDERS.contains(&value.as_str())
}

/// Trimmed value, or None for placeholders
pub fn meaningful(value: &str) -> Option<String> {
    (!is_placeholder(value)).then(|| value.trim().to_string())
}

/// Join parts with "; ", skipping empty and placeholder parts
pub fn join_parts<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter_map(|p| meaningful(p.as_ref()))
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR)
}

/// Everything a name strategy may read
#[derive(Debug, Clone, Copy)]
pub struct NameContext<'a> {
    pub line: &'a CartLine,
    /// Attributes of the resolved record, if the line still resolves
    pub record: Option<&'a AttributeMap>,
    pub price: Option<&'a PriceResult>,
    /// Caller-supplied last resort for the model label
    pub fallback_model_name: Option<&'a str>,
}

/// One way of finding a model label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    RecordModelName,
    LineName,
    FallbackModelName,
    SelectionModelCode,
}

impl NameSource {
    /// Strategies in the order they are tried
    pub const MODEL_LABEL_ORDER: [NameSource; 4] = [
        NameSource::RecordModelName,
        NameSource::LineName,
        NameSource::FallbackModelName,
        NameSource::SelectionModelCode,
    ];

    pub fn resolve(self, ctx: &NameContext<'_>) -> Option<String> {
        let raw = match self {
            Self::RecordModelName => ctx.record.and_then(|attrs| attrs.text(keys::MODEL_NAME)),
            Self::LineName => ctx.line.name.clone(),
            Self::FallbackModelName => ctx.fallback_model_name.map(str::to_string),
            Self::SelectionModelCode => ctx.line.selection.model.clone(),
        }?;
        meaningful(&collapse_whitespace(&raw))
    }
}

/// First strategy that yields a label; later strategies are not evaluated
pub fn model_label(ctx: &NameContext<'_>) -> Option<String> {
    NameSource::MODEL_LABEL_ORDER
        .into_iter()
        .find_map(|source| source.resolve(ctx))
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical label of an accessory kind
pub const fn accessory_label(kind: LineKind) -> Option<&'static str> {
    match kind {
        LineKind::Door => None,
        LineKind::Handle => Some("Handle"),
        LineKind::Backplate => Some("Backplate"),
        LineKind::Limiter => Some("Limiter"),
    }
}

/// Clean a supplier/catalog accessory name and prefix its canonical label once
///
/// `"limiter: Limiter - Floor stop (Acme)"` becomes `"Limiter Floor stop"`.
pub fn clean_accessory_name(label: &str, raw: &str) -> String {
    let mut rest = collapse_whitespace(raw);

    // Trailing supplier annotation, e.g. "(Acme)"
    if let Some(open) = rest.rfind('(')
        && rest.ends_with(')')
    {
        rest.truncate(open);
    }

    // Repeated canonical prefixes, with their ":" / "-" separators
    loop {
        let trimmed = rest
            .trim_start_matches(|c: char| c.is_whitespace() || c == ':' || c == '-')
            .to_string();
        let repeated = trimmed
            .get(..label.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(label))
            && trimmed[label.len()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric());
        if !repeated {
            rest = trimmed;
            break;
        }
        rest = trimmed[label.len()..].to_string();
    }

    match meaningful(&rest) {
        Some(rest) => format!("{label} {rest}"),
        None => label.to_string(),
    }
}

/// Color without a redundant finish prefix ("Enamel; White" -> "White")
pub fn strip_finish_prefix(color: &str, finish: Option<&str>) -> String {
    let color = color.trim();
    let Some(finish) = finish.map(str::trim).filter(|f| !f.is_empty()) else {
        return color.to_string();
    };

    let repeats_finish = color
        .get(..finish.len())
        .is_some_and(|head| head.to_lowercase() == finish.to_lowercase());
    if !repeats_finish {
        return color.to_string();
    }

    let rest = color[finish.len()..].trim_start();
    match rest.strip_prefix([';', ',', '-', ':']) {
        Some(stripped) if !stripped.trim().is_empty() => stripped.trim().to_string(),
        _ => color.to_string(),
    }
}

/// "W × H mm"; band heights render as their band label
pub fn size_part(width: Option<u32>, height: Option<u32>) -> Option<String> {
    let (width, height) = (width?, height?);
    Some(format!("{width} × {} mm", height_display(height)))
}

pub fn height_display(height: u32) -> String {
    match HeightBand::from_height(height) {
        Some(band) => band.label().to_string(),
        None => height.to_string(),
    }
}

/// Names of breakdown lines under one label prefix
pub fn breakdown_names(price: Option<&PriceResult>, prefix: &str) -> Vec<String> {
    price
        .map(|p| {
            p.breakdown
                .iter()
                .filter_map(|line| line.label.strip_prefix(prefix))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Named options: names from the breakdown when priced, else the raw ids
pub fn option_names(ctx: &NameContext<'_>) -> Vec<String> {
    let priced = breakdown_names(ctx.price, labels::OPTION_PREFIX);
    if !priced.is_empty() {
        return priced;
    }
    ctx.line
        .selection
        .option_ids()
        .iter()
        .filter_map(|id| meaningful(id))
        .collect()
}

/// Hardware kit name: breakdown name, else the raw id, else "Basic"
pub fn hardware_kit_name(ctx: &NameContext<'_>) -> String {
    breakdown_names(ctx.price, labels::HARDWARE_KIT_PREFIX)
        .into_iter()
        .next()
        .or_else(|| {
            ctx.line
                .selection
                .hardware_kit_id
                .as_deref()
                .and_then(meaningful)
        })
        .unwrap_or_else(|| DEFAULT_HARDWARE_KIT.to_string())
}

/// Finish from the line, else from the record
pub fn finish(ctx: &NameContext<'_>) -> Option<String> {
    ctx.line
        .selection
        .finish
        .as_deref()
        .and_then(meaningful)
        .or_else(|| ctx.record.and_then(|attrs| attrs.text(keys::FINISH)))
}

/// Color from the line, else from the record, with the finish prefix stripped
pub fn color(ctx: &NameContext<'_>) -> Option<String> {
    let raw = ctx
        .line
        .selection
        .color
        .as_deref()
        .and_then(meaningful)
        .or_else(|| ctx.record.and_then(|attrs| attrs.text(keys::COLOR_FINISH)))?;
    meaningful(&strip_finish_prefix(&raw, finish(ctx).as_deref()))
}

/// Door name: model, finish, color, size, enabled options, hardware kit
pub fn door_name(ctx: &NameContext<'_>) -> String {
    let selection = &ctx.line.selection;
    let record_mm = |key| ctx.record.and_then(|attrs| attrs.millimetres(key));

    let mut parts: Vec<String> = Vec::new();
    parts.extend(model_label(ctx));
    parts.extend(finish(ctx));
    parts.extend(color(ctx));
    parts.extend(size_part(
        selection.width.or_else(|| record_mm(keys::WIDTH)),
        selection.height.or_else(|| record_mm(keys::HEIGHT)),
    ));

    if let Some(edge) = selection.edge_id.as_deref().and_then(meaningful) {
        parts.push(format!("{}{edge}", labels::EDGE_PREFIX));
    }
    if selection.wants_reversal() {
        parts.push(labels::REVERSAL.to_string());
    }
    match selection.mirror() {
        MirrorOption::None => {}
        MirrorOption::One => parts.push(labels::MIRROR_ONE_SIDE.to_string()),
        MirrorOption::Both => parts.push(labels::MIRROR_BOTH_SIDES.to_string()),
    }
    if selection.wants_threshold() {
        parts.push(labels::THRESHOLD.to_string());
    }
    let options = option_names(ctx);
    if !options.is_empty() {
        parts.push(format!("Options: {}", options.join(", ")));
    }

    parts.push(format!("{}{}", labels::HARDWARE_KIT_PREFIX, hardware_kit_name(ctx)));

    join_parts(parts)
}

/// Accessory name from the line name, the record name, or the line id
pub fn accessory_name(ctx: &NameContext<'_>, label: &str) -> String {
    let raw = ctx
        .line
        .name
        .as_deref()
        .and_then(meaningful)
        .or_else(|| ctx.record.and_then(|attrs| attrs.text(keys::NAME)))
        .unwrap_or_else(|| ctx.line.id.clone());
    clean_accessory_name(label, &raw)
}

/// Display name for a line of the given kind
pub fn display_name(ctx: &NameContext<'_>, kind: LineKind) -> String {
    match accessory_label(kind) {
        Some(label) => accessory_name(ctx, label),
        None => door_name(ctx),
    }
}
