//! Attribute Record Accessor
//!
//! Decodes a record's open-ended attribute map into a typed lookup.
//! The store hands maps over as objects, JSON-encoded strings, or nothing;
//! all three decode to the same [`AttributeMap`]. Malformed encodings decode
//! to an empty map and never surface as an error.

pub mod keys;

use serde_json::{Map, Value};
use shared::models::CatalogRecord;
use std::sync::Arc;

/// Immutable, cheaply clonable attribute map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap(Arc<Map<String, Value>>);

/// Decode a raw attribute map (null, object, or encoded string)
pub fn decode(raw: Option<&Value>) -> AttributeMap {
    match raw {
        None | Some(Value::Null) => AttributeMap::default(),
        Some(Value::Object(map)) => AttributeMap::from_map(map.clone()),
        Some(Value::String(encoded)) => decode_str(encoded),
        Some(other) => {
            tracing::warn!(value = %other, "Unexpected attribute map encoding, treating as empty");
            AttributeMap::default()
        }
    }
}

/// Decode a JSON-encoded attribute map
pub fn decode_str(encoded: &str) -> AttributeMap {
    let trimmed = encoded.trim();
    if trimmed.is_empty() {
        return AttributeMap::default();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => AttributeMap::from_map(map),
        Ok(_) => {
            tracing::warn!("Encoded attribute map is not an object, treating as empty");
            AttributeMap::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Malformed attribute map, treating as empty");
            AttributeMap::default()
        }
    }
}

impl AttributeMap {
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(Arc::new(map))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Scalar value rendered as trimmed text; empty strings are absent
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_text)
    }

    /// Numeric value; accepts numbers and numeric strings ("1 200,50")
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
            Value::String(s) => parse_number(s),
            _ => None,
        }
    }

    /// Positive numeric value, as used for prices and surcharges
    pub fn positive(&self, key: &str) -> Option<f64> {
        self.number(key).filter(|v| *v > 0.0)
    }

    /// Whole millimetres (widths, heights)
    pub fn millimetres(&self, key: &str) -> Option<u32> {
        self.number(key)
            .filter(|v| *v >= 0.0 && *v <= u32::MAX as f64)
            .map(|v| v.round() as u32)
    }

    /// Yes/no flag; anything unrecognised is false
    pub fn flag(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::String(s)) => matches!(
                s.trim().to_lowercase().as_str(),
                "yes" | "y" | "true" | "1"
            ),
            _ => false,
        }
    }

    /// A string, or an array of scalars, as a list of non-empty texts
    pub fn texts(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            Some(value) => scalar_text(value).into_iter().collect(),
            None => Vec::new(),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(if *b { "yes" } else { "no" }.to_string()),
        _ => None,
    }
}

/// Parse a catalog number: spaces as thousands separators, comma or dot decimals
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '\u{a0}' && *c != '\u{202f}')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Trimmed, case-insensitive text equality
pub fn same_text(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// A catalog record paired with its decoded attributes
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub record: &'a CatalogRecord,
    pub attrs: AttributeMap,
}

impl<'a> Candidate<'a> {
    pub fn new(record: &'a CatalogRecord) -> Self {
        Self {
            record,
            attrs: decode(record.properties.as_ref()),
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }
}

/// Decode every active record once
pub fn candidates(records: &[CatalogRecord]) -> Vec<Candidate<'_>> {
    records
        .iter()
        .filter(|r| r.is_active)
        .map(Candidate::new)
        .collect()
}
