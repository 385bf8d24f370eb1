//! Editable inspector fields and coercion of their raw text values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fields whose values are numbers.
const NUMERIC_FIELDS: [&str; 5] = ["strokeWidth", "opacity", "sem.dx", "sem.dy", "sem.fontSize"];

/// Fields whose values are colours.
const COLOR_FIELDS: [&str; 2] = ["fill", "stroke"];

/// Value type of an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Numeric,
    Text,
    Color,
}

/// Look up the value type of `field`. Unknown fields are text.
pub fn field_kind(field: &str) -> FieldKind {
    if NUMERIC_FIELDS.contains(&field) {
        FieldKind::Numeric
    } else if COLOR_FIELDS.contains(&field) {
        FieldKind::Color
    } else {
        FieldKind::Text
    }
}

/// A typed field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Number(f64),
    Text(String),
    /// The colour exactly as entered (`#rgb`, `#rrggbb`, `#rrggbbaa` or `none`).
    Color(String),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Color(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }

    /// Decoded colour. `None` for non-colours and for `none`.
    pub fn as_color(&self) -> Option<SerializableColor> {
        match self {
            FieldValue::Color(s) => parse_hex_color(s),
            _ => None,
        }
    }
}

/// Coercion failures, carried to the reducer inside the edit action.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "kebab-case")]
pub enum CoercionError {
    #[error("field `{field}` expects a number, got {raw:?}")]
    NotANumber { field: String, raw: String },
    #[error("field `{field}` expects a hex colour, got {raw:?}")]
    InvalidColor { field: String, raw: String },
}

/// Coerce the raw text of `field` to the type registered for it.
///
/// Numbers are parsed after trimming; empty or non-finite input is
/// rejected. Colours are validated and passed through unchanged.
pub fn coerce_field(field: &str, raw: &str) -> Result<FieldValue, CoercionError> {
    match field_kind(field) {
        FieldKind::Numeric => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(FieldValue::Number)
            .ok_or_else(|| CoercionError::NotANumber {
                field: field.to_string(),
                raw: raw.to_string(),
            }),
        FieldKind::Color => {
            if raw == "none" || parse_hex_color(raw).is_some() {
                Ok(FieldValue::Color(raw.to_string()))
            } else {
                Err(CoercionError::InvalidColor {
                    field: field.to_string(),
                    raw: raw.to_string(),
                })
            }
        }
        FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
    }
}

/// Serializable colour representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(color: &str) -> Option<SerializableColor> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        3 => Some(SerializableColor::new(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
            255,
        )),
        6 => Some(SerializableColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Some(SerializableColor::new(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}
