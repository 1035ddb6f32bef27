//! Derived value reported to value listeners.

use serde::Serialize;

use crate::util::numeric_text;

/// The value a masked input reports to its consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DerivedValue {
    /// The raw masked buffer
    Text(String),
    /// Numeric interpretation of the buffer
    Number(f64),
    /// Numeric mode, but the buffer does not hold a number yet
    /// (an unfilled buffer reports `Null`, not zero)
    Null,
}

impl DerivedValue {
    /// Derive the reported value from buffer text
    pub fn from_buffer(buffer: &str, only_numbers: bool) -> Self {
        if !only_numbers {
            return DerivedValue::Text(buffer.to_string());
        }
        parse_number(buffer).map_or(DerivedValue::Null, DerivedValue::Number)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DerivedValue::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            DerivedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            DerivedValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for DerivedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DerivedValue::Text(s) => write!(f, "{}", s),
            DerivedValue::Number(n) => write!(f, "{}", n),
            DerivedValue::Null => write!(f, "null"),
        }
    }
}

/// Keep digits and decimal separators, normalize `,` to `.` and parse.
///
/// An empty result is "no value yet", not zero.
fn parse_number(buffer: &str) -> Option<f64> {
    let refined = numeric_text(buffer);
    if refined.is_empty() {
        return None;
    }
    refined.parse::<f64>().ok().filter(|n| n.is_finite())
}
