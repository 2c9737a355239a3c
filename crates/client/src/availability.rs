//! Domain availability decoding.

use serde_json::Value;

/// Outcome of a domain availability check.
///
/// The check endpoint answers with a bare body whose *truthiness* means
/// "taken" — an inverted convention that is easy to misread. It is decoded
/// here, once, so callers only ever see these two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Available,
    Taken,
}

impl Availability {
    /// Decode the raw response body.
    ///
    /// Falsy bodies (`null`, `false`, `""`, `0`, or nothing at all) mean the
    /// domain is available; anything truthy means it is taken. A non-empty
    /// body that is not valid JSON is treated as a truthy string.
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Availability::Available;
        }
        match serde_json::from_str::<Value>(body) {
            Ok(value) if is_falsy(&value) => Availability::Available,
            _ => Availability::Taken,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}
