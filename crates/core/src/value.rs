//! Loose coercions over `serde_json::Value`.
//!
//! Invoice payloads come from browser forms, so numbers frequently arrive as
//! strings (`"2"`, `" 10.5 "`). These helpers accept both shapes and reject
//! everything else.

use serde_json::Value;

/// Truthiness of a JSON value as a form client understands it.
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy; arrays and objects are
/// always truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Interpret a value as a finite number.
///
/// Accepts JSON numbers and strings that parse as a finite `f64` after
/// trimming. Blank strings, `"NaN"`, `"inf"`, booleans and `null` are rejected.
pub fn number_like(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Borrow a non-empty string value.
pub fn non_empty_str(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}
