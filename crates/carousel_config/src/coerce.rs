//! Coercion of raw form values into typed option values.
//!
//! Admin-form fields default to empty strings, and checkboxes and selects
//! submit booleans as the strings `"true"`/`"false"`. The compiled options
//! object must never contain placeholder empties, or an unset client-side
//! option would surface as an explicit falsy override. Coercion turns raw
//! input into a typed value or omits it entirely.

use serde_json::Value;

/// Coerce a raw form value into a typed option value.
///
/// Returns `None` when the value should be omitted from the compiled
/// output. Rules, checked in order:
///
/// - `null` or empty string: omitted.
/// - Booleans and numbers: passed through unchanged.
/// - `"true"`/`"false"` (case-insensitive): boolean.
/// - `"null"` (case-insensitive): omitted.
/// - All-digit strings: integer.
/// - Other numeric strings: float.
/// - Anything else: trimmed string, omitted when trimming leaves nothing.
/// - Arrays: entries are coerced recursively and omitted entries dropped;
///   an array with no surviving entries is itself omitted.
///
/// The function is pure and idempotent: feeding a coerced value back in
/// yields the same value.
pub fn coerce(raw: &Value) -> Option<Value> {
    match raw {
        Value::Null => None,
        Value::Bool(_) | Value::Number(_) => Some(raw.clone()),
        Value::String(text) => coerce_text(text),
        Value::Array(entries) => {
            let kept: Vec<Value> = entries.iter().filter_map(coerce).collect();
            if kept.is_empty() {
                None
            } else {
                Some(Value::Array(kept))
            }
        }
        // Nested objects (e.g. padding object notation) are kept as-is.
        Value::Object(_) => Some(raw.clone()),
    }
}

fn coerce_text(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return Some(Value::Bool(true));
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Some(Value::Bool(false));
    }
    if trimmed.eq_ignore_ascii_case("null") {
        return None;
    }

    if trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        if let Ok(number) = trimmed.parse::<i64>() {
            return Some(Value::from(number));
        }
        // Digit runs too long for i64 fall through to the float path.
    }

    if let Ok(number) = trimmed.parse::<f64>() {
        if let Some(number) = serde_json::Number::from_f64(number) {
            return Some(Value::Number(number));
        }
    }

    Some(Value::String(trimmed.to_string()))
}

#[cfg(test)]
#[path = "coerce_tests.rs"]
mod tests;
