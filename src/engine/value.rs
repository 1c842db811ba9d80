#![forbid(unsafe_code)]

//! Coercion of submitted values into the string and number views the
//! validator checks
//!
//! Submitted values arrive as JSON. They are stringified the way the form UI
//! displays them: integral numbers without a fractional part, arrays joined
//! by commas, objects as `[object Object]`.

use serde_json::Value;

/// String view of a submitted value; `null` becomes the empty string
pub fn to_display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format_number(f),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(to_display_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Numeric view of a submitted value, if it has one
///
/// Numbers qualify directly. Strings qualify when the whole trimmed string
/// parses to a finite number. Nothing else is numeric.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    // f64::from_str accepts "inf" and "NaN" spellings; only digits count here
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Render a number the way it appears in messages: `10`, `2.5`, `-0.125`
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Length in Unicode scalar values, as counted by the length checks
///
/// A character outside the Basic Multilingual Plane counts once, not as the
/// two UTF-16 code units a browser would count.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
