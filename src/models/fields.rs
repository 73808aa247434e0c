//! Coercion helpers for loosely-typed caller payloads.
//!
//! Every accessor fails soft: missing keys, nulls, empty strings and values
//! that do not parse all collapse to the documented default.

use serde_json::Value;

/// Loose key/value payload as handed over by a form or JSON body.
pub type FieldMap = serde_json::Map<String, Value>;

/// Trimmed, non-empty text. Numbers are rendered as text.
pub fn text(fields: &FieldMap, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Finite float, or `None` when absent or unparseable.
pub fn optional_float(fields: &FieldMap, key: &str) -> Option<f64> {
    let value = match fields.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;

    value.is_finite().then_some(value)
}

pub fn float_or_zero(fields: &FieldMap, key: &str) -> f64 {
    optional_float(fields, key).unwrap_or(0.0)
}

/// Whole number. Fractional JSON numbers truncate; fractional strings do not parse.
pub fn int_or_zero(fields: &FieldMap, key: &str) -> i64 {
    let parsed = match fields.get(key) {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.unwrap_or(0)
}

/// Capitalise the first letter of every word, lowercase the rest.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
