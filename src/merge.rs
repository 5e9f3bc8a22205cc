//! Deep-merge of caller configuration over computed defaults.
//!
//! Precedence rule: caller-supplied leaf values win over defaults at every
//! nesting level, never just the top. `null` counts as "unset", so a default
//! still fills it; any other caller value is kept verbatim.

use serde_json::{Map, Value};

/// Merges `caller` over `defaults`, recursing through object values.
///
/// Non-object caller values replace the default wholesale; object values are
/// merged key by key so sibling defaults survive next to caller overrides.
#[must_use]
pub fn deep_merge(defaults: Value, caller: &Value) -> Value {
    match (defaults, caller) {
        (defaults, Value::Null) => defaults,
        (Value::Object(mut base), Value::Object(over)) => {
            for (key, value) in over {
                let merged = match base.remove(key) {
                    Some(default_child) => deep_merge(default_child, value),
                    None => value.clone(),
                };
                base.insert(key.clone(), merged);
            }
            Value::Object(base)
        }
        (_, other) => other.clone(),
    }
}

/// Resolves one top-level section: the family default for `key`, with the
/// caller's section (if any) merged over it.
#[must_use]
pub fn merged_section(input: &Value, key: &str, defaults: Value) -> Value {
    match input.get(key) {
        Some(section) => deep_merge(defaults, section),
        None => defaults,
    }
}

/// Lenient numeric read: JSON numbers, plus numeric strings.
#[must_use]
pub fn lenient_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Display form for a value used as a label: strings verbatim, numbers
/// formatted, everything else unusable.
#[must_use]
pub fn label_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads `map[key]` as an object, tolerating absence and wrong shapes.
#[must_use]
pub fn get_object<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    map.get(key).and_then(Value::as_object)
}

/// Reads `map[key]` as a string.
#[must_use]
pub fn get_str<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}

/// Reads `map[key]` leniently as a number.
#[must_use]
pub fn get_f64(map: &Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(lenient_f64)
}

/// Reads `map[key]` as an array slice.
#[must_use]
pub fn get_array<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Vec<Value>> {
    map.get(key).and_then(Value::as_array)
}
