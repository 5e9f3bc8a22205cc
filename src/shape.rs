//! Shape classification for polymorphic series data items.
//!
//! Callers may pass a bare number, a `[label, value]` pair, a longer tuple,
//! a structured object, or garbage. Classification happens once, up front;
//! family transformers dispatch on the resulting variant instead of probing
//! the raw JSON repeatedly.

use serde_json::{Map, Value};

use crate::merge::{label_string, lenient_f64};

/// Classified form of one raw series data item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemShape<'a> {
    /// A bare numeric value (JSON number or numeric string).
    Number(f64),
    /// A two-element `[label, value]` array.
    Pair(&'a Value, &'a Value),
    /// An array of any other non-zero length (scatter/heatmap style rows).
    Tuple(&'a [Value]),
    /// A structured object; missing sub-fields get defaulted, present ones win.
    Object(&'a Map<String, Value>),
    /// Anything else: null, booleans, non-numeric strings, empty arrays.
    Unrecognized,
}

/// Classifies one raw item.
#[must_use]
pub fn classify(value: &Value) -> ItemShape<'_> {
    match value {
        Value::Array(items) => match items.as_slice() {
            [] => ItemShape::Unrecognized,
            [a, b] => ItemShape::Pair(a, b),
            items => ItemShape::Tuple(items),
        },
        Value::Object(map) => ItemShape::Object(map),
        other => match lenient_f64(other) {
            Some(n) => ItemShape::Number(n),
            None => ItemShape::Unrecognized,
        },
    }
}

/// Canonicalizes one item into the shared `{name, value}` object form.
///
/// `label` is the family label ("Bar", "Pie", ...); `index` is the item's
/// zero-based position within its own series. Unrecognized shapes become a
/// zero-value placeholder; structured objects keep every caller field and
/// only gain the missing ones.
#[must_use]
pub fn named_item(raw: &Value, label: &str, index: usize) -> Map<String, Value> {
    let fallback_name = format!("{label} {}", index + 1);
    match classify(raw) {
        ItemShape::Number(n) => named_value(fallback_name, n),
        ItemShape::Pair(a, b) => named_value(
            label_string(a).unwrap_or(fallback_name),
            lenient_f64(b).unwrap_or(0.0),
        ),
        ItemShape::Object(map) => {
            let mut item = map.clone();
            item.entry("name".to_owned())
                .or_insert_with(|| Value::String(fallback_name));
            item.entry("value".to_owned()).or_insert_with(|| 0.into());
            item
        }
        ItemShape::Tuple(_) | ItemShape::Unrecognized => named_value(fallback_name, 0.0),
    }
}

fn named_value(name: String, value: f64) -> Map<String, Value> {
    let mut item = Map::new();
    item.insert("name".to_owned(), Value::String(name));
    item.insert("value".to_owned(), Value::from(value));
    item
}
