//! Query-string boundary: turns the nested `filter[field]=value` convention
//! into a typed [`FilterSpec`].
//!
//! Bracketed keys build a JSON tree (`filter[a][b]=c` becomes `a: {"b":"c"}`,
//! repeated keys collect into an array) and any top-level entry that is not a
//! plain string is then coerced to its compact JSON text. Structural filter
//! values are intentionally flattened to a single string comparison rather
//! than matched recursively; the engine treats them like any other expected
//! value. Parsing never fails; malformed bracket syntax degrades to a literal
//! key segment.

use serde_json::{Map, Value};

use super::types::FilterSpec;

/// Parse a raw (still percent-encoded) query string into a `FilterSpec`.
/// Keys outside the `filter[...]` namespace are ignored.
pub fn parse_filter_spec(raw: &str) -> FilterSpec {
    let mut tree: Map<String, Value> = Map::new();

    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        if let Some(path) = filter_key_path(&key) {
            insert_path(&mut tree, &path, value.into_owned());
        }
    }

    tree.into_iter()
        .map(|(field, value)| (field, coerce_to_string(value)))
        .collect()
}

/// Split `filter[a][b]` into `["a", "b"]`. Returns `None` for keys that do
/// not belong to the filter namespace or carry no field name.
fn filter_key_path(key: &str) -> Option<Vec<String>> {
    let mut rest = key.strip_prefix("filter")?;
    if !rest.starts_with('[') {
        return None;
    }

    let mut path = Vec::new();
    while let Some(open) = rest.strip_prefix('[') {
        match open.find(']') {
            Some(end) => {
                path.push(open[..end].to_string());
                rest = &open[end + 1..];
            }
            None => {
                // Unterminated bracket: keep the remainder as a literal segment
                path.push(open.to_string());
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        // Trailing text after the last bracket folds into the final segment
        match path.last_mut() {
            Some(last) => last.push_str(rest),
            None => return None,
        }
    }

    if path.first().map_or(true, |f| f.is_empty()) {
        return None;
    }
    Some(path)
}

fn insert_path(map: &mut Map<String, Value>, path: &[String], value: String) {
    let (head, rest) = match path.split_first() {
        Some(split) => split,
        None => return,
    };

    if rest.is_empty() {
        // Repeated keys collect into an array
        match map.get_mut(head) {
            Some(Value::Array(items)) => items.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                map.insert(head.clone(), Value::String(value));
            }
        }
        return;
    }

    // `filter[field][]=v` appends to an array under the field
    if rest.len() == 1 && rest[0].is_empty() {
        match map.get_mut(head) {
            Some(Value::Array(items)) => items.push(Value::String(value)),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, Value::String(value)]);
            }
            None => {
                map.insert(head.clone(), Value::Array(vec![Value::String(value)]));
            }
        }
        return;
    }

    let entry = map
        .entry(head.clone())
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        // A scalar collided with deeper nesting; the nested form wins
        *entry = Value::Object(Map::new());
    }
    if let Value::Object(inner) = entry {
        insert_path(inner, rest, value);
    }
}

/// Top-level scalar strings pass through verbatim; anything nested is
/// stringified as a whole (compact JSON).
fn coerce_to_string(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
