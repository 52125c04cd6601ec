use serde_json::Value;

use super::types::FilterSpec;
use crate::dataset::Record;

/// Apply a filter spec to a record set. The filter is stable: surviving
/// records keep their original relative order. An empty spec passes
/// everything through untouched.
pub fn apply(records: Vec<Record>, spec: &FilterSpec) -> Vec<Record> {
    if spec.is_empty() {
        return records;
    }

    let filtered: Vec<Record> = records
        .into_iter()
        .filter(|record| matches(record, spec))
        .collect();

    tracing::info!(
        "[FILTER] filters: {} | total: {}",
        serde_json::to_string(spec).unwrap_or_else(|_| "{}".to_string()),
        filtered.len()
    );

    filtered
}

/// A record passes only if every key in the spec independently matches.
pub fn matches(record: &Record, spec: &FilterSpec) -> bool {
    spec.iter()
        .all(|(key, expected)| matches_field(record.get(key.as_str()), expected))
}

/// Per-field rule: a null or absent field matches only the literal "null" or
/// the empty string; anything else is a case-sensitive, whitespace-trimmed
/// comparison of the value's textual form. Numbers compare textually, so
/// "10" matches 10 but "10.0" does not.
fn matches_field(actual: Option<&Value>, expected: &str) -> bool {
    let expected = expected.trim();

    match actual {
        None | Some(Value::Null) => expected == "null" || expected.is_empty(),
        Some(value) => stringify(value).trim() == expected,
    }
}

/// Textual form of a record value: strings unquoted, everything else its
/// JSON serialization (numbers keep their written form, nested structures
/// stringify as a whole).
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
