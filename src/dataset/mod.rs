use serde_json::{Map, Value};

use crate::config;

/// An offer record: an open-ended flat JSON object produced by the external
/// ingestion process.
pub type Record = Map<String, Value>;

/// Load the offers dataset from the configured file.
///
/// The file is read in full on every call; there is deliberately no cache,
/// so a replaced file is picked up by the next request with no invalidation
/// logic. Fails soft: any I/O or parse error is logged and yields an empty
/// set, never an error to the caller.
pub async fn load() -> Vec<Record> {
    let path = &config::config().data.file;

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!("Error loading {}: {}", path, e);
            return vec![];
        }
    };

    let items: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("Error parsing {}: {}", path, e);
            return vec![];
        }
    };

    items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(obj) => Some(obj),
            _ => None,
        })
        .filter(eligible)
        .collect()
}

/// A record is eligible only if its identifying `sku_id` field is present
/// and non-null. Ineligible records are dropped at load time and cannot be
/// filtered back in by a client.
fn eligible(record: &Record) -> bool {
    matches!(record.get("sku_id"), Some(v) if !v.is_null())
}
