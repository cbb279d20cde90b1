//! Canonical JSON serialization for deterministic signature verification.

use serde_json::{Map, Value};

/// Recursively sort object keys so signer and verifier serialize identically.
pub fn canonicalize_json_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by_key(|(key, _)| key.as_str());

            let mut out = Map::new();
            for (key, inner) in entries {
                out.insert(key.clone(), canonicalize_json_value(inner));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize_json_value).collect()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
    }
}
