//! Config Flattener
//!
//! Projects a stored feed configuration into the flat key -> value object
//! served by the public read endpoint. Text and media entries contribute
//! strings, toggles contribute booleans.
//!
//! The input is the raw stored value, not a typed config: the store is an
//! external system whose contents could have been corrupted or hand-edited,
//! so every shape is re-checked here. A store value that is not a structured
//! record at all fails closed with [`ConfigFormatError`]; anything less
//! drastic degrades entry by entry.

use serde_json::{Map, Value};

use crate::app::sanitizer::{category_entries, sanitize_key};
use crate::error::ConfigFormatError;

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn insert_string_entry(flat: &mut Map<String, Value>, entry: &Map<String, Value>) {
    let key = sanitize_key(entry.get("key").and_then(Value::as_str).unwrap_or_default());
    if key.is_empty() {
        return;
    }
    let value = entry.get("value").and_then(Value::as_str).unwrap_or_default();
    flat.insert(key, Value::String(value.to_string()));
}

/// Flatten a stored feed configuration into the public response shape.
///
/// Categories merge in the order text_fields, media_fields, toggles, and a
/// later category overwrites an earlier one on key collision. Toggles merge
/// last, so a toggle sharing a key with a text or media field shadows it.
/// That is a long-standing quirk of the merge order that existing consumers
/// depend on; keep it as-is.
///
/// Deterministic pure function: no caching, no I/O, no randomness.
pub fn flatten_config(stored: &Value) -> Result<Map<String, Value>, ConfigFormatError> {
    let config = stored
        .as_object()
        .ok_or_else(|| ConfigFormatError::NotARecord(json_type_name(stored)))?;

    let mut flat = Map::new();

    for entry in category_entries(config.get("text_fields")) {
        insert_string_entry(&mut flat, entry);
    }
    for entry in category_entries(config.get("media_fields")) {
        insert_string_entry(&mut flat, entry);
    }
    for entry in category_entries(config.get("toggles")) {
        let key = sanitize_key(entry.get("key").and_then(Value::as_str).unwrap_or_default());
        if key.is_empty() {
            continue;
        }
        let on = entry.get("value").and_then(Value::as_str) == Some("on");
        flat.insert(key, Value::Bool(on));
    }

    Ok(flat)
}
