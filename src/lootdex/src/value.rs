//! Scalar coercions over the untyped JSON model.
//!
//! The whole engine operates over `serde_json::Value` with insertion-ordered
//! maps, so normalized records keep the field order of the source document.
//! This module holds the one display convention every consumer shares:
//! scalars render as plain text, containers as their JSON text.

use serde_json::Value;

/// The display form of any value.
///
/// Strings pass through unquoted; null, booleans, and numbers use their JSON
/// token; arrays and objects use their compact JSON serialization.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        container => serde_json::to_string(container).unwrap_or_default(),
    }
}
