//! Record normalization.
//!
//! Community datasets ship in two top-level shapes: a sequence of entries, or
//! a mapping keyed by item id. Normalization folds both into one uniform
//! record sequence so everything downstream (sections, quests, filtering,
//! coordinates) handles a single shape. Scalar entries are wrapped rather
//! than dropped, so the output arity always matches the input.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::resolve;
use crate::value::display_string;

/// Display-title candidates, in priority order.
const TITLE_FIELDS: &[&str] = &["name", "title", "id", "_key"];

/// One normalized dataset entry.
///
/// A record is an insertion-ordered field mapping. Records normalized from a
/// mapping-shaped document carry the synthetic `_key` field with the source
/// key; wrapped scalar entries carry their payload under `value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// The source key this record was normalized under, if any.
    pub fn key(&self) -> Option<&str> {
        self.fields.get("_key").and_then(Value::as_str)
    }

    /// Direct field lookup.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Dotted-path field lookup. See [`resolve::resolve_in`].
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        resolve::resolve_in(&self.fields, path)
    }

    /// The field mapping, in source order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Display title: the first present of `name`, `title`, `id`, `_key`,
    /// or the empty string when none is present.
    pub fn title(&self) -> String {
        TITLE_FIELDS
            .iter()
            .find_map(|field| self.fields.get(*field))
            .map(display_string)
            .unwrap_or_default()
    }

    /// Compact JSON form of the whole record.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(&self.fields).unwrap_or_default()
    }

    /// Pretty-printed JSON form of the whole record.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.fields).unwrap_or_default()
    }
}

/// Normalize an arbitrary document root into an ordered record sequence.
///
/// A sequence root maps element-wise, a mapping root entry-wise with `_key`
/// carrying (and overwriting) the entry key; any other root yields no
/// records. Input order is preserved.
pub fn normalize(root: &Value) -> Vec<Record> {
    match root {
        Value::Array(entries) => entries.iter().map(normalize_element).collect(),
        Value::Object(entries) => entries
            .iter()
            .map(|(key, value)| normalize_entry(key, value))
            .collect(),
        _ => Vec::new(),
    }
}

fn normalize_element(entry: &Value) -> Record {
    match entry {
        Value::Object(fields) => Record {
            fields: fields.clone(),
        },
        scalar => wrap_scalar("", scalar),
    }
}

fn normalize_entry(key: &str, value: &Value) -> Record {
    match value {
        Value::Object(entry) => {
            let mut fields = entry.clone();
            fields.insert("_key".to_string(), Value::String(key.to_string()));
            Record { fields }
        }
        scalar => wrap_scalar(key, scalar),
    }
}

fn wrap_scalar(key: &str, payload: &Value) -> Record {
    let mut fields = Map::new();
    fields.insert("_key".to_string(), Value::String(key.to_string()));
    fields.insert("value".to_string(), payload.clone());
    Record { fields }
}
