//! Dotted-path field resolution.
//!
//! Lookup paths like `"position.x"` address nested fields of a record or raw
//! value. Resolution distinguishes a field that is absent from a field that
//! is present and null: the former yields `None`, the latter yields the null
//! value itself. Sequences are not indexable; a path step into anything that
//! is not a mapping fails the whole lookup.

use serde_json::{Map, Value};

/// Resolve a dotted path against a value.
///
/// A path without a dot is a direct key lookup. A dotted path is walked left
/// to right, failing as soon as an intermediate value is missing or is not a
/// mapping. The empty path never resolves.
pub fn resolve<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    resolve_in(value.as_object()?, path)
}

/// Resolve a dotted path against a mapping's fields. See [`resolve`].
pub fn resolve_in<'a>(fields: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let mut parts = path.split('.');
    let mut current = fields.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}
