//! Dataset loading.
//!
//! Loading is the only fallible surface of the library: a document either
//! parses as JSON or it does not. Every later stage is total and falls back
//! to "absent" instead of erroring, so a half-broken dataset still yields as
//! many usable records as it can.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::record::{normalize, Record};

/// Errors surfaced while loading a dataset document.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A loaded, normalized dataset.
///
/// Construction normalizes eagerly; the records are read-only afterwards and
/// every engine operation borrows them from here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Normalize an already-parsed document root.
    pub fn from_value(root: &Value) -> Self {
        Self {
            records: normalize(root),
        }
    }

    /// Parse a JSON document and normalize it.
    pub fn from_json(text: &str) -> Result<Self, DatasetError> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&root))
    }

    /// Read a dataset file, parse it, and normalize it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// All records, in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
