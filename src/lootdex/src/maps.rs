//! The secondary map-index dataset and its caller-owned cache.
//!
//! Datasets reference maps loosely ("Dam Battlegrounds", "dam", an id) while
//! the map index is a separate document that may never have been fetched.
//! [`MapIndexCache`] makes that lifecycle explicit: the engine never fetches
//! anything itself, it only distinguishes "no index yet" from "index failed"
//! from "index ready", and the coordinate fallback stays absent until the
//! caller supplies a ready index.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::dataset::DatasetError;
use crate::record::{normalize, Record};
use crate::value::display_string;

/// Identity fields a map entry is matched on, in pass order.
const MATCH_FIELDS: &[&str] = &["name", "id", "key"];

/// A normalized map-index dataset with loose, case-insensitive lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapIndex {
    entries: Vec<Record>,
}

impl MapIndex {
    /// Normalize an already-parsed map-index document.
    pub fn from_value(root: &Value) -> Self {
        Self {
            entries: normalize(root),
        }
    }

    /// Parse a JSON map-index document and normalize it.
    pub fn from_json(text: &str) -> Result<Self, DatasetError> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&root))
    }

    /// Read a map-index file, parse it, and normalize it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// All map entries, in source order.
    pub fn entries(&self) -> &[Record] {
        &self.entries
    }

    /// Find the entry matching `reference`, comparing case-insensitively
    /// against every entry's `name`, then every entry's `id`, then every
    /// entry's `key`. A name match anywhere beats an id match anywhere.
    pub fn find(&self, reference: &str) -> Option<&Record> {
        let needle = reference.to_lowercase();
        for field in MATCH_FIELDS {
            let hit = self.entries.iter().find(|entry| {
                entry
                    .get(field)
                    .is_some_and(|value| display_string(value).to_lowercase() == needle)
            });
            if hit.is_some() {
                return hit;
            }
        }
        None
    }
}

/// Caller-owned lifecycle of the lazily loaded map index.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MapIndexCache {
    /// Nothing has asked for the index yet.
    #[default]
    NotRequested,
    /// A load is in flight.
    Pending,
    /// The index is loaded and usable.
    Ready(MapIndex),
    /// The load failed; the loader's message is kept for display.
    Failed(String),
}

impl MapIndexCache {
    /// The usable index, if any. Every state but `Ready` yields `None`.
    pub fn index(&self) -> Option<&MapIndex> {
        match self {
            MapIndexCache::Ready(index) => Some(index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    fn sample_index() -> MapIndex {
        MapIndex::from_value(&json!([
            {"id": "dam", "name": "Dam Battlegrounds", "center": {"lat": 10.0, "lng": 20.0}},
            {"id": "spaceport", "name": "Spaceport", "key": "old-spaceport"},
            {"id": "blue-gate", "name": "Blue Gate"},
        ]))
    }

    #[test]
    fn finds_by_name_case_insensitively() {
        let index = sample_index();
        let entry = index.find("dam battlegrounds").expect("name match");
        assert_eq!(entry.get("id"), Some(&json!("dam")));
    }

    #[test]
    fn falls_back_to_id_then_key() {
        let index = sample_index();
        let by_id = index.find("SPACEPORT").expect("id match");
        assert_eq!(by_id.get("name"), Some(&json!("Spaceport")));

        let by_key = index.find("old-spaceport").expect("key match");
        assert_eq!(by_key.get("id"), Some(&json!("spaceport")));
    }

    #[test]
    fn a_name_match_anywhere_beats_an_id_match_anywhere() {
        // "dam" is the id of the first entry and the name of the last one.
        let index = MapIndex::from_value(&json!([
            {"id": "dam", "name": "Dam Battlegrounds"},
            {"id": "x9", "name": "dam"},
        ]));
        let entry = index.find("dam").expect("match");
        assert_eq!(entry.get("id"), Some(&json!("x9")));
    }

    #[test]
    fn unknown_reference_finds_nothing() {
        assert!(sample_index().find("the-moon").is_none());
    }

    #[test]
    fn mapping_shaped_index_matches_on_entry_keys() -> Result<()> {
        // A mapping-shaped document puts its keys in `_key`, not `key`, so
        // lookup relies on the entries' own fields.
        let index = MapIndex::from_json(r#"{"dam": {"name": "Dam Battlegrounds"}}"#)?;
        assert!(index.find("dam battlegrounds").is_some());
        assert!(index.find("dam").is_none());
        Ok(())
    }

    #[test]
    fn only_a_ready_cache_exposes_an_index() {
        assert!(MapIndexCache::NotRequested.index().is_none());
        assert!(MapIndexCache::Pending.index().is_none());
        assert!(MapIndexCache::Failed("offline".to_string()).index().is_none());
        assert!(MapIndexCache::Ready(sample_index()).index().is_some());
    }

    #[test]
    fn default_cache_is_not_requested() {
        assert_eq!(MapIndexCache::default(), MapIndexCache::NotRequested);
    }
}
