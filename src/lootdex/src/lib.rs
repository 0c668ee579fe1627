//! # lootdex
//!
//! Heuristic normalization and extraction engine for schema-free game
//! datasets.
//!
//! Community-maintained game data (items, weapons, maps, quests) ships as
//! JSON with no declared schema: one file is a sequence, the next a mapping
//! keyed by id; coordinates hide under `lat`/`lng`, `x`/`y`, `[x, y]` pairs,
//! or `"12.5,3.25"` strings; crafting requirements go by `recipe`,
//! `materials`, or `components`. This crate turns such documents into
//! uniform records and recovers structure from them without any per-dataset
//! configuration:
//!
//! - [`record::normalize`] folds any document root into ordered [`Record`]s
//! - [`resolve::resolve`] addresses nested fields by dotted path
//! - [`geo::extract`] recovers map points through a fixed rule cascade
//! - [`sections::classify`] sorts fields into display sections
//! - [`quests::build_graph`] detects quests and assembles their dependency
//!   graph
//! - [`filter::filter`] and [`filter::paginate`] drive list views
//!
//! Every heuristic is total: unrecognized shapes yield "absent", never an
//! error. Loading a document is the only fallible operation.
//!
//! ## Example
//!
//! ```
//! use lootdex::{classify, extract_record, filter, Dataset, FilterQuery};
//!
//! # fn main() -> Result<(), lootdex::DatasetError> {
//! let dataset = Dataset::from_json(
//!     r#"{
//!         "rusty-sword": {
//!             "name": "Rusty Sword",
//!             "type": "weapon",
//!             "damage": 7,
//!             "position": {"x": 12.5, "y": 3.25}
//!         }
//!     }"#,
//! )?;
//!
//! let query = FilterQuery {
//!     text: Some("sword".to_string()),
//!     ..FilterQuery::default()
//! };
//! let hits = filter(dataset.records(), &query);
//! assert_eq!(hits.len(), 1);
//!
//! let sections = classify(hits[0]);
//! assert!(sections.basic.is_some());
//! assert!(sections.stats.is_some());
//!
//! let point = extract_record(hits[0]).unwrap();
//! assert_eq!((point.lat, point.lng), (3.25, 12.5));
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod filter;
pub mod geo;
pub mod maps;
pub mod quests;
pub mod record;
pub mod resolve;
pub mod sections;
pub mod value;

pub use dataset::{Dataset, DatasetError};
pub use filter::{filter, paginate, FilterQuery, Page};
pub use geo::{extract, extract_record, locate, CoordRule, GeoPoint, COORD_RULES};
pub use maps::{MapIndex, MapIndexCache};
pub use quests::{build_graph, slugify, QuestNode};
pub use record::{normalize, Record};
pub use resolve::resolve;
pub use sections::{
    classify, BasicInfo, Blueprint, Ingredient, Locations, SectionBundle, StatTable,
};
pub use value::display_string;
