//! Coordinate extraction heuristics.
//!
//! Dataset authors never agree on an axis convention: `lat`/`lng` fields,
//! `latitude`/`longitude`, game-grid `x`/`y`, bare `[x, y]` pairs, nested
//! `position` objects, and `"12.5,3.25"` strings all appear in the wild.
//! Extraction runs a fixed rule cascade so the recovered convention is
//! deterministic regardless of which shapes coexist in one record; the cost
//! is the occasional false positive, since any two-number `x`/`y` pair is
//! read as geographic.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::maps::MapIndexCache;
use crate::record::Record;
use crate::resolve;
use crate::value::display_string;

/// Nested container paths tried by [`CoordRule::NestedPath`], in order.
const NESTED_PATHS: &[&str] = &["position", "pos", "coords", "location", "spawn"];

/// Fields that may name the map an entry belongs to, in lookup order.
const MAP_REF_FIELDS: &[&str] = &["map", "mapId", "mapName", "zone", "area", "locationMap"];

/// Fields that may carry a map entry's own point, in lookup order.
const CENTER_FIELDS: &[&str] = &["center", "location", "coords"];

/// A geographic point in map space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// One coordinate extraction rule.
///
/// Each rule is a pure shape test plus an axis convention. [`COORD_RULES`]
/// fixes the precedence; extraction takes the first rule that matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordRule {
    /// Numeric `lat` and `lng` fields, taken directly.
    LatLng,
    /// Numeric `latitude` and `longitude` fields.
    LatitudeLongitude,
    /// Numeric `x` and `y` fields; `y` is the latitude axis, `x` the longitude.
    XY,
    /// A sequence whose first two elements are numbers, read as `[lng, lat]`.
    PairSequence,
    /// Recursive extraction from the first nested candidate container that
    /// yields a point.
    NestedPath,
    /// Numeric `mapX` and `mapY` fields, read like `x`/`y`.
    MapXY,
    /// The first field whose value is a `"<number>,<number>"` string, read
    /// as `"lat,lng"`.
    CommaString,
}

/// Rule precedence. Direct axis fields beat pair sequences, pair sequences
/// beat nested containers, and the comma-string form is the last resort.
pub const COORD_RULES: &[CoordRule] = &[
    CoordRule::LatLng,
    CoordRule::LatitudeLongitude,
    CoordRule::XY,
    CoordRule::PairSequence,
    CoordRule::NestedPath,
    CoordRule::MapXY,
    CoordRule::CommaString,
];

impl CoordRule {
    /// Apply this rule alone to a value.
    pub fn apply(self, value: &Value) -> Option<GeoPoint> {
        match self {
            CoordRule::PairSequence => {
                let seq = value.as_array()?;
                let lng = seq.first()?.as_f64()?;
                let lat = seq.get(1)?.as_f64()?;
                Some(GeoPoint { lat, lng })
            }
            rule => rule.apply_fields(value.as_object()?),
        }
    }

    /// Apply this rule to a mapping's fields. The sequence rule can never
    /// match here.
    fn apply_fields(self, fields: &Map<String, Value>) -> Option<GeoPoint> {
        match self {
            CoordRule::LatLng => point_from(fields, "lat", "lng"),
            CoordRule::LatitudeLongitude => point_from(fields, "latitude", "longitude"),
            CoordRule::XY => point_from(fields, "y", "x"),
            CoordRule::MapXY => point_from(fields, "mapY", "mapX"),
            CoordRule::NestedPath => NESTED_PATHS
                .iter()
                .find_map(|path| extract(resolve::resolve_in(fields, path)?)),
            CoordRule::CommaString => fields.values().find_map(comma_point),
            CoordRule::PairSequence => None,
        }
    }
}

/// Extract a point from a raw value by applying [`COORD_RULES`] in order.
pub fn extract(value: &Value) -> Option<GeoPoint> {
    COORD_RULES.iter().find_map(|rule| rule.apply(value))
}

/// Extract a point from a record's own fields.
pub fn extract_record(record: &Record) -> Option<GeoPoint> {
    COORD_RULES
        .iter()
        .find_map(|rule| rule.apply_fields(record.fields()))
}

/// Resolve a record's point, falling back to the center of the map it
/// references.
///
/// The fallback looks up the record's map reference in the index, then
/// reapplies extraction to the matched entry's first present center field.
/// It needs a [`MapIndexCache::Ready`] index; in any other cache state only
/// the record's own fields can produce a point.
pub fn locate(record: &Record, maps: &MapIndexCache) -> Option<GeoPoint> {
    if let Some(point) = extract_record(record) {
        return Some(point);
    }
    let index = maps.index()?;
    let reference = MAP_REF_FIELDS
        .iter()
        .find_map(|field| record.resolve(field))?;
    let entry = index.find(&display_string(reference))?;
    let center = CENTER_FIELDS.iter().find_map(|field| entry.get(field))?;
    extract(center)
}

fn point_from(fields: &Map<String, Value>, lat_key: &str, lng_key: &str) -> Option<GeoPoint> {
    let lat = fields.get(lat_key)?.as_f64()?;
    let lng = fields.get(lng_key)?.as_f64()?;
    Some(GeoPoint { lat, lng })
}

/// Parse a `"<number>,<number>"` string: exactly one comma, both halves
/// finite numbers after trimming.
fn comma_point(value: &Value) -> Option<GeoPoint> {
    let text = value.as_str()?;
    let (first, second) = text.split_once(',')?;
    if second.contains(',') {
        return None;
    }
    let lat: f64 = first.trim().parse().ok()?;
    let lng: f64 = second.trim().parse().ok()?;
    (lat.is_finite() && lng.is_finite()).then_some(GeoPoint { lat, lng })
}
