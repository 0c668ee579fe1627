//! Show command handlers
//!
//! Selects one record and prints its classified sections.

use anyhow::Result;
use lootdex::{classify, display_string, locate, MapIndexCache, Record};

use crate::config::Config;
use crate::file_utils;

/// Handle the show command
pub fn handle(dataset: &str, selector: &str, raw: bool, maps: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let data = file_utils::load_dataset(dataset, &config)?;

    let record = match select(data.records(), selector) {
        Some(record) => record,
        None => {
            println!("No record matched '{}'", selector);
            println!("\nSelectors: a record _key, an id, an exact title, or a 0-based index");
            return Ok(());
        }
    };

    if raw {
        println!("{}", record.to_json_pretty());
        return Ok(());
    }

    let cache = map_cache(maps, &config);
    if let MapIndexCache::Failed(message) = &cache {
        eprintln!("Warning: map index unavailable: {}", message);
    }

    print_sections(record, &cache);
    Ok(())
}

/// Select a record by `_key`, then id, then case-insensitive title, then
/// 0-based index.
pub fn select<'a>(records: &'a [Record], selector: &str) -> Option<&'a Record> {
    if let Some(hit) = records.iter().find(|record| record.key() == Some(selector)) {
        return Some(hit);
    }
    if let Some(hit) = records.iter().find(|record| {
        record
            .get("id")
            .is_some_and(|value| display_string(value) == selector)
    }) {
        return Some(hit);
    }
    if let Some(hit) = records
        .iter()
        .find(|record| record.title().eq_ignore_ascii_case(selector))
    {
        return Some(hit);
    }
    let index: usize = selector.parse().ok()?;
    records.get(index)
}

/// Build the map-index cache for the optional `--maps` reference.
pub fn map_cache(maps: Option<&str>, config: &Config) -> MapIndexCache {
    match maps {
        Some(reference) => match file_utils::load_map_index(reference, config) {
            Ok(index) => MapIndexCache::Ready(index),
            Err(err) => MapIndexCache::Failed(err.to_string()),
        },
        None => MapIndexCache::NotRequested,
    }
}

fn print_sections(record: &Record, cache: &MapIndexCache) {
    let title = record.title();
    if title.is_empty() {
        println!("(untitled)");
    } else {
        println!("{}", title);
    }

    let bundle = classify(record);

    if let Some(basic) = &bundle.basic {
        println!("\nBasic");
        for (field, value) in &basic.fields {
            println!("  {:<10} {}", field, display_string(value));
        }
    }

    if let Some(stats) = &bundle.stats {
        println!("\nStats");
        for (name, value) in &stats.entries {
            println!("  {:<14} {}", name, display_string(value));
        }
    }

    if let Some(blueprint) = &bundle.blueprint {
        println!("\nBlueprint ({})", blueprint.source_key);
        for ingredient in &blueprint.ingredients {
            match &ingredient.quantity {
                Some(quantity) => println!("  {:<20} x{}", ingredient.name, quantity),
                None => println!("  {}", ingredient.name),
            }
        }
    }

    if let Some(locations) = &bundle.locations {
        println!("\nLocations ({})", locations.source_key);
        for entry in &locations.entries {
            println!("  {}", display_string(entry));
        }
    }

    if let Some(point) = locate(record, cache) {
        println!("\nPoint: {:.2}, {:.2}", point.lat, point.lng);
    }
}
