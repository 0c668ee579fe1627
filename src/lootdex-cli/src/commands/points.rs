//! Points command handlers
//!
//! Resolves every record to a map point where possible.

use anyhow::Result;
use lootdex::{locate, Dataset, MapIndexCache};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::show::map_cache;
use crate::config::Config;
use crate::file_utils;

/// Handle the points command
pub fn handle(dataset: &str, maps: Option<&str>, all: bool, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let data = file_utils::load_dataset(dataset, &config)?;

    let cache = map_cache(maps, &config);
    if let MapIndexCache::Failed(message) = &cache {
        eprintln!("Warning: map index unavailable: {}", message);
    }

    match format {
        OutputFormat::Json => print_json(&data, &cache, all)?,
        OutputFormat::Table => print_table(&data, &cache, all),
    }

    Ok(())
}

fn print_json(data: &Dataset, cache: &MapIndexCache, all: bool) -> Result<()> {
    let mut rows = Vec::new();
    for record in data.records() {
        let point = locate(record, cache);
        if point.is_none() && !all {
            continue;
        }
        rows.push(json!({
            "title": record.title(),
            "key": record.key(),
            "point": point,
        }));
    }
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn print_table(data: &Dataset, cache: &MapIndexCache, all: bool) {
    println!("{:<32} {:>12} {:>12}", "Title", "Lat", "Lng");
    println!("{}", "-".repeat(58));

    let mut located = 0usize;
    for record in data.records() {
        let title = record.title();
        let title = if title.is_empty() { "(untitled)" } else { &title };
        match locate(record, cache) {
            Some(point) => {
                located += 1;
                println!("{:<32} {:>12.2} {:>12.2}", title, point.lat, point.lng);
            }
            None if all => {
                println!("{:<32} {:>12} {:>12}", title, "-", "-");
            }
            None => {}
        }
    }

    println!(
        "\n{} of {} records have a resolvable point",
        located,
        data.len()
    );
    if matches!(cache, MapIndexCache::NotRequested) && located < data.len() {
        println!("Hint: pass --maps <dataset> to resolve map references too");
    }
}
