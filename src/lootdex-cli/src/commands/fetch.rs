//! Fetch command handlers
//!
//! Downloads datasets from the configured host into the data directory.

use std::fs;

use anyhow::{Context, Result};
use lootdex::Dataset;

use crate::config::Config;

/// Handle the fetch command
pub fn handle(names: &[String], base_url: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let base = base_url.unwrap_or_else(|| config.base_url());
    let data_dir = config.data_dir()?;

    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory at {}", data_dir.display()))?;

    for name in names {
        let name = name.trim_end_matches(".json");
        let url = format!("{}/{}.json", base.trim_end_matches('/'), name);
        println!("Fetching {}", url);

        let body = ureq::get(&url)
            .call()
            .with_context(|| format!("Failed to fetch {}", url))?
            .into_string()
            .context("Failed to read response body")?;

        // Normalize before writing so a bad download never lands on disk.
        let dataset =
            Dataset::from_json(&body).with_context(|| format!("{} is not a JSON dataset", url))?;

        let path = data_dir.join(format!("{}.json", name));
        fs::write(&path, &body)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        println!("  {} records saved to {}", dataset.len(), path.display());
    }

    Ok(())
}
