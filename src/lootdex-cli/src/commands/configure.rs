//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up lootdex CLI defaults.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;

/// Handle the configure command
pub fn handle(
    data_dir: Option<PathBuf>,
    page_size: Option<usize>,
    base_url: Option<String>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    if data_dir.is_none() && page_size.is_none() && base_url.is_none() {
        show_usage();
        return Ok(());
    }

    if let Some(dir) = data_dir {
        println!("Data directory configured: {}", dir.display());
        config.data_dir = Some(dir);
    }
    if let Some(size) = page_size {
        println!("Page size configured: {}", size);
        config.page_size = Some(size);
    }
    if let Some(url) = base_url {
        println!("Base URL configured: {}", url);
        config.base_url = Some(url);
    }

    config.save()?;
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    println!("Data directory: {}", config.data_dir()?.display());
    println!("Page size: {}", config.page_size());
    println!("Base URL: {}", config.base_url());

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: lootdex configure --data-dir DIR");
    println!("   or: lootdex configure --page-size N");
    println!("   or: lootdex configure --base-url URL");
    println!("   or: lootdex configure --show");
    println!();
    println!("Note: fetched datasets are stored in the data directory and can");
    println!("      be referenced by bare name, e.g. 'lootdex list items'.");
}
