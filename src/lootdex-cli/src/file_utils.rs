//! Dataset file resolution against the configured data directory

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use lootdex::{Dataset, MapIndex};

use crate::config::Config;

/// Resolve a dataset reference to a file path.
///
/// An existing path is used as-is; anything else is treated as a dataset
/// name under the configured data directory, with `.json` appended when
/// missing.
pub fn resolve_data_path(reference: &str, config: &Config) -> Result<PathBuf> {
    let direct = Path::new(reference);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }

    let file_name = if reference.ends_with(".json") {
        reference.to_string()
    } else {
        format!("{}.json", reference)
    };
    let path = config.data_dir()?.join(file_name);

    if !path.is_file() {
        bail!(
            "No dataset at '{}' or '{}'. Fetch it first with 'lootdex fetch {}'",
            reference,
            path.display(),
            reference.trim_end_matches(".json")
        );
    }

    Ok(path)
}

/// Load a dataset by path or fetched name
pub fn load_dataset(reference: &str, config: &Config) -> Result<Dataset> {
    let path = resolve_data_path(reference, config)?;
    Dataset::load(&path)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))
}

/// Load a map index by path or fetched name
pub fn load_map_index(reference: &str, config: &Config) -> Result<MapIndex> {
    let path = resolve_data_path(reference, config)?;
    MapIndex::load(&path)
        .with_context(|| format!("Failed to load map index from {}", path.display()))
}
