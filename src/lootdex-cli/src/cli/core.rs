//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Output format for list-style commands
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "lootdex")]
#[command(about = "Browse schema-free game datasets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List and filter dataset records
    #[command(visible_alias = "l")]
    List {
        /// Dataset file path, or a fetched dataset name (e.g. "items")
        dataset: String,

        /// Free-text search over titles and full records
        #[arg(short, long)]
        search: Option<String>,

        /// Dotted field path to constrain (active together with --value)
        #[arg(short, long)]
        field: Option<String>,

        /// Term the constrained field must contain
        #[arg(short = 'v', long)]
        value: Option<String>,

        /// Page number (1-based; out-of-range pages clamp)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Records per page (overrides the configured default)
        #[arg(long)]
        page_size: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show one record with its classified sections
    #[command(visible_alias = "s")]
    Show {
        /// Dataset file path or fetched dataset name
        dataset: String,

        /// Record selector: a _key, an id, an exact title, or a 0-based index
        selector: String,

        /// Print the raw record JSON instead of sections
        #[arg(short, long)]
        raw: bool,

        /// Map-index dataset for the coordinate fallback
        #[arg(short, long)]
        maps: Option<String>,
    },

    /// Resolve record coordinates to map points
    #[command(visible_alias = "p")]
    Points {
        /// Dataset file path or fetched dataset name
        dataset: String,

        /// Map-index dataset for the map-reference fallback
        #[arg(short, long)]
        maps: Option<String>,

        /// Also list records without a resolvable point
        #[arg(short, long)]
        all: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Build and display the quest dependency graph
    #[command(visible_alias = "q")]
    Quests {
        /// Dataset file path or fetched dataset name
        dataset: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Download datasets into the local data directory
    #[command(visible_alias = "f")]
    Fetch {
        /// Dataset names (e.g. "items", "maps", "quests")
        #[arg(required = true)]
        names: Vec<String>,

        /// Base URL to fetch from (overrides the configured default)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the directory fetched datasets are stored in
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Set the default page size for list output
        #[arg(long)]
        page_size: Option<usize>,

        /// Set the base URL datasets are fetched from
        #[arg(long)]
        base_url: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
