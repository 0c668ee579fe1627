mod cli;
mod commands;
mod config;
mod file_utils;

use anyhow::Result;
use clap::Parser;

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            dataset,
            search,
            field,
            value,
            page,
            page_size,
            format,
        } => {
            commands::list::handle(
                &dataset,
                search.as_deref(),
                field.as_deref(),
                value.as_deref(),
                page,
                page_size,
                format,
            )?;
        }

        Commands::Show {
            dataset,
            selector,
            raw,
            maps,
        } => {
            commands::show::handle(&dataset, &selector, raw, maps.as_deref())?;
        }

        Commands::Points {
            dataset,
            maps,
            all,
            format,
        } => {
            commands::points::handle(&dataset, maps.as_deref(), all, format)?;
        }

        Commands::Quests { dataset, format } => {
            commands::quests::handle(&dataset, format)?;
        }

        Commands::Fetch { names, base_url } => {
            commands::fetch::handle(&names, base_url.as_deref())?;
        }

        Commands::Configure {
            data_dir,
            page_size,
            base_url,
            show,
        } => {
            commands::configure::handle(data_dir, page_size, base_url, show)?;
        }
    }

    Ok(())
}
