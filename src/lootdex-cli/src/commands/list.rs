//! List command handlers
//!
//! Filters, paginates, and prints dataset records.

use anyhow::Result;
use lootdex::{display_string, filter, paginate, FilterQuery, Page, Record};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::file_utils;

/// Handle the list command
pub fn handle(
    dataset: &str,
    search: Option<&str>,
    field: Option<&str>,
    value: Option<&str>,
    page: usize,
    page_size: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let config = Config::load()?;
    let dataset = file_utils::load_dataset(dataset, &config)?;

    let query = FilterQuery {
        text: search.map(str::to_string),
        field_path: field.map(str::to_string),
        field_value: value.map(str::to_string),
    };
    let hits = filter(dataset.records(), &query);
    let page = paginate(&hits, page, page_size.unwrap_or_else(|| config.page_size()));

    match format {
        OutputFormat::Json => print_json(&page)?,
        OutputFormat::Table => print_table(&page),
    }

    Ok(())
}

fn print_json(page: &Page<'_, &Record>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(page.items)?);
    Ok(())
}

fn print_table(page: &Page<'_, &Record>) {
    if page.total_count == 0 {
        println!("No records matched");
        println!("\nTry a broader --search term, or no filter at all");
        return;
    }

    println!(
        "{:<32} {:<12} {:<12} {:<16}",
        "Title", "Type", "Rarity", "Key"
    );
    println!("{}", "-".repeat(74));

    for record in page.items {
        println!(
            "{:<32} {:<12} {:<12} {:<16}",
            title_cell(record),
            field_cell(record, "type"),
            field_cell(record, "rarity"),
            record.key().unwrap_or("-"),
        );
    }

    println!(
        "\nPage {} of {} ({} records)",
        page.page,
        page.total_pages(),
        page.total_count
    );
}

fn title_cell(record: &Record) -> String {
    let title = record.title();
    if title.is_empty() {
        "(untitled)".to_string()
    } else {
        title
    }
}

fn field_cell(record: &Record, field: &str) -> String {
    match record.get(field) {
        Some(value) => display_string(value),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lootdex::normalize;
    use serde_json::json;

    #[test]
    fn title_cell_substitutes_the_placeholder() {
        let records = normalize(&json!([{"damage": 7}, {"name": "Sword"}]));
        assert_eq!(title_cell(&records[0]), "(untitled)");
        assert_eq!(title_cell(&records[1]), "Sword");
    }

    #[test]
    fn field_cell_renders_any_value_type() {
        let records = normalize(&json!([{"type": "weapon", "rarity": 3}]));
        assert_eq!(field_cell(&records[0], "type"), "weapon");
        assert_eq!(field_cell(&records[0], "rarity"), "3");
        assert_eq!(field_cell(&records[0], "tier"), "-");
    }
}
