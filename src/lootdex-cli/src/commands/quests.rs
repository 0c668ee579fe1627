//! Quest command handlers
//!
//! Builds the quest dependency graph and prints it.

use std::collections::HashSet;

use anyhow::Result;
use lootdex::{build_graph, QuestNode};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::file_utils;

/// Handle the quests command
pub fn handle(dataset: &str, format: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let data = file_utils::load_dataset(dataset, &config)?;

    let graph = build_graph(data.records());
    if graph.is_empty() {
        println!("No quest-like records in this dataset");
        println!("\nQuests are detected by a quest type/category or quest marker fields");
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&graph)?),
        OutputFormat::Table => print_table(&graph),
    }

    Ok(())
}

fn print_table(graph: &[QuestNode]) {
    let known: HashSet<&str> = graph.iter().map(|node| node.id.as_str()).collect();

    println!("{:<24} {:<32} {}", "Id", "Name", "Requires");
    println!("{}", "-".repeat(72));

    for node in graph {
        println!(
            "{:<24} {:<32} {}",
            node.id,
            node.name,
            requires_cell(&node.requires, &known)
        );
    }

    println!("\n{} quests", graph.len());
}

/// Render a requirement list, marking ids that name no known quest.
fn requires_cell(requires: &[String], known: &HashSet<&str>) -> String {
    if requires.is_empty() {
        return "-".to_string();
    }
    requires
        .iter()
        .map(|id| {
            if known.contains(id.as_str()) {
                id.clone()
            } else {
                format!("{}?", id)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
