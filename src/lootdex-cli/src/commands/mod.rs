//! Command handlers for the lootdex CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod fetch;
pub mod list;
pub mod points;
pub mod quests;
pub mod show;
