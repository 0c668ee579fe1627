//! Quest detection and dependency graph assembly.
//!
//! Quests hide inside general datasets: sometimes marked by a `type` field,
//! sometimes only recognizable by quest-specific fields. Detection is
//! deliberately loose, and the assembled graph is not validated: requirement
//! entries naming unknown quests stay in place, and cycles are kept. Callers
//! walk the graph; this module only builds it.

use serde::Serialize;
use serde_json::Value;

use crate::record::Record;
use crate::value::display_string;

/// Fields whose presence alone marks a record as quest-like.
const QUEST_MARKER_FIELDS: &[&str] = &["questID", "prerequisites", "requires", "questName", "quest"];

/// Identity candidates for a node id, in priority order.
const ID_FIELDS: &[&str] = &["_key", "id", "questID", "key"];

/// Display-name candidates, in priority order.
const NAME_FIELDS: &[&str] = &["name", "title", "questName", "_key", "id"];

/// Requirement-list candidates, in priority order.
const REQUIRES_FIELDS: &[&str] = &["prerequisites", "requires", "requiresQuest"];

/// One node of the quest dependency graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestNode {
    /// Non-empty identifier other nodes reference.
    pub id: String,
    /// Display name; `"(quest)"` when nothing better is derivable.
    pub name: String,
    /// Referenced quest ids, as given. Unknown ids are kept.
    pub requires: Vec<String>,
    /// The record this node was built from.
    pub source: Record,
}

/// Detect quest-like records and assemble the dependency graph.
///
/// Input order is preserved. Records without a derivable id are excluded,
/// so every node id is non-empty.
pub fn build_graph(records: &[Record]) -> Vec<QuestNode> {
    records
        .iter()
        .filter(|record| is_quest_like(record))
        .filter_map(node_from)
        .collect()
}

/// A record is quest-like if its `type` or `category` mentions quests, or if
/// it carries any quest marker field.
pub fn is_quest_like(record: &Record) -> bool {
    for field in ["type", "category"] {
        if let Some(value) = record.get(field) {
            if display_string(value).to_lowercase().contains("quest") {
                return true;
            }
        }
    }
    QUEST_MARKER_FIELDS
        .iter()
        .any(|field| record.get(field).is_some())
}

/// Lower-case `text` and collapse every non-alphanumeric run into a single
/// interior dash.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn node_from(record: &Record) -> Option<QuestNode> {
    let id = first_non_empty(record, ID_FIELDS).or_else(|| {
        let name = display_string(record.get("name")?);
        let slug = slugify(&name);
        if slug.is_empty() {
            return None;
        }
        Some(slug)
    })?;
    let name =
        first_non_empty(record, NAME_FIELDS).unwrap_or_else(|| "(quest)".to_string());
    Some(QuestNode {
        id,
        name,
        requires: requirement_list(record),
        source: record.clone(),
    })
}

/// The first candidate field with a non-empty display form.
fn first_non_empty(record: &Record, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| {
        let text = display_string(record.get(field)?);
        if text.is_empty() {
            return None;
        }
        Some(text)
    })
}

/// Normalize the first present requirement field into id strings. A single
/// string becomes a one-element list; any other non-sequence value yields an
/// empty list.
fn requirement_list(record: &Record) -> Vec<String> {
    let value = match REQUIRES_FIELDS.iter().find_map(|field| record.get(field)) {
        Some(value) => value,
        None => return Vec::new(),
    };
    match value {
        Value::Array(entries) => entries.iter().map(display_string).collect(),
        Value::String(single) => vec![single.clone()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::normalize;
    use serde_json::json;

    #[test]
    fn detects_quests_by_type_and_category() {
        let records = normalize(&json!([
            {"id": "q1", "type": "quest"},
            {"id": "q2", "category": "Side Quests"},
            {"id": "q3", "type": "SideQuestChain"},
            {"id": "w1", "type": "weapon"},
        ]));
        let graph = build_graph(&records);
        let ids: Vec<&str> = graph.iter().map(|node| node.id.as_str()).collect();
        assert_eq!(ids, ["q1", "q2", "q3"]);
    }

    #[test]
    fn detects_quests_by_marker_fields() {
        let records = normalize(&json!([
            {"id": "a", "questID": "a"},
            {"id": "b", "prerequisites": []},
            {"id": "c", "questName": "The Long Walk"},
            {"id": "d", "quest": true},
            {"id": "e", "requires": ["a"]},
            {"id": "f", "description": "not a quest"},
        ]));
        assert_eq!(build_graph(&records).len(), 5);
    }

    #[test]
    fn marker_presence_counts_even_when_empty() {
        let records = normalize(&json!([{"id": "a", "prerequisites": []}]));
        let graph = build_graph(&records);
        assert_eq!(graph.len(), 1);
        assert!(graph[0].requires.is_empty());
    }

    #[test]
    fn node_id_prefers_key_then_id_then_quest_id() {
        let records = normalize(&json!({
            "the-key": {"id": "plain-id", "questID": "qid", "type": "quest"},
        }));
        assert_eq!(build_graph(&records)[0].id, "the-key");

        let records = normalize(&json!([
            {"id": "plain-id", "questID": "qid", "type": "quest"},
        ]));
        assert_eq!(build_graph(&records)[0].id, "plain-id");
    }

    #[test]
    fn empty_id_candidates_are_passed_over() {
        let records = normalize(&json!([
            {"id": "", "questID": "qid", "type": "quest"},
        ]));
        assert_eq!(build_graph(&records)[0].id, "qid");
    }

    #[test]
    fn node_id_falls_back_to_the_slugged_name() {
        let records = normalize(&json!([
            {"name": "The Long Walk!", "type": "quest"},
        ]));
        let graph = build_graph(&records);
        assert_eq!(graph[0].id, "the-long-walk");
        assert_eq!(graph[0].name, "The Long Walk!");
    }

    #[test]
    fn records_without_a_derivable_id_are_excluded() {
        let records = normalize(&json!([
            {"type": "quest", "description": "nameless"},
            {"type": "quest", "name": "!!!"},
            {"type": "quest", "name": "Kept"},
        ]));
        let graph = build_graph(&records);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph[0].id, "kept");
    }

    #[test]
    fn node_name_falls_back_to_the_placeholder() {
        let records = normalize(&json!([{"questID": "q9"}]));
        let graph = build_graph(&records);
        assert_eq!(graph[0].id, "q9");
        assert_eq!(graph[0].name, "(quest)");
    }

    #[test]
    fn requirement_fields_are_tried_in_order() {
        let records = normalize(&json!([
            {"id": "a", "prerequisites": ["p"], "requires": ["r"], "type": "quest"},
        ]));
        assert_eq!(build_graph(&records)[0].requires, ["p"]);
    }

    #[test]
    fn single_string_requirement_becomes_a_one_element_list() {
        let records = normalize(&json!([
            {"id": "a", "requires": "the-first-step"},
        ]));
        assert_eq!(build_graph(&records)[0].requires, ["the-first-step"]);
    }

    #[test]
    fn non_list_requirements_yield_an_empty_list() {
        let records = normalize(&json!([
            {"id": "a", "requires": {"odd": "shape"}},
            {"id": "b", "requires": 7},
        ]));
        let graph = build_graph(&records);
        assert!(graph[0].requires.is_empty());
        assert!(graph[1].requires.is_empty());
    }

    #[test]
    fn non_string_requirement_entries_use_their_display_form() {
        let records = normalize(&json!([
            {"id": "a", "requires": [3, "b"]},
        ]));
        assert_eq!(build_graph(&records)[0].requires, ["3", "b"]);
    }

    #[test]
    fn dangling_references_are_kept() {
        let records = normalize(&json!([
            {"id": "late-game", "requires": ["cut-content", "intro"]},
            {"id": "intro", "type": "quest"},
        ]));
        let graph = build_graph(&records);
        assert_eq!(graph[0].requires, ["cut-content", "intro"]);
    }

    #[test]
    fn cycles_are_kept() {
        let records = normalize(&json!([
            {"id": "a", "requires": ["b"]},
            {"id": "b", "requires": ["a"]},
        ]));
        let graph = build_graph(&records);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph[0].requires, ["b"]);
        assert_eq!(graph[1].requires, ["a"]);
    }

    #[test]
    fn graph_preserves_input_order() {
        let records = normalize(&json!({
            "z": {"type": "quest"},
            "a": {"type": "quest"},
            "m": {"type": "quest"},
        }));
        let ids: Vec<String> = build_graph(&records).into_iter().map(|n| n.id).collect();
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[test]
    fn node_keeps_its_source_record() {
        let records = normalize(&json!([
            {"id": "a", "type": "quest", "reward": "500 gold"},
        ]));
        let graph = build_graph(&records);
        assert_eq!(graph[0].source.get("reward"), Some(&json!("500 gold")));
    }

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("The Long Walk!"), "the-long-walk");
        assert_eq!(slugify("  A__B  "), "a-b");
        assert_eq!(slugify("Café au Lait"), "caf-au-lait");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("already-good"), "already-good");
    }
}
