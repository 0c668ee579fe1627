//! Semantic section classification.
//!
//! A record's fields are sorted into up to four display sections: identity
//! basics, a stat table, crafting requirements, and drop/spawn locations.
//! Every section is recovered by scanning a fixed candidate-key list in
//! priority order, so two records using different vocabulary for the same
//! concept ("recipe" vs "materials") classify the same way. Classification
//! is pure: the same record always yields the same bundle.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::record::Record;
use crate::value::display_string;

/// Fixed identity fields of the basic section, in display order.
const BASIC_FIELDS: &[&str] = &[
    "_key", "id", "name", "title", "type", "category", "rarity", "tier", "level",
];

/// Candidate keys for the stat table, in priority order.
const STAT_KEYS: &[&str] = &["stats", "attributes", "properties", "modifiers", "statList"];

/// Candidate keys for crafting requirements, in priority order.
const BLUEPRINT_KEYS: &[&str] = &[
    "blueprint",
    "recipe",
    "ingredients",
    "materials",
    "requires",
    "requirements",
    "components",
];

/// Candidate keys for drop/spawn locations, in priority order.
const LOCATION_KEYS: &[&str] = &[
    "drops",
    "locations",
    "spawnLocations",
    "spawn",
    "foundIn",
    "droppedBy",
    "loot",
    "lootTable",
    "dropLocations",
];

/// Name fields tried for a mapping-shaped ingredient, in priority order.
const INGREDIENT_NAME_KEYS: &[&str] = &["name", "id", "item"];

/// Quantity fields tried for a mapping-shaped ingredient, in priority order.
const INGREDIENT_QTY_KEYS: &[&str] = &["qty", "count", "quantity", "q", "amount"];

/// The identity section: present basic fields in fixed order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicInfo {
    /// `(field, value)` pairs, in [`BASIC_FIELDS`] order.
    pub fields: Vec<(String, Value)>,
}

/// The stat section: stat name to value, insertion-ordered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatTable {
    pub entries: Map<String, Value>,
}

/// One crafting requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    /// Display form of the quantity, when one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
}

/// The crafting section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Blueprint {
    /// The candidate key the requirements were found under.
    pub source_key: String,
    pub ingredients: Vec<Ingredient>,
}

/// The locations section: raw drop/spawn entries, kept untyped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Locations {
    /// The candidate key the entries were found under.
    pub source_key: String,
    pub entries: Vec<Value>,
}

/// All sections recovered from one record, each at most once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SectionBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basic: Option<BasicInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blueprint: Option<Blueprint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Locations>,
}

/// Classify a record into its section bundle.
pub fn classify(record: &Record) -> SectionBundle {
    SectionBundle {
        basic: basic_info(record),
        stats: stat_table(record),
        blueprint: blueprint(record),
        locations: locations(record),
    }
}

/// Collect the present basic fields. An empty collection means no section.
fn basic_info(record: &Record) -> Option<BasicInfo> {
    let fields: Vec<(String, Value)> = BASIC_FIELDS
        .iter()
        .filter_map(|field| {
            record
                .resolve(field)
                .map(|value| ((*field).to_string(), value.clone()))
        })
        .collect();
    if fields.is_empty() {
        return None;
    }
    Some(BasicInfo { fields })
}

/// Find the stat table: the first container-valued stat candidate, else
/// every top-level numeric field.
fn stat_table(record: &Record) -> Option<StatTable> {
    let source = STAT_KEYS.iter().find_map(|key| {
        record
            .resolve(key)
            .filter(|value| value.is_object() || value.is_array())
    });
    let entries = match source {
        Some(Value::Object(entries)) => entries.clone(),
        Some(Value::Array(elements)) => entries_from_sequence(elements),
        _ => numeric_fields(record),
    };
    if entries.is_empty() {
        return None;
    }
    Some(StatTable { entries })
}

/// Fold a stat sequence into named entries. Mapping elements prefer their
/// `name`/`value` pair when both are present, else their first field; other
/// elements are skipped.
fn entries_from_sequence(elements: &[Value]) -> Map<String, Value> {
    let mut entries = Map::new();
    for element in elements {
        let fields = match element.as_object() {
            Some(fields) => fields,
            None => continue,
        };
        if let (Some(name), Some(value)) = (fields.get("name"), fields.get("value")) {
            entries.insert(display_string(name), value.clone());
        } else if let Some((key, value)) = fields.iter().next() {
            entries.insert(key.clone(), value.clone());
        }
    }
    entries
}

/// Fallback stat source: every top-level numeric field, in field order.
fn numeric_fields(record: &Record) -> Map<String, Value> {
    record
        .fields()
        .iter()
        .filter(|(_, value)| value.is_number())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Find the crafting section under the first container-valued blueprint
/// candidate.
fn blueprint(record: &Record) -> Option<Blueprint> {
    for key in BLUEPRINT_KEYS {
        let ingredients = match record.resolve(key) {
            Some(Value::Array(elements)) => {
                elements.iter().filter_map(ingredient_from).collect()
            }
            Some(Value::Object(entries)) => entries
                .iter()
                .map(|(name, quantity)| Ingredient {
                    name: name.clone(),
                    quantity: Some(display_string(quantity)),
                })
                .collect(),
            _ => continue,
        };
        return Some(Blueprint {
            source_key: (*key).to_string(),
            ingredients,
        });
    }
    None
}

/// Normalize one requirement element. Mapping elements need a derivable
/// name; anything else becomes a quantity-less ingredient under its display
/// form.
fn ingredient_from(element: &Value) -> Option<Ingredient> {
    let fields = match element.as_object() {
        Some(fields) => fields,
        None => {
            return Some(Ingredient {
                name: display_string(element),
                quantity: None,
            });
        }
    };
    let name = INGREDIENT_NAME_KEYS
        .iter()
        .find_map(|key| fields.get(*key))
        .map(display_string)
        .or_else(|| fields.keys().next().cloned())?;
    let quantity = INGREDIENT_QTY_KEYS
        .iter()
        .find_map(|key| fields.get(*key))
        .map(display_string);
    Some(Ingredient { name, quantity })
}

/// Find the locations section under the first present location candidate,
/// whatever its type. Non-sequence values become a single entry.
fn locations(record: &Record) -> Option<Locations> {
    for key in LOCATION_KEYS {
        let value = match record.resolve(key) {
            Some(value) => value,
            None => continue,
        };
        let entries = match value {
            Value::Array(elements) => elements.clone(),
            single => vec![single.clone()],
        };
        return Some(Locations {
            source_key: (*key).to_string(),
            entries,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::normalize;
    use serde_json::json;

    fn first_record(root: serde_json::Value) -> Record {
        normalize(&json!([root])).remove(0)
    }

    #[test]
    fn basic_section_keeps_fixed_order() {
        let record = first_record(json!({
            "level": 12, "name": "Rusty Sword", "rarity": "common", "id": "rs-1",
        }));
        let basic = classify(&record).basic.expect("basic section");
        let order: Vec<&str> = basic.fields.iter().map(|(field, _)| field.as_str()).collect();
        assert_eq!(order, ["id", "name", "rarity", "level"]);
    }

    #[test]
    fn record_with_no_basic_fields_has_no_basic_section() {
        let record = first_record(json!({"damage": 7, "weight": 3}));
        assert!(classify(&record).basic.is_none());
    }

    #[test]
    fn mapping_stats_are_taken_as_is() {
        let record = first_record(json!({
            "name": "Sword",
            "stats": {"damage": 7, "speed": "fast"},
        }));
        let stats = classify(&record).stats.expect("stat table");
        assert_eq!(stats.entries.get("damage"), Some(&json!(7)));
        assert_eq!(stats.entries.get("speed"), Some(&json!("fast")));
    }

    #[test]
    fn stat_candidates_are_tried_in_order() {
        let record = first_record(json!({
            "attributes": {"from-attributes": 1},
            "stats": {"from-stats": 2},
        }));
        let stats = classify(&record).stats.expect("stat table");
        assert!(stats.entries.contains_key("from-stats"));
        assert!(!stats.entries.contains_key("from-attributes"));
    }

    #[test]
    fn scalar_stat_candidates_are_skipped() {
        let record = first_record(json!({
            "stats": "n/a",
            "attributes": {"armor": 5},
        }));
        let stats = classify(&record).stats.expect("stat table");
        assert_eq!(stats.entries.get("armor"), Some(&json!(5)));
    }

    #[test]
    fn stat_sequences_fold_into_named_entries() {
        let record = first_record(json!({
            "statList": [
                {"name": "damage", "value": 7},
                {"armor": 3},
                "loose scalar",
                {"name": "incomplete"},
            ],
        }));
        let stats = classify(&record).stats.expect("stat table");
        assert_eq!(stats.entries.get("damage"), Some(&json!(7)));
        assert_eq!(stats.entries.get("armor"), Some(&json!(3)));
        // The incomplete pair falls back to its first field.
        assert_eq!(stats.entries.get("name"), Some(&json!("incomplete")));
        assert_eq!(stats.entries.len(), 3);
    }

    #[test]
    fn numeric_fields_are_the_stat_fallback() {
        let record = first_record(json!({
            "name": "Sword", "damage": 7, "weight": 3.5, "cursed": true,
        }));
        let stats = classify(&record).stats.expect("stat table");
        assert_eq!(stats.entries.len(), 2);
        assert_eq!(stats.entries.get("damage"), Some(&json!(7)));
        assert_eq!(stats.entries.get("weight"), Some(&json!(3.5)));
    }

    #[test]
    fn record_with_no_stats_has_no_stat_section() {
        let record = first_record(json!({"name": "Sword", "type": "weapon"}));
        assert!(classify(&record).stats.is_none());

        let empty = first_record(json!({"name": "Sword", "stats": {}}));
        assert!(classify(&empty).stats.is_none());
    }

    #[test]
    fn blueprint_sequence_of_strings() {
        let record = first_record(json!({
            "recipe": ["iron ingot", "leather strap"],
        }));
        let blueprint = classify(&record).blueprint.expect("blueprint");
        assert_eq!(blueprint.source_key, "recipe");
        assert_eq!(blueprint.ingredients.len(), 2);
        assert_eq!(blueprint.ingredients[0].name, "iron ingot");
        assert_eq!(blueprint.ingredients[0].quantity, None);
    }

    #[test]
    fn blueprint_sequence_of_mappings() {
        let record = first_record(json!({
            "materials": [
                {"name": "Iron Ingot", "qty": 3},
                {"id": "strap", "count": 1},
                {"item": "Gem", "amount": "2x"},
            ],
        }));
        let blueprint = classify(&record).blueprint.expect("blueprint");
        assert_eq!(blueprint.source_key, "materials");
        assert_eq!(blueprint.ingredients[0].name, "Iron Ingot");
        assert_eq!(blueprint.ingredients[0].quantity.as_deref(), Some("3"));
        assert_eq!(blueprint.ingredients[1].name, "strap");
        assert_eq!(blueprint.ingredients[1].quantity.as_deref(), Some("1"));
        assert_eq!(blueprint.ingredients[2].name, "Gem");
        assert_eq!(blueprint.ingredients[2].quantity.as_deref(), Some("2x"));
    }

    #[test]
    fn blueprint_mapping_reads_name_to_quantity() {
        let record = first_record(json!({
            "requirements": {"iron": 3, "wood": 1},
        }));
        let blueprint = classify(&record).blueprint.expect("blueprint");
        assert_eq!(blueprint.source_key, "requirements");
        assert_eq!(blueprint.ingredients[0].name, "iron");
        assert_eq!(blueprint.ingredients[0].quantity.as_deref(), Some("3"));
        assert_eq!(blueprint.ingredients[1].name, "wood");
        assert_eq!(blueprint.ingredients[1].quantity.as_deref(), Some("1"));
    }

    #[test]
    fn mapping_ingredient_falls_back_to_its_first_key() {
        let record = first_record(json!({
            "ingredients": [{"essence": 5, "note": "rare"}],
        }));
        let blueprint = classify(&record).blueprint.expect("blueprint");
        assert_eq!(blueprint.ingredients[0].name, "essence");
        assert_eq!(blueprint.ingredients[0].quantity, None);
    }

    #[test]
    fn nameless_mapping_ingredients_are_dropped() {
        let record = first_record(json!({
            "ingredients": [{}, {"name": "Kept"}],
        }));
        let blueprint = classify(&record).blueprint.expect("blueprint");
        assert_eq!(blueprint.ingredients.len(), 1);
        assert_eq!(blueprint.ingredients[0].name, "Kept");
    }

    #[test]
    fn scalar_blueprint_candidates_are_skipped() {
        // `requires` holds a scalar here, so `components` wins.
        let record = first_record(json!({
            "requires": "smithing level 5",
            "components": ["iron"],
        }));
        let blueprint = classify(&record).blueprint.expect("blueprint");
        assert_eq!(blueprint.source_key, "components");
    }

    #[test]
    fn empty_blueprint_container_still_classifies() {
        let record = first_record(json!({"recipe": []}));
        let blueprint = classify(&record).blueprint.expect("blueprint");
        assert_eq!(blueprint.source_key, "recipe");
        assert!(blueprint.ingredients.is_empty());
    }

    #[test]
    fn locations_sequence_is_kept_element_wise() {
        let record = first_record(json!({
            "drops": [{"map": "dam"}, "roaming packs"],
        }));
        let locations = classify(&record).locations.expect("locations");
        assert_eq!(locations.source_key, "drops");
        assert_eq!(locations.entries.len(), 2);
        assert_eq!(locations.entries[1], json!("roaming packs"));
    }

    #[test]
    fn single_location_value_becomes_one_entry() {
        let record = first_record(json!({"foundIn": "Blue Gate"}));
        let locations = classify(&record).locations.expect("locations");
        assert_eq!(locations.source_key, "foundIn");
        assert_eq!(locations.entries, vec![json!("Blue Gate")]);
    }

    #[test]
    fn location_candidates_accept_any_present_type() {
        let record = first_record(json!({"drops": null, "locations": ["ignored"]}));
        let locations = classify(&record).locations.expect("locations");
        assert_eq!(locations.source_key, "drops");
        assert_eq!(locations.entries, vec![serde_json::Value::Null]);
    }

    #[test]
    fn classification_is_pure() {
        let record = first_record(json!({
            "name": "Sword", "stats": {"damage": 7},
            "recipe": ["iron"], "drops": ["dam"],
        }));
        assert_eq!(classify(&record), classify(&record));
    }

    #[test]
    fn plain_record_yields_an_empty_bundle() {
        let record = first_record(json!({"description": "flavor text"}));
        let bundle = classify(&record);
        assert!(bundle.basic.is_none());
        assert!(bundle.stats.is_none());
        assert!(bundle.blueprint.is_none());
        assert!(bundle.locations.is_none());
    }
}
