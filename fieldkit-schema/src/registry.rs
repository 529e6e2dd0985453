//! SchemaRegistry — per-entity lookup over server-published field definitions.
//!
//! The server exposes one entry per entity kind listing its configured custom
//! fields. The registry parses those entries once, indexes them by entity
//! name, and hands out read-only slices. It is shared by every open editor
//! and never mutated after construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SchemaError};
use crate::types::FieldDef;

/// One server-config entry: an entity kind and its custom fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EntityFields {
    #[serde(rename = "entityName")]
    pub entity: String,
    #[serde(default)]
    pub custom_fields: Vec<FieldDef>,
}

/// Read-only registry of custom-field definitions, looked up by entity name.
///
/// Entity names are matched with first-letter case normalization: the server
/// publishes `Product` while queries and mutations use `product`, and both
/// must resolve to the same entry.
pub struct SchemaRegistry {
    entries: Vec<EntityFields>,
    index: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Build a registry from parsed entries.
    ///
    /// Duplicate field names within one entity entry are a config error;
    /// duplicate entity entries keep the first and skip the rest with a
    /// warning, since a half-merged entity schema is worse than a stale one.
    pub fn new(entries: Vec<EntityFields>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let mut seen: Vec<&str> = Vec::with_capacity(entry.custom_fields.len());
            for field in &entry.custom_fields {
                if seen.contains(&field.name.as_str()) {
                    return Err(SchemaError::DuplicateField {
                        entity: entry.entity.clone(),
                        field: field.name.clone(),
                    });
                }
                seen.push(&field.name);
            }

            let key = normalize_entity(&entry.entity);
            if index.contains_key(&key) {
                warn!(entity = %entry.entity, "skipping duplicate entity entry");
                continue;
            }
            index.insert(key, i);
        }

        debug!(
            entities = entries.len(),
            fields = entries.iter().map(|e| e.custom_fields.len()).sum::<usize>(),
            "schema registry built"
        );

        Ok(Self { entries, index })
    }

    /// Parse the server-config wire shape: a JSON array of
    /// `{entityName, customFields}` objects.
    pub fn from_json(config: &str) -> Result<Self> {
        let entries: Vec<EntityFields> = serde_json::from_str(config)?;
        Self::new(entries)
    }

    /// Custom fields configured for an entity, in server order.
    /// Unknown entities get an empty slice — absence is not an error here.
    pub fn fields_for(&self, entity: &str) -> &[FieldDef] {
        self.index
            .get(&normalize_entity(entity))
            .map(|&i| self.entries[i].custom_fields.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the registry has an entry for the entity at all.
    pub fn has_entity(&self, entity: &str) -> bool {
        self.index.contains_key(&normalize_entity(entity))
    }

    /// All entries, in server order.
    pub fn entries(&self) -> &[EntityFields] {
        &self.entries
    }
}

/// Lowercase the first letter so `Product` and `product` share an index key.
/// Queries, mutations, and the server config all name entities with only
/// this casing difference, so every lookup table in the stack uses it.
pub fn normalize_entity(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldKind;

    fn sample_registry() -> SchemaRegistry {
        SchemaRegistry::new(vec![
            EntityFields {
                entity: "Product".into(),
                custom_fields: vec![
                    FieldDef::new("supplier", FieldKind::Relation { entity: "product".into() }),
                    FieldDef::new("weight", FieldKind::Float),
                ],
            },
            EntityFields {
                entity: "Facet".into(),
                custom_fields: vec![FieldDef::new("isPrivate", FieldKind::Boolean)],
            },
        ])
        .unwrap()
    }

    #[test]
    fn lookup_normalizes_first_letter() {
        let registry = sample_registry();
        assert_eq!(registry.fields_for("product").len(), 2);
        assert_eq!(registry.fields_for("Product").len(), 2);
        assert_eq!(registry.fields_for("facet").len(), 1);
        assert!(registry.has_entity("facet"));
    }

    #[test]
    fn unknown_entity_is_empty_not_error() {
        let registry = sample_registry();
        assert!(registry.fields_for("orderLine").is_empty());
        assert!(!registry.has_entity("orderLine"));
    }

    #[test]
    fn duplicate_field_name_rejected() {
        let result = SchemaRegistry::new(vec![EntityFields {
            entity: "product".into(),
            custom_fields: vec![
                FieldDef::new("weight", FieldKind::Float),
                FieldDef::new("weight", FieldKind::Int),
            ],
        }]);
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateField { ref entity, ref field })
                if entity == "product" && field == "weight"
        ));
    }

    #[test]
    fn duplicate_entity_keeps_first() {
        let registry = SchemaRegistry::new(vec![
            EntityFields {
                entity: "product".into(),
                custom_fields: vec![FieldDef::new("weight", FieldKind::Float)],
            },
            EntityFields {
                entity: "Product".into(),
                custom_fields: vec![],
            },
        ])
        .unwrap();
        assert_eq!(registry.fields_for("product").len(), 1);
    }

    #[test]
    fn from_json_parses_server_config() {
        let config = r#"[
            {
                "entityName": "Product",
                "customFields": [
                    {"name": "supplier", "kind": "relation", "entity": "product"},
                    {"name": "tags", "kind": "relation", "entity": "facetValue", "list": true},
                    {"name": "launchedAt", "kind": "dateTime"},
                    {"name": "fancy", "kind": "struct"}
                ]
            }
        ]"#;
        let registry = SchemaRegistry::from_json(config).unwrap();
        let fields = registry.fields_for("product");
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0].relation_entity(), Some("product"));
        assert!(fields[1].list);
        assert_eq!(fields[3].kind, FieldKind::Unknown);
    }

    #[test]
    fn fields_preserve_server_order() {
        let registry = sample_registry();
        let names: Vec<_> = registry
            .fields_for("product")
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["supplier", "weight"]);
    }
}
