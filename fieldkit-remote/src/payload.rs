//! Wire-shape preparation for save payloads.
//!
//! The one mandatory transformation between the UI representation and the
//! wire representation: relation values are edited as preview snapshots but
//! persisted as bare foreign keys. Everything else passes through unchanged,
//! translations included (they are already wire-shaped).

use fieldkit_schema::FieldDef;
use serde_json::{Map, Value};
use tracing::warn;

/// Rewrite relation keys to their foreign-key wire shape.
///
/// For every key the schema marks as a relation field, the key is renamed to
/// `<stem>Id` (single) or `<stem>Ids` (list) and the value replaced with the
/// snapshot's `.id` / the list of ids. The stem for a list field drops one
/// trailing `s` from the field name, so `supplier` → `supplierId` and
/// `tags` → `tagIds`. Non-relation keys pass through unchanged.
pub fn prepare_custom_fields(
    custom_fields: &Map<String, Value>,
    fields: &[FieldDef],
) -> Map<String, Value> {
    let mut prepared = Map::with_capacity(custom_fields.len());

    for (name, value) in custom_fields {
        let Some(field) = fields
            .iter()
            .find(|f| &f.name == name && f.relation_entity().is_some())
        else {
            prepared.insert(name.clone(), value.clone());
            continue;
        };

        if field.list {
            let ids: Vec<Value> = value
                .as_array()
                .map(|items| items.iter().filter_map(extract_id).collect())
                .unwrap_or_default();
            prepared.insert(format!("{}Ids", list_stem(name)), Value::Array(ids));
        } else {
            match extract_id(value) {
                Some(id) => {
                    prepared.insert(format!("{name}Id"), id);
                }
                None => {
                    // Cleared single relation persists as an explicit null.
                    prepared.insert(format!("{name}Id"), Value::Null);
                }
            }
        }
    }

    prepared
}

/// The id carried by a relation snapshot, whether the value is the full
/// object or already a bare id string.
fn extract_id(value: &Value) -> Option<Value> {
    match value {
        Value::Object(map) => map.get("id").cloned(),
        Value::String(_) => Some(value.clone()),
        Value::Null => None,
        other => {
            warn!(?other, "relation value has no id, dropping from payload");
            None
        }
    }
}

/// Singular stem for a list field's wire key: drop one trailing `s`.
fn list_stem(name: &str) -> &str {
    name.strip_suffix('s').unwrap_or(name)
}
