//! FieldBinding — the per-field context handed to a widget.
//!
//! A widget gets exactly one field's routing decision: its definition, a
//! label, a description, and read/write access scoped to that field under
//! the active language. It never sees the aggregate state shape, and the
//! binding holds no value snapshot — reads and writes hit the live
//! [`FormState`] at call time.

use fieldkit_schema::{FieldDef, RelationValue};
use serde_json::Value;

use crate::state::FormState;

/// Read/write access to one field for one active language.
#[derive(Debug, Clone, Copy)]
pub struct FieldBinding<'a> {
    pub field: &'a FieldDef,
    pub language: &'a str,
}

impl<'a> FieldBinding<'a> {
    pub fn new(field: &'a FieldDef, language: &'a str) -> Self {
        Self { field, language }
    }

    /// Display label: the explicit label when configured, the field name
    /// otherwise.
    pub fn label(&self) -> &str {
        self.field.label.as_deref().unwrap_or(&self.field.name)
    }

    pub fn description(&self) -> Option<&str> {
        self.field.description.as_deref()
    }

    /// The field's current value under the active language.
    pub fn value<'s>(&self, state: &'s FormState) -> Option<&'s Value> {
        state.value_of(self.field, self.language)
    }

    /// Write the field's value. `None` clears a single value; clearing a
    /// list is `Some(json!([]))`.
    pub fn set(&self, state: &mut FormState, value: Option<Value>) {
        state.set_value(self.field, self.language, value);
    }

    /// Write a single relation selection. Clearing is `set_relation(state,
    /// None)`.
    pub fn set_relation(&self, state: &mut FormState, value: Option<&RelationValue>) {
        let value = value.map(|v| serde_json::to_value(v).expect("relation value serializes"));
        self.set(state, value);
    }

    /// Replace the whole relation list.
    pub fn set_relations(&self, state: &mut FormState, values: &[RelationValue]) {
        let value = serde_json::to_value(values).expect("relation values serialize");
        self.set(state, Some(value));
    }

    /// The current relation selection(s), deserialized for picker display.
    pub fn relations(&self, state: &FormState) -> Vec<RelationValue> {
        match self.value(state) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            Some(value) => serde_json::from_value(value.clone())
                .map(|v| vec![v])
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }
}
