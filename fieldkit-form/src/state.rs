//! FormState — the editable value container for one entity instance.
//!
//! Holds the same two top-level buckets for every entity kind: a
//! `customFields` map for non-translatable values and one translation entry
//! per *touched* language. Routing between the two is decided by the field
//! definition's translatable flag, never by the caller.
//!
//! All writes go through `&mut self` at call time; nothing hands out setter
//! closures over a snapshot, so rapid edits to different fields cannot lose
//! updates.

use fieldkit_schema::FieldDef;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Custom-field values for one language. Entries exist only for languages
/// that have been touched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub language_code: String,
    #[serde(default)]
    pub custom_fields: Map<String, Value>,
}

/// In-memory edit state for one entity instance.
///
/// Created empty for a new entity or populated from a fetch; mutated only
/// through [`set_value`](FormState::set_value); discarded on editor close
/// unless a save succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(default)]
    pub custom_fields: Map<String, Value>,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate from a fetch response's `customFields` / `translations`
    /// values. Non-object / non-array shapes are treated as absent.
    pub fn from_fetched(custom_fields: Option<&Value>, translations: Option<&Value>) -> Self {
        let custom_fields = custom_fields
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let translations = translations
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| {
                        serde_json::from_value::<Translation>(entry.clone()).ok()
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            custom_fields,
            translations,
        }
    }

    /// Read a field's current value under the active language.
    ///
    /// Translatable fields read through the matching translation entry (or
    /// nothing, if that language has not been touched); all other fields
    /// read through the top-level map.
    pub fn value_of(&self, field: &FieldDef, language: &str) -> Option<&Value> {
        if field.translatable() {
            self.translations
                .iter()
                .find(|t| t.language_code == language)
                .and_then(|t| t.custom_fields.get(&field.name))
        } else {
            self.custom_fields.get(&field.name)
        }
    }

    /// Write a field's value under the active language.
    ///
    /// `None` removes the key (clearing a single value); list fields are
    /// replaced wholesale — widgets that add or remove one element read the
    /// current sequence, splice, and write the full new sequence back.
    ///
    /// Writing a translatable field for a language with no entry yet creates
    /// the entry, copying nothing from other languages: each language's
    /// values are independent.
    pub fn set_value(&mut self, field: &FieldDef, language: &str, value: Option<Value>) {
        if field.readonly {
            debug!(field = %field.name, "ignoring write to readonly field");
            return;
        }

        let bucket = if field.translatable() {
            &mut self.translation_entry(language).custom_fields
        } else {
            &mut self.custom_fields
        };

        match value {
            Some(value) => {
                bucket.insert(field.name.clone(), value);
            }
            None => {
                bucket.remove(&field.name);
            }
        }
    }

    /// The translation entry for a language, created on first touch.
    fn translation_entry(&mut self, language: &str) -> &mut Translation {
        if let Some(i) = self
            .translations
            .iter()
            .position(|t| t.language_code == language)
        {
            return &mut self.translations[i];
        }
        self.translations.push(Translation {
            language_code: language.to_string(),
            custom_fields: Map::new(),
        });
        self.translations.last_mut().expect("just pushed")
    }

    /// Languages that have been touched, in touch order.
    pub fn touched_languages(&self) -> impl Iterator<Item = &str> {
        self.translations.iter().map(|t| t.language_code.as_str())
    }

    /// Whether any value has been materialized at all.
    pub fn is_empty(&self) -> bool {
        self.custom_fields.is_empty() && self.translations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldkit_schema::FieldKind;
    use serde_json::json;

    fn scalar(name: &str) -> FieldDef {
        FieldDef::new(name, FieldKind::String)
    }

    fn translatable(name: &str) -> FieldDef {
        FieldDef::new(name, FieldKind::LocaleString)
    }

    #[test]
    fn scalar_values_live_in_the_top_level_map() {
        let mut state = FormState::new();
        let field = scalar("notes");

        state.set_value(&field, "en", Some(json!("hello")));
        assert_eq!(state.value_of(&field, "en"), Some(&json!("hello")));
        // Language is irrelevant for non-translatable fields.
        assert_eq!(state.value_of(&field, "de"), Some(&json!("hello")));
        assert!(state.translations.is_empty());
    }

    #[test]
    fn translatable_values_live_under_their_language() {
        let mut state = FormState::new();
        let field = translatable("tagline");

        state.set_value(&field, "en", Some(json!("hello")));
        assert_eq!(state.value_of(&field, "en"), Some(&json!("hello")));
        assert_eq!(state.value_of(&field, "de"), None);
        assert_eq!(state.touched_languages().collect::<Vec<_>>(), ["en"]);
    }

    #[test]
    fn writing_one_language_does_not_touch_another() {
        let mut state = FormState::new();
        let field = translatable("tagline");

        state.set_value(&field, "en", Some(json!("hello")));
        state.set_value(&field, "de", Some(json!("hallo")));
        state.set_value(&field, "en", Some(json!("hi")));

        assert_eq!(state.value_of(&field, "en"), Some(&json!("hi")));
        assert_eq!(state.value_of(&field, "de"), Some(&json!("hallo")));
    }

    #[test]
    fn new_language_entry_copies_nothing() {
        let mut state = FormState::new();
        let tagline = translatable("tagline");
        let slogan = translatable("slogan");

        state.set_value(&tagline, "en", Some(json!("hello")));
        state.set_value(&slogan, "en", Some(json!("buy now")));
        state.set_value(&tagline, "de", Some(json!("hallo")));

        let de = state
            .translations
            .iter()
            .find(|t| t.language_code == "de")
            .unwrap();
        assert_eq!(de.custom_fields.len(), 1);
        assert!(!de.custom_fields.contains_key("slogan"));
    }

    #[test]
    fn none_clears_a_value() {
        let mut state = FormState::new();
        let field = scalar("notes");

        state.set_value(&field, "en", Some(json!("hello")));
        state.set_value(&field, "en", None);
        assert_eq!(state.value_of(&field, "en"), None);
        assert!(!state.custom_fields.contains_key("notes"));
    }

    #[test]
    fn list_values_replace_wholesale() {
        let mut state = FormState::new();
        let field = FieldDef::new("tags", FieldKind::Relation { entity: "facetValue".into() })
            .with_list();

        state.set_value(&field, "en", Some(json!([{"id": "t1"}])));
        // Widget splices locally and writes the full sequence back.
        let mut current = state
            .value_of(&field, "en")
            .and_then(Value::as_array)
            .cloned()
            .unwrap();
        current.push(json!({"id": "t2"}));
        state.set_value(&field, "en", Some(Value::Array(current)));

        assert_eq!(
            state.value_of(&field, "en"),
            Some(&json!([{"id": "t1"}, {"id": "t2"}]))
        );

        // Clearing a list is an empty sequence, not a removed key.
        state.set_value(&field, "en", Some(json!([])));
        assert_eq!(state.value_of(&field, "en"), Some(&json!([])));
    }

    #[test]
    fn readonly_writes_are_ignored() {
        let mut state = FormState::new();
        let field = scalar("computedScore").with_readonly();

        state.set_value(&field, "en", Some(json!(42)));
        assert_eq!(state.value_of(&field, "en"), None);
    }

    #[test]
    fn from_fetched_populates_both_buckets() {
        let state = FormState::from_fetched(
            Some(&json!({"weight": 2.5, "supplier": {"id": "s1", "name": "Acme"}})),
            Some(&json!([
                {"languageCode": "en", "customFields": {"tagline": "hello"}},
                {"languageCode": "de", "customFields": {"tagline": "hallo"}}
            ])),
        );

        assert_eq!(state.custom_fields.get("weight"), Some(&json!(2.5)));
        assert_eq!(state.translations.len(), 2);
        assert_eq!(
            state.value_of(&translatable("tagline"), "de"),
            Some(&json!("hallo"))
        );
    }

    #[test]
    fn from_fetched_tolerates_absent_shapes() {
        let state = FormState::from_fetched(None, None);
        assert!(state.is_empty());

        let state = FormState::from_fetched(Some(&json!(null)), Some(&json!(null)));
        assert!(state.is_empty());
    }

    #[test]
    fn wire_round_trip() {
        let mut state = FormState::new();
        state.set_value(&scalar("notes"), "en", Some(json!("hi")));
        state.set_value(&translatable("tagline"), "de", Some(json!("hallo")));

        let wire = serde_json::to_value(&state).unwrap();
        assert_eq!(wire["customFields"]["notes"], "hi");
        assert_eq!(wire["translations"][0]["languageCode"], "de");

        let parsed: FormState = serde_json::from_value(wire).unwrap();
        assert_eq!(parsed, state);
    }
}
