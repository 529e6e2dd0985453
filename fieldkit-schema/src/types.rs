//! Core custom-field definition types.
//!
//! All types serialize to/from JSON via serde, matching the shape the server
//! publishes in its config endpoint (`entityCustomFields`). A field
//! definition describes one named, typed attribute of one entity kind.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The kind of a custom field — determines what shape the value takes and
/// which built-in widget edits it.
///
/// The server is free to add kinds this build has never heard of; those
/// deserialize as [`FieldKind::Unknown`] and render as an inert placeholder
/// rather than failing the whole form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldKind {
    Boolean,
    Int,
    Float,
    String,
    /// Per-language string value, stored under the entity's translations.
    LocaleString,
    /// Multi-line text.
    Text,
    /// Per-language multi-line text.
    LocaleText,
    /// ISO-8601 timestamp carried as a string on the wire.
    DateTime,
    /// Reference (or list of references) to another entity, persisted as
    /// bare id(s) but displayed with denormalized preview attributes.
    Relation { entity: String },
    /// Catch-all for kinds added server-side after this build shipped.
    #[serde(other)]
    Unknown,
}

impl FieldKind {
    /// Wire tag for this kind, used in placeholder labels and logs.
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::Boolean => "boolean",
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::String => "string",
            FieldKind::LocaleString => "localeString",
            FieldKind::Text => "text",
            FieldKind::LocaleText => "localeText",
            FieldKind::DateTime => "dateTime",
            FieldKind::Relation { .. } => "relation",
            FieldKind::Unknown => "unknown",
        }
    }
}

/// Free-form UI hints attached to a field definition.
///
/// `tab` and `component` are the two keys this engine recognizes; everything
/// else is preserved in `extra` for presentation layers that want it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UiHints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A custom-field definition — the complete schema for one named attribute
/// of one entity kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Is this field an array of its base kind?
    #[serde(default)]
    pub list: bool,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<UiHints>,
}

impl FieldDef {
    /// Minimal definition: a non-list, writable field of the given kind.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            list: false,
            readonly: false,
            label: None,
            description: None,
            ui: None,
        }
    }

    /// Mark the field as a list of its base kind.
    pub fn with_list(mut self) -> Self {
        self.list = true;
        self
    }

    /// Mark the field as read-only.
    pub fn with_readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the UI hints.
    pub fn with_ui(mut self, ui: UiHints) -> Self {
        self.ui = Some(ui);
        self
    }

    /// Whether values of this field vary per language. Derived from the
    /// kind: only `localeString` and `localeText` are translatable.
    pub fn translatable(&self) -> bool {
        matches!(self.kind, FieldKind::LocaleString | FieldKind::LocaleText)
    }

    /// The relation target entity name, present iff the kind is `relation`.
    pub fn relation_entity(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Relation { entity } => Some(entity),
            _ => None,
        }
    }

    /// The tab this field renders under, if a hint was provided.
    pub fn ui_tab(&self) -> Option<&str> {
        self.ui.as_ref().and_then(|ui| ui.tab.as_deref())
    }

    /// The caller-registered widget override name, if a hint was provided.
    pub fn ui_component(&self) -> Option<&str> {
        self.ui.as_ref().and_then(|ui| ui.component.as_deref())
    }
}
