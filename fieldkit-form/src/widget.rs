//! Widget descriptors.
//!
//! A widget is the headless description of the input component responsible
//! for one field. Presentation layers match on this enum to pick a concrete
//! control; this crate only decides *which* control, never draws it.

use serde::{Deserialize, Serialize};

/// The input widget selected for a field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "widget", rename_all = "kebab-case")]
pub enum Widget {
    /// Boolean toggle.
    Checkbox,
    /// Single-line text input.
    TextInput,
    /// Multi-line text input.
    TextArea,
    /// Numeric input for int and float fields.
    NumberInput,
    /// List-of-numerics input for `list` int and float fields.
    NumberListInput,
    /// Date-time picker; values stay ISO-8601 strings on the wire.
    DateTimePicker,
    /// Picker for a related entity (or list of them).
    RelationPicker { entity: String, list: bool },
    /// Caller-registered override, produced by the widget registry.
    Custom { component: String },
    /// Inert "not implemented" placeholder for kinds with no built-in and
    /// no override. Rendering this is the degrade-gracefully path — an
    /// unrecognized kind must not break the whole form.
    Placeholder { kind: String },
}
