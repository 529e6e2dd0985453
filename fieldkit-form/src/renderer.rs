//! Field renderer / dispatcher.
//!
//! Pure transformation from a field-definition list to tab-grouped widget
//! descriptors. No side effects, no error path: an override wins when
//! registered, a built-in is selected from the kind otherwise, and anything
//! left over degrades to a placeholder.

use fieldkit_schema::{FieldDef, FieldKind};
use indexmap::IndexMap;
use serde::Serialize;

use crate::registry::WidgetRegistry;
use crate::widget::Widget;

/// Tab name for fields without a `ui.tab` hint.
pub const DEFAULT_TAB: &str = "General";

/// One field paired with the widget selected for it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderedField {
    pub field: FieldDef,
    pub widget: Widget,
}

/// UI-only grouping artifact: a named tab and its fields in input order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TabGroup {
    pub name: String,
    pub fields: Vec<RenderedField>,
}

/// Group fields into tabs and select a widget for each.
///
/// Tabs appear in first-seen order; within a tab, fields keep the order the
/// schema registry delivered them in. An empty input renders nothing.
pub fn render_tab_groups(fields: &[FieldDef], registry: &WidgetRegistry) -> Vec<TabGroup> {
    let mut tabs: IndexMap<String, Vec<RenderedField>> = IndexMap::new();

    for field in fields {
        let widget = dispatch(field, registry);
        let tab = field.ui_tab().unwrap_or(DEFAULT_TAB).to_string();
        tabs.entry(tab).or_default().push(RenderedField {
            field: field.clone(),
            widget,
        });
    }

    tabs.into_iter()
        .map(|(name, fields)| TabGroup { name, fields })
        .collect()
}

/// Select the widget for one field.
///
/// A registered `ui.component` override wins unconditionally. A component
/// hint nothing was registered for falls through to the built-in dispatch —
/// the registry is an override seam, not a validation gate.
pub fn dispatch(field: &FieldDef, registry: &WidgetRegistry) -> Widget {
    if let Some(name) = field.ui_component() {
        if let Some(factory) = registry.get(name) {
            return factory(field);
        }
        tracing::debug!(
            field = %field.name,
            component = name,
            "no widget registered for component hint, using built-in"
        );
    }

    match &field.kind {
        FieldKind::Boolean => Widget::Checkbox,
        FieldKind::DateTime => Widget::DateTimePicker,
        FieldKind::Int | FieldKind::Float => {
            if field.list {
                Widget::NumberListInput
            } else {
                Widget::NumberInput
            }
        }
        FieldKind::String | FieldKind::LocaleString => Widget::TextInput,
        FieldKind::Text | FieldKind::LocaleText => Widget::TextArea,
        FieldKind::Relation { entity } => Widget::RelationPicker {
            entity: entity.clone(),
            list: field.list,
        },
        // Server-extensible seam: kinds added after this build shipped
        // render inert instead of breaking the form.
        FieldKind::Unknown => Widget::Placeholder {
            kind: field.kind.tag().to_string(),
        },
    }
}
