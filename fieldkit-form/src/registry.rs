//! WidgetRegistry — caller-registered widget overrides.
//!
//! Plugins name a component in a field's UI hints; the registry maps those
//! names to factories. It is built once at startup and injected into the
//! renderer as an explicit parameter, so dispatch is testable in isolation
//! and nothing consults global mutable state.

use std::collections::HashMap;

use fieldkit_schema::FieldDef;

use crate::widget::Widget;

/// Builds the widget descriptor for a field a component name was registered
/// for. Most factories ignore the definition and return
/// [`Widget::Custom`]; a factory may inspect it to parameterize the widget.
pub type WidgetFactory = Box<dyn Fn(&FieldDef) -> Widget + Send + Sync>;

/// Registry of caller-supplied widget components, keyed by the name used in
/// `ui.component` hints.
#[derive(Default)]
pub struct WidgetRegistry {
    factories: HashMap<String, WidgetFactory>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a component name. Later registrations for
    /// the same name win, matching plugin load order.
    pub fn register(&mut self, name: impl Into<String>, factory: WidgetFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Convenience: register a component name that renders as
    /// `Widget::Custom { component: name }`.
    pub fn register_component(&mut self, name: impl Into<String>) {
        let name = name.into();
        let component = name.clone();
        self.register(
            name,
            Box::new(move |_| Widget::Custom {
                component: component.clone(),
            }),
        );
    }

    /// Look up a factory by component name. Consulted once per field during
    /// rendering.
    pub fn get(&self, name: &str) -> Option<&WidgetFactory> {
        self.factories.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.factories.keys().collect();
        names.sort();
        f.debug_struct("WidgetRegistry")
            .field("components", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldkit_schema::FieldKind;

    #[test]
    fn register_and_get() {
        let mut registry = WidgetRegistry::new();
        registry.register_component("color-picker");

        assert!(registry.contains("color-picker"));
        assert!(!registry.contains("slider"));

        let field = FieldDef::new("hue", FieldKind::String);
        let widget = registry.get("color-picker").unwrap()(&field);
        assert_eq!(
            widget,
            Widget::Custom {
                component: "color-picker".into()
            }
        );
    }

    #[test]
    fn later_registration_wins() {
        let mut registry = WidgetRegistry::new();
        registry.register("slider", Box::new(|_| Widget::TextInput));
        registry.register("slider", Box::new(|_| Widget::NumberInput));

        let field = FieldDef::new("volume", FieldKind::Int);
        assert_eq!(registry.get("slider").unwrap()(&field), Widget::NumberInput);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn factory_can_inspect_the_field() {
        let mut registry = WidgetRegistry::new();
        registry.register(
            "relation-card",
            Box::new(|field: &FieldDef| Widget::RelationPicker {
                entity: field.relation_entity().unwrap_or("").to_string(),
                list: field.list,
            }),
        );

        let field = FieldDef::new(
            "featured",
            FieldKind::Relation {
                entity: "asset".into(),
            },
        );
        assert_eq!(
            registry.get("relation-card").unwrap()(&field),
            Widget::RelationPicker {
                entity: "asset".into(),
                list: false
            }
        );
    }
}
