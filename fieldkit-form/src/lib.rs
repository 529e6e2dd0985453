//! Widget dispatch, tab grouping, and editable form state
//!
//! `fieldkit-form` turns a list of custom-field definitions into a
//! tab-grouped list of widget descriptors, and owns the in-memory state of
//! one entity instance being edited. It is headless: a [`Widget`] says what
//! kind of input to render, not how to draw it, so any presentation layer
//! can sit on top.
//!
//! The whole crate is a pure function of (schema, entity data, active
//! language) plus an explicit widget registry — nothing reads ambient
//! global state.

pub mod binding;
pub mod registry;
pub mod renderer;
pub mod state;
pub mod widget;

pub use binding::FieldBinding;
pub use registry::{WidgetFactory, WidgetRegistry};
pub use renderer::{render_tab_groups, RenderedField, TabGroup, DEFAULT_TAB};
pub use state::{FormState, Translation};
pub use widget::Widget;
