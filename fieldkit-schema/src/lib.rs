//! Custom-field definitions and per-entity schema registry
//!
//! `fieldkit-schema` is a standalone, schema-only crate: it describes which
//! custom fields a server has configured for each entity kind, and nothing
//! else. The definitions are owned by the server; this crate parses them,
//! indexes them, and answers lookups. It never edits values and never talks
//! to the network.
//!
//! # Architecture
//!
//! - **Schema-only**: field definitions and entity entries, not field values
//! - **Read-only**: built once from server config, immutable afterwards
//! - **Forward-compatible**: a field kind this build does not know about
//!   deserializes as [`FieldKind::Unknown`] instead of failing the whole
//!   config

pub mod error;
pub mod registry;
pub mod relation;
pub mod types;

pub use error::{Result, SchemaError};
pub use registry::{normalize_entity, EntityFields, SchemaRegistry};
pub use relation::RelationValue;
pub use types::{FieldDef, FieldKind, UiHints};
