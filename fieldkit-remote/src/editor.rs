//! EditorSession — value container and mutation adapter for one open editor.
//!
//! One session owns the edit state of one entity instance: it resolves the
//! entity's field definitions from the schema registry at construction,
//! fetches current values through the merged selection, routes field
//! reads/writes through [`FormState`], and saves through either the generic
//! mutation table or a caller-supplied override.
//!
//! Fetch and save are independent, caller-triggered, one-shot async calls.
//! No ordering is enforced between them: if both are triggered around the
//! same time their completions race and the last write to local state wins.
//! The presentation layer is expected to disable concurrent triggers.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tracing::debug;

use fieldkit_form::{
    render_tab_groups, FieldBinding, FormState, TabGroup, Translation, WidgetRegistry,
};
use fieldkit_schema::{normalize_entity, FieldDef, SchemaRegistry};

use crate::error::{RemoteError, Result};
use crate::mutations::MutationTable;
use crate::notify::{LogNotifier, Notifier};
use crate::payload::prepare_custom_fields;
use crate::selection::{entity_selection, fetch_document};
use crate::transport::GraphQlTransport;

/// Caller override for entities whose load semantics are not expressible
/// via the generic query (composite detail views). Receives the merged
/// selection and returns the entity object the selection describes.
#[async_trait]
pub trait FetchOverride: Send + Sync {
    async fn fetch(&self, selection: &str) -> Result<Value>;
}

/// Caller override for entities whose save semantics are not expressible
/// via the generic mutation table (composite multi-section saves). Receives
/// the already wire-shaped custom fields and translations.
#[async_trait]
pub trait SaveOverride: Send + Sync {
    async fn save(
        &self,
        custom_fields: Map<String, Value>,
        translations: Vec<Translation>,
    ) -> Result<()>;
}

/// Builder for [`EditorSession`]. Created by [`EditorSession::for_entity`].
pub struct EditorSessionBuilder {
    entity: String,
    fields: Vec<FieldDef>,
    entity_id: Option<String>,
    language: String,
    base_selection: String,
    transport: Option<Arc<dyn GraphQlTransport>>,
    notifier: Arc<dyn Notifier>,
    mutations: MutationTable,
    fetch_override: Option<Arc<dyn FetchOverride>>,
    save_override: Option<Arc<dyn SaveOverride>>,
}

impl EditorSessionBuilder {
    /// Edit an existing entity instance. Without an id the session is in
    /// create mode and fetch is a no-op.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// The active language for translatable fields. Explicit by design —
    /// the session never reads ambient settings.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Base selector merged ahead of the per-field sub-selections.
    pub fn with_base_selection(mut self, selection: impl Into<String>) -> Self {
        self.base_selection = selection.into();
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn GraphQlTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_mutations(mut self, mutations: MutationTable) -> Self {
        self.mutations = mutations;
        self
    }

    pub fn with_fetch_override(mut self, fetch: Arc<dyn FetchOverride>) -> Self {
        self.fetch_override = Some(fetch);
        self
    }

    pub fn with_save_override(mut self, save: Arc<dyn SaveOverride>) -> Self {
        self.save_override = Some(save);
        self
    }

    /// Build the session. The transport is the one required collaborator.
    pub fn build(self) -> EditorSession {
        EditorSession {
            entity: self.entity,
            fields: self.fields,
            entity_id: self.entity_id,
            language: self.language,
            base_selection: self.base_selection,
            state: FormState::new(),
            transport: self
                .transport
                .expect("EditorSessionBuilder requires a transport"),
            notifier: self.notifier,
            mutations: self.mutations,
            fetch_override: self.fetch_override,
            save_override: self.save_override,
        }
    }
}

/// Edit state and network adapter for one entity instance.
pub struct EditorSession {
    entity: String,
    fields: Vec<FieldDef>,
    entity_id: Option<String>,
    language: String,
    base_selection: String,
    state: FormState,
    transport: Arc<dyn GraphQlTransport>,
    notifier: Arc<dyn Notifier>,
    mutations: MutationTable,
    fetch_override: Option<Arc<dyn FetchOverride>>,
    save_override: Option<Arc<dyn SaveOverride>>,
}

impl EditorSession {
    /// Start building a session for an entity kind; its field definitions
    /// are resolved from the registry once, here.
    pub fn for_entity(entity: impl Into<String>, registry: &SchemaRegistry) -> EditorSessionBuilder {
        let entity = entity.into();
        EditorSessionBuilder {
            fields: registry.fields_for(&entity).to_vec(),
            entity,
            entity_id: None,
            language: "en".into(),
            base_selection: "id".into(),
            transport: None,
            notifier: Arc::new(LogNotifier),
            mutations: MutationTable::default(),
            fetch_override: None,
            save_override: None,
        }
    }

    // --- Field access ---

    /// The entity's field definitions, in server order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Per-field context for a widget, under the session's active language.
    pub fn binding(&self, name: &str) -> Option<FieldBinding<'_>> {
        self.field(name)
            .map(|field| FieldBinding::new(field, &self.language))
    }

    /// A field's current value under the active language.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.field(name)
            .and_then(|field| self.state.value_of(field, &self.language))
    }

    /// Write a field's value under the active language. Returns false for a
    /// name the schema does not know.
    pub fn set_value(&mut self, name: &str, value: Option<Value>) -> bool {
        let Some(field) = self.fields.iter().find(|f| f.name == name) else {
            debug!(field = name, entity = %self.entity, "set_value on unknown field");
            return false;
        };
        self.state.set_value(field, &self.language, value);
        true
    }

    /// Tab-grouped widget descriptors for this entity's fields.
    pub fn render(&self, registry: &WidgetRegistry) -> Vec<TabGroup> {
        render_tab_groups(&self.fields, registry)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Switch the active language. Touched values stay put; only routing
    /// changes.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// The merged GraphQL selection this session fetches with.
    pub fn selection(&self) -> String {
        entity_selection(&self.base_selection, &self.fields)
    }

    // --- Network ---

    /// Load current values from the server.
    ///
    /// Create mode (no id) skips the fetch and keeps the empty state. A
    /// fetch failure is surfaced through the notifier; the local edit state
    /// is left exactly as it was — no partial overwrite, and no error
    /// escapes into the caller's render path.
    pub async fn fetch(&mut self) {
        let Some(id) = self.entity_id.clone() else {
            debug!(entity = %self.entity, "create mode, skipping fetch");
            return;
        };

        let selection = self.selection();
        let result = match &self.fetch_override {
            Some(fetch) => fetch.fetch(&selection).await,
            None => {
                // The query field carries the same first-letter casing the
                // schema registry normalizes to.
                let query_field = normalize_entity(&self.entity);
                let document = fetch_document(&query_field, &selection);
                match self.transport.execute(&document, json!({ "id": id })).await {
                    // A null entity (deleted or unknown id) is a failed
                    // fetch, not an empty state.
                    Ok(data) => data
                        .get(&query_field)
                        .filter(|entity| !entity.is_null())
                        .cloned()
                        .ok_or_else(|| RemoteError::MissingData {
                            path: query_field.clone(),
                        }),
                    Err(err) => Err(err),
                }
            }
        };

        match result {
            Ok(entity) => {
                self.state = FormState::from_fetched(
                    entity.get("customFields"),
                    entity.get("translations"),
                );
                debug!(entity = %self.entity, id, "fetched custom-field values");
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to load {}: {err}", self.entity));
            }
        }
    }

    /// Persist the edited state.
    ///
    /// The save path is resolved synchronously before anything touches the
    /// network: a caller-supplied override wins; otherwise the mutation
    /// table must know the entity, and a missing mapping is a developer
    /// error returned as [`RemoteError::MissingMutation`].
    ///
    /// Transport and server failures are user-facing: they go to the
    /// notifier and the local state stays untouched (nothing optimistic was
    /// applied, so there is nothing to roll back).
    pub async fn save(&mut self) -> Result<()> {
        let mutation = match &self.save_override {
            Some(_) => None,
            None => Some(
                self.mutations
                    .get(&self.entity)
                    .ok_or_else(|| RemoteError::MissingMutation {
                        entity: self.entity.clone(),
                    })?
                    .to_string(),
            ),
        };

        let custom_fields = prepare_custom_fields(&self.state.custom_fields, &self.fields);
        let translations = self.state.translations.clone();

        let outcome = match (&self.save_override, mutation) {
            (Some(save), _) => save.save(custom_fields, translations).await,
            (None, Some(mutation)) => {
                let document = MutationTable::save_document(&mutation);
                let mut input = json!({
                    "customFields": custom_fields,
                    "translations": translations,
                });
                if let Some(id) = &self.entity_id {
                    input["id"] = json!(id);
                }
                self.transport
                    .execute(&document, json!({ "input": input }))
                    .await
                    .map(drop)
            }
            (None, None) => unreachable!("save path resolved above"),
        };

        match outcome {
            Ok(()) => {
                self.notifier
                    .success(&format!("Updated {} custom fields", self.entity));
            }
            Err(err) => {
                self.notifier
                    .error(&format!("Failed to update {}: {err}", self.entity));
            }
        }
        Ok(())
    }
}
