//! GraphQL selection building.
//!
//! The fetch query selects the caller's base fields plus one sub-selection
//! per configured custom field: scalars directly, relations with enough
//! attributes to render a picker preview, translatable fields under a
//! `translations` block keyed by language.

use fieldkit_schema::{FieldDef, FieldKind};

/// Sub-selection for one relation target, sized for its picker preview.
fn relation_selection(target: &str) -> &'static str {
    match target {
        "asset" | "Asset" => "id preview",
        "product" | "Product" => "id name featuredAsset { preview }",
        "productVariant" | "ProductVariant" => "id name sku featuredAsset { preview }",
        _ => "id",
    }
}

/// Render one field inside a `customFields { ... }` block.
fn field_selection(field: &FieldDef) -> String {
    match &field.kind {
        FieldKind::Relation { entity } => {
            format!("{} {{ {} }}", field.name, relation_selection(entity))
        }
        _ => field.name.clone(),
    }
}

/// The `customFields { ... }` block for the given definitions, skipping
/// translatable fields (those live under `translations`). Empty string when
/// nothing qualifies.
pub fn custom_fields_selection(fields: &[FieldDef]) -> String {
    let parts: Vec<String> = fields
        .iter()
        .filter(|f| !f.translatable())
        .map(field_selection)
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    format!("customFields {{ {} }}", parts.join(" "))
}

/// The `translations { ... }` block, present only when at least one field is
/// translatable.
fn translations_selection(fields: &[FieldDef]) -> String {
    let parts: Vec<String> = fields
        .iter()
        .filter(|f| f.translatable())
        .map(|f| f.name.clone())
        .collect();
    if parts.is_empty() {
        return String::new();
    }
    format!(
        "translations {{ languageCode customFields {{ {} }} }}",
        parts.join(" ")
    )
}

/// Merge a caller-supplied base selector with the per-field sub-selections.
pub fn entity_selection(base: &str, fields: &[FieldDef]) -> String {
    let mut parts = vec![base.trim().to_string()];
    let custom = custom_fields_selection(fields);
    if !custom.is_empty() {
        parts.push(custom);
    }
    let translations = translations_selection(fields);
    if !translations.is_empty() {
        parts.push(translations);
    }
    parts.retain(|p| !p.is_empty());
    parts.join(" ")
}

/// The full fetch document: one query named after the entity, accepting
/// `{id}` and returning the merged selection.
pub fn fetch_document(entity: &str, selection: &str) -> String {
    format!("query ($id: ID!) {{ {entity}(id: $id) {{ {selection} }} }}")
}
