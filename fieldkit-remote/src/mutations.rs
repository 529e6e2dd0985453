//! MutationTable — entity kind to update-mutation lookup.
//!
//! Each entity kind that supports generic custom-field saves has one update
//! mutation accepting `{input: {id, customFields, translations}}` and
//! returning at least `{id}`. Entities with non-generic save semantics skip
//! this table entirely via a save override on the editor session.

use std::collections::HashMap;

use fieldkit_schema::normalize_entity;

/// Entity name → update mutation name, with the same first-letter
/// normalization as the schema registry.
#[derive(Debug, Clone)]
pub struct MutationTable {
    mutations: HashMap<String, String>,
}

impl Default for MutationTable {
    /// The built-in dictionary for the stock commerce entities.
    fn default() -> Self {
        let mut table = Self {
            mutations: HashMap::new(),
        };
        for (entity, mutation) in [
            ("product", "updateProduct"),
            ("productVariant", "updateProductVariant"),
            ("order", "setOrderCustomFields"),
            ("asset", "updateAsset"),
            ("facet", "updateFacet"),
            ("collection", "updateCollection"),
            ("customer", "updateCustomer"),
            ("paymentMethod", "updatePaymentMethod"),
            ("shippingMethod", "updateShippingMethod"),
        ] {
            table.register(entity, mutation);
        }
        table
    }
}

impl MutationTable {
    /// An empty table, for callers that wire every entity themselves.
    pub fn empty() -> Self {
        Self {
            mutations: HashMap::new(),
        }
    }

    /// Register (or replace) the update mutation for an entity kind.
    pub fn register(&mut self, entity: impl AsRef<str>, mutation: impl Into<String>) {
        self.mutations
            .insert(normalize_entity(entity.as_ref()), mutation.into());
    }

    /// The update mutation for an entity kind, if one is registered.
    pub fn get(&self, entity: &str) -> Option<&str> {
        self.mutations
            .get(&normalize_entity(entity))
            .map(String::as_str)
    }

    /// Render the save document for a registered mutation name, e.g.
    /// `updateFacet` → `mutation ($input: UpdateFacetInput!) {
    /// updateFacet(input: $input) { id } }`.
    pub fn save_document(mutation: &str) -> String {
        let input_type = format!("{}Input", capitalize(mutation));
        format!("mutation ($input: {input_type}!) {{ {mutation}(input: $input) {{ id }} }}")
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_stock_entities() {
        let table = MutationTable::default();
        assert_eq!(table.get("product"), Some("updateProduct"));
        assert_eq!(table.get("order"), Some("setOrderCustomFields"));
        assert_eq!(table.get("facet"), Some("updateFacet"));
        assert_eq!(table.get("shippingMethod"), Some("updateShippingMethod"));
    }

    #[test]
    fn lookup_normalizes_first_letter() {
        let table = MutationTable::default();
        assert_eq!(table.get("Facet"), Some("updateFacet"));
        assert_eq!(table.get("facet"), Some("updateFacet"));
    }

    #[test]
    fn unknown_entity_is_none() {
        let table = MutationTable::default();
        assert_eq!(table.get("orderLine"), None);
    }

    #[test]
    fn register_extends_and_replaces() {
        let mut table = MutationTable::empty();
        assert_eq!(table.get("review"), None);

        table.register("review", "updateReview");
        assert_eq!(table.get("review"), Some("updateReview"));

        table.register("Review", "updateProductReview");
        assert_eq!(table.get("review"), Some("updateProductReview"));
    }

    #[test]
    fn save_document_shape() {
        assert_eq!(
            MutationTable::save_document("updateFacet"),
            "mutation ($input: UpdateFacetInput!) { updateFacet(input: $input) { id } }"
        );
    }
}
