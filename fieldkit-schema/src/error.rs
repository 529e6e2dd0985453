//! Error types for the schema registry

use thiserror::Error;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors that can occur while building the schema registry
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two field definitions share a name within one entity entry
    #[error("duplicate custom field '{field}' on entity '{entity}'")]
    DuplicateField { entity: String, field: String },

    /// Server config could not be parsed
    #[error("invalid schema config: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_field_display() {
        let err = SchemaError::DuplicateField {
            entity: "product".into(),
            field: "supplier".into(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate custom field 'supplier' on entity 'product'"
        );
    }
}
