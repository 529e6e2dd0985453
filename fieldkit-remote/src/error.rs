//! Error types for remote operations.
//!
//! Two families live here. Configuration mistakes (a missing mutation
//! mapping, a bad endpoint) are returned as `Err` so the developer sees them
//! immediately. Runtime fetch/save failures are *not* returned from the
//! editor session — they are routed to the [`Notifier`](crate::Notifier) as
//! user-visible messages, with these variants carrying the detail.

use thiserror::Error;

/// Result type for remote operations
pub type Result<T> = std::result::Result<T, RemoteError>;

/// Errors that can occur talking to the GraphQL API
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Developer error: an entity kind was wired into the custom-fields UI
    /// without a registered update mutation and without a save override.
    #[error("no update mutation registered for entity '{entity}'")]
    MissingMutation { entity: String },

    /// The server returned GraphQL errors.
    #[error("GraphQL error: {message}")]
    GraphQl { message: String },

    /// The response had no `data` payload for the requested path.
    #[error("malformed response: missing data for '{path}'")]
    MissingData { path: String },

    /// HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint URL could not be parsed.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_mutation_display_names_the_entity() {
        let err = RemoteError::MissingMutation {
            entity: "orderLine".into(),
        };
        assert_eq!(
            err.to_string(),
            "no update mutation registered for entity 'orderLine'"
        );
    }

    #[test]
    fn graphql_error_carries_the_server_message() {
        let err = RemoteError::GraphQl {
            message: "isPrivate must be a boolean".into(),
        };
        assert!(err.to_string().contains("isPrivate must be a boolean"));
    }
}
