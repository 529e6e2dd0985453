//! GraphQL transport.
//!
//! The network seam is the [`GraphQlTransport`] trait: execute one document
//! with variables, get the `data` payload back. [`HttpTransport`] is the
//! reqwest-backed production implementation; tests script responses through
//! `test_support::MockTransport` instead.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{RemoteError, Result};

/// One-shot GraphQL execution.
#[async_trait]
pub trait GraphQlTransport: Send + Sync {
    /// Execute a document and return the response's `data` payload.
    /// Server-reported GraphQL errors map to [`RemoteError::GraphQl`] with
    /// the first error's message.
    async fn execute(&self, document: &str, variables: Value) -> Result<Value>;
}

/// HTTP transport configuration.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// GraphQL endpoint, e.g. `https://shop.example.com/admin-api`.
    pub endpoint: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
    /// Optional bearer token for authenticated APIs.
    pub bearer_token: Option<String>,
}

impl TransportConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("fieldkit/", env!("CARGO_PKG_VERSION")).to_string(),
            bearer_token: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

/// reqwest-backed GraphQL transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    bearer_token: Option<String>,
}

impl HttpTransport {
    /// Build a transport from configuration. Fails only on an unparsable
    /// endpoint URL.
    pub fn with_config(config: &TransportConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            bearer_token: config.bearer_token.clone(),
        })
    }

    /// Shorthand for a default-configured transport against an endpoint.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_config(&TransportConfig::new(endpoint))
    }
}

#[async_trait]
impl GraphQlTransport for HttpTransport {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value> {
        debug!(endpoint = %self.endpoint, "executing GraphQL document");

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&json!({"query": document, "variables": variables}));
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        let body: Value = response.json().await?;
        extract_data(body)
    }
}

/// Pull the `data` payload out of a GraphQL response envelope, preferring
/// server-reported errors when present.
pub(crate) fn extract_data(body: Value) -> Result<Value> {
    if let Some(errors) = body.get("errors").and_then(Value::as_array) {
        if let Some(first) = errors.first() {
            let message = first
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown GraphQL error")
                .to_string();
            return Err(RemoteError::GraphQl { message });
        }
    }
    match body.get("data") {
        Some(data) if !data.is_null() => Ok(data.clone()),
        _ => Err(RemoteError::MissingData {
            path: "data".into(),
        }),
    }
}
