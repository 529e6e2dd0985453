//! Test doubles for the transport and notifier seams.
//!
//! Available to this crate's own tests and, behind the `test-support`
//! feature, to integration tests and downstream crates.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{RemoteError, Result};
use crate::notify::Notifier;
use crate::transport::GraphQlTransport;

enum Scripted {
    Data(Value),
    Error(String),
}

/// Transport that replays scripted responses and records every call.
#[derive(Default)]
pub struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next response's `data` payload.
    pub fn push_data(&self, data: Value) {
        self.script.lock().unwrap().push_back(Scripted::Data(data));
    }

    /// Script the next response as a GraphQL error.
    pub fn push_error(&self, message: impl Into<String>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Error(message.into()));
    }

    /// Every executed (document, variables) pair, in call order.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GraphQlTransport for MockTransport {
    async fn execute(&self, document: &str, variables: Value) -> Result<Value> {
        self.calls
            .lock()
            .unwrap()
            .push((document.to_string(), variables));

        match self.script.lock().unwrap().pop_front() {
            Some(Scripted::Data(data)) => Ok(data),
            Some(Scripted::Error(message)) => Err(RemoteError::GraphQl { message }),
            None => Err(RemoteError::MissingData {
                path: "unscripted call".into(),
            }),
        }
    }
}

/// Notifier that records messages for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    successes: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
