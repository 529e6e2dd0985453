//! Notifier — the user-visible outcome channel.
//!
//! Fetch and save outcomes surface as non-blocking notifications, never as
//! errors bubbling into the render path. The presentation layer implements
//! this trait with its toast system; [`LogNotifier`] routes to tracing for
//! headless use.

use tracing::{error, info};

/// Sink for user-visible success/error notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that routes messages to tracing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!(target: "fieldkit::notify", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "fieldkit::notify", "{message}");
    }
}
