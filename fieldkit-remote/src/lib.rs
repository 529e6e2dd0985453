//! GraphQL fetch/save adapter and editor session
//!
//! `fieldkit-remote` bridges the generic form layer to entity-specific
//! network operations: it builds the fetch selection from the field schema,
//! transforms relation values into their foreign-key wire shape, resolves
//! the per-entity update mutation, and reports outcomes through a
//! notification channel instead of bubbling errors into the caller.
//!
//! The network seam is the [`GraphQlTransport`] trait; [`HttpTransport`] is
//! the production implementation and `test_support::MockTransport` the
//! scripted one.

pub mod editor;
pub mod error;
pub mod mutations;
pub mod notify;
pub mod payload;
pub mod selection;
pub mod transport;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use editor::{EditorSession, EditorSessionBuilder, FetchOverride, SaveOverride};
pub use error::{RemoteError, Result};
pub use mutations::MutationTable;
pub use notify::{LogNotifier, Notifier};
pub use payload::prepare_custom_fields;
pub use selection::{custom_fields_selection, entity_selection, fetch_document};
pub use transport::{GraphQlTransport, HttpTransport, TransportConfig};
