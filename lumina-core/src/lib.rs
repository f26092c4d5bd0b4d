//! Collaborator boundaries of the Lumina front-end core.
//!
//! Durable state lives in a managed document database and object store, and
//! identity in a managed provider; this crate defines the ports those
//! collaborators are reached through, the process-wide [`SessionStore`], the
//! listing query description, and an in-memory documents adapter used by
//! tests and demos. Implementations must not leak infra types into the
//! domain layers above.

pub mod error;
pub mod memory;
pub mod ports;
pub mod query;
pub mod session;

pub use error::{CoreError, Result};
pub use memory::InMemoryDocuments;
pub use ports::{ContactRequestRepository, DesignRepository, ObjectStorage};
pub use query::{Constraint, Cursor, DesignQuery, Page, listing_query};
pub use session::SessionStore;
