//! Ports to the managed collaborators.
//!
//! Implementations live in infra adapters (the managed-database SDK bridge
//! in production, [`crate::memory`] in tests) and must not leak infra types
//! into domain/application layers.

mod documents;
mod storage;

pub use documents::{ContactRequestRepository, DesignRepository};
pub use storage::{ObjectStorage, StoragePath};
