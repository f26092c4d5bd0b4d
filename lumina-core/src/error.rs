use thiserror::Error;

/// Failures crossing a collaborator boundary.
///
/// Callers catch these at the component that issued the call; nothing
/// propagates to a global handler.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("query failed: {0}")]
    Query(String),

    #[error("invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
