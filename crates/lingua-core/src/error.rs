//! Error types for the core crate

use thiserror::Error;

/// Errors from a document store collaborator
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure in a file-backed store
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Document failed to encode or decode
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Interior lock was poisoned
    #[error("store lock poisoned")]
    LockPoisoned,

    /// Backend-specific failure
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from a completion service collaborator
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// Network or service unreachable
    #[error("transport error: {0}")]
    Transport(String),

    /// Response parsed but the reply field is missing
    #[error("response missing reply text")]
    MissingReply,

    /// Response body could not be parsed at all
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Result type for completion calls
pub type CompletionResult<T> = Result<T, CompletionError>;
