//! Error types for persistence

use thiserror::Error;

use crate::session::Role;

/// Errors surfaced by blob stores and collections
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("{name} is not allowed to do this (requires {required}, has {actual})")]
    PermissionDenied {
        name: String,
        required: Role,
        actual: Role,
    },
}

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;
