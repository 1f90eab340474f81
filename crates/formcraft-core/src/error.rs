//! Error types for form tree operations

use thiserror::Error;

/// Core error type for Formcraft tree operations
///
/// Only precondition violations surface here. Operations that address a node
/// by id treat a missing id as a no-op and never produce an error.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("{target} index {index} out of range (len {len})")]
    IndexOutOfRange {
        target: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Choice fields require at least one option")]
    EmptyOptions,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FormError {
    pub(crate) fn out_of_range(target: &'static str, index: usize, len: usize) -> Self {
        FormError::IndexOutOfRange { target, index, len }
    }
}

/// Result type alias for Formcraft operations
pub type Result<T> = std::result::Result<T, FormError>;

/// Check `index < len`, producing an `IndexOutOfRange` error otherwise
pub(crate) fn check_index(target: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(FormError::out_of_range(target, index, len))
    }
}
