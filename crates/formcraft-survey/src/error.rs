//! Error types for survey operations

use thiserror::Error;

/// Errors raised by survey operations
///
/// Operations addressing a question by id treat an unknown id as a no-op.
#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("question index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for survey operations
pub type Result<T> = std::result::Result<T, SurveyError>;
