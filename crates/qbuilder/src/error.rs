//! Error types for qbuilder

use thiserror::Error;

/// Result type alias for qbuilder operations
pub type QbResult<T> = Result<T, QbError>;

/// Error types for clause building.
///
/// Field-level anomalies (wrong-typed pagination fields, unsupported filter types, empty
/// values) are not errors: those fields are omitted from the clause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QbError {
    /// The parameter record is absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl QbError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
