//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. IO concerns
/// belong to the crates that perform the IO.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input was absent.
    #[error("{param}: {message}")]
    NullInput {
        param: &'static str,
        message: &'static str,
    },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn null_input(param: &'static str, message: &'static str) -> Self {
        Self::NullInput { param, message }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
