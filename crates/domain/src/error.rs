//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building requests or
/// coercing response values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or cannot carry path segments.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A timestamp could not be converted into a UTC instant.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
