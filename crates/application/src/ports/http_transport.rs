//! HTTP transport port

use std::future::Future;

use respoke_domain::{ApiRequest, ApiResponse, ClientConfig, DomainError};
use thiserror::Error;

/// Errors raised while talking to the API, before any response is available.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The base URL (or a URL built from it) is invalid.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A configured header value cannot be sent.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request or response body could not be transferred.
    #[error("body error: {0}")]
    Body(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

impl From<DomainError> for TransportError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidUrl(url) => Self::InvalidUrl(url),
            other => Self::Other(other.to_string()),
        }
    }
}

/// Port for executing requests against the Respoke API.
///
/// Implementations own the connection settings taken from the
/// [`ClientConfig`]: base URL, `App-Secret` header and user agent.
pub trait HttpTransport: Send + Sync {
    /// Creates the transport for a client configuration.
    ///
    /// The client calls this lazily, on its first request.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be turned into a
    /// working transport (e.g. the base URL does not parse).
    fn connect(config: &ClientConfig) -> Result<Self, TransportError>
    where
        Self: Sized;

    /// Executes a request and returns the raw response, whatever its status.
    ///
    /// # Errors
    ///
    /// Returns an error only if no response was obtained.
    fn execute(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, TransportError>> + Send;
}
