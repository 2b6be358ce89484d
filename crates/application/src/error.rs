//! Application error types

use thiserror::Error;

use crate::ports::TransportError;

/// Errors returned by [`Client`](crate::Client) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered with a status the operation does not accept.
    #[error("request failed with status {status}: {body}")]
    UnexpectedServerError {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// No response was obtained.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A successful response did not have the expected shape.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Returns the HTTP status for server errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the API answered with an unexpected status.
    #[must_use]
    pub const fn is_unexpected_server_error(&self) -> bool {
        matches!(self, Self::UnexpectedServerError { .. })
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unexpected_server_error_message() {
        let error = ClientError::UnexpectedServerError {
            status: 401,
            body: r#"{"error":"Invalid App-Secret"}"#.to_string(),
        };
        assert_eq!(
            error.to_string(),
            r#"request failed with status 401: {"error":"Invalid App-Secret"}"#
        );
        assert_eq!(error.status(), Some(401));
        assert!(error.is_unexpected_server_error());
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let error = ClientError::from(TransportError::ConnectionFailed("refused".to_string()));
        assert_eq!(error.status(), None);
        assert!(!error.is_unexpected_server_error());
    }
}
