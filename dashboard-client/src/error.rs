//! Error types for the manager client

use dashboard_core::PollFailure;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the manager
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Manager returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Manager answered with a body that is not what we expected
    #[error("Failed to parse response (status {status}): {source}")]
    InvalidPayload {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }
}

impl From<ClientError> for PollFailure {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::RequestFailed(e) => PollFailure::Unreachable(e.to_string()),
            ClientError::ApiError { status, message } => PollFailure::Http {
                status,
                body: message,
            },
            ClientError::InvalidPayload { status, body, .. } => PollFailure::Http { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_to_poll_failure() {
        let err = ClientError::api_error(503, "busy");
        assert_eq!(
            PollFailure::from(err),
            PollFailure::Http {
                status: 503,
                body: "busy".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_payload_keeps_body() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = ClientError::InvalidPayload {
            status: 200,
            body: "<html>".to_string(),
            source,
        };
        assert_eq!(
            PollFailure::from(err).to_view().message,
            "Error 200: <html>"
        );
    }
}
