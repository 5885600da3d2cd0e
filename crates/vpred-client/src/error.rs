//! Prediction client error types.

use thiserror::Error;

/// Result type for prediction client operations.
pub type PredictionResult<T> = Result<T, PredictionError>;

/// Errors that can occur while talking to the prediction endpoint.
///
/// Everything except `Config` is a request failure; the form controller
/// reports all of those the same way.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server error: {status}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PredictionError {
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn from_http_status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            PredictionError::Status { status, .. } => Some(*status),
            PredictionError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for network, status and response-parsing failures.
    pub fn is_request_failure(&self) -> bool {
        !matches!(self, PredictionError::Config(_))
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::Network(_) => "network",
            PredictionError::Status { .. } => "status",
            PredictionError::InvalidResponse(_) => "invalid_response",
            PredictionError::Config(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error() {
        let err = PredictionError::from_http_status(500, "boom");
        assert_eq!(err.status(), Some(500));
        assert!(err.is_request_failure());
        assert_eq!(err.to_string(), "Server error: 500");
        assert_eq!(err.kind(), "status");
    }

    #[test]
    fn test_invalid_response_is_request_failure() {
        let err = PredictionError::invalid_response("missing viral");
        assert!(err.is_request_failure());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_config_error_is_not_request_failure() {
        let err = PredictionError::config("empty endpoint");
        assert!(!err.is_request_failure());
    }
}
