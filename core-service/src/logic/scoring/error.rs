//! Inference errors
//!
//! Failures in the request plumbing. These propagate to the caller; bad
//! model output never ends up here.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum InferenceError {
    /// Backend answered with a non-2xx status
    #[error("HF error {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, DNS, TLS or client-side timeout failure
    #[error("Network error: {0}")]
    Transport(String),

    /// Caller deadline expired before the backend answered
    #[error("Inference timed out after {0:?}")]
    Timeout(Duration),

    /// 2xx response whose body was not JSON
    #[error("Invalid response body ({status}): {message}")]
    Decode { status: u16, message: String },

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl InferenceError {
    /// Upstream HTTP status, when there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Transport(_) | Self::Timeout(_) | Self::Client(_) => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = InferenceError::Status { status: 503, body: "model loading".to_string() };
        assert_eq!(err.to_string(), "HF error 503: model loading");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_timeout_has_no_status() {
        let err = InferenceError::Timeout(Duration::from_millis(250));
        assert!(err.is_timeout());
        assert_eq!(err.status(), None);
    }
}
