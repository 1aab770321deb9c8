//! Client error types.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::ServiceUnavailable(msg.into())
    }

    /// True for failures a retry could plausibly fix.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::ServiceUnavailable(_)
                | ClientError::Network(_)
                | ClientError::InvalidResponse(_)
                | ClientError::Json(_)
        )
    }

    /// True for malformed-response failures (the only class the vision
    /// client retries on).
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::InvalidResponse(_) | ClientError::Json(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryability() {
        assert!(ClientError::service_unavailable("down").is_retryable());
        assert!(ClientError::invalid_response("bad schema").is_retryable());
        assert!(!ClientError::ConfigError("missing key".into()).is_retryable());
    }

    #[test]
    fn test_validation_class() {
        assert!(ClientError::invalid_response("no json").is_validation());
        assert!(!ClientError::service_unavailable("down").is_validation());
    }
}
