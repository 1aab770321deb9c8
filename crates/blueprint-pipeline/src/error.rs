//! Pipeline error types.
//!
//! Only fatal failures surface here: metadata extraction and shot detection
//! abort the run. Keyframe, semantics and rhythm failures degrade in place
//! and never become a `PipelineError`.

use thiserror::Error;

use blueprint_media::MediaError;
use blueprint_ml_client::ClientError;
use blueprint_storage::StorageError;

use crate::stage::Stage;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Fatal errors that terminate a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Metadata extraction failed: {0}")]
    Metadata(#[source] MediaError),

    #[error("Shot detection failed: {0}")]
    ShotDetection(#[source] ClientError),

    #[error("Failed to persist scene spec: {0}")]
    Persist(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// The stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Metadata(_) => Stage::Metadata,
            Self::ShotDetection(_) => Stage::Shots,
            Self::Persist(_) | Self::Io(_) | Self::Config(_) => Stage::Persist,
        }
    }

    /// HTTP-like status code for callers that surface runs over an API.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Metadata(MediaError::NoVideoStream) => 400,
            Self::Metadata(MediaError::FileNotFound(_)) => 404,
            Self::Metadata(_) => 500,
            Self::ShotDetection(ClientError::ServiceUnavailable(_)) => 503,
            Self::ShotDetection(_) => 500,
            Self::Config(_) => 500,
            Self::Persist(_) | Self::Io(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = PipelineError::Metadata(MediaError::NoVideoStream);
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.stage(), Stage::Metadata);

        let err = PipelineError::ShotDetection(ClientError::ServiceUnavailable(
            "connection refused".to_string(),
        ));
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.stage(), Stage::Shots);

        let err = PipelineError::ShotDetection(ClientError::RequestFailed("boom".to_string()));
        assert_eq!(err.status_code(), 500);
    }
}
