//! Shot-detection microservice client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use blueprint_models::{validate_shots, Shot};

use crate::error::{ClientError, ClientResult};
use crate::retry::RetryPolicy;
use crate::types::{DetectShotsRequest, HealthResponse, ShotsResponse};

/// Configuration for the shot-detection client.
#[derive(Debug, Clone)]
pub struct ShotDetectorConfig {
    /// Base URL of the detection service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Retry policy: 3 attempts with linear 1s/2s/3s backoff by default
    pub retry: RetryPolicy,
}

impl Default for ShotDetectorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(60),
            retry: RetryPolicy::new("detect_shots").with_max_retries(3),
        }
    }
}

impl ShotDetectorConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("SHOT_SERVICE_URL").unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(
                std::env::var("SHOT_SERVICE_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(60),
            ),
            retry: defaults.retry,
        }
    }
}

/// Client for the shot-boundary detection service.
pub struct ShotDetectorClient {
    http: Client,
    config: ShotDetectorConfig,
}

impl ShotDetectorClient {
    /// Create a new client.
    pub fn new(config: ShotDetectorConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ShotDetectorConfig::from_env())
    }

    /// Check if the detection service is healthy.
    pub async fn health_check(&self) -> ClientResult<bool> {
        let url = format!("{}/health", self.config.base_url);

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                let health: HealthResponse = response.json().await?;
                Ok(health.status == "healthy" || health.status == "ok")
            }
            Ok(response) => {
                warn!("Shot service health check failed: {}", response.status());
                Ok(false)
            }
            Err(e) => {
                warn!("Shot service health check error: {}", e);
                Ok(false)
            }
        }
    }

    /// Detect shot boundaries for a video.
    ///
    /// Both unreachable-service and schema-validation failures are retried;
    /// after the retries are exhausted they are fatal to the pipeline run.
    pub async fn detect_shots(&self, video_path: &str) -> ClientResult<Vec<Shot>> {
        let url = format!("{}/detect-shots", self.config.base_url);
        debug!("Requesting shot detection from {}", url);

        self.config
            .retry
            .run(
                || self.detect_shots_once(&url, video_path),
                ClientError::is_retryable,
            )
            .await
    }

    async fn detect_shots_once(&self, url: &str, video_path: &str) -> ClientResult<Vec<Shot>> {
        let request = DetectShotsRequest {
            video_path: video_path.to_string(),
        };

        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ClientError::service_unavailable(format!("Shot service is not available: {e}"))
                } else {
                    ClientError::Network(e)
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            if status.as_u16() == 503 {
                return Err(ClientError::service_unavailable(body));
            }
            return Err(ClientError::RequestFailed(format!(
                "Shot service returned {}: {}",
                status, body
            )));
        }

        let parsed: ShotsResponse = response
            .json()
            .await
            .map_err(|e| ClientError::invalid_response(format!("Malformed shot response: {e}")))?;

        validate_shots(&parsed.shots)
            .map_err(|e| ClientError::invalid_response(format!("Invalid shot list: {e}")))?;

        Ok(parsed.shots)
    }
}
