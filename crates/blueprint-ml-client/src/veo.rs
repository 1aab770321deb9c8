//! Veo video-generation client.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use blueprint_models::{GenerationOutcome, VeoPrompt};

use crate::error::{ClientError, ClientResult};
use crate::types::{VeoRequest, VeoResponse};

/// Configuration for the Veo client.
#[derive(Debug, Clone)]
pub struct VeoConfig {
    pub api_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for VeoConfig {
    fn default() -> Self {
        Self {
            api_url:
                "https://generativelanguage.googleapis.com/v1beta/models/veo-001:generateVideo"
                    .to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl VeoConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("VEO_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("VEO_API_KEY").unwrap_or_default(),
            timeout: defaults.timeout,
        }
    }
}

/// Client for the video-generation collaborator.
#[derive(Debug)]
pub struct VeoClient {
    http: Client,
    config: VeoConfig,
}

impl VeoClient {
    /// Create a new client. An empty API key is a configuration error.
    pub fn new(config: VeoConfig) -> ClientResult<Self> {
        if config.api_key.is_empty() {
            return Err(ClientError::ConfigError("VEO_API_KEY not set".to_string()));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(VeoConfig::from_env())
    }

    /// Generate one scene from a prompt.
    ///
    /// Failures are captured in the outcome, never raised: one bad call
    /// must not stop a batch.
    pub async fn generate_scene(&self, prompt: &VeoPrompt) -> GenerationOutcome {
        debug!(
            scene_index = prompt.scene_index,
            shot_id = prompt.shot_id,
            "Requesting scene generation"
        );

        match self.generate_once(prompt).await {
            Ok(url) => GenerationOutcome::success(prompt.scene_index, prompt.shot_id, url),
            Err(e) => {
                warn!(
                    scene_index = prompt.scene_index,
                    error = %e,
                    "Scene generation failed"
                );
                GenerationOutcome::failure(prompt.scene_index, prompt.shot_id, e.to_string())
            }
        }
    }

    async fn generate_once(&self, prompt: &VeoPrompt) -> ClientResult<String> {
        let request = VeoRequest {
            prompt: prompt.prompt.clone(),
            duration: prompt.duration.ceil() as u64,
            aspect_ratio: "16:9".to_string(),
            quality: "high".to_string(),
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::RequestFailed(format!(
                "Veo API returned {}: {}",
                status, body
            )));
        }

        let veo: VeoResponse = response.json().await?;
        veo.video_url
            .or(veo.url)
            .ok_or_else(|| ClientError::invalid_response("Veo response carried no video URL"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    fn sample_prompt() -> VeoPrompt {
        VeoPrompt {
            scene_index: 1,
            shot_id: 0,
            duration: 2.3,
            prompt: "An attention-grabbing opening shot.".to_string(),
            importance: 8,
            tags: vec!["hook".to_string()],
        }
    }

    fn test_client(api_url: String) -> VeoClient {
        VeoClient::new(VeoConfig {
            api_url,
            api_key: "test-key".to_string(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let err = VeoClient::new(VeoConfig::default()).unwrap_err();
        assert!(matches!(err, ClientError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_generate_success_rounds_duration_up() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(|req: &Request| {
                let body: serde_json::Value = serde_json::from_slice(&req.body).unwrap();
                assert_eq!(body["duration"], 3);
                assert_eq!(body["aspectRatio"], "16:9");
                ResponseTemplate::new(200)
                    .set_body_json(json!({"videoUrl": "https://cdn.example/scene1.mp4"}))
            })
            .mount(&server)
            .await;

        let client = test_client(format!("{}/", server.uri()));
        let outcome = client.generate_scene(&sample_prompt()).await;
        assert!(outcome.success);
        assert_eq!(
            outcome.video_url.as_deref(),
            Some("https://cdn.example/scene1.mp4")
        );
    }

    #[tokio::test]
    async fn test_generate_failure_is_captured() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = test_client(format!("{}/", server.uri()));
        let outcome = client.generate_scene(&sample_prompt()).await;
        assert!(!outcome.success);
        assert!(outcome.error.unwrap().contains("429"));
    }

    #[tokio::test]
    async fn test_generate_accepts_alternate_url_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"url": "https://cdn.example/alt.mp4"})),
            )
            .mount(&server)
            .await;

        let client = test_client(format!("{}/", server.uri()));
        let outcome = client.generate_scene(&sample_prompt()).await;
        assert!(outcome.success);
        assert_eq!(outcome.video_url.as_deref(), Some("https://cdn.example/alt.mp4"));
    }
}
