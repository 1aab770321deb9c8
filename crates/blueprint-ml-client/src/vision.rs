//! Vision-labeling client.
//!
//! Asks an OpenAI-compatible vision model to describe one keyframe using a
//! closed enum vocabulary. Malformed answers are retried a bounded number
//! of times; exhaustion degrades to a neutral default label instead of
//! failing the stage.

use std::path::Path;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use tracing::{debug, warn};

use blueprint_models::{Degradable, SemanticLabel};

use crate::error::{ClientError, ClientResult};
use crate::retry::RetryPolicy;
use crate::types::{ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl};

/// Configuration for the vision client.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
    /// Validation-only retry policy: 2 attempts, 1 s apart by default
    pub retry: RetryPolicy,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "gpt-4-vision-preview".to_string(),
            timeout: Duration::from_secs(30),
            retry: RetryPolicy::new("label_frame").with_max_retries(2),
        }
    }
}

impl VisionConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("VISION_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("VISION_API_KEY").unwrap_or_default(),
            model: std::env::var("VISION_MODEL").unwrap_or(defaults.model),
            timeout: defaults.timeout,
            retry: defaults.retry,
        }
    }
}

/// Client for the vision-labeling collaborator.
pub struct VisionClient {
    http: Client,
    config: VisionConfig,
}

impl VisionClient {
    /// Create a new client.
    pub fn new(config: VisionConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(VisionConfig::from_env())
    }

    /// Label one keyframe.
    ///
    /// Never returns an error: when the model keeps answering outside the
    /// schema (or the call fails outright) the result is the neutral
    /// fallback label, marked degraded with the reason.
    pub async fn label_frame(&self, image_path: impl AsRef<Path>) -> Degradable<SemanticLabel> {
        let image_path = image_path.as_ref();

        let image_data = match tokio::fs::read(image_path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to read keyframe {}: {}", image_path.display(), e);
                return Degradable::degraded(
                    SemanticLabel::fallback(),
                    format!("keyframe unreadable: {e}"),
                );
            }
        };
        let base64_image = BASE64.encode(&image_data);

        let result = self
            .config
            .retry
            .run(
                || self.label_frame_once(&base64_image),
                ClientError::is_validation,
            )
            .await;

        match result {
            Ok(label) => Degradable::Ok(label),
            Err(e) => {
                warn!("Vision labeling failed, using fallback label: {}", e);
                Degradable::degraded(SemanticLabel::fallback(), e.to_string())
            }
        }
    }

    async fn label_frame_once(&self, base64_image: &str) -> ClientResult<SemanticLabel> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: semantic_prompt().to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{base64_image}"),
                        },
                    },
                ],
            }],
            max_tokens: 300,
            // Low temperature for consistent enum answers
            temperature: 0.1,
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
                "Vision API returned {}: {}",
                status, body
            )));
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| ClientError::invalid_response("Empty vision response"))?;

        parse_label(content)
    }
}

/// Closed-vocabulary prompt sent with each keyframe.
fn semantic_prompt() -> &'static str {
    "Analyze this video frame and answer with JSON only, no explanation:\n\
     {\n\
     \"shot_type\": one of [close_up, medium, wide, screen, broll],\n\
     \"subject\": one of [human_face, human_body, screen_ui, object, text_only],\n\
     \"subtitle\": one of [none, short_hook, sentence, paragraph],\n\
     \"emotion\": one of [curiosity, excitement, explanation, tension, calm],\n\
     \"motion\": one of [static, slight_motion, strong_motion]\n\
     }\n\
     Answer with the JSON object only."
}

/// Extract and validate the first JSON object embedded in model output.
fn parse_label(content: &str) -> ClientResult<SemanticLabel> {
    let start = content
        .find('{')
        .ok_or_else(|| ClientError::invalid_response("No JSON found in vision response"))?;
    let end = content
        .rfind('}')
        .ok_or_else(|| ClientError::invalid_response("No JSON found in vision response"))?;
    if end < start {
        return Err(ClientError::invalid_response(
            "No JSON found in vision response",
        ));
    }

    serde_json::from_str::<SemanticLabel>(&content[start..=end])
        .map_err(|e| ClientError::invalid_response(format!("Label failed schema validation: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_models::{Emotion, ShotType};
    use serde_json::json;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn chat_body(content: &str) -> serde_json::Value {
        json!({"choices": [{"message": {"content": content}}]})
    }

    fn test_client(api_url: String) -> VisionClient {
        VisionClient::new(VisionConfig {
            api_url,
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            timeout: Duration::from_secs(5),
            retry: RetryPolicy::new("label_frame_test")
                .with_max_retries(2)
                .with_base_delay(Duration::from_millis(1)),
        })
        .unwrap()
    }

    fn temp_jpeg() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
        file
    }

    #[test]
    fn test_parse_label_plain_json() {
        let label = parse_label(
            r#"{"shot_type":"close_up","subject":"human_face","subtitle":"short_hook","emotion":"curiosity","motion":"static"}"#,
        )
        .unwrap();
        assert_eq!(label.shot_type, ShotType::CloseUp);
        assert_eq!(label.emotion, Emotion::Curiosity);
    }

    #[test]
    fn test_parse_label_with_surrounding_prose() {
        let content = "Sure! Here is the analysis:\n```json\n{\"shot_type\":\"wide\",\"subject\":\"object\",\"subtitle\":\"none\",\"emotion\":\"calm\",\"motion\":\"static\"}\n```";
        let label = parse_label(content).unwrap();
        assert_eq!(label.shot_type, ShotType::Wide);
    }

    #[test]
    fn test_parse_label_rejects_unknown_enum() {
        let err = parse_label(
            r#"{"shot_type":"dutch_angle","subject":"object","subtitle":"none","emotion":"calm","motion":"static"}"#,
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_label_rejects_no_json() {
        assert!(parse_label("I cannot analyze this image.").is_err());
    }

    #[tokio::test]
    async fn test_label_frame_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_body(
                r#"{"shot_type":"medium","subject":"screen_ui","subtitle":"sentence","emotion":"explanation","motion":"slight_motion"}"#,
            )))
            .mount(&server)
            .await;

        let client = test_client(format!("{}/", server.uri()));
        let frame = temp_jpeg();
        let result = client.label_frame(frame.path()).await;
        assert!(!result.is_degraded());
        assert_eq!(result.value().shot_type, ShotType::Medium);
    }

    #[tokio::test]
    async fn test_label_frame_invalid_retried_then_degraded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(chat_body("no json in this answer")),
            )
            .expect(3) // initial + 2 validation retries
            .mount(&server)
            .await;

        let client = test_client(format!("{}/", server.uri()));
        let frame = temp_jpeg();
        let result = client.label_frame(frame.path()).await;
        assert!(result.is_degraded());
        assert_eq!(*result.value(), SemanticLabel::fallback());
    }

    #[tokio::test]
    async fn test_label_frame_http_error_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(format!("{}/", server.uri()));
        let frame = temp_jpeg();
        let result = client.label_frame(frame.path()).await;
        assert!(result.is_degraded());
    }
}
