//! Wire types for the collaborator HTTP contracts.

use blueprint_models::Shot;
use serde::{Deserialize, Serialize};

/// Shot-detection request body.
#[derive(Debug, Serialize)]
pub struct DetectShotsRequest {
    pub video_path: String,
}

/// Shot-detection response body.
#[derive(Debug, Deserialize)]
pub struct ShotsResponse {
    pub shots: Vec<Shot>,
}

/// Health endpoint response shared by the Python services.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Chat-completions request for the vision API.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Chat-completions response for the vision API.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    pub content: String,
}

/// Veo generation request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VeoRequest {
    pub prompt: String,
    /// Whole seconds; the API rejects fractional durations
    pub duration: u64,
    pub aspect_ratio: String,
    pub quality: String,
}

/// Veo generation response body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeoResponse {
    pub video_url: Option<String>,
    pub url: Option<String>,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_part_tagging() {
        let part = ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: "data:image/jpeg;base64,AAAA".to_string(),
            },
        };
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["type"], "image_url");
        assert!(json["image_url"]["url"].as_str().unwrap().starts_with("data:"));
    }

    #[test]
    fn test_shots_response_parsing() {
        let json = r#"{"shots": [{"shot": 0, "start": 0.0, "end": 2.4}]}"#;
        let parsed: ShotsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.shots.len(), 1);
        assert_eq!(parsed.shots[0].id, 0);
    }
}
