//! Veo prompt and generation-report artifacts derived from a Scene Spec.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One generation prompt, derived deterministically from a scene record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VeoPrompt {
    /// 1-based scene index within the spec
    pub scene_index: usize,
    pub shot_id: u32,
    pub duration: f64,
    pub prompt: String,
    pub importance: u8,
    pub tags: Vec<String>,
}

/// Metadata block of a prompt document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptMetadata {
    /// e.g. "1920x1080"
    pub original_resolution: String,
    pub original_fps: f64,
    pub generated_at: DateTime<Utc>,
}

/// The persisted prompt document for one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VeoPromptDoc {
    pub video_id: String,
    pub total_scenes: usize,
    pub total_duration: f64,
    pub prompts: Vec<VeoPrompt>,
    pub metadata: PromptMetadata,
}

/// Result of one generation call. Failures are captured, not raised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOutcome {
    pub scene_index: usize,
    pub shot_id: u32,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl GenerationOutcome {
    pub fn success(scene_index: usize, shot_id: u32, video_url: impl Into<String>) -> Self {
        Self {
            scene_index,
            shot_id,
            success: true,
            video_url: Some(video_url.into()),
            error: None,
            generated_at: Some(Utc::now()),
        }
    }

    pub fn failure(scene_index: usize, shot_id: u32, error: impl Into<String>) -> Self {
        Self {
            scene_index,
            shot_id,
            success: false,
            video_url: None,
            error: Some(error.into()),
            generated_at: None,
        }
    }
}

/// The persisted generation report for one video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub video_id: String,
    pub generated_at: DateTime<Utc>,
    pub total_scenes: usize,
    pub success_count: usize,
    pub results: Vec<GenerationOutcome>,
}

impl GenerationReport {
    /// Build a report from per-scene outcomes.
    pub fn new(video_id: impl Into<String>, results: Vec<GenerationOutcome>) -> Self {
        let success_count = results.iter().filter(|r| r.success).count();
        Self {
            video_id: video_id.into(),
            generated_at: Utc::now(),
            total_scenes: results.len(),
            success_count,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_constructors() {
        let ok = GenerationOutcome::success(1, 4, "https://cdn.example/clip.mp4");
        assert!(ok.success);
        assert!(ok.video_url.is_some());
        assert!(ok.error.is_none());

        let failed = GenerationOutcome::failure(2, 5, "timeout");
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("timeout"));
        assert!(failed.generated_at.is_none());
    }

    #[test]
    fn test_report_success_count() {
        let report = GenerationReport::new(
            "vid-1",
            vec![
                GenerationOutcome::success(1, 0, "u1"),
                GenerationOutcome::failure(2, 1, "rate limited"),
                GenerationOutcome::success(3, 2, "u2"),
            ],
        );
        assert_eq!(report.total_scenes, 3);
        assert_eq!(report.success_count, 2);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let prompt = VeoPrompt {
            scene_index: 1,
            shot_id: 0,
            duration: 2.5,
            prompt: "A video scene.".to_string(),
            importance: 5,
            tags: vec!["content".to_string()],
        };
        let json = serde_json::to_value(&prompt).unwrap();
        assert!(json.get("sceneIndex").is_some());
        assert!(json.get("shotId").is_some());
    }
}
