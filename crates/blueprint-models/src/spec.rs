//! The Scene Spec document and video metadata.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::rhythm::EnergyCurve;
use crate::scene::SceneRecord;

/// Probe output for a source video (media-metadata collaborator contract).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VideoMetadata {
    /// Duration in seconds
    pub duration: f64,
    /// Frame rate (fps)
    pub fps: f64,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Video codec name
    pub codec: String,
    /// Bitrate in bits/second
    pub bitrate: u64,
    /// File size in bytes
    pub size: u64,
    pub has_audio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_codec: Option<String>,
    /// Container format name
    pub format: String,
}

/// Video-level metadata embedded in a Scene Spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpecMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub has_audio: bool,
}

impl From<&VideoMetadata> for SpecMetadata {
    fn from(meta: &VideoMetadata) -> Self {
        Self {
            width: meta.width,
            height: meta.height,
            fps: meta.fps,
            has_audio: meta.has_audio,
        }
    }
}

/// The canonical scene blueprint for one video.
///
/// Created once per successful pipeline run and persisted as an immutable
/// artifact keyed by `video_id`; regeneration produces a new artifact with
/// a new `generated_at`. Invariant: `scenes.len() == total_shots`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneSpec {
    pub video_id: String,
    pub total_duration: f64,
    pub total_shots: usize,
    pub avg_shot_length: f64,
    pub cut_frequency: f64,
    pub overall_energy: EnergyCurve,
    /// Ordered by ascending start time
    pub scenes: Vec<SceneRecord>,
    pub metadata: SpecMetadata,
    pub generated_at: DateTime<Utc>,
}
