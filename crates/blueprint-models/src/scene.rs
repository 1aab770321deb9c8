//! Classified scene records.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::semantic::{Emotion, MotionLevel, ShotType, Subject, SubtitleDensity};

/// Editorial role of a scene within the video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SceneType {
    /// Attention-grabbing opener: close-up with on-screen text
    Hook,
    /// Short punchy moment
    Emphasis,
    /// Screen or UI walkthrough
    Explanation,
    /// Wide shot setting the scene
    Establishing,
    /// B-roll bridging two scenes
    Transition,
    /// Everything else
    Content,
}

impl SceneType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hook => "hook",
            Self::Emphasis => "emphasis",
            Self::Explanation => "explanation",
            Self::Establishing => "establishing",
            Self::Transition => "transition",
            Self::Content => "content",
        }
    }
}

impl fmt::Display for SceneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Camera motion recommended for regenerating a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedMotion {
    ZoomIn,
    ZoomOut,
    Shake,
    QuickZoom,
    SlowPan,
    PunchIn,
    SubtleZoom,
    None,
}

impl RecommendedMotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZoomIn => "zoom_in",
            Self::ZoomOut => "zoom_out",
            Self::Shake => "shake",
            Self::QuickZoom => "quick_zoom",
            Self::SlowPan => "slow_pan",
            Self::PunchIn => "punch_in",
            Self::SubtleZoom => "subtle_zoom",
            Self::None => "none",
        }
    }
}

impl fmt::Display for RecommendedMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One classified scene. Built exactly once per shot from the shot, its
/// resolved semantic label and the video rhythm; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SceneRecord {
    pub shot_id: u32,
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    #[serde(rename = "type")]
    pub scene_type: SceneType,
    pub shot_type: ShotType,
    pub subject: Subject,
    pub text_density: SubtitleDensity,
    pub emotion: Emotion,
    pub motion_level: MotionLevel,
    pub recommended_motion: RecommendedMotion,
    /// Editorial importance score, always in 1..=10
    pub importance: u8,
    pub is_cut_point: bool,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_type_wire_name() {
        let record = SceneRecord {
            shot_id: 1,
            start: 0.0,
            end: 1.5,
            duration: 1.5,
            scene_type: SceneType::Hook,
            shot_type: ShotType::CloseUp,
            subject: Subject::HumanFace,
            text_density: SubtitleDensity::ShortHook,
            emotion: Emotion::Curiosity,
            motion_level: MotionLevel::StrongMotion,
            recommended_motion: RecommendedMotion::ZoomIn,
            importance: 10,
            is_cut_point: false,
            tags: vec!["hook".to_string(), "fast_paced".to_string()],
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "hook");
        assert_eq!(json["recommended_motion"], "zoom_in");
        assert_eq!(json["text_density"], "short_hook");

        let back: SceneRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record, back);
    }
}
