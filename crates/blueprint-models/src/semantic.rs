//! Shot-level semantic label definitions.
//!
//! These enums are the closed vocabulary the vision collaborator answers
//! with; the inference fallback produces the same vocabulary so downstream
//! consumers cannot tell the two apart.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Camera framing of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShotType {
    /// Tight framing on a face or detail
    CloseUp,
    /// Waist-up or comparable framing
    Medium,
    /// Full scene or environment
    Wide,
    /// Screen recording or UI capture
    Screen,
    /// Supplementary b-roll footage
    Broll,
}

impl ShotType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CloseUp => "close_up",
            Self::Medium => "medium",
            Self::Wide => "wide",
            Self::Screen => "screen",
            Self::Broll => "broll",
        }
    }
}

impl fmt::Display for ShotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Primary subject visible in a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    HumanFace,
    HumanBody,
    ScreenUi,
    Object,
    TextOnly,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HumanFace => "human_face",
            Self::HumanBody => "human_body",
            Self::ScreenUi => "screen_ui",
            Self::Object => "object",
            Self::TextOnly => "text_only",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How much on-screen text a shot carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubtitleDensity {
    None,
    ShortHook,
    Sentence,
    Paragraph,
}

impl SubtitleDensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ShortHook => "short_hook",
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
        }
    }

    /// True when any text is present at all.
    pub fn has_text(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for SubtitleDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual mood of a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Curiosity,
    Excitement,
    Explanation,
    Tension,
    Calm,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Curiosity => "curiosity",
            Self::Excitement => "excitement",
            Self::Explanation => "explanation",
            Self::Tension => "tension",
            Self::Calm => "calm",
        }
    }

    /// Emotions that raise scene importance.
    pub fn is_intense(&self) -> bool {
        matches!(self, Self::Excitement | Self::Tension)
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Perceived movement inside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MotionLevel {
    Static,
    SlightMotion,
    StrongMotion,
}

impl MotionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::SlightMotion => "slight_motion",
            Self::StrongMotion => "strong_motion",
        }
    }
}

impl fmt::Display for MotionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown semantic value: {0}")]
pub struct SemanticParseError(String);

impl FromStr for ShotType {
    type Err = SemanticParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "close_up" => Ok(Self::CloseUp),
            "medium" => Ok(Self::Medium),
            "wide" => Ok(Self::Wide),
            "screen" => Ok(Self::Screen),
            "broll" => Ok(Self::Broll),
            other => Err(SemanticParseError(other.to_string())),
        }
    }
}

/// Full semantic description of one shot.
///
/// Supplied by the vision collaborator when available, synthesized by the
/// inference fallback otherwise. Wire names match the vision API contract
/// (`subtitle`, not `subtitle_density`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SemanticLabel {
    pub shot_type: ShotType,
    pub subject: Subject,
    pub subtitle: SubtitleDensity,
    pub emotion: Emotion,
    pub motion: MotionLevel,
}

impl SemanticLabel {
    /// The neutral label used when the vision collaborator exhausts its
    /// retries: `medium/object/none/calm/slight_motion`.
    pub fn fallback() -> Self {
        Self {
            shot_type: ShotType::Medium,
            subject: Subject::Object,
            subtitle: SubtitleDensity::None,
            emotion: Emotion::Calm,
            motion: MotionLevel::SlightMotion,
        }
    }
}
