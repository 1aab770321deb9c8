//! Video-level audio rhythm summary.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall energy trend of the audio track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnergyCurve {
    HighToLow,
    LowToHigh,
    #[default]
    Stable,
    /// Declared for the vocabulary; the coarse heuristic never emits it.
    Dynamic,
}

impl EnergyCurve {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighToLow => "high_to_low",
            Self::LowToHigh => "low_to_high",
            Self::Stable => "stable",
            Self::Dynamic => "dynamic",
        }
    }
}

impl fmt::Display for EnergyCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse audio-energy signals derived once per video. Immutable.
///
/// `error` is the audit sentinel for a degraded analysis: when audio
/// extraction or volume probing fails the pipeline continues with this
/// summary's safe defaults and records that fact in the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RhythmSummary {
    /// Beat-drop timestamps in seconds, ascending
    pub beat_drop_at: Vec<f64>,
    /// Silence windows as (start, end) pairs in seconds, ascending
    pub silence_segments: Vec<(f64, f64)>,
    pub energy_curve: EnergyCurve,
    /// Cuts per second over the detected shot list
    pub cut_frequency: f64,
    pub avg_volume_db: f64,
    pub peak_volume_db: f64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub error: bool,
}

impl RhythmSummary {
    /// Safe default used when rhythm analysis fails upstream. Rhythm is
    /// best-effort and must never abort the pipeline.
    pub fn degraded() -> Self {
        Self {
            beat_drop_at: Vec::new(),
            silence_segments: Vec::new(),
            energy_curve: EnergyCurve::Stable,
            cut_frequency: 0.0,
            avg_volume_db: 0.0,
            peak_volume_db: 0.0,
            error: true,
        }
    }
}
