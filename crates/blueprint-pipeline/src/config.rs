//! Pipeline configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Inter-call delay for the semantics stage.
const DEFAULT_SEMANTIC_PACE_MS: u64 = 500;
/// Inter-call delay for the generation stage.
const DEFAULT_GENERATION_PACE_MS: u64 = 2000;

/// Configuration for the pipeline orchestrator.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Scratch directory for keyframes and extracted audio
    pub work_dir: PathBuf,
    /// Minimum interval between vision-labeling calls
    pub semantic_pace: Duration,
    /// Minimum interval between generation calls
    pub generation_pace: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("./storage"),
            semantic_pace: Duration::from_millis(DEFAULT_SEMANTIC_PACE_MS),
            generation_pace: Duration::from_millis(DEFAULT_GENERATION_PACE_MS),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            work_dir: std::env::var("BLUEPRINT_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.work_dir),
            semantic_pace: env_millis("BLUEPRINT_SEMANTIC_PACE_MS", defaults.semantic_pace),
            generation_pace: env_millis("BLUEPRINT_GENERATION_PACE_MS", defaults.generation_pace),
        }
    }

    /// Keyframe output directory for one video.
    pub fn keyframe_dir(&self, video_id: &str) -> PathBuf {
        self.work_dir.join("keyframes").join(video_id)
    }

    /// Extracted-audio path for one video.
    pub fn audio_path(&self, video_id: &str) -> PathBuf {
        self.work_dir.join("audio").join(format!("{video_id}.wav"))
    }
}

fn env_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.semantic_pace, Duration::from_millis(500));
        assert_eq!(config.generation_pace, Duration::from_millis(2000));
        assert_eq!(config.work_dir, PathBuf::from("./storage"));
    }

    #[test]
    fn test_scratch_paths() {
        let config = PipelineConfig::default();
        assert_eq!(
            config.keyframe_dir("vid-1"),
            PathBuf::from("./storage/keyframes/vid-1")
        );
        assert_eq!(
            config.audio_path("vid-1"),
            PathBuf::from("./storage/audio/vid-1.wav")
        );
    }
}
