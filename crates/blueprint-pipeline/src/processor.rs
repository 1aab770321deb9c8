//! Per-video pipeline orchestrator.
//!
//! One `VideoProcessor` runs the full chain for a video:
//! metadata → shot detection → keyframes → semantic labeling → rhythm →
//! assembly → persistence. Stages are strictly sequential; only metadata
//! extraction, exhausted shot-detection retries and the final persist can
//! fail the run. Everything else degrades in place.

use std::path::Path;

use tokio::fs;
use tracing::{info, warn};
use uuid::Uuid;

use blueprint_media::{extract_keyframe, probe_video, Keyframe};
use blueprint_ml_client::{ShotDetectorClient, VisionClient};
use blueprint_models::{Degradable, SceneSpec, SemanticLabel, Shot, VideoMetadata};
use blueprint_storage::ArtifactStore;

use crate::assembler::assemble_spec;
use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::pacer::Pacer;
use crate::rhythm::analyze_rhythm;
use crate::stage::Stage;

/// Summary statistics of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStats {
    pub total_shots: usize,
    pub total_duration: f64,
    pub avg_shot_length: f64,
    pub keyframes_extracted: usize,
    /// Shots whose label came from the inference fallback rather than a
    /// trusted vision result
    pub labels_inferred: usize,
}

/// Result of a successful pipeline run.
#[derive(Debug)]
pub struct ProcessOutcome {
    pub video_id: String,
    pub spec: SceneSpec,
    pub spec_path: std::path::PathBuf,
    pub stats: ProcessStats,
}

/// Orchestrates the analysis pipeline for single videos.
///
/// Stateless between runs; concurrent videos get independent processor
/// instances (or share one, since every run keys its artifacts by a fresh
/// `video_id`).
pub struct VideoProcessor {
    config: PipelineConfig,
    shot_detector: ShotDetectorClient,
    vision: VisionClient,
    store: ArtifactStore,
}

impl VideoProcessor {
    pub fn new(
        config: PipelineConfig,
        shot_detector: ShotDetectorClient,
        vision: VisionClient,
        store: ArtifactStore,
    ) -> Self {
        Self {
            config,
            shot_detector,
            vision,
            store,
        }
    }

    /// Build a processor from environment variables.
    pub fn from_env() -> PipelineResult<Self> {
        let shot_detector = ShotDetectorClient::from_env()
            .map_err(|e| PipelineError::Config(e.to_string()))?;
        let vision =
            VisionClient::from_env().map_err(|e| PipelineError::Config(e.to_string()))?;
        Ok(Self::new(
            PipelineConfig::from_env(),
            shot_detector,
            vision,
            ArtifactStore::from_env(),
        ))
    }

    /// Run the full pipeline for one video file.
    pub async fn process(&self, video_path: impl AsRef<Path>) -> PipelineResult<ProcessOutcome> {
        let video_path = video_path.as_ref();
        let video_id = Uuid::new_v4().to_string();

        info!(video_id = %video_id, path = %video_path.display(), "Starting video processing");

        let metadata = self.extract_metadata(video_path).await?;
        let shots = self.detect_shots(video_path).await?;
        let keyframes = self.extract_keyframes(video_path, &shots, &video_id).await;
        let labels = self.label_keyframes(&shots, &keyframes).await;

        info!(
            stage = %Stage::Rhythm,
            step = Stage::Rhythm.step(),
            total = Stage::TOTAL,
            "Analyzing rhythm"
        );
        let rhythm =
            analyze_rhythm(video_path, self.prepare_audio_path(&video_id).await, &shots).await;

        info!(
            stage = %Stage::Assemble,
            step = Stage::Assemble.step(),
            total = Stage::TOTAL,
            "Assembling scene spec"
        );
        let spec = assemble_spec(&video_id, &metadata, &shots, &labels, &rhythm);

        info!(
            stage = %Stage::Persist,
            step = Stage::Persist.step(),
            total = Stage::TOTAL,
            "Persisting scene spec"
        );
        let spec_path = self.store.save_spec(&spec).await?;

        let labels_inferred = labels
            .iter()
            .filter(|l| !matches!(l, Some(Degradable::Ok(_))))
            .count();
        let stats = ProcessStats {
            total_shots: spec.total_shots,
            total_duration: spec.total_duration,
            avg_shot_length: spec.avg_shot_length,
            keyframes_extracted: keyframes.iter().flatten().count(),
            labels_inferred,
        };

        info!(
            video_id = %video_id,
            total_shots = stats.total_shots,
            avg_shot_length = stats.avg_shot_length,
            keyframes = stats.keyframes_extracted,
            inferred = stats.labels_inferred,
            "Processing complete"
        );

        Ok(ProcessOutcome {
            video_id,
            spec,
            spec_path,
            stats,
        })
    }

    async fn extract_metadata(&self, video_path: &Path) -> PipelineResult<VideoMetadata> {
        info!(
            stage = %Stage::Metadata,
            step = Stage::Metadata.step(),
            total = Stage::TOTAL,
            "Extracting video metadata"
        );
        let metadata = probe_video(video_path)
            .await
            .map_err(PipelineError::Metadata)?;
        info!(
            duration = metadata.duration,
            width = metadata.width,
            height = metadata.height,
            fps = metadata.fps,
            "Metadata extracted"
        );
        Ok(metadata)
    }

    async fn detect_shots(&self, video_path: &Path) -> PipelineResult<Vec<Shot>> {
        info!(
            stage = %Stage::Shots,
            step = Stage::Shots.step(),
            total = Stage::TOTAL,
            "Detecting shot boundaries"
        );
        let shots = self
            .shot_detector
            .detect_shots(&video_path.to_string_lossy())
            .await
            .map_err(PipelineError::ShotDetection)?;
        info!(count = shots.len(), "Shots detected");
        Ok(shots)
    }

    /// Extract one midpoint frame per shot. Per-shot failures are logged
    /// and leave a `None` slot; the stage itself never fails.
    async fn extract_keyframes(
        &self,
        video_path: &Path,
        shots: &[Shot],
        video_id: &str,
    ) -> Vec<Option<Keyframe>> {
        info!(
            stage = %Stage::Keyframes,
            step = Stage::Keyframes.step(),
            total = Stage::TOTAL,
            "Extracting keyframes"
        );

        let dir = self.config.keyframe_dir(video_id);
        if let Err(e) = fs::create_dir_all(&dir).await {
            warn!(error = %e, "Could not create keyframe directory, skipping keyframes");
            return vec![None; shots.len()];
        }

        let mut keyframes = Vec::with_capacity(shots.len());
        for shot in shots {
            let timestamp = shot.midpoint();
            let path = dir.join(format!("shot_{}.jpg", shot.id));
            match extract_keyframe(video_path, timestamp, &path).await {
                Ok(()) => keyframes.push(Some(Keyframe {
                    shot_id: shot.id,
                    timestamp,
                    path,
                })),
                Err(e) => {
                    warn!(shot_id = shot.id, error = %e, "Keyframe extraction failed, skipping shot");
                    keyframes.push(None);
                }
            }
        }

        info!(
            extracted = keyframes.iter().flatten().count(),
            total = shots.len(),
            "Keyframes extracted"
        );
        keyframes
    }

    /// Label each extracted keyframe, paced to respect the vision API's
    /// rate limits. Shots without a keyframe stay unlabeled; the assembler
    /// infers their semantics instead.
    async fn label_keyframes(
        &self,
        shots: &[Shot],
        keyframes: &[Option<Keyframe>],
    ) -> Vec<Option<Degradable<SemanticLabel>>> {
        info!(
            stage = %Stage::Semantics,
            step = Stage::Semantics.step(),
            total = Stage::TOTAL,
            "Labeling keyframes"
        );

        let mut pacer = Pacer::new(self.config.semantic_pace);
        let mut labels = Vec::with_capacity(shots.len());
        for keyframe in keyframes {
            match keyframe {
                Some(keyframe) => {
                    pacer.pace().await;
                    let label = self.vision.label_frame(&keyframe.path).await;
                    if let Some(reason) = label.reason() {
                        warn!(shot_id = keyframe.shot_id, reason = %reason, "Vision label degraded");
                    }
                    labels.push(Some(label));
                }
                None => labels.push(None),
            }
        }

        let trusted = labels
            .iter()
            .filter(|l| matches!(l, Some(Degradable::Ok(_))))
            .count();
        info!(trusted, total = shots.len(), "Semantic labeling complete");
        labels
    }

    /// Rhythm is best-effort, so a scratch-dir failure only degrades it:
    /// the extraction that follows will fail and fall back to defaults.
    async fn prepare_audio_path(&self, video_id: &str) -> std::path::PathBuf {
        let path = self.config.audio_path(video_id);
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent).await {
                warn!(error = %e, "Could not create audio scratch directory");
            }
        }
        path
    }
}
