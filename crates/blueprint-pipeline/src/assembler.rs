//! Scene Spec assembly.
//!
//! Pure aggregation: resolves each shot's semantic label (vision result if
//! trustworthy, inference fallback otherwise), classifies it, and wraps the
//! records with video-level statistics. No I/O, cannot fail; an empty shot
//! list yields an empty spec with `avg_shot_length = 0`.

use chrono::Utc;

use blueprint_models::{
    Degradable, RhythmSummary, SceneSpec, SemanticLabel, Shot, SpecMetadata, VideoMetadata,
};

use crate::classifier::classify_scene;
use crate::inference::infer_label;

/// Assemble the canonical Scene Spec for one video.
///
/// `labels` is aligned with `shots` by index; `None` means no keyframe was
/// available for that shot. Degraded labels are distrusted and replaced by
/// the inference fallback.
pub fn assemble_spec(
    video_id: &str,
    metadata: &VideoMetadata,
    shots: &[Shot],
    labels: &[Option<Degradable<SemanticLabel>>],
    rhythm: &RhythmSummary,
) -> SceneSpec {
    let avg_shot_length = avg_shot_length(shots);
    let total = shots.len();

    let scenes = shots
        .iter()
        .enumerate()
        .map(|(index, shot)| {
            let label = resolve_label(labels.get(index), shot, index, total, rhythm);
            classify_scene(shot, &label, rhythm, avg_shot_length)
        })
        .collect();

    SceneSpec {
        video_id: video_id.to_string(),
        total_duration: metadata.duration,
        total_shots: total,
        avg_shot_length,
        cut_frequency: rhythm.cut_frequency,
        overall_energy: rhythm.energy_curve,
        scenes,
        metadata: SpecMetadata::from(metadata),
        generated_at: Utc::now(),
    }
}

fn resolve_label(
    label: Option<&Option<Degradable<SemanticLabel>>>,
    shot: &Shot,
    index: usize,
    total: usize,
    rhythm: &RhythmSummary,
) -> SemanticLabel {
    match label {
        Some(Some(Degradable::Ok(label))) => *label,
        // Absent or degraded: infer from timing and rhythm instead
        _ => {
            let position = if total > 0 {
                index as f64 / total as f64
            } else {
                0.0
            };
            infer_label(shot.duration(), position, index, rhythm)
        }
    }
}

fn avg_shot_length(shots: &[Shot]) -> f64 {
    if shots.is_empty() {
        return 0.0;
    }
    let total: f64 = shots.iter().map(Shot::duration).sum();
    total / shots.len() as f64
}
