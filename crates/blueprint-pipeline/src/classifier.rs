//! Rule-based scene classifier.
//!
//! Per shot, four ordered rule sets decide scene type, recommended motion,
//! importance and cut-point eligibility. Rule order and thresholds are
//! contractual constants; downstream prompt generation depends on output
//! parity, so change them only together with the artifact version.

use blueprint_models::{
    RecommendedMotion, RhythmSummary, SceneRecord, SceneType, SemanticLabel, Shot, ShotType,
    Subject,
};

/// Shots shorter than this are hooks or emphasis moments.
const SHORT_SCENE_SECS: f64 = 2.5;
/// Below this duration an excited scene gets a quick zoom instead of shake,
/// and the shot earns the `fast_paced` tag.
const FAST_SCENE_SECS: f64 = 2.0;
/// Above this duration the shot earns the `slow_paced` tag.
const SLOW_SCENE_SECS: f64 = 5.0;
/// Shots shorter than this fraction of the average length gain importance.
const SHORT_VS_AVG_RATIO: f64 = 0.6;
/// A beat drop within this window of the shot start marks a cut point.
const BEAT_CUT_WINDOW_SECS: f64 = 0.3;
/// A silence-segment end within this window of the shot start marks a cut
/// point.
const SILENCE_CUT_WINDOW_SECS: f64 = 0.2;
/// Importance scoring baseline before bonuses, clamped to 1..=10.
const BASE_IMPORTANCE: i32 = 5;

/// Classify one shot into a scene record.
///
/// Deterministic: identical inputs always produce an identical record.
pub fn classify_scene(
    shot: &Shot,
    label: &SemanticLabel,
    rhythm: &RhythmSummary,
    avg_shot_length: f64,
) -> SceneRecord {
    let duration = shot.duration();
    let scene_type = scene_type(duration, label);

    SceneRecord {
        shot_id: shot.id,
        start: shot.start,
        end: shot.end,
        duration,
        scene_type,
        shot_type: label.shot_type,
        subject: label.subject,
        text_density: label.subtitle,
        emotion: label.emotion,
        motion_level: label.motion,
        recommended_motion: recommended_motion(label, duration, rhythm),
        importance: importance(duration, label, scene_type, avg_shot_length),
        is_cut_point: is_cut_point(shot, rhythm),
        tags: tags(label, scene_type, duration),
    }
}

fn scene_type(duration: f64, label: &SemanticLabel) -> SceneType {
    let hook_framing = label.shot_type == ShotType::CloseUp && label.subtitle.has_text();

    if duration < SHORT_SCENE_SECS {
        return if hook_framing {
            SceneType::Hook
        } else {
            SceneType::Emphasis
        };
    }
    if hook_framing {
        return SceneType::Hook;
    }
    if label.shot_type == ShotType::Screen
        || (label.shot_type == ShotType::Medium && label.subject == Subject::ScreenUi)
    {
        return SceneType::Explanation;
    }
    if label.shot_type == ShotType::Wide {
        return SceneType::Establishing;
    }
    if label.shot_type == ShotType::Broll {
        return SceneType::Transition;
    }
    SceneType::Content
}

fn recommended_motion(
    label: &SemanticLabel,
    duration: f64,
    rhythm: &RhythmSummary,
) -> RecommendedMotion {
    use blueprint_models::Emotion;

    if label.shot_type == ShotType::CloseUp && label.emotion == Emotion::Curiosity {
        return RecommendedMotion::ZoomIn;
    }
    if label.emotion == Emotion::Excitement {
        return if duration < FAST_SCENE_SECS {
            RecommendedMotion::QuickZoom
        } else {
            RecommendedMotion::Shake
        };
    }
    if label.shot_type == ShotType::Wide && label.emotion == Emotion::Calm {
        return RecommendedMotion::SlowPan;
    }
    if !rhythm.beat_drop_at.is_empty() {
        return RecommendedMotion::PunchIn;
    }
    if label.shot_type == ShotType::Screen {
        return RecommendedMotion::None;
    }
    RecommendedMotion::SubtleZoom
}

fn importance(
    duration: f64,
    label: &SemanticLabel,
    scene_type: SceneType,
    avg_shot_length: f64,
) -> u8 {
    let mut score = BASE_IMPORTANCE;

    if scene_type == SceneType::Hook {
        score += 3;
    }
    if label.subtitle.has_text() {
        score += 2;
    }
    if label.shot_type == ShotType::CloseUp {
        score += 1;
    }
    if label.emotion.is_intense() {
        score += 1;
    }
    // Markedly shorter than average usually means an editorial highlight
    if duration < avg_shot_length * SHORT_VS_AVG_RATIO {
        score += 1;
    }

    score.clamp(1, 10) as u8
}

fn is_cut_point(shot: &Shot, rhythm: &RhythmSummary) -> bool {
    let near_beat = rhythm
        .beat_drop_at
        .iter()
        .any(|&t| (t - shot.start).abs() < BEAT_CUT_WINDOW_SECS);
    let after_silence = rhythm
        .silence_segments
        .iter()
        .any(|&(_, end)| (end - shot.start).abs() < SILENCE_CUT_WINDOW_SECS);

    near_beat || after_silence
}

fn tags(label: &SemanticLabel, scene_type: SceneType, duration: f64) -> Vec<String> {
    let mut tags = vec![scene_type.as_str().to_string()];

    if duration < FAST_SCENE_SECS {
        tags.push("fast_paced".to_string());
    }
    if duration > SLOW_SCENE_SECS {
        tags.push("slow_paced".to_string());
    }
    if label.subtitle.has_text() {
        tags.push("has_text".to_string());
    }
    if label.subject == Subject::HumanFace {
        tags.push("talking_head".to_string());
    }
    if label.shot_type == ShotType::Screen {
        tags.push("screen_recording".to_string());
    }

    tags
}
