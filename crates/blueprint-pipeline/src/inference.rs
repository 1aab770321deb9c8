//! Semantic inference fallback.
//!
//! When a shot has no trustworthy vision label, its semantics are guessed
//! from shot duration, temporal position within the video, and the rhythm
//! trend. Total function over any non-negative duration and position in
//! [0, 1); every field is always populated.

use blueprint_models::{
    Emotion, EnergyCurve, MotionLevel, RhythmSummary, SemanticLabel, ShotType, Subject,
    SubtitleDensity,
};

/// Infer a semantic label for the shot at `index` out of `total` shots.
///
/// `position` is the normalized temporal position `index / total`.
pub fn infer_label(
    duration: f64,
    position: f64,
    index: usize,
    rhythm: &RhythmSummary,
) -> SemanticLabel {
    SemanticLabel {
        shot_type: infer_shot_type(duration, position, index),
        subject: infer_subject(duration, position),
        subtitle: infer_subtitle(duration, position),
        emotion: infer_emotion(duration, position, rhythm.energy_curve),
        motion: infer_motion(duration),
    }
}

fn infer_shot_type(duration: f64, position: f64, index: usize) -> ShotType {
    if duration < 1.5 {
        if index == 0 {
            ShotType::CloseUp
        } else {
            ShotType::Medium
        }
    } else if duration > 4.0 {
        ShotType::Wide
    } else if position < 0.3 {
        ShotType::CloseUp
    } else {
        ShotType::Medium
    }
}

fn infer_subject(duration: f64, position: f64) -> Subject {
    if position < 0.2 {
        Subject::HumanFace
    } else if position > 0.8 {
        Subject::TextOnly
    } else if duration > 3.0 {
        Subject::ScreenUi
    } else {
        Subject::Object
    }
}

fn infer_subtitle(duration: f64, position: f64) -> SubtitleDensity {
    if duration < 1.0 {
        SubtitleDensity::ShortHook
    } else if duration > 4.0 {
        SubtitleDensity::Paragraph
    } else if position < 0.3 {
        SubtitleDensity::ShortHook
    } else {
        SubtitleDensity::Sentence
    }
}

fn infer_emotion(duration: f64, position: f64, energy: EnergyCurve) -> Emotion {
    if position < 0.15 {
        Emotion::Curiosity
    } else if energy == EnergyCurve::HighToLow {
        if position < 0.5 {
            Emotion::Excitement
        } else {
            Emotion::Calm
        }
    } else if duration < 2.0 {
        Emotion::Excitement
    } else {
        Emotion::Explanation
    }
}

fn infer_motion(duration: f64) -> MotionLevel {
    if duration < 1.5 {
        MotionLevel::StrongMotion
    } else if duration > 4.0 {
        MotionLevel::Static
    } else {
        MotionLevel::SlightMotion
    }
}
