//! Veo prompt generation from a Scene Spec.
//!
//! Prompts are assembled from fixed phrase tables keyed by the classifier's
//! enums, so prompt text is as deterministic as the spec it derives from.

use chrono::Utc;

use blueprint_models::{
    Emotion, PromptMetadata, RecommendedMotion, SceneRecord, SceneSpec, SceneType, ShotType,
    Subject, VeoPrompt, VeoPromptDoc,
};

fn scene_type_phrase(scene_type: SceneType) -> &'static str {
    match scene_type {
        SceneType::Hook => "An attention-grabbing opening shot",
        SceneType::Explanation => "A clear explanatory scene",
        SceneType::Content => "Main content presentation",
        SceneType::Emphasis => "An emphasized moment",
        SceneType::Transition => "A smooth transition",
        SceneType::Establishing => "An establishing wide shot",
    }
}

fn shot_type_phrase(shot_type: ShotType) -> &'static str {
    match shot_type {
        ShotType::CloseUp => "close-up shot",
        ShotType::Medium => "medium shot",
        ShotType::Wide => "wide angle shot",
        ShotType::Screen => "screen recording style",
        ShotType::Broll => "b-roll footage",
    }
}

fn subject_phrase(subject: Subject) -> &'static str {
    match subject {
        Subject::HumanFace => "focusing on a person's face",
        Subject::HumanBody => "showing a person",
        Subject::ScreenUi => "displaying a user interface",
        Subject::Object => "featuring an object",
        Subject::TextOnly => "with text overlay",
    }
}

fn emotion_phrase(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Curiosity => "with an intriguing and curious atmosphere",
        Emotion::Excitement => "with energetic and exciting mood",
        Emotion::Explanation => "with a calm and informative tone",
        Emotion::Tension => "with dramatic tension",
        Emotion::Calm => "with a peaceful and calm feeling",
    }
}

fn motion_phrase(motion: RecommendedMotion) -> &'static str {
    match motion {
        RecommendedMotion::ZoomIn => "slowly zooming in",
        RecommendedMotion::ZoomOut => "slowly zooming out",
        RecommendedMotion::Shake => "with dynamic camera shake",
        RecommendedMotion::QuickZoom => "with quick zoom effect",
        RecommendedMotion::SlowPan => "with slow panning movement",
        RecommendedMotion::PunchIn => "with punch-in effect",
        RecommendedMotion::SubtleZoom => "with subtle zoom",
        RecommendedMotion::None => "with static camera",
    }
}

/// Build the generation prompt for one scene. `index` is 1-based.
pub fn build_veo_prompt(scene: &SceneRecord, index: usize) -> VeoPrompt {
    let mut parts = vec![
        scene_type_phrase(scene.scene_type).to_string(),
        format!("filmed as a {}", shot_type_phrase(scene.shot_type)),
        subject_phrase(scene.subject).to_string(),
        emotion_phrase(scene.emotion).to_string(),
    ];

    // A static camera needs no phrase
    if scene.recommended_motion != RecommendedMotion::None {
        parts.push(motion_phrase(scene.recommended_motion).to_string());
    }

    parts.push(format!("Duration: {:.1} seconds", scene.duration));

    VeoPrompt {
        scene_index: index,
        shot_id: scene.shot_id,
        duration: scene.duration,
        prompt: format!("{}.", parts.join(", ")),
        importance: scene.importance,
        tags: scene.tags.clone(),
    }
}

/// Build the full prompt document for a Scene Spec.
pub fn build_prompt_doc(spec: &SceneSpec) -> VeoPromptDoc {
    let prompts = spec
        .scenes
        .iter()
        .enumerate()
        .map(|(i, scene)| build_veo_prompt(scene, i + 1))
        .collect();

    VeoPromptDoc {
        video_id: spec.video_id.clone(),
        total_scenes: spec.total_shots,
        total_duration: spec.total_duration,
        prompts,
        metadata: PromptMetadata {
            original_resolution: format!("{}x{}", spec.metadata.width, spec.metadata.height),
            original_fps: spec.metadata.fps,
            generated_at: Utc::now(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_models::{EnergyCurve, MotionLevel, SpecMetadata, SubtitleDensity};

    fn scene(
        scene_type: SceneType,
        shot_type: ShotType,
        motion: RecommendedMotion,
        duration: f64,
    ) -> SceneRecord {
        SceneRecord {
            shot_id: 3,
            start: 0.0,
            end: duration,
            duration,
            scene_type,
            shot_type,
            subject: Subject::HumanFace,
            text_density: SubtitleDensity::ShortHook,
            emotion: Emotion::Curiosity,
            motion_level: MotionLevel::SlightMotion,
            recommended_motion: motion,
            importance: 8,
            is_cut_point: false,
            tags: vec!["hook".to_string()],
        }
    }

    #[test]
    fn test_prompt_phrase_assembly() {
        let prompt = build_veo_prompt(
            &scene(
                SceneType::Hook,
                ShotType::CloseUp,
                RecommendedMotion::ZoomIn,
                1.2,
            ),
            1,
        );
        assert_eq!(
            prompt.prompt,
            "An attention-grabbing opening shot, filmed as a close-up shot, \
             focusing on a person's face, with an intriguing and curious atmosphere, \
             slowly zooming in, Duration: 1.2 seconds."
        );
        assert_eq!(prompt.scene_index, 1);
        assert_eq!(prompt.shot_id, 3);
        assert_eq!(prompt.importance, 8);
    }

    #[test]
    fn test_static_camera_omits_motion_phrase() {
        let prompt = build_veo_prompt(
            &scene(
                SceneType::Explanation,
                ShotType::Screen,
                RecommendedMotion::None,
                6.0,
            ),
            2,
        );
        assert!(!prompt.prompt.contains("static camera"));
        assert!(prompt.prompt.ends_with("Duration: 6.0 seconds."));
    }

    #[test]
    fn test_prompt_doc_indexes_from_one() {
        let spec = SceneSpec {
            video_id: "vid-doc".to_string(),
            total_duration: 10.0,
            total_shots: 2,
            avg_shot_length: 5.0,
            cut_frequency: 0.2,
            overall_energy: EnergyCurve::Stable,
            scenes: vec![
                scene(
                    SceneType::Hook,
                    ShotType::CloseUp,
                    RecommendedMotion::ZoomIn,
                    2.0,
                ),
                scene(
                    SceneType::Content,
                    ShotType::Medium,
                    RecommendedMotion::SubtleZoom,
                    8.0,
                ),
            ],
            metadata: SpecMetadata {
                width: 1920,
                height: 1080,
                fps: 29.97,
                has_audio: true,
            },
            generated_at: Utc::now(),
        };

        let doc = build_prompt_doc(&spec);
        assert_eq!(doc.prompts.len(), 2);
        assert_eq!(doc.prompts[0].scene_index, 1);
        assert_eq!(doc.prompts[1].scene_index, 2);
        assert_eq!(doc.total_scenes, 2);
        assert_eq!(doc.metadata.original_resolution, "1920x1080");
    }
}
