//! Shared data models for the scene blueprint engine.
//!
//! This crate provides Serde-serializable types for:
//! - Shots and shot-level semantic labels
//! - Video-level rhythm summaries
//! - Classified scene records and the Scene Spec document
//! - Veo prompt and generation-report artifacts
//! - The `Degradable` result type for best-effort stage outputs

pub mod degradable;
pub mod prompt;
pub mod rhythm;
pub mod scene;
pub mod semantic;
pub mod shot;
pub mod spec;

// Re-export common types
pub use degradable::Degradable;
pub use prompt::{GenerationOutcome, GenerationReport, PromptMetadata, VeoPrompt, VeoPromptDoc};
pub use rhythm::{EnergyCurve, RhythmSummary};
pub use scene::{RecommendedMotion, SceneRecord, SceneType};
pub use semantic::{Emotion, MotionLevel, SemanticLabel, ShotType, Subject, SubtitleDensity};
pub use shot::{validate_shots, Shot, ShotValidationError};
pub use spec::{SceneSpec, SpecMetadata, VideoMetadata};
