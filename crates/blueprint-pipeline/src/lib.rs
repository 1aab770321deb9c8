//! Scene blueprint synthesis engine.
//!
//! This crate provides:
//! - Rhythm heuristics over volume statistics and shot lists
//! - The semantic inference fallback for unlabeled shots
//! - The rule-based scene classifier
//! - The Scene Spec assembler and Veo prompt builder
//! - The per-video pipeline orchestrator with per-stage failure isolation

pub mod assembler;
pub mod classifier;
pub mod config;
pub mod error;
pub mod generation;
pub mod inference;
pub mod pacer;
pub mod processor;
pub mod prompts;
pub mod rhythm;
pub mod stage;

pub use assembler::assemble_spec;
pub use classifier::classify_scene;
pub use config::PipelineConfig;
pub use error::{PipelineError, PipelineResult};
pub use generation::SceneGenerator;
pub use inference::infer_label;
pub use pacer::Pacer;
pub use processor::{ProcessOutcome, ProcessStats, VideoProcessor};
pub use prompts::{build_prompt_doc, build_veo_prompt};
pub use rhythm::summarize_rhythm;
pub use stage::Stage;
