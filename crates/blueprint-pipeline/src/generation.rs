//! Scene generation from a persisted Scene Spec.
//!
//! Builds the Veo prompt document, then calls the generation API once per
//! scene, sequentially and paced. Call failures are captured per item; the
//! batch always completes and the report records every outcome.

use tracing::{info, warn};

use blueprint_ml_client::VeoClient;
use blueprint_models::{GenerationReport, SceneSpec, VeoPromptDoc};
use blueprint_storage::ArtifactStore;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::pacer::Pacer;
use crate::prompts::build_prompt_doc;

/// Drives prompt generation and the per-scene generation batch.
pub struct SceneGenerator {
    config: PipelineConfig,
    veo: VeoClient,
    store: ArtifactStore,
}

impl SceneGenerator {
    pub fn new(config: PipelineConfig, veo: VeoClient, store: ArtifactStore) -> Self {
        Self { config, veo, store }
    }

    /// Build a generator from environment variables.
    pub fn from_env() -> PipelineResult<Self> {
        let veo = VeoClient::from_env().map_err(|e| PipelineError::Config(e.to_string()))?;
        Ok(Self::new(
            PipelineConfig::from_env(),
            veo,
            ArtifactStore::from_env(),
        ))
    }

    /// Derive the prompt document from a Scene Spec and persist it.
    pub async fn build_and_save_prompts(&self, spec: &SceneSpec) -> PipelineResult<VeoPromptDoc> {
        let doc = build_prompt_doc(spec);
        self.store.save_prompts(&doc).await?;
        info!(
            video_id = %doc.video_id,
            prompts = doc.prompts.len(),
            "Veo prompts generated"
        );
        Ok(doc)
    }

    /// Generate every scene in the document, sequentially and paced.
    ///
    /// Individual failures are captured in the report, never raised.
    pub async fn generate_all(&self, doc: &VeoPromptDoc) -> PipelineResult<GenerationReport> {
        let total = doc.prompts.len();
        let mut pacer = Pacer::new(self.config.generation_pace);
        let mut results = Vec::with_capacity(total);

        for prompt in &doc.prompts {
            pacer.pace().await;
            info!(
                scene = prompt.scene_index,
                total,
                importance = prompt.importance,
                "Generating scene"
            );
            let outcome = self.veo.generate_scene(prompt).await;
            if let Some(error) = &outcome.error {
                warn!(scene = prompt.scene_index, error = %error, "Scene generation failed");
            }
            results.push(outcome);
        }

        let report = GenerationReport::new(&doc.video_id, results);
        self.store.save_generation_report(&report).await?;
        info!(
            video_id = %report.video_id,
            succeeded = report.success_count,
            total = report.total_scenes,
            "Generation batch complete"
        );
        Ok(report)
    }

    /// Full generation flow for an already-processed video: load its spec,
    /// derive prompts, run the batch.
    pub async fn generate_for_video(&self, video_id: &str) -> PipelineResult<GenerationReport> {
        let spec = self.store.load_spec(video_id).await?;
        let doc = self.build_and_save_prompts(&spec).await?;
        self.generate_all(&doc).await
    }
}
