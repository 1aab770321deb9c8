//! Filesystem artifact store.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, info};

use blueprint_models::{GenerationReport, SceneSpec, VeoPromptDoc};

use crate::error::{StorageError, StorageResult};

const SPECS_DIR: &str = "specs";
const PROMPTS_DIR: &str = "prompts";
const GENERATIONS_DIR: &str = "generations";

/// Summary row for listing processed videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecSummary {
    pub video_id: String,
    pub duration: f64,
    pub shots: usize,
    pub generated_at: DateTime<Utc>,
}

/// Flat-JSON artifact store rooted at a directory.
///
/// Each artifact file is keyed by `video_id`; videos never share files,
/// so concurrent pipeline instances have no write contention.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `root`. Subdirectories are created lazily.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create from environment variables (`BLUEPRINT_STORAGE_DIR`,
    /// default `./storage`).
    pub fn from_env() -> Self {
        let root =
            std::env::var("BLUEPRINT_STORAGE_DIR").unwrap_or_else(|_| "./storage".to_string());
        Self::new(root)
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist a Scene Spec; returns the artifact path.
    pub async fn save_spec(&self, spec: &SceneSpec) -> StorageResult<PathBuf> {
        let path = self.artifact_path(SPECS_DIR, &spec.video_id)?;
        self.write_json(&path, spec).await?;
        info!(video_id = %spec.video_id, path = %path.display(), "Scene spec persisted");
        Ok(path)
    }

    /// Load the Scene Spec for a video.
    pub async fn load_spec(&self, video_id: &str) -> StorageResult<SceneSpec> {
        let path = self.artifact_path(SPECS_DIR, video_id)?;
        self.read_json(&path, video_id).await
    }

    /// List summaries of all persisted Scene Specs.
    pub async fn list_specs(&self) -> StorageResult<Vec<SpecSummary>> {
        let dir = self.root.join(SPECS_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        let mut entries = fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let content = fs::read_to_string(&path).await?;
            let spec: SceneSpec = serde_json::from_str(&content)?;
            summaries.push(SpecSummary {
                video_id: spec.video_id,
                duration: spec.total_duration,
                shots: spec.total_shots,
                generated_at: spec.generated_at,
            });
        }

        summaries.sort_by(|a, b| a.generated_at.cmp(&b.generated_at));
        Ok(summaries)
    }

    /// Persist a Veo prompt document; returns the artifact path.
    pub async fn save_prompts(&self, doc: &VeoPromptDoc) -> StorageResult<PathBuf> {
        let path = self.artifact_path(PROMPTS_DIR, &doc.video_id)?;
        self.write_json(&path, doc).await?;
        info!(video_id = %doc.video_id, path = %path.display(), "Veo prompts persisted");
        Ok(path)
    }

    /// Load the prompt document for a video.
    pub async fn load_prompts(&self, video_id: &str) -> StorageResult<VeoPromptDoc> {
        let path = self.artifact_path(PROMPTS_DIR, video_id)?;
        self.read_json(&path, video_id).await
    }

    /// Persist a generation report; returns the artifact path.
    pub async fn save_generation_report(
        &self,
        report: &GenerationReport,
    ) -> StorageResult<PathBuf> {
        let path = self.artifact_path(GENERATIONS_DIR, &report.video_id)?;
        self.write_json(&path, report).await?;
        info!(video_id = %report.video_id, path = %path.display(), "Generation report persisted");
        Ok(path)
    }

    /// Load the generation report for a video.
    pub async fn load_generation_report(&self, video_id: &str) -> StorageResult<GenerationReport> {
        let path = self.artifact_path(GENERATIONS_DIR, video_id)?;
        self.read_json(&path, video_id).await
    }

    fn artifact_path(&self, dir: &str, video_id: &str) -> StorageResult<PathBuf> {
        // Ids become file names; reject anything that could escape the store
        if video_id.is_empty()
            || !video_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(StorageError::invalid_key(video_id));
        }
        Ok(self.root.join(dir).join(format!("{video_id}.json")))
    }

    /// Whole-file replace write: serialize to a temp sibling, then rename.
    async fn write_json<T: Serialize>(&self, path: &Path, value: &T) -> StorageResult<()> {
        let parent = path.parent().expect("artifact path has a parent");
        fs::create_dir_all(parent).await?;

        let json = serde_json::to_string_pretty(value)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes()).await?;
        fs::rename(&tmp, path).await?;

        debug!(path = %path.display(), bytes = json.len(), "Artifact written");
        Ok(())
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &Path, key: &str) -> StorageResult<T> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StorageError::not_found(key));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_models::{EnergyCurve, GenerationOutcome, SpecMetadata};

    fn sample_spec(video_id: &str) -> SceneSpec {
        SceneSpec {
            video_id: video_id.to_string(),
            total_duration: 12.5,
            total_shots: 0,
            avg_shot_length: 0.0,
            cut_frequency: 0.0,
            overall_energy: EnergyCurve::Stable,
            scenes: Vec::new(),
            metadata: SpecMetadata {
                width: 1280,
                height: 720,
                fps: 30.0,
                has_audio: true,
            },
            generated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_spec_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let spec = sample_spec("vid-round-trip");
        let path = store.save_spec(&spec).await.unwrap();
        assert!(path.exists());

        let loaded = store.load_spec("vid-round-trip").await.unwrap();
        assert_eq!(spec, loaded);
    }

    #[tokio::test]
    async fn test_load_missing_spec() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let err = store.load_spec("missing").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_video_id_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let err = store.load_spec("../escape").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn test_list_specs_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let mut older = sample_spec("older");
        older.generated_at = Utc::now() - chrono::Duration::hours(1);
        let newer = sample_spec("newer");

        store.save_spec(&newer).await.unwrap();
        store.save_spec(&older).await.unwrap();

        let listed = store.list_specs().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].video_id, "older");
        assert_eq!(listed[1].video_id, "newer");
    }

    #[tokio::test]
    async fn test_list_specs_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("never-created"));
        assert!(store.list_specs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let mut spec = sample_spec("vid-1");
        store.save_spec(&spec).await.unwrap();

        spec.total_duration = 99.0;
        store.save_spec(&spec).await.unwrap();

        let loaded = store.load_spec("vid-1").await.unwrap();
        assert_eq!(loaded.total_duration, 99.0);
        // No temp file left behind
        assert!(!dir.path().join("specs").join("vid-1.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_generation_report_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let report = GenerationReport::new(
            "vid-gen",
            vec![GenerationOutcome::failure(1, 0, "quota exhausted")],
        );
        store.save_generation_report(&report).await.unwrap();
        let loaded = store.load_generation_report("vid-gen").await.unwrap();
        assert_eq!(report, loaded);
    }
}
