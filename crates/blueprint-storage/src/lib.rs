//! Flat-JSON artifact storage.
//!
//! One file per artifact, keyed by `video_id`. Writes are whole-file
//! replacements (temp file + rename) so concurrent readers never observe a
//! partially written document.

pub mod error;
pub mod store;

pub use error::{StorageError, StorageResult};
pub use store::{ArtifactStore, SpecSummary};
