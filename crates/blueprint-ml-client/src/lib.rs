//! HTTP clients for the pipeline's external collaborators.
//!
//! This crate provides:
//! - Shot-detection microservice client with schema validation and retries
//! - Vision-labeling client with validation-only retries and a defaulted
//!   label on exhaustion
//! - Veo generation client with per-item failure capture
//! - A stateless linear-backoff retry policy shared by the clients

pub mod error;
pub mod retry;
pub mod shots;
pub mod types;
pub mod veo;
pub mod vision;

pub use error::{ClientError, ClientResult};
pub use retry::RetryPolicy;
pub use shots::{ShotDetectorClient, ShotDetectorConfig};
pub use veo::{VeoClient, VeoConfig};
pub use vision::{VisionClient, VisionConfig};
