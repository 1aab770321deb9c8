//! FFmpeg CLI wrapper for the scene blueprint pipeline.
//!
//! This crate provides:
//! - Type-safe FFmpeg command building
//! - FFprobe metadata extraction
//! - Single-frame keyframe extraction at a timestamp
//! - Mono PCM audio extraction and volumedetect statistics

pub mod audio;
pub mod command;
pub mod error;
pub mod keyframe;
pub mod probe;

pub use audio::{extract_audio, measure_volume, VolumeStats};
pub use command::{check_ffmpeg, check_ffprobe, FfmpegCommand, FfmpegRunner};
pub use error::{MediaError, MediaResult};
pub use keyframe::{extract_keyframe, Keyframe};
pub use probe::probe_video;
