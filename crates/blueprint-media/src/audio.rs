//! Audio extraction and volume statistics.

use std::path::Path;
use tracing::warn;

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;

/// Fallback mean volume when volumedetect output cannot be parsed.
const DEFAULT_MEAN_DB: f64 = -30.0;
/// Fallback peak volume when volumedetect output cannot be parsed.
const DEFAULT_PEAK_DB: f64 = -10.0;

/// Volume statistics from FFmpeg's volumedetect filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeStats {
    pub mean_db: f64,
    pub peak_db: f64,
}

/// Extract the audio track as mono 44.1 kHz PCM WAV.
pub async fn extract_audio(
    video_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> MediaResult<()> {
    let cmd = FfmpegCommand::new(video_path.as_ref(), output_path.as_ref())
        .no_video()
        .audio_codec("pcm_s16le")
        .audio_rate(44_100)
        .audio_channels(1);

    FfmpegRunner::new().run(&cmd).await
}

/// Measure mean and peak volume of an audio file.
///
/// Runs `-af volumedetect -f null -` and parses the report FFmpeg prints
/// to stderr. Missing fields fall back to -30 / -10 dB so a noisy report
/// still yields usable statistics.
pub async fn measure_volume(audio_path: impl AsRef<Path>) -> MediaResult<VolumeStats> {
    let cmd = FfmpegCommand::analysis(audio_path.as_ref()).audio_filter("volumedetect");

    let stderr = FfmpegRunner::new().run_capture_stderr(&cmd).await?;
    Ok(parse_volumedetect(&stderr))
}

/// Parse the volumedetect stderr report.
fn parse_volumedetect(stderr: &str) -> VolumeStats {
    let mean_db = find_db_value(stderr, "mean_volume:");
    let peak_db = find_db_value(stderr, "max_volume:");

    if mean_db.is_none() || peak_db.is_none() {
        warn!("volumedetect output incomplete, using default volume stats");
    }

    VolumeStats {
        mean_db: mean_db.unwrap_or(DEFAULT_MEAN_DB),
        peak_db: peak_db.unwrap_or(DEFAULT_PEAK_DB),
    }
}

/// Find a `<key> <value> dB` reading in volumedetect output.
fn find_db_value(text: &str, key: &str) -> Option<f64> {
    for line in text.lines() {
        if let Some(idx) = line.find(key) {
            let rest = line[idx + key.len()..].trim();
            let value = rest.split_whitespace().next()?;
            return value.parse::<f64>().ok();
        }
    }
    None
}
