//! Coarse audio rhythm heuristics.
//!
//! These are deliberate approximations over a single volumedetect pass, not
//! real signal analysis. Silence and beat-drop detection return fixed
//! sentinel windows when their volume thresholds trip; downstream rule
//! logic only cares whether the collections are empty and how close the
//! entries sit to shot starts.

use std::path::Path;

use tracing::{debug, warn};

use blueprint_media::{extract_audio, measure_volume};
use blueprint_models::{EnergyCurve, RhythmSummary, Shot};

/// Mean volume below which the track is treated as containing silence.
const SILENCE_THRESHOLD_DB: f64 = -40.0;
/// Peak volume above which the track is treated as having a beat drop.
const BEAT_DROP_THRESHOLD_DB: f64 = -5.0;
/// Mean volume above which the energy trend reads high-to-low.
const HIGH_ENERGY_DB: f64 = -15.0;
/// Mean volume below which the energy trend reads low-to-high.
const LOW_ENERGY_DB: f64 = -35.0;

/// Sentinel silence window emitted when the silence threshold trips.
const SILENCE_SENTINEL: (f64, f64) = (0.0, 1.0);
/// Sentinel beat-drop timestamp emitted when the beat threshold trips.
const BEAT_DROP_SENTINEL: f64 = 1.8;

/// Derive the rhythm summary from volume statistics and the shot list.
///
/// Pure function; `analyze_rhythm` wraps it with the audio extraction I/O.
pub fn summarize_rhythm(mean_db: f64, peak_db: f64, shots: &[Shot]) -> RhythmSummary {
    RhythmSummary {
        beat_drop_at: detect_beat_drops(peak_db),
        silence_segments: detect_silence(mean_db),
        energy_curve: energy_curve(mean_db),
        cut_frequency: cut_frequency(shots),
        avg_volume_db: mean_db,
        peak_volume_db: peak_db,
        error: false,
    }
}

/// Extract the audio track, measure its volume and summarize the rhythm.
///
/// Best-effort: any extraction or probing failure yields the degraded
/// default summary instead of an error, so rhythm analysis can never abort
/// a pipeline run.
pub async fn analyze_rhythm(
    video_path: impl AsRef<Path>,
    audio_path: impl AsRef<Path>,
    shots: &[Shot],
) -> RhythmSummary {
    let video_path = video_path.as_ref();
    let audio_path = audio_path.as_ref();

    let stats = async {
        extract_audio(video_path, audio_path).await?;
        measure_volume(audio_path).await
    }
    .await;

    match stats {
        Ok(stats) => {
            let summary = summarize_rhythm(stats.mean_db, stats.peak_db, shots);
            debug!(
                energy_curve = %summary.energy_curve,
                cut_frequency = summary.cut_frequency,
                mean_db = stats.mean_db,
                peak_db = stats.peak_db,
                "Rhythm analysis complete"
            );
            summary
        }
        Err(e) => {
            warn!(error = %e, "Rhythm analysis failed, using degraded defaults");
            RhythmSummary::degraded()
        }
    }
}

fn detect_silence(mean_db: f64) -> Vec<(f64, f64)> {
    if mean_db < SILENCE_THRESHOLD_DB {
        vec![SILENCE_SENTINEL]
    } else {
        Vec::new()
    }
}

fn detect_beat_drops(peak_db: f64) -> Vec<f64> {
    if peak_db > BEAT_DROP_THRESHOLD_DB {
        vec![BEAT_DROP_SENTINEL]
    } else {
        Vec::new()
    }
}

fn energy_curve(mean_db: f64) -> EnergyCurve {
    if mean_db > HIGH_ENERGY_DB {
        EnergyCurve::HighToLow
    } else if mean_db < LOW_ENERGY_DB {
        EnergyCurve::LowToHigh
    } else {
        EnergyCurve::Stable
    }
}

/// Cuts per second over the full shot span; 0 for an empty shot list.
fn cut_frequency(shots: &[Shot]) -> f64 {
    match shots.last() {
        Some(last) if last.end > 0.0 => shots.len() as f64 / last.end,
        _ => 0.0,
    }
}
