//! Scene blueprint worker binary.
//!
//! Usage: `blueprint-worker <video-path> [--generate]`
//!
//! Processes one video into a Scene Spec; with `--generate`, also derives
//! Veo prompts and runs the generation batch.

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use blueprint_pipeline::{SceneGenerator, VideoProcessor};

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env()
        .add_directive("blueprint=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    let args: Vec<String> = std::env::args().collect();
    let (video_path, generate) = match parse_args(&args) {
        Some(parsed) => parsed,
        None => {
            eprintln!("Usage: blueprint-worker <video-path> [--generate]");
            std::process::exit(2);
        }
    };

    info!("Starting blueprint-worker");

    let processor = match VideoProcessor::from_env() {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to create processor: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = match processor.process(&video_path).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(
                stage = %e.stage(),
                status = e.status_code(),
                "Processing failed: {}",
                e
            );
            std::process::exit(1);
        }
    };

    info!(
        video_id = %outcome.video_id,
        spec_path = %outcome.spec_path.display(),
        shots = outcome.stats.total_shots,
        duration = outcome.stats.total_duration,
        "Scene spec ready"
    );

    let mut type_counts: std::collections::BTreeMap<&str, usize> = Default::default();
    for scene in &outcome.spec.scenes {
        *type_counts.entry(scene.scene_type.as_str()).or_default() += 1;
    }
    let top_importance = outcome
        .spec
        .scenes
        .iter()
        .map(|s| s.importance)
        .max()
        .unwrap_or(0);
    info!(
        scene_types = ?type_counts,
        top_importance,
        energy = %outcome.spec.overall_energy,
        "Blueprint summary"
    );

    if generate {
        let generator = match SceneGenerator::from_env() {
            Ok(g) => g,
            Err(e) => {
                error!("Failed to create generator: {}", e);
                std::process::exit(1);
            }
        };

        match generator.generate_for_video(&outcome.video_id).await {
            Ok(report) => {
                info!(
                    succeeded = report.success_count,
                    total = report.total_scenes,
                    "Generation finished"
                );
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> Option<(String, bool)> {
    let mut video_path = None;
    let mut generate = false;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--generate" => generate = true,
            path if video_path.is_none() => video_path = Some(path.to_string()),
            _ => return None,
        }
    }

    video_path.map(|p| (p, generate))
}
