//! Representative frame extraction.

use std::path::{Path, PathBuf};

use crate::command::{FfmpegCommand, FfmpegRunner};
use crate::error::MediaResult;

/// A keyframe extracted for one shot.
#[derive(Debug, Clone)]
pub struct Keyframe {
    pub shot_id: u32,
    /// Timestamp the frame was taken at (shot midpoint)
    pub timestamp: f64,
    pub path: PathBuf,
}

/// Extract a single still frame at a timestamp.
pub async fn extract_keyframe(
    video_path: impl AsRef<Path>,
    timestamp: f64,
    output_path: impl AsRef<Path>,
) -> MediaResult<()> {
    let cmd = FfmpegCommand::new(video_path.as_ref(), output_path.as_ref())
        .seek(timestamp)
        .single_frame()
        .log_level("error");

    FfmpegRunner::new().run(&cmd).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframe_command_shape() {
        let cmd = FfmpegCommand::new("in.mp4", "out.jpg")
            .seek(3.6)
            .single_frame();
        let args = cmd.build_args();
        // Seek must precede the input for fast, single-frame extraction
        let ss = args.iter().position(|a| a == "-ss").unwrap();
        let input = args.iter().position(|a| a == "-i").unwrap();
        assert!(ss < input);
    }
}
