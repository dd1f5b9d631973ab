//! FFmpeg execution adapter
//!
//! Runs one ffmpeg process per clip and reports its exit status.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{FrameCutError, FrameCutResult};
use crate::ports::*;

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter {
    binary: PathBuf,
}

impl FFmpegAdapter {
    /// Create an adapter for an already located binary
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Locate the binary on PATH, then as a local executable
    pub fn locate(binary: &str) -> FrameCutResult<Self> {
        if let Ok(path) = which::which(binary) {
            debug!("Transcoder found at {}", path.display());
            return Ok(Self::new(path));
        }

        let candidates = [
            Path::new(".").join(binary),
            Path::new(".").join(format!("{}.exe", binary)),
        ];
        for candidate in candidates {
            if candidate.is_file() {
                debug!("Transcoder found locally at {}", candidate.display());
                return Ok(Self::new(candidate));
            }
        }

        Err(FrameCutError::TranscoderNotFound {
            binary: binary.to_string(),
        })
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Arguments for one clip, video stream 0 plus the selected audio stream
    pub fn build_args(job: &ClipJob) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error", "-i"]
            .iter()
            .map(OsString::from)
            .collect();
        args.push(job.input.clone().into_os_string());
        args.extend(
            [
                "-ss".to_string(),
                job.frame.start.clone(),
                "-to".to_string(),
                job.frame.end.clone(),
                "-map_chapters".to_string(),
                "-1".to_string(),
                "-map".to_string(),
                "0:v:0".to_string(),
                "-map".to_string(),
                format!("0:a:{}", job.audio_track),
            ]
            .into_iter()
            .map(OsString::from),
        );
        args.push(job.output.clone().into_os_string());
        args
    }
}

impl TranscodePort for FFmpegAdapter {
    fn cut(&mut self, job: &ClipJob) -> FrameCutResult<ClipOutcome> {
        let args = Self::build_args(job);
        debug!(
            "Running {} {}",
            self.binary.display(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .output()?;

        if output.status.success() {
            Ok(ClipOutcome::Success)
        } else {
            Ok(ClipOutcome::Failed {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}
