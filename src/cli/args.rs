//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for a cutting run
#[derive(Args, Debug, Clone, Default)]
pub struct CutArgs {
    /// JSON manifest or text file listing videos and frames; a video file
    /// starts interactive mode with that video
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Audio track of the videos (to change language)
    #[arg(short, long, allow_negative_numbers = true)]
    pub audio: Option<i64>,

    /// Extension appended to filenames given without one [default: mp4]
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Folder receiving the clips, must be empty or missing [default: output]
    #[arg(short, long, env = "FRAMECUT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Transcoder binary, looked up on PATH then in the working directory [default: ffmpeg]
    #[arg(long, env = "FRAMECUT_TRANSCODER")]
    pub transcoder: Option<String>,

    /// Separator between start and end of a frame [default: /]
    #[arg(long)]
    pub range_separator: Option<char>,

    /// Separator between frames on one line [default: _]
    #[arg(long)]
    pub frame_separator: Option<char>,
}
