// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use crate::domain::model::Frame;
use crate::error::FrameCutResult;

/// Port for filesystem queries made while resolving and cutting
pub trait FsPort {
    /// Whether a regular file exists at the path
    fn is_file(&self, path: &Path) -> bool;
}

/// Port for line-based console interaction
pub trait PromptPort {
    /// Show the message and read one line, `None` once input is exhausted
    fn prompt(&mut self, message: &str) -> FrameCutResult<Option<String>>;
}

/// One transcoder invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipJob {
    pub input: PathBuf,
    pub frame: Frame,
    pub audio_track: u32,
    pub output: PathBuf,
}

/// What the transcoder reported for a finished invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipOutcome {
    /// Exit status zero
    Success,
    /// Non-zero exit, or killed by a signal when `code` is `None`
    Failed { code: Option<i32>, stderr: String },
}

/// Port for the external transcoder
pub trait TranscodePort {
    /// Run one clip to completion; `Err` means the process never ran
    fn cut(&mut self, job: &ClipJob) -> FrameCutResult<ClipOutcome>;
}
