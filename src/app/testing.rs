// In-memory ports for unit tests

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::error::FrameCutResult;
use crate::ports::*;

/// Filesystem where only the listed files exist
pub struct MemoryFs {
    files: HashSet<PathBuf>,
}

impl MemoryFs {
    pub fn new(files: &[&str]) -> Self {
        Self {
            files: files.iter().map(PathBuf::from).collect(),
        }
    }
}

impl FsPort for MemoryFs {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

/// Prompt answering from a fixed script, then reporting end of input
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }
}

impl PromptPort for ScriptedPrompt {
    fn prompt(&mut self, message: &str) -> FrameCutResult<Option<String>> {
        self.asked.push(message.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Transcoder recording every job, failing the outputs listed in `fail`
#[derive(Default)]
pub struct RecordingTranscoder {
    pub jobs: Vec<ClipJob>,
    pub fail: HashSet<PathBuf>,
}

impl RecordingTranscoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(outputs: &[&str]) -> Self {
        Self {
            jobs: Vec::new(),
            fail: outputs.iter().map(PathBuf::from).collect(),
        }
    }
}

impl TranscodePort for RecordingTranscoder {
    fn cut(&mut self, job: &ClipJob) -> FrameCutResult<ClipOutcome> {
        self.jobs.push(job.clone());
        if self.fail.contains(&job.output) {
            Ok(ClipOutcome::Failed {
                code: Some(1),
                stderr: "Invalid argument".to_string(),
            })
        } else {
            Ok(ClipOutcome::Success)
        }
    }
}
