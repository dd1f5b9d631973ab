// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{FrameCutError, FrameCutResult};

/// Characters every timecode may use regardless of separator configuration
pub const TIMECODE_DIGITS: &str = "0123456789:";

/// Default range separator, as in `5:22/5:35`
pub const DEFAULT_RANGE_SEPARATOR: char = '/';

/// Default frame separator, as in `5:22/5:35_6:00/6:10`
pub const DEFAULT_FRAME_SEPARATOR: char = '_';

/// One clip to extract, delimited by two lexical timecodes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Frame {
    pub start: String,
    pub end: String,
}

impl Frame {
    /// Create a new frame from start and end timecodes
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Range and frame separators used by every input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    range: char,
    frame: char,
}

impl Separators {
    /// Create separators, rejecting pairs that would make timecodes ambiguous
    pub fn new(range: char, frame: char) -> FrameCutResult<Self> {
        if range == frame {
            return Err(FrameCutError::InvalidSeparators {
                message: format!("range and frame separators are both '{}'", range),
            });
        }
        for sep in [range, frame] {
            if TIMECODE_DIGITS.contains(sep) || sep.is_whitespace() {
                return Err(FrameCutError::InvalidSeparators {
                    message: format!("'{}' cannot be used as a separator", sep),
                });
            }
        }
        Ok(Self { range, frame })
    }

    /// Character dividing start and end inside one token
    pub fn range(&self) -> char {
        self.range
    }

    /// Character joining several tokens on one line
    pub fn frame(&self) -> char {
        self.frame
    }

    /// Full set of characters a timecode line may contain
    pub fn timecode_alphabet(&self) -> String {
        let mut alphabet = String::from(TIMECODE_DIGITS);
        alphabet.push(self.range);
        alphabet.push(self.frame);
        alphabet
    }

    /// Whether the text contains either separator
    pub fn appears_in(&self, text: &str) -> bool {
        text.contains(self.range) || text.contains(self.frame)
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE_SEPARATOR,
            frame: DEFAULT_FRAME_SEPARATOR,
        }
    }
}

/// Frames requested for one video, plus tokens that failed to parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameList {
    pub frames: Vec<Frame>,
    pub rejected: Vec<String>,
}

impl FrameList {
    /// Create an empty frame list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            rejected: Vec::new(),
        }
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Record a token that could not be turned into a frame
    pub fn reject(&mut self, token: impl Into<String>) {
        self.rejected.push(token.into());
    }

    /// Append the parsed and rejected parts of another list
    pub fn extend(&mut self, other: FrameList) {
        self.frames.extend(other.frames);
        self.rejected.extend(other.rejected);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty() && self.rejected.is_empty()
    }
}

/// Insertion-ordered mapping of video name to its frames
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobTable {
    entries: Vec<(String, FrameList)>,
}

impl JobTable {
    /// Create an empty job table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a video, replacing the frames of an existing key in place
    pub fn insert(&mut self, video: impl Into<String>, frames: FrameList) {
        let video = video.into();
        match self.entries.iter_mut().find(|(name, _)| *name == video) {
            Some((_, existing)) => *existing = frames,
            None => self.entries.push((video, frames)),
        }
    }

    pub fn get(&self, video: &str) -> Option<&FrameList> {
        self.entries
            .iter()
            .find(|(name, _)| name == video)
            .map(|(_, frames)| frames)
    }

    pub fn get_mut(&mut self, video: &str) -> Option<&mut FrameList> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == video)
            .map(|(_, frames)| frames)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of parsed frames across all videos
    pub fn frame_count(&self) -> usize {
        self.entries.iter().map(|(_, frames)| frames.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrameList)> {
        self.entries
            .iter()
            .map(|(name, frames)| (name.as_str(), frames))
    }
}

impl IntoIterator for JobTable {
    type Item = (String, FrameList);
    type IntoIter = std::vec::IntoIter<(String, FrameList)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Run-wide settings handed to every component
#[derive(Debug, Clone)]
pub struct CutConfig {
    pub separators: Separators,
    pub audio_track: u32,
    pub extension: String,
    pub output_dir: PathBuf,
    pub transcoder: String,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            separators: Separators::default(),
            audio_track: 0,
            extension: "mp4".to_string(),
            output_dir: PathBuf::from("output"),
            transcoder: "ffmpeg".to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
