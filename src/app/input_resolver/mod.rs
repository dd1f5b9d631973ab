// Input resolver - Turns a manifest, a line file or console answers into a job table

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info, warn};

use crate::domain::model::*;
use crate::domain::rules::*;
use crate::error::{FrameCutError, FrameCutResult};
use crate::ports::*;
use crate::utils::path::resolve_video;

/// Word ending either interactive loop, compared case-insensitively
pub const STOP_WORD: &str = "stop";

/// Where this run's jobs come from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    /// Text that parsed as a JSON array or object
    JsonManifest(Manifest),
    /// Any other text, read as filename and timecode lines
    LineFile(String),
    /// Console prompts, optionally starting with a known video
    Interactive { preset: Option<String> },
}

/// One `{ "file": .., "frames": [..] }` manifest entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    pub file: String,
    pub frames: Vec<String>,
}

/// Shapes accepted for a JSON manifest
#[derive(Debug, Clone, PartialEq)]
pub enum Manifest {
    /// An array of well-formed entries
    Entries(Vec<ManifestEntry>),
    /// Any other array or object, used directly as the job table
    Table(Value),
}

impl Manifest {
    /// Pick the manifest shape, `None` for JSON scalars
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Array(_) => match Vec::<ManifestEntry>::deserialize(&value) {
                Ok(entries) => Some(Manifest::Entries(entries)),
                Err(e) => {
                    warn!(
                        "Manifest entries lack 'file'/'frames' ({}), using the whole document as the job table",
                        e
                    );
                    Some(Manifest::Table(value))
                }
            },
            Value::Object(_) => Some(Manifest::Table(value)),
            _ => None,
        }
    }
}

/// Items of a pre-shaped table: a token or an explicit frame
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TableItem {
    Token(String),
    Frame(Frame),
}

impl InputSource {
    /// Classify the optional `--file` argument
    pub fn classify(file: Option<&Path>) -> FrameCutResult<Self> {
        let Some(path) = file else {
            return Ok(InputSource::Interactive { preset: None });
        };

        let bytes = fs::read(path).map_err(|source| FrameCutError::ManifestUnreadable {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::classify_bytes(path, bytes))
    }

    /// Classify already loaded file content
    pub fn classify_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(_) => {
                info!(
                    "{} is not a text file, treating it as the first video",
                    path.display()
                );
                return InputSource::Interactive {
                    preset: Some(path.to_string_lossy().into_owned()),
                };
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => match Manifest::from_value(value) {
                Some(manifest) => InputSource::JsonManifest(manifest),
                None => InputSource::LineFile(text),
            },
            Err(_) => InputSource::LineFile(text),
        }
    }
}

fn is_stop(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(STOP_WORD)
}

/// Builds the job table for one run
pub struct InputResolver<'a> {
    config: &'a CutConfig,
    fs: &'a dyn FsPort,
}

impl<'a> InputResolver<'a> {
    pub fn new(config: &'a CutConfig, fs: &'a dyn FsPort) -> Self {
        Self { config, fs }
    }

    /// Resolve any input source; `prompt` is only used in interactive mode
    pub fn resolve(
        &self,
        source: InputSource,
        prompt: &mut dyn PromptPort,
    ) -> FrameCutResult<JobTable> {
        match source {
            InputSource::JsonManifest(manifest) => {
                let table = self.from_manifest(manifest)?;
                info!("JSON loaded, processing videos...");
                Ok(table)
            }
            InputSource::LineFile(content) => {
                let table = self.from_line_file(&content)?;
                info!("File loaded, processing videos...");
                Ok(table)
            }
            InputSource::Interactive { preset } => {
                let table = self.from_prompts(preset, prompt)?;
                info!("Data loaded, processing videos...");
                Ok(table)
            }
        }
    }

    /// JSON mode
    pub fn from_manifest(&self, manifest: Manifest) -> FrameCutResult<JobTable> {
        let seps = &self.config.separators;
        let mut table = JobTable::new();

        match manifest {
            Manifest::Entries(entries) => {
                for entry in entries {
                    let mut list = FrameList::new();
                    for token in &entry.frames {
                        list.extend(split_frames(token, seps));
                    }
                    table.insert(entry.file, list);
                }
            }
            Manifest::Table(Value::Object(map)) => {
                for (video, items) in map {
                    let items = Vec::<TableItem>::deserialize(&items).map_err(|e| {
                        FrameCutError::ManifestShape {
                            message: format!("frames of '{}': {}", video, e),
                        }
                    })?;
                    let mut list = FrameList::new();
                    for item in items {
                        match item {
                            TableItem::Token(token) => list.extend(split_frames(&token, seps)),
                            TableItem::Frame(frame) => list.push(frame),
                        }
                    }
                    table.insert(video, list);
                }
            }
            Manifest::Table(_) => {
                return Err(FrameCutError::ManifestShape {
                    message: "expected an array of {\"file\", \"frames\"} objects or an object of video to frames".to_string(),
                });
            }
        }

        Ok(table)
    }

    /// Special-file mode
    pub fn from_line_file(&self, content: &str) -> FrameCutResult<JobTable> {
        let seps = &self.config.separators;
        let mut table = JobTable::new();
        let mut current: Option<String> = None;

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(video) = resolve_video(self.fs, line, &self.config.extension) {
                table.insert(video.clone(), FrameList::new());
                current = Some(video);
                continue;
            }

            if is_timecode_line(line, seps) {
                let video = current
                    .as_deref()
                    .ok_or_else(|| FrameCutError::OrphanTimecodeLine {
                        line: index + 1,
                        content: line.to_string(),
                    })?;
                if let Some(list) = table.get_mut(video) {
                    list.extend(split_frames(line, seps));
                }
                continue;
            }

            warn!(
                "Line {}: '{}' is neither an existing video nor a timecode line, ignored",
                index + 1,
                line
            );
        }

        Ok(table)
    }

    /// Interactive mode
    pub fn from_prompts(
        &self,
        preset: Option<String>,
        prompt: &mut dyn PromptPort,
    ) -> FrameCutResult<JobTable> {
        let mut table = JobTable::new();
        let mut preset = preset;

        loop {
            let answer = match preset.take() {
                Some(name) => name,
                None => match prompt.prompt("Enter the video filename:")? {
                    Some(answer) => answer,
                    None => break,
                },
            };

            if is_stop(&answer) {
                break;
            }

            let Some(video) = resolve_video(self.fs, answer.trim(), &self.config.extension)
            else {
                error!("File not found: {}", answer.trim());
                continue;
            };

            let frames = self.prompt_frames(prompt)?;
            info!("Data saved, type 'stop' to keep on processing");
            table.insert(video, frames);
        }

        Ok(table)
    }

    fn prompt_frames(&self, prompt: &mut dyn PromptPort) -> FrameCutResult<FrameList> {
        let seps = &self.config.separators;
        let message = format!(
            "Enter the frame to cut (stop to quit):\nxx:xx{}yy:yy{}xx...",
            seps.range(),
            seps.frame()
        );
        let mut list = FrameList::new();

        while let Some(answer) = prompt.prompt(&message)? {
            let line = answer.trim();
            if is_stop(line) {
                break;
            }
            if !seps.appears_in(line) {
                error!("Wrong frame syntax, please retry");
                continue;
            }
            if !is_timecode_line(line, seps) {
                error!(
                    "'{}' may only contain digits, ':', '{}' and '{}', please retry",
                    line,
                    seps.range(),
                    seps.frame()
                );
                continue;
            }

            let parsed = split_frames(line, seps);
            if !parsed.rejected.is_empty() {
                error!(
                    "Frames {:?} lack the '{}' separator, please retry",
                    parsed.rejected,
                    seps.range()
                );
                continue;
            }
            list.extend(parsed);
        }

        Ok(list)
    }
}
