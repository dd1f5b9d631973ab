// TOML config adapter - Optional configuration file

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{FrameCutError, FrameCutResult};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "framecut.toml";

/// Parsed configuration file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub framecut: FileSettings,
}

/// Settings of the `[framecut]` table, every key optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub frame_separator: Option<char>,
    pub range_separator: Option<char>,
    pub audio_track: Option<i64>,
    pub extension: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub transcoder: Option<String>,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load the explicit file, or the default one if present
    pub fn discover(explicit: Option<&Path>) -> FrameCutResult<FileConfig> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(FileConfig::default())
                }
            }
        }
    }

    /// Load and parse one configuration file
    pub fn load(path: &Path) -> FrameCutResult<FileConfig> {
        let content = fs::read_to_string(path).map_err(|e| FrameCutError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            FrameCutError::ConfigError { message } => FrameCutError::ConfigError {
                message: format!("{}: {}", path.display(), message),
            },
            other => other,
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> FrameCutResult<FileConfig> {
        toml::from_str(content).map_err(|e| FrameCutError::ConfigError {
            message: e.to_string(),
        })
    }
}
