//! Error handling module for FrameCut

use thiserror::Error;

/// Main error type for FrameCut operations
#[derive(Error, Debug)]
pub enum FrameCutError {
    /// Transcoder binary is neither on PATH nor in the working directory
    #[error("Transcoder binary '{binary}' not found, place it in the working directory or on PATH")]
    TranscoderNotFound { binary: String },

    /// Output directory already holds entries
    #[error("Output folder {path} exists and is not empty, remove its content before launching")]
    OutputDirNotEmpty { path: String },

    /// Output path exists but is not a directory
    #[error("Output path {path} exists and is not a directory")]
    OutputDirInvalid { path: String },

    /// Input file could not be read at all
    #[error("Could not read {path}")]
    ManifestUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON manifest matches neither accepted shape
    #[error("Unusable JSON manifest: {message}")]
    ManifestShape { message: String },

    /// Timecode line found before any filename line
    #[error("Line {line}: timecodes '{content}' appear before any video filename")]
    OrphanTimecodeLine { line: usize, content: String },

    /// Separator configuration is unusable
    #[error("Invalid separators: {message}")]
    InvalidSeparators { message: String },

    /// Configuration file error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Console prompt failed
    #[error("Failed to read from console")]
    Prompt(#[source] std::io::Error),

    /// I/O error
    #[error("I/O error")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for FrameCut operations
pub type FrameCutResult<T> = std::result::Result<T, FrameCutError>;
