//! Logging setup

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::error::{FrameCutError, FrameCutResult};

/// Install the global tracing subscriber writing to stderr
///
/// `level` accepts anything `EnvFilter` does, from `info` to
/// `framecut_cli=debug,warn`.
pub fn init_logging(level: &str) -> FrameCutResult<()> {
    let filter = EnvFilter::try_new(level).map_err(|e| FrameCutError::ConfigError {
        message: format!("invalid log level '{}': {}", level, e),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| FrameCutError::ConfigError {
            message: format!("logging already initialized: {}", e),
        })?;

    tracing::debug!("Logging initialized with filter: {}", level);
    Ok(())
}
