//! Configuration initialization and hierarchy management

use tracing::{info, warn};

use crate::adapters::toml_config::FileConfig;
use crate::cli::CutArgs;
use crate::domain::model::{CutConfig, Separators};
use crate::error::{FrameCutError, FrameCutResult};

/// Build the run configuration following precedence: CLI > Env > File > Defaults
///
/// Environment values reach this point through clap, so `args` already
/// carries both CLI and env overrides.
pub fn build_cut_config(args: &CutArgs, file: &FileConfig) -> FrameCutResult<CutConfig> {
    let defaults = CutConfig::default();
    let settings = &file.framecut;

    let range = args
        .range_separator
        .or(settings.range_separator)
        .unwrap_or(defaults.separators.range());
    let frame = args
        .frame_separator
        .or(settings.frame_separator)
        .unwrap_or(defaults.separators.frame());
    let separators = Separators::new(range, frame)?;

    let requested_audio = args.audio.or(settings.audio_track).unwrap_or(0);
    let audio_track = clamp_audio_track(requested_audio)?;

    let extension = args
        .extension
        .clone()
        .or_else(|| settings.extension.clone())
        .unwrap_or(defaults.extension);
    let extension = extension.trim_start_matches('.').to_string();
    if extension.is_empty() {
        return Err(FrameCutError::ConfigError {
            message: "video extension cannot be empty".to_string(),
        });
    }

    let config = CutConfig {
        separators,
        audio_track,
        extension,
        output_dir: args
            .output_dir
            .clone()
            .or_else(|| settings.output_dir.clone())
            .unwrap_or(defaults.output_dir),
        transcoder: args
            .transcoder
            .clone()
            .or_else(|| settings.transcoder.clone())
            .unwrap_or(defaults.transcoder),
    };

    info!(
        "Configuration: audio track {}, extension '{}', output '{}', transcoder '{}', separators '{}' '{}'",
        config.audio_track,
        config.extension,
        config.output_dir.display(),
        config.transcoder,
        config.separators.range(),
        config.separators.frame()
    );
    Ok(config)
}

/// Negative tracks fall back to the first one
fn clamp_audio_track(requested: i64) -> FrameCutResult<u32> {
    if requested < 0 {
        warn!("Audio track index {} below 0, returning to default", requested);
        return Ok(0);
    }
    u32::try_from(requested).map_err(|_| FrameCutError::ConfigError {
        message: format!("audio track index {} is too large", requested),
    })
}
