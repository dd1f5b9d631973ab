//! Command implementations

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::adapters::{FFmpegAdapter, FsLocalAdapter, StdinPromptAdapter, TomlConfigAdapter};
use crate::app::{BatchCutter, BatchReport, InputResolver, InputSource};
use crate::cli::Cli;
use crate::config_initialization::build_cut_config;
use crate::utils::format_duration;

/// Execute a cutting run
///
/// Fatal configuration problems abort before any clip is cut. Per-video
/// problems end up in the returned report.
pub fn run(cli: Cli) -> Result<BatchReport> {
    let started = Instant::now();

    let file_config =
        TomlConfigAdapter::discover(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = build_cut_config(&cli.args, &file_config).context("Invalid configuration")?;

    let mut transcoder = FFmpegAdapter::locate(&config.transcoder)?;
    info!("Using transcoder {}", transcoder.binary().display());

    let fs = FsLocalAdapter::new();
    fs.prepare_output_dir(&config.output_dir)?;

    let source = InputSource::classify(cli.args.file.as_deref())?;
    let mut prompt = StdinPromptAdapter::new();
    let table = InputResolver::new(&config, &fs)
        .resolve(source, &mut prompt)
        .context("Failed to load jobs")?;
    info!(
        "{} video(s) with {} frame(s) to process",
        table.len(),
        table.frame_count()
    );

    let report = BatchCutter::new(&config, &fs, &mut transcoder).run(table);
    log_summary(&report);
    info!("Program ended in {}", format_duration(started.elapsed()));
    Ok(report)
}

fn log_summary(report: &BatchReport) {
    info!(
        "{} video(s) cut, {} clip(s) written",
        report.videos_cut,
        report.clips_written.len()
    );
    if !report.skipped.is_empty() {
        warn!("{} video(s) skipped", report.skipped.len());
    }
    for failed in &report.clips_failed {
        warn!(
            "Failed clip {} ({}) of {}: {}",
            failed.output.display(),
            failed.frame,
            failed.video,
            failed.reason
        );
    }
}
