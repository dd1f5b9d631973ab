//! FrameCut batch video cutter
//!
//! Cuts time-ranged clips out of videos by invoking ffmpeg once per clip.
//!
//! # Usage
//!
//! ```bash
//! framecut --file jobs.json
//! framecut --file jobs.txt --audio 1 --extension mkv
//! framecut            # interactive prompts
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use framecut_cli::cli::{commands, Cli};
use framecut_cli::utils::logging::init_logging;

/// Main entry point for the FrameCut application
fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting FrameCut");

    match commands::run(cli) {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            error!("{} clip(s) failed", report.clips_failed.len());
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
