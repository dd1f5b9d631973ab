//! CLI module for FrameCut
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::CutArgs;

/// FrameCut batch video cutter
///
/// Cuts clips out of videos with an external transcoder. Jobs come from a
/// JSON manifest, a plain text listing, or interactive prompts.
#[derive(Parser, Debug)]
#[command(name = "framecut")]
#[command(about = "FrameCut - Batch video cutting driven by timecode lists")]
#[command(version)]
pub struct Cli {
    /// Logging level or tracing filter
    #[arg(long, default_value = "info", env = "FRAMECUT_LOG")]
    pub log_level: String,

    /// TOML configuration file (default: ./framecut.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub args: CutArgs,
}
