// Local filesystem adapter

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{FrameCutError, FrameCutResult};
use crate::ports::*;

/// Filesystem adapter backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLocalAdapter;

impl FsLocalAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Create the output directory, or make sure an existing one is empty
    pub fn prepare_output_dir(&self, dir: &Path) -> FrameCutResult<()> {
        let shown = dir.display().to_string();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            info!("Created output folder {}", shown);
            return Ok(());
        }

        if !dir.is_dir() {
            return Err(FrameCutError::OutputDirInvalid { path: shown });
        }

        if fs::read_dir(dir)?.next().is_some() {
            return Err(FrameCutError::OutputDirNotEmpty { path: shown });
        }

        Ok(())
    }
}

impl FsPort for FsLocalAdapter {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
