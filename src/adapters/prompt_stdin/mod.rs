// Console prompt adapter

use std::io::{self, BufRead, Write};

use crate::error::{FrameCutError, FrameCutResult};
use crate::ports::*;

/// Prompt adapter over any reader/writer pair, stdin/stdout by default
pub struct StdinPromptAdapter<R, W> {
    reader: R,
    writer: W,
}

impl StdinPromptAdapter<io::StdinLock<'static>, io::Stdout> {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for StdinPromptAdapter<io::StdinLock<'static>, io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinPromptAdapter<R, W> {
    pub fn with_io(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> PromptPort for StdinPromptAdapter<R, W> {
    fn prompt(&mut self, message: &str) -> FrameCutResult<Option<String>> {
        write!(self.writer, "{}\n>>> ", message).map_err(FrameCutError::Prompt)?;
        self.writer.flush().map_err(FrameCutError::Prompt)?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(FrameCutError::Prompt)?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
