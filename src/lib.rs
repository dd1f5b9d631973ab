//! FrameCut Library
//!
//! Turns a JSON manifest, a free-form text listing or interactive answers
//! into a table of videos and timecode ranges, then hands every range to an
//! external transcoder.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::model::{CutConfig, Frame, FrameList, JobTable, Separators};
pub use error::{FrameCutError, FrameCutResult};
