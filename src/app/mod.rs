// Application layer - Use case orchestration

pub mod batch_cutter;
pub mod input_resolver;

#[cfg(test)]
pub(crate) mod testing;

// Re-export use cases
pub use batch_cutter::{BatchCutter, BatchReport, FailedClip, SkipReason, SkippedVideo};
pub use input_resolver::{InputResolver, InputSource, Manifest, ManifestEntry};
