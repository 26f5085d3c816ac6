//! Cross-cutting error types for the scheduling pipeline.
//!
//! Stage-specific errors (`SourceError`, `PipelineError`, `ConfigError`) live in
//! their respective crates. The CLI converges all of them through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any pipeline crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A file name did not match any known source dataset.
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),
}
