//! Pipeline error types.

use thiserror::Error;

/// Fatal pipeline failures. Missing keys and orphan records are not errors;
/// they are counted and routed to audit output instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A source could not be read or parsed, or an output could not be written.
    #[error(transparent)]
    Source(#[from] sched_source::SourceError),
}
