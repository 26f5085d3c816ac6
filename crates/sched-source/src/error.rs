//! Source and output error types.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal I/O and parse failures. Any of these aborts the run before output.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read source {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("source {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("source {path} must be a JSON array of records, found {found}")]
    NotAnArray { path: PathBuf, found: &'static str },

    #[error("record {index} in {path} is not a JSON object")]
    NotAnObject { path: PathBuf, index: usize },

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
