//! All-or-nothing output writing.
//!
//! Outputs are rendered to bytes before anything touches the filesystem.
//! [`write_all`] then stages every file as a temporary file next to its
//! destination and only renames them into place once every stage succeeded.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::SourceError;

/// A fully rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl PendingWrite {
    /// Render `value` as JSON with a trailing newline.
    pub fn json<T: Serialize + ?Sized>(
        path: impl Into<PathBuf>,
        value: &T,
        pretty: bool,
    ) -> Result<Self, SourceError> {
        let mut bytes = if pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };
        bytes.push(b'\n');
        Ok(Self {
            path: path.into(),
            bytes,
        })
    }
}

/// Write every pending file, or none of them.
///
/// Returns the written paths in input order.
pub fn write_all(writes: &[PendingWrite]) -> Result<Vec<PathBuf>, SourceError> {
    let mut staged = Vec::with_capacity(writes.len());
    for write in writes {
        staged.push(stage(write)?);
    }

    let mut written = Vec::with_capacity(writes.len());
    for (file, write) in staged.into_iter().zip(writes) {
        file.persist(&write.path).map_err(|error| SourceError::Write {
            path: write.path.clone(),
            source: error.error,
        })?;
        tracing::debug!(path = %write.path.display(), bytes = write.bytes.len(), "wrote output");
        written.push(write.path.clone());
    }
    Ok(written)
}

fn stage(write: &PendingWrite) -> Result<NamedTempFile, SourceError> {
    let to_error = |source| SourceError::Write {
        path: write.path.clone(),
        source,
    };

    let parent = write
        .path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent).map_err(to_error)?;

    let mut file = NamedTempFile::new_in(parent).map_err(to_error)?;
    file.write_all(&write.bytes).map_err(to_error)?;
    file.as_file().sync_all().map_err(to_error)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_render_ends_with_newline() {
        let write = PendingWrite::json("out.json", &json!({"a": 1}), false).unwrap();
        assert_eq!(write.bytes, b"{\"a\":1}\n");
    }

    #[test]
    fn pretty_render_is_indented() {
        let write = PendingWrite::json("out.json", &json!({"a": 1}), true).unwrap();
        assert_eq!(String::from_utf8(write.bytes).unwrap(), "{\n  \"a\": 1\n}\n");
    }
}
