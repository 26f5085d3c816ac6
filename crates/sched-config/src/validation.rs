//! Referential validation settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const fn default_replace_sources() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Write the matched partition back over each validated source file.
    #[serde(default = "default_replace_sources")]
    pub replace_sources: bool,

    /// Directory for unmatched-record audit files. Empty means the output directory.
    #[serde(default)]
    pub audit_dir: PathBuf,
}

impl ValidationConfig {
    /// Resolve the audit directory, falling back to `output_dir`.
    #[must_use]
    pub fn audit_dir_or<'a>(&'a self, output_dir: &'a Path) -> &'a Path {
        if self.audit_dir.as_os_str().is_empty() {
            output_dir
        } else {
            &self.audit_dir
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            replace_sources: default_replace_sources(),
            audit_dir: PathBuf::new(),
        }
    }
}
