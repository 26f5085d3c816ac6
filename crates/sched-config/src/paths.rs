//! Input and output locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from("jsonfiles")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_integrated_file() -> String {
    "integrated_data.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PathsConfig {
    /// Directory holding the four normalized source files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory the integrated document is written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File name of the integrated document inside `output_dir`.
    #[serde(default = "default_integrated_file")]
    pub integrated_file: String,
}

impl PathsConfig {
    #[must_use]
    pub fn integrated_path(&self) -> PathBuf {
        self.output_dir.join(&self.integrated_file)
    }

    #[must_use]
    pub fn source_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            output_dir: default_output_dir(),
            integrated_file: default_integrated_file(),
        }
    }
}
