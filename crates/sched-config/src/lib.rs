//! # sched-config
//!
//! Layered configuration loading for the scheduling pipeline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SCHED_*` prefix, `__` as separator)
//! 2. Project-level `.sched/config.toml`
//! 3. User-level `~/.config/sched/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SCHED_PATHS__DATA_DIR` -> `paths.data_dir`,
//! `SCHED_VALIDATION__REPLACE_SOURCES` -> `validation.replace_sources`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sched_config::SchedConfig;
//!
//! let config = SchedConfig::load_with_dotenv().expect("config");
//! println!("reading sources from {}", config.paths.data_dir.display());
//! ```

mod error;
mod output;
mod paths;
mod validation;

pub use error::ConfigError;
pub use output::OutputConfig;
pub use paths::PathsConfig;
pub use validation::ValidationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SchedConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl SchedConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sched/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SCHED_").split("__"))
    }

    /// Reject values that would make every run fail later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paths.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "paths.data_dir".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        let file = self.paths.integrated_file.trim();
        if file.is_empty() || file.contains(['/', '\\']) {
            return Err(ConfigError::InvalidValue {
                field: "paths.integrated_file".to_string(),
                reason: format!("'{file}' is not a plain file name"),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sched").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SchedConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.validation.replace_sources);
        assert!(config.output.pretty);
        assert_eq!(config.paths.integrated_file, "integrated_data.json");
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = SchedConfig::figment();
        let config: SchedConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.paths.output_dir, PathBuf::from("output"));
    }

    #[test]
    fn nested_integrated_file_is_rejected() {
        let mut config = SchedConfig::default();
        config.paths.integrated_file = "nested/out.json".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "paths.integrated_file"
        ));
    }
}
