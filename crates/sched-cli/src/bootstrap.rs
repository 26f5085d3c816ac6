use anyhow::Context;
use sched_config::SchedConfig;

use crate::cli::root_commands::PathArgs;

/// Load layered configuration (with `.env`) and apply command-line overrides.
pub fn load_config(args: &PathArgs) -> anyhow::Result<SchedConfig> {
    let mut config = SchedConfig::load_with_dotenv().context("failed to load sched configuration")?;
    apply_overrides(&mut config, args);
    config
        .validate()
        .context("invalid configuration after command-line overrides")?;
    tracing::debug!(
        data_dir = %config.paths.data_dir.display(),
        output_dir = %config.paths.output_dir.display(),
        "configuration loaded"
    );
    Ok(config)
}

fn apply_overrides(config: &mut SchedConfig, args: &PathArgs) {
    if let Some(data_dir) = &args.data_dir {
        config.paths.data_dir.clone_from(data_dir);
    }
    if let Some(output_dir) = &args.output_dir {
        config.paths.output_dir.clone_from(output_dir);
    }
    if args.keep_sources {
        config.validation.replace_sources = false;
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn overrides_replace_configured_paths() {
        let mut config = SchedConfig::default();
        let args = PathArgs {
            data_dir: Some(PathBuf::from("exports")),
            output_dir: Some(PathBuf::from("build")),
            keep_sources: true,
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.paths.data_dir, PathBuf::from("exports"));
        assert_eq!(
            config.paths.integrated_path(),
            Path::new("build").join("integrated_data.json")
        );
        assert!(!config.validation.replace_sources);
    }

    #[test]
    fn no_overrides_keeps_config() {
        let mut config = SchedConfig::default();
        apply_overrides(&mut config, &PathArgs::default());
        assert_eq!(config, SchedConfig::default());
    }
}
