//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use std::path::PathBuf;

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use sched_config::SchedConfig;

#[test]
fn loads_paths_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[paths]
data_dir = "Second_Part/jsonfiles"
output_dir = "merged"
integrated_file = "graph.json"
"#,
        )?;

        let config: SchedConfig = Figment::from(Serialized::defaults(SchedConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.paths.data_dir, PathBuf::from("Second_Part/jsonfiles"));
        assert_eq!(config.paths.output_dir, PathBuf::from("merged"));
        assert_eq!(config.paths.integrated_path(), PathBuf::from("merged/graph.json"));
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[validation]
replace_sources = false
"#,
        )?;

        let config: SchedConfig = Figment::from(Serialized::defaults(SchedConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.validation.replace_sources);
        assert_eq!(config.paths.data_dir, PathBuf::from("jsonfiles"));
        assert!(config.output.pretty);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[paths]
output_dir = "from-toml"
"#,
        )?;
        jail.set_env("SCHED_PATHS__OUTPUT_DIR", "from-env");

        let config: SchedConfig = Figment::from(Serialized::defaults(SchedConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("SCHED_").split("__"))
            .extract()?;

        assert_eq!(config.paths.output_dir, PathBuf::from("from-env"));
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sched")?;
        jail.create_file(
            ".sched/config.toml",
            r#"
[validation]
audit_dir = "audits"

[output]
pretty = false
"#,
        )?;

        let config = SchedConfig::load().expect("config loads");
        assert_eq!(config.validation.audit_dir, PathBuf::from("audits"));
        assert!(!config.output.pretty);
        Ok(())
    });
}
