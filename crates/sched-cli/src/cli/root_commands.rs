use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate, merge, and write the integrated document.
    Run(PathArgs),
    /// Validate sources against lecturer course codes and write audit files.
    Validate(PathArgs),
    /// Print the JSON Schema of a pipeline document.
    Schema(SchemaArgs),
    /// Print the effective configuration.
    Config(PathArgs),
}

/// Overrides for the configured directories.
#[derive(Clone, Debug, Default, Args)]
pub struct PathArgs {
    /// Directory holding the four source exports.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Directory for the integrated document and audit files.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Never rewrite source files with their matched records.
    #[arg(long)]
    pub keep_sources: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document to describe.
    #[arg(value_enum, default_value = "integrated")]
    pub document: SchemaDocument,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaDocument {
    /// The integrated document written by `sched run`.
    Integrated,
    /// Summary printed by `sched run`.
    RunSummary,
    /// Summary printed by `sched validate`.
    ValidationSummary,
    /// One normalized source record.
    Record,
}
