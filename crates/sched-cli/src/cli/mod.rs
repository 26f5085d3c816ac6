use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sched` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sched",
    version,
    about = "Merge course, room, lecturer and request exports into one integrated document"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::root_commands::SchemaDocument;
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["sched", "--format", "raw", "--verbose", "run"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Run(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sched", "validate", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["sched", "--format", "table", "run"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn path_overrides_parse() {
        let cli = Cli::try_parse_from([
            "sched",
            "run",
            "--data-dir",
            "exports",
            "--output-dir",
            "/tmp/out",
            "--keep-sources",
        ])
        .expect("cli should parse");

        let Commands::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.data_dir.as_deref(), Some(Path::new("exports")));
        assert_eq!(args.output_dir.as_deref(), Some(Path::new("/tmp/out")));
        assert!(args.keep_sources);
    }

    #[test]
    fn schema_defaults_to_integrated_document() {
        let cli = Cli::try_parse_from(["sched", "schema"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.document, SchemaDocument::Integrated);

        let cli =
            Cli::try_parse_from(["sched", "schema", "run-summary"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.document, SchemaDocument::RunSummary);
    }
}
