use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => commands::run::handle(&args, flags),
        Commands::Validate(args) => commands::validate::handle(&args, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
        Commands::Config(args) => commands::config::handle(&args, flags),
    }
}
