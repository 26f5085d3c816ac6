use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::PathArgs;
use crate::output::output;

/// Handle `sched config`: print the configuration a run would use.
pub fn handle(args: &PathArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(args)?;
    output(&config, flags.format)
}
