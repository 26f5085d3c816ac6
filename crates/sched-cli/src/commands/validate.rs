use anyhow::Context;
use sched_merge::{OutputLayout, Pipeline};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::PathArgs;
use crate::output::output;

/// Handle `sched validate`.
pub fn handle(args: &PathArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(args)?;
    let summary = Pipeline::new(OutputLayout::from_config(&config))
        .validate()
        .with_context(|| format!("validation of {} failed", config.paths.data_dir.display()))?;
    output(&summary, flags.format)
}
