use anyhow::Context;
use sched_merge::{OutputLayout, Pipeline};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::PathArgs;
use crate::output::output;

/// Handle `sched run`.
pub fn handle(args: &PathArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(args)?;
    let layout = OutputLayout::from_config(&config);

    let summary = Pipeline::new(layout)
        .run()
        .with_context(|| format!("run over {} failed", config.paths.data_dir.display()))?;

    if summary.skipped.total() > 0 {
        tracing::warn!(skipped = summary.skipped.total(), "records left out for missing keys");
    }
    output(&summary, flags.format)
}
