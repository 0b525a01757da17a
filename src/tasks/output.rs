//! Create the `.claude` directory skeleton.
use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::directory::DirectoryResource;

/// Subfolders of `.claude` that always exist after a run.
pub const OUTPUT_SUBFOLDERS: [&str; 4] = ["rules", "skills", "agents", "commands"];

/// Ensure `.claude/` and its standard subfolders exist.
#[derive(Debug)]
pub struct PrepareOutput;

impl Task for PrepareOutput {
    fn name(&self) -> &str {
        "Prepare output directories"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        ctx.log
            .info(&format!("output: {}", ctx.claude_dir.display()));
        let dirs = std::iter::once(ctx.claude_dir.clone())
            .chain(OUTPUT_SUBFOLDERS.iter().map(|s| ctx.output_dir(s)))
            .map(DirectoryResource::new);
        let stats = process_resources(ctx, dirs, &ProcessOpts::apply_all("create"))?;
        Ok(stats.finish(ctx))
    }
}
