//! Write `.claude/settings.local.json`.
use anyhow::{Context as _, Result};

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::resources::generated_file::GeneratedFileResource;
use crate::settings::{SETTINGS_FILE, Settings};

/// Write the default permissions document.
#[derive(Debug)]
pub struct WriteSettings;

impl Task for WriteSettings {
    fn name(&self) -> &str {
        "Write settings"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let json = Settings::default()
            .to_json()
            .context("serializing settings")?;
        let resource = GeneratedFileResource::new(ctx.claude_dir.join(SETTINGS_FILE), json);
        let stats = process_resources(ctx, [resource], &ProcessOpts::apply_all("write"))?;
        Ok(stats.finish(ctx))
    }
}
