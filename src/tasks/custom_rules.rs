//! Copy user-supplied rule files into `.claude/custom/`.
use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::report::WarningKind;
use crate::resources::copied_file::CopiedFileResource;
use crate::resources::directory::DirectoryResource;

/// Copy each `custom_rules[].path` (relative to the project root) into
/// `.claude/custom/`.
///
/// Absent files are noted at debug level only.
#[derive(Debug)]
pub struct CopyCustomRules;

impl Task for CopyCustomRules {
    fn name(&self) -> &str {
        "Copy custom rules"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !ctx.config.custom_rules.is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let dest_dir = ctx.output_dir("custom");
        let mut stats = process_resources(
            ctx,
            [DirectoryResource::new(dest_dir.clone())],
            &ProcessOpts::apply_all("create"),
        )?;

        let mut resources = Vec::new();
        for rule in &ctx.config.custom_rules {
            if rule.path.trim().is_empty() {
                ctx.warn(
                    WarningKind::MissingCustomRule,
                    &rule.path,
                    "custom rule entry has no path (skipping)",
                );
                continue;
            }
            let source = ctx.project_root.join(&rule.path);
            match CopiedFileResource::into_dir(&source, &dest_dir) {
                Some(resource) if source.is_file() => resources.push(resource),
                _ => ctx.warn(
                    WarningKind::MissingCustomRule,
                    &rule.path,
                    &format!("custom rule not found: {}", source.display()),
                ),
            }
        }

        stats += process_resources(ctx, resources, &ProcessOpts::apply_all("copy").no_bail())?;
        Ok(stats.finish(ctx))
    }
}
