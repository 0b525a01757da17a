//! Resolve requested commands from core, then from framework tiers.
use std::path::PathBuf;

use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::config::ProjectConfig;
use crate::config::category::Category;
use crate::config::validation::is_valid_tag;
use crate::library::Library;
use crate::report::WarningKind;
use crate::resources::copied_file::CopiedFileResource;

/// Framework tiers searched for commands, in order.
const COMMAND_TIERS: [Category; 2] = [Category::Backend, Category::Frontend];

/// Find the source file for command `name`.
///
/// `core/commands/<name>.md` wins. Otherwise each backend framework, then
/// each frontend framework, is checked in configuration order and the first
/// hit is returned.
#[must_use]
pub fn resolve_command(library: &Library, config: &ProjectConfig, name: &str) -> Option<PathBuf> {
    let core = library.core_command(name);
    if core.is_file() {
        return Some(core);
    }
    COMMAND_TIERS
        .into_iter()
        .flat_map(|tier| {
            tier.tags(config)
                .iter()
                .filter(|fw| is_valid_tag(fw))
                .map(move |fw| library.framework_command(tier, fw, name))
        })
        .find(|path| path.is_file())
}

/// Copy every requested command into `.claude/commands/<name>.md`.
#[derive(Debug)]
pub struct CopyCommands;

impl Task for CopyCommands {
    fn name(&self) -> &str {
        "Copy commands"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if ctx.config.commands.is_empty() {
            return Ok(TaskResult::Skipped("no commands configured".to_string()));
        }

        let dest_dir = ctx.output_dir("commands");
        let mut resources = Vec::new();
        for name in &ctx.config.commands {
            if !is_valid_tag(name) {
                ctx.warn(
                    WarningKind::InvalidTag,
                    name,
                    &format!("invalid command name '{name}' (skipping)"),
                );
                continue;
            }
            match resolve_command(&ctx.library, &ctx.config, name) {
                Some(source) => {
                    ctx.log
                        .debug(&format!("command {name}: {}", source.display()));
                    resources.push(CopiedFileResource::new(
                        source,
                        dest_dir.join(format!("{name}.md")),
                    ));
                }
                None => ctx.warn(
                    WarningKind::MissingCommand,
                    name,
                    &format!("command '{name}' not found"),
                ),
            }
        }

        let stats = process_resources(ctx, resources, &ProcessOpts::apply_all("copy"))?;
        ctx.log.info(&format!("commands: {} files", stats.copied()));
        Ok(stats.finish(ctx))
    }
}
