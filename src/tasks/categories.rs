//! Copy core rules and tagged category rules/skills into `.claude`.
use std::path::Path;

use anyhow::Result;

use super::{Context, ProcessOpts, Task, TaskResult, TaskStats, process_resources};
use crate::config::category::Category;
use crate::config::validation::is_valid_tag;
use crate::report::WarningKind;
use crate::resources::copied_file::CopiedFileResource;
use crate::resources::fs::markdown_files;

/// Copy every top-level `*.md` file in `source_dir` into
/// `.claude/<output_subfolder>/`, overwriting same-named files.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or a file cannot be
/// copied.
pub fn copy_markdown(ctx: &Context, source_dir: &Path, output_subfolder: &str) -> Result<TaskStats> {
    let dest_dir = ctx.output_dir(output_subfolder);
    let resources = markdown_files(source_dir)?
        .into_iter()
        .filter_map(|source| CopiedFileResource::into_dir(&source, &dest_dir));
    process_resources(ctx, resources, &ProcessOpts::apply_all("copy"))
}

/// Resolve `<category_root>/<tag>/<subfolder>` and copy its markdown files
/// into `.claude/<output_subfolder>/`.
///
/// An invalid tag or a missing directory records a warning and copies
/// nothing.
///
/// # Errors
///
/// Returns an error if a file in an existing directory cannot be copied.
pub fn copy_category(
    ctx: &Context,
    category_root: &Path,
    tag: &str,
    subfolder: &str,
    output_subfolder: &str,
) -> Result<TaskStats> {
    if !is_valid_tag(tag) {
        ctx.warn(
            WarningKind::InvalidTag,
            tag,
            &format!(
                "invalid tag '{tag}' under {} (skipping)",
                category_root.display()
            ),
        );
        return Ok(TaskStats::new());
    }

    let source = category_root.join(tag).join(subfolder);
    if !source.is_dir() {
        let kind = if subfolder == "skills" {
            WarningKind::MissingSkills
        } else {
            WarningKind::MissingRules
        };
        ctx.warn(kind, tag, &format!("{tag}: {subfolder} not found (skipping)"));
        return Ok(TaskStats::new());
    }

    let stats = copy_markdown(ctx, &source, output_subfolder)?;
    ctx.log.info(&format!("{tag}: {} {subfolder}", stats.copied()));
    Ok(stats)
}

/// Copy the mandatory `core/rules` into `.claude/rules`.
#[derive(Debug)]
pub struct CopyCoreRules;

impl Task for CopyCoreRules {
    fn name(&self) -> &str {
        "Copy core rules"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let stats = copy_markdown(ctx, &ctx.library.core_rules_dir(), "rules")?;
        ctx.log
            .info(&format!("core rules: {} files", stats.copied()));
        Ok(stats.finish(ctx))
    }
}

/// Copy the rules (or skills) of every configured tag in one category.
#[derive(Debug)]
pub struct CopyCategory(pub Category);

impl Task for CopyCategory {
    fn name(&self) -> &str {
        match self.0 {
            Category::Language => "Copy language rules",
            Category::Backend => "Copy backend framework rules",
            Category::Frontend => "Copy frontend framework rules",
            Category::Infrastructure => "Copy infrastructure rules",
            Category::Domain => "Copy domain skills",
        }
    }

    fn should_run(&self, ctx: &Context) -> bool {
        !self.0.tags(&ctx.config).is_empty()
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let category = self.0;
        let root = ctx.library.category_root(category);
        let mut stats = TaskStats::new();
        for tag in category.tags(&ctx.config) {
            stats += copy_category(
                ctx,
                &root,
                tag,
                category.source_subfolder(),
                category.output_subfolder(),
            )?;
        }
        Ok(stats.finish(ctx))
    }
}
