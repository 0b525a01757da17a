//! Command: generate `.claude/` from a YAML configuration.
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use super::version::VERSION;
use super::{CommandSetup, run_tasks};
use crate::cli::{GenerateOpts, GlobalOpts};
use crate::error::{GeneratorError, TaskError};
use crate::logging::{Log, Logger};
use crate::report::GenerationReport;
use crate::tasks::{self, Context};

/// Generate `<output_dir>/.claude` from the configuration at `config_path`.
///
/// `root` overrides library auto-detection. Task failures do not make this
/// return an error; they are recorded in [`GenerationReport::tasks`].
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the library
/// cannot be located.
pub fn generate(
    root: Option<&Path>,
    config_path: &Path,
    output_dir: &Path,
    log: &Arc<Logger>,
    dry_run: bool,
) -> Result<GenerationReport, GeneratorError> {
    let setup = CommandSetup::init(root, config_path, log.as_ref())?;
    let ctx = Context::new(
        Arc::new(setup.config),
        Arc::new(setup.library),
        output_dir,
        Arc::clone(log) as Arc<dyn Log>,
        dry_run,
    );

    let all_tasks = tasks::all_generate_tasks();
    run_tasks(all_tasks.iter().map(AsRef::as_ref), &ctx);

    Ok(GenerationReport {
        claude_dir: ctx.claude_dir.clone(),
        warnings: log.warnings(),
        tasks: log.task_entries(),
    })
}

/// Run the generate command.
///
/// # Errors
///
/// Returns an error if setup fails or any task failed.
pub fn run(global: &GlobalOpts, opts: &GenerateOpts, log: &Arc<Logger>) -> Result<()> {
    log.info(&format!("claude-config {VERSION}"));

    let output_dir = match &opts.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("resolving current directory")?,
    };

    let report = generate(
        global.root.as_deref(),
        &opts.config_file,
        &output_dir,
        log,
        global.dry_run,
    )?;

    if !report.has_failures() && !global.dry_run {
        print_next_steps(log, &report);
    }

    log.print_summary(&report);

    let count = report.failure_count();
    if count > 0 {
        return Err(GeneratorError::from(TaskError::Failures(count)).into());
    }
    Ok(())
}

fn print_next_steps(log: &Logger, report: &GenerationReport) {
    log.stage("Next steps");
    log.info(&format!("generated {}", report.claude_dir.display()));
    log.info("1. Write CLAUDE.md with project-specific instructions");
    log.info("2. Commit claude-config.yaml");
    log.info("3. Commit the .claude/ directory");
}
