//! Named, ordered tasks that assemble the `.claude` directory.
pub mod agents;
pub mod categories;
pub mod commands;
pub mod custom_rules;
pub mod output;
mod processing;
pub mod settings;

pub use processing::Context;
pub use processing::context::CLAUDE_DIR;
pub use processing::{ProcessOpts, TaskResult, TaskStats, process_resources};

use anyhow::Result;

use crate::config::category::Category;
use crate::logging::TaskStatus;

/// A named, executable task.
pub trait Task: Send + Sync {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Whether this task has anything to do for the current configuration.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or written, or an agent
    /// template cannot be rendered.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// The complete set of tasks run by the generate command, in execution order.
///
/// Later copies overwrite earlier ones on a file name collision, so the order
/// is significant.
#[must_use]
pub fn all_generate_tasks() -> Vec<Box<dyn Task>> {
    let mut tasks: Vec<Box<dyn Task>> = vec![
        Box::new(output::PrepareOutput),
        Box::new(categories::CopyCoreRules),
    ];
    tasks.extend(
        Category::ALL
            .into_iter()
            .map(|c| Box::new(categories::CopyCategory(c)) as Box<dyn Task>),
    );
    tasks.push(Box::new(agents::GenerateAgents));
    tasks.push(Box::new(commands::CopyCommands));
    tasks.push(Box::new(settings::WriteSettings));
    tasks.push(Box::new(custom_rules::CopyCustomRules));
    tasks
}

/// Execute a task, recording the result in the logger.
pub fn execute(task: &dyn Task, ctx: &Context) {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not applicable)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return;
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}

/// Shared helpers for task unit tests.
#[cfg(test)]
#[allow(clippy::expect_used)]
pub mod test_helpers {
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    use crate::config::ProjectConfig;
    use crate::library::Library;
    use crate::logging::{Log, Logger};

    use super::Context;

    /// A temporary library (with `core/rules`) next to an empty project
    /// directory.
    #[derive(Debug)]
    pub struct TestLibrary {
        dir: tempfile::TempDir,
    }

    impl TestLibrary {
        /// Create the library and project directories.
        #[must_use]
        pub fn new() -> Self {
            let dir = tempfile::tempdir().expect("failed to create temp dir");
            std::fs::create_dir_all(dir.path().join("lib/core/rules"))
                .expect("failed to create core rules");
            std::fs::create_dir_all(dir.path().join("project"))
                .expect("failed to create project dir");
            Self { dir }
        }

        /// Library root.
        #[must_use]
        pub fn root(&self) -> PathBuf {
            self.dir.path().join("lib")
        }

        /// Project (output) directory.
        #[must_use]
        pub fn project(&self) -> PathBuf {
            self.dir.path().join("project")
        }

        /// The `.claude` directory inside the project.
        #[must_use]
        pub fn claude_dir(&self) -> PathBuf {
            self.project().join(".claude")
        }

        /// Write `contents` to `rel` under the library root.
        pub fn write(&self, rel: &str, contents: &str) {
            write_file(&self.root().join(rel), contents);
        }

        /// Write `contents` to `rel` under the project directory.
        pub fn write_project(&self, rel: &str, contents: &str) {
            write_file(&self.project().join(rel), contents);
        }

        /// A [`Library`] pointing at the temporary root.
        #[must_use]
        pub fn library(&self) -> Library {
            Library::new(self.root())
        }
    }

    fn write_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent");
        }
        std::fs::write(path, contents).expect("failed to write file");
    }

    /// Build a [`Context`] for `lib` with the given configuration.
    #[must_use]
    pub fn context_with(
        lib: &TestLibrary,
        config: ProjectConfig,
        dry_run: bool,
    ) -> (Context, Arc<Logger>) {
        let log = Arc::new(Logger::with_log_file(None));
        let ctx = Context::new(
            Arc::new(config),
            Arc::new(lib.library()),
            &lib.project(),
            Arc::clone(&log) as Arc<dyn Log>,
            dry_run,
        );
        (ctx, log)
    }

    /// Build a [`Context`] with an empty configuration, also returning the
    /// [`Logger`] so tests can inspect recorded task state.
    #[must_use]
    pub fn make_static_context(lib: &TestLibrary) -> (Context, Arc<Logger>) {
        context_with(lib, ProjectConfig::default(), false)
    }

    /// Like [`make_static_context`] but in dry-run mode.
    #[must_use]
    pub fn dry_run_context(lib: &TestLibrary) -> (Context, Arc<Logger>) {
        context_with(lib, ProjectConfig::default(), true)
    }

    /// File names in `dir`, sorted. Empty if `dir` does not exist.
    #[must_use]
    pub fn file_names(dir: &Path) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return vec![];
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
