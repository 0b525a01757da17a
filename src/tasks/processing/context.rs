//! Shared state handed to every task.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ProjectConfig;
use crate::library::Library;
use crate::logging::Log;
use crate::report::{Warning, WarningKind};

/// Name of the generated directory inside the project.
pub const CLAUDE_DIR: &str = ".claude";

/// Shared context for task execution.
pub struct Context {
    /// Parsed project configuration.
    pub config: Arc<ProjectConfig>,
    /// The rule library files are read from.
    pub library: Arc<Library>,
    /// Project root: the output directory given on the command line. Custom
    /// rule paths are resolved against it.
    pub project_root: PathBuf,
    /// `<project_root>/.claude`.
    pub claude_dir: PathBuf,
    /// Logger for output and task recording.
    pub log: Arc<dyn Log>,
    /// Whether to perform a dry run (preview changes without applying).
    pub dry_run: bool,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("library", &self.library)
            .field("project_root", &self.project_root)
            .field("claude_dir", &self.claude_dir)
            .field("log", &"<dyn Log>")
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Creates a new context writing into `<project_root>/.claude`.
    #[must_use]
    pub fn new(
        config: Arc<ProjectConfig>,
        library: Arc<Library>,
        project_root: &Path,
        log: Arc<dyn Log>,
        dry_run: bool,
    ) -> Self {
        Self {
            config,
            library,
            project_root: project_root.to_path_buf(),
            claude_dir: project_root.join(CLAUDE_DIR),
            log,
            dry_run,
        }
    }

    /// A subfolder of the `.claude` directory (`rules`, `skills`, ...).
    #[must_use]
    pub fn output_dir(&self, subfolder: &str) -> PathBuf {
        self.claude_dir.join(subfolder)
    }

    /// Skip a library or project item, recording it for the report.
    pub fn warn(&self, kind: WarningKind, item: &str, message: &str) {
        self.log.skip(Warning::new(kind, item, message));
    }
}
