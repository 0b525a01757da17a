//! Structured outcome of a generation run.
use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::logging::{TaskEntry, TaskStatus};

/// Kind of non-fatal problem met while generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningKind {
    /// A language, framework or infrastructure tag has no `rules/` directory.
    MissingRules,
    /// A domain tag has no `skills/` directory.
    MissingSkills,
    /// An enabled agent has no `<name>.template.md`.
    MissingAgentTemplate,
    /// A command name was found in neither core nor any framework.
    MissingCommand,
    /// A custom rule path does not name an existing file.
    MissingCustomRule,
    /// A tag or name is empty or not a single path segment.
    InvalidTag,
}

impl WarningKind {
    /// Kinds that are recorded without a console warning.
    ///
    /// Custom rules are optional per project, so an absent file is expected.
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::MissingCustomRule)
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::MissingRules => "missing rules",
            Self::MissingSkills => "missing skills",
            Self::MissingAgentTemplate => "missing agent template",
            Self::MissingCommand => "missing command",
            Self::MissingCustomRule => "missing custom rule",
            Self::InvalidTag => "invalid tag",
        };
        f.write_str(label)
    }
}

/// A non-fatal problem recorded during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    /// What went wrong.
    pub kind: WarningKind,
    /// The tag, agent, command or path involved.
    pub item: String,
    /// Human-readable description.
    pub message: String,
}

impl Warning {
    /// Create a new warning.
    #[must_use]
    pub fn new(kind: WarningKind, item: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            item: item.into(),
            message: message.into(),
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// The `.claude` directory that was (or would be) written.
    pub claude_dir: PathBuf,
    /// Non-fatal problems, in the order they were met.
    pub warnings: Vec<Warning>,
    /// Per-task outcomes, in execution order.
    pub tasks: Vec<TaskEntry>,
}

impl GenerationReport {
    /// Number of tasks that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Failed)
            .count()
    }

    /// Whether any task failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Warnings of the given kind.
    pub fn warnings_of(&self, kind: WarningKind) -> impl Iterator<Item = &Warning> {
        self.warnings.iter().filter(move |w| w.kind == kind)
    }

    /// Skipped items grouped by kind, kinds in the order first met.
    #[must_use]
    pub fn items_by_kind(&self) -> IndexMap<WarningKind, Vec<&str>> {
        let mut grouped: IndexMap<WarningKind, Vec<&str>> = IndexMap::new();
        for warning in &self.warnings {
            grouped
                .entry(warning.kind)
                .or_default()
                .push(warning.item.as_str());
        }
        grouped
    }

    /// One-line tally for the end of the run.
    #[must_use]
    pub fn totals(&self) -> String {
        let done = self
            .tasks
            .iter()
            .filter(|t| matches!(t.status, TaskStatus::Ok | TaskStatus::DryRun))
            .count();
        format!(
            "{} tasks: {done} done, {} failed; {} item(s) skipped",
            self.tasks.len(),
            self.failure_count(),
            self.warnings.len()
        )
    }
}
