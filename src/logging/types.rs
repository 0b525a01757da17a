//! What the generator logs: task outcomes, skipped items, and the [`Log`] sink.
use crate::report::Warning;

/// Outcome of one generation task, kept for the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    /// Task name as shown in stage headers.
    pub name: String,
    /// How the task ended.
    pub status: TaskStatus,
    /// Skip reason or error chain.
    pub message: Option<String>,
}

/// How a generation task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Files were written (or were already current).
    Ok,
    /// The configuration does not use this task (e.g. no infrastructure tags).
    NotApplicable,
    /// The task ran but had nothing to produce.
    Skipped,
    /// Files would have been written.
    DryRun,
    /// An I/O or template error stopped the task.
    Failed,
}

impl TaskStatus {
    /// Summary marker.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Ok => "✓",
            Self::NotApplicable => "·",
            Self::Skipped => "○",
            Self::DryRun => "~",
            Self::Failed => "✗",
        }
    }

    /// ANSI colour for the summary line.
    pub(super) const fn color(self) -> &'static str {
        match self {
            Self::Ok => "\x1b[32m",
            Self::NotApplicable => "\x1b[2m",
            Self::Skipped => "\x1b[33m",
            Self::DryRun => "\x1b[37m",
            Self::Failed => "\x1b[31m",
        }
    }
}

/// Sink for generator output.
///
/// Tasks only see this trait through [`Context`](crate::tasks::Context), so
/// tests can run them against a [`Logger`](super::Logger) without a global
/// subscriber installed.
pub trait Log: Send + Sync {
    /// Section header; one per task.
    fn stage(&self, msg: &str);
    /// Progress line.
    fn info(&self, msg: &str);
    /// Detail shown only with `--verbose` (always kept in the log file).
    fn debug(&self, msg: &str);
    /// Problem that is not tied to a specific library item.
    fn warn(&self, msg: &str);
    /// Task failure.
    fn error(&self, msg: &str);
    /// A write that `--dry-run` suppressed.
    fn dry_run(&self, msg: &str);
    /// A library or project item that was skipped. Recorded for the report;
    /// quiet kinds are logged at debug level only.
    fn skip(&self, warning: Warning);
    /// Record how a task ended.
    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>);
}
