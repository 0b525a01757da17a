//! Generic resource processing loop: check state, apply, collect stats.
//!
//! - [`apply`] brings a single resource up to date
//! - [`context`] holds the shared per-run state handed to every task

mod apply;
pub mod context;

pub use context::Context;

use anyhow::Result;

use crate::resources::Resource;

/// Result of a single task execution.
///
/// # Examples
///
/// ```
/// use claude_config_cli::tasks::TaskResult;
///
/// let ok = TaskResult::Ok;
/// let skipped = TaskResult::Skipped("no agents configured".into());
/// let dry = TaskResult::DryRun;
///
/// assert!(matches!(ok, TaskResult::Ok));
/// assert!(matches!(skipped, TaskResult::Skipped(_)));
/// assert!(matches!(dry, TaskResult::DryRun));
/// ```
#[derive(Debug, Clone)]
pub enum TaskResult {
    /// Task completed successfully.
    Ok,
    /// Task had nothing to do.
    Skipped(String),
    /// Task ran in dry-run mode.
    DryRun,
}

/// Counters for tasks that write many files.
///
/// # Examples
///
/// ```
/// use claude_config_cli::tasks::TaskStats;
///
/// let mut stats = TaskStats::new();
/// stats.changed = 3;
/// stats.already_ok = 10;
///
/// assert_eq!(stats.summary(false), "3 changed, 10 already ok");
/// assert_eq!(stats.summary(true), "3 would change, 10 already ok");
/// assert_eq!(stats.copied(), 13);
/// ```
///
/// When items are skipped, the summary includes the count:
///
/// ```
/// use claude_config_cli::tasks::TaskStats;
///
/// let stats = TaskStats { changed: 1, already_ok: 2, skipped: 3 };
/// assert_eq!(stats.summary(false), "1 changed, 2 already ok, 3 skipped");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of files written (or that would be written).
    pub changed: u32,
    /// Number of files that already had the right contents.
    pub already_ok: u32,
    /// Number of files skipped because of errors.
    pub skipped: u32,
}

impl TaskStats {
    /// Create a new empty stats counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files resolved into the output tree, changed or not.
    #[must_use]
    pub const fn copied(&self) -> u32 {
        self.changed + self.already_ok
    }

    /// Format the summary string (e.g. "3 changed, 10 already ok, 1 skipped").
    #[must_use]
    pub fn summary(&self, dry_run: bool) -> String {
        let verb = if dry_run { "would change" } else { "changed" };
        if self.skipped > 0 {
            format!(
                "{} {verb}, {} already ok, {} skipped",
                self.changed, self.already_ok, self.skipped
            )
        } else {
            format!("{} {verb}, {} already ok", self.changed, self.already_ok)
        }
    }

    /// Log the summary and return the appropriate `TaskResult`.
    #[must_use]
    pub fn finish(self, ctx: &Context) -> TaskResult {
        ctx.log.info(&self.summary(ctx.dry_run));
        if ctx.dry_run {
            TaskResult::DryRun
        } else {
            TaskResult::Ok
        }
    }
}

impl std::ops::AddAssign for TaskStats {
    fn add_assign(&mut self, other: Self) {
        self.changed += other.changed;
        self.already_ok += other.already_ok;
        self.skipped += other.skipped;
    }
}

/// Configuration for the generic resource processing loop.
///
/// # Examples
///
/// ```
/// use claude_config_cli::tasks::ProcessOpts;
///
/// // Surface every failure:
/// let opts = ProcessOpts::apply_all("copy");
/// assert!(opts.bail_on_error);
///
/// // Warn on failures and keep going:
/// let opts = ProcessOpts::apply_all("copy").no_bail();
/// assert!(!opts.bail_on_error);
/// ```
#[derive(Debug)]
pub struct ProcessOpts<'a> {
    /// Verb for log messages (e.g., "copy", "write").
    pub verb: &'a str,
    /// Propagate errors from `apply()`. If `false`, warn and count as skipped.
    pub bail_on_error: bool,
}

impl<'a> ProcessOpts<'a> {
    /// Apply every missing or stale resource, bailing on errors.
    #[must_use]
    pub const fn apply_all(verb: &'a str) -> Self {
        Self {
            verb,
            bail_on_error: true,
        }
    }

    /// Warn on errors instead of bailing.
    #[must_use]
    pub const fn no_bail(mut self) -> Self {
        self.bail_on_error = false;
        self
    }
}

/// Process resources in order, checking each one's state and applying as
/// needed.
///
/// # Errors
///
/// With `bail_on_error` set, returns the first resource that cannot be
/// inspected or written. Invalid resources are always skipped.
pub fn process_resources<R: Resource>(
    ctx: &Context,
    resources: impl IntoIterator<Item = R>,
    opts: &ProcessOpts,
) -> Result<TaskStats> {
    let mut stats = TaskStats::new();
    for resource in resources {
        stats += apply::process_single(ctx, &resource, opts)?;
    }
    Ok(stats)
}
