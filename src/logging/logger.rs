//! The generator's [`Log`] implementation.
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::{DRY_RUN_TARGET, SKIP_TARGET, STAGE_TARGET};
use super::types::{Log, TaskEntry, TaskStatus};
use super::utils::log_file_path;
use crate::report::{GenerationReport, Warning};

/// Everything a run records besides console output.
#[derive(Debug, Default)]
struct RunRecord {
    tasks: Vec<TaskEntry>,
    skipped: Vec<Warning>,
}

/// Emits `tracing` events and records task outcomes and skipped items.
///
/// With [`init_subscriber`](super::init_subscriber) installed, events also
/// land in `$XDG_CACHE_HOME/claude-config/<command>.log`.
#[derive(Debug)]
pub struct Logger {
    record: Mutex<RunRecord>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Logger for `command`; the summary points at its log file.
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self::with_log_file(log_file_path(command))
    }

    /// Logger whose summary names `log_file` (or no file).
    #[must_use]
    pub fn with_log_file(log_file: Option<PathBuf>) -> Self {
        Self {
            record: Mutex::new(RunRecord::default()),
            log_file,
        }
    }

    /// Task outcomes so far, in execution order.
    #[must_use]
    pub fn task_entries(&self) -> Vec<TaskEntry> {
        self.record
            .lock()
            .map_or_else(|_| vec![], |r| r.tasks.clone())
    }

    /// Skipped items so far, in the order they were met.
    #[must_use]
    pub fn warnings(&self) -> Vec<Warning> {
        self.record
            .lock()
            .map_or_else(|_| vec![], |r| r.skipped.clone())
    }

    /// Print the end-of-run summary: one line per task, skipped items
    /// grouped by kind, the tally, and the log file location.
    pub fn print_summary(&self, report: &GenerationReport) {
        if report.tasks.is_empty() {
            return;
        }
        self.stage("Summary");

        for task in &report.tasks {
            let detail = task
                .message
                .as_deref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));
            self.info(&format!(
                "{}{} {}{detail}\x1b[0m",
                task.status.color(),
                task.status.marker(),
                task.name
            ));
        }

        for (kind, items) in report.items_by_kind() {
            let items: Vec<&str> = items
                .into_iter()
                .map(|item| if item.is_empty() { "\"\"" } else { item })
                .collect();
            self.info(&format!("\x1b[33m{kind}\x1b[0m: {}", items.join(", ")));
        }

        self.info(&report.totals());
        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Log for Logger {
    fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    fn dry_run(&self, msg: &str) {
        tracing::info!(target: DRY_RUN_TARGET, "{msg}");
    }

    fn skip(&self, warning: Warning) {
        if warning.kind.is_quiet() {
            tracing::debug!(target: SKIP_TARGET, kind = %warning.kind, "{}", warning.message);
        } else {
            tracing::warn!(target: SKIP_TARGET, kind = %warning.kind, "{}", warning.message);
        }
        if let Ok(mut record) = self.record.lock() {
            record.skipped.push(warning);
        }
    }

    fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        if let Ok(mut record) = self.record.lock() {
            record.tasks.push(TaskEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::logging::isolated_logger;
    use crate::report::WarningKind;

    #[test]
    fn records_tasks_in_order() {
        let log = Logger::with_log_file(None);
        log.record_task("Copy core rules", TaskStatus::Ok, None);
        log.record_task("Copy commands", TaskStatus::Skipped, Some("no commands configured"));
        let tasks = log.task_entries();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].name, "Copy commands");
        assert_eq!(tasks[1].message.as_deref(), Some("no commands configured"));
    }

    #[test]
    fn skip_records_loud_and_quiet_kinds() {
        let log = Logger::with_log_file(None);
        log.skip(Warning::new(WarningKind::MissingRules, "cobol", "cobol: rules not found"));
        log.skip(Warning::new(WarningKind::MissingCustomRule, "docs/x.md", "not found"));
        let kinds: Vec<WarningKind> = log.warnings().iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::MissingRules, WarningKind::MissingCustomRule]);
    }

    #[test]
    fn file_tags_skips_with_their_kind() {
        let (log, path, _tmp, _guard) = isolated_logger();
        log.stage("Copy language rules");
        log.skip(Warning::new(WarningKind::MissingRules, "cobol", "cobol: rules not found"));
        log.skip(Warning::new(WarningKind::MissingCustomRule, "x.md", "x.md: not found"));
        log.dry_run("would copy security.md");

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("=========="));
        assert!(contents.contains("==> Copy language rules"));
        assert!(contents.contains("[skip: missing rules] cobol: rules not found"));
        assert!(contents.contains("[skip: missing custom rule] x.md: not found"));
        assert!(contents.contains("[dry run] would copy security.md"));
    }

    #[test]
    fn summary_groups_skipped_items_by_kind() {
        let (log, path, _tmp, _guard) = isolated_logger();
        let report = GenerationReport {
            claude_dir: PathBuf::from("/p/.claude"),
            warnings: vec![
                Warning::new(WarningKind::MissingRules, "cobol", "cobol: rules not found"),
                Warning::new(WarningKind::MissingRules, "rails", "rails: rules not found"),
                Warning::new(WarningKind::InvalidTag, "", "invalid tag ''"),
            ],
            tasks: vec![
                TaskEntry {
                    name: "Write settings".to_string(),
                    status: TaskStatus::Ok,
                    message: None,
                },
                TaskEntry {
                    name: "Generate agents".to_string(),
                    status: TaskStatus::Failed,
                    message: Some("bad template".to_string()),
                },
            ],
        };
        log.print_summary(&report);

        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("✓ Write settings"));
        assert!(contents.contains("✗ Generate agents (bad template)"));
        assert!(contents.contains("missing rules: cobol, rails"));
        assert!(contents.contains("invalid tag: \"\""));
        assert!(contents.contains("2 tasks: 1 done, 1 failed; 3 item(s) skipped"));
        assert!(!contents.contains('\x1b'));
    }

    #[test]
    fn empty_run_prints_no_summary() {
        let (log, path, _tmp, _guard) = isolated_logger();
        let report = GenerationReport {
            claude_dir: PathBuf::from("/p/.claude"),
            warnings: vec![],
            tasks: vec![],
        };
        log.print_summary(&report);
        assert!(!fs::read_to_string(path).unwrap().contains("Summary"));
    }
}
