//! `tracing` wiring: console style, the per-command log file, and startup.
use std::fs;
use std::io::Write as _;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing::field::{Field, Visit};

use super::utils::{header_timestamp, line_timestamp, log_file_path, strip_ansi};

/// Target of task stage headers.
pub(super) const STAGE_TARGET: &str = "claude_config::stage";
/// Target of suppressed writes under `--dry-run`.
pub(super) const DRY_RUN_TARGET: &str = "claude_config::dry_run";
/// Target of skipped library/project items; carries a `kind` field.
pub(super) const SKIP_TARGET: &str = "claude_config::skip";

/// The generator's line kinds, shared by the console and the log file.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Stage,
    DryRun,
    Skip { kind: String, loud: bool },
    Error,
    Warn,
    Info,
    Debug,
}

/// Message text plus the `kind` field of skip events.
#[derive(Default)]
struct Fields {
    message: String,
    kind: Option<String>,
}

impl Visit for Fields {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "kind" => self.kind = Some(format!("{value:?}")),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "kind" => self.kind = Some(value.to_string()),
            _ => {}
        }
    }
}

/// Decode an event into its line kind and message.
fn classify(event: &tracing::Event<'_>) -> (Line, String) {
    let mut fields = Fields::default();
    event.record(&mut fields);
    let metadata = event.metadata();
    let level = *metadata.level();

    let line = match metadata.target() {
        STAGE_TARGET => Line::Stage,
        DRY_RUN_TARGET => Line::DryRun,
        SKIP_TARGET => Line::Skip {
            kind: fields.kind.take().unwrap_or_default(),
            loud: level <= Level::WARN,
        },
        _ => match level {
            Level::ERROR => Line::Error,
            Level::WARN => Line::Warn,
            Level::INFO => Line::Info,
            _ => Line::Debug,
        },
    };
    (line, fields.message)
}

/// Appends every event, ANSI-free and timestamped, to the command's log file.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Log file for `command` under the cache directory, or `None` when it
    /// cannot be created.
    pub(super) fn new(command: &str) -> Option<Self> {
        Self::at(&log_file_path(command)?, command)
    }

    /// Start a fresh log at `path` with a run header.
    pub(super) fn at(path: &Path, command: &str) -> Option<Self> {
        let rule = "=".repeat(48);
        let header = format!(
            "{rule}\nclaude-config {} {command}  {}\n{rule}\n",
            crate::commands::version::VERSION,
            header_timestamp(),
        );
        fs::write(path, header).ok()?;
        let file = fs::OpenOptions::new().append(true).open(path).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let (line, message) = classify(event);
        let message = strip_ansi(&message);
        let tag = match &line {
            Line::Stage => "==> ".to_string(),
            Line::DryRun => "    [dry run] ".to_string(),
            Line::Skip { kind, .. } => format!("    [skip: {kind}] "),
            Line::Error => "    [error] ".to_string(),
            Line::Warn => "    [warn] ".to_string(),
            Line::Info => "    ".to_string(),
            Line::Debug => "    [debug] ".to_string(),
        };
        if let Ok(mut file) = self.file.lock() {
            writeln!(file, "[{}] {tag}{message}", line_timestamp()).ok();
        }
    }
}

/// Console rendering of [`Line`]s.
struct ConsoleFormat;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormat
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let (line, msg) = classify(event);
        match line {
            Line::Stage => write!(writer, "\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m"),
            Line::DryRun => write!(writer, "  \x1b[33m[DRY RUN]\x1b[0m {msg}"),
            Line::Skip { kind, loud: true } => {
                write!(writer, "\x1b[33mSKIP\x1b[0m  \x1b[2m[{kind}]\x1b[0m {msg}")
            }
            Line::Skip { kind, loud: false } => write!(writer, "  \x1b[2m[{kind}] {msg}\x1b[0m"),
            Line::Error => write!(writer, "\x1b[31mERROR\x1b[0m {msg}"),
            Line::Warn => write!(writer, "\x1b[33mWARN\x1b[0m  {msg}"),
            Line::Info => write!(writer, "  {msg}"),
            Line::Debug => write!(writer, "  \x1b[2m{msg}\x1b[0m"),
        }?;
        writer.write_char('\n')
    }
}

/// Install the global subscriber for `command`.
///
/// The console shows INFO and above (DEBUG with `verbose`); WARN and ERROR,
/// including skipped items, go to stderr. The log file always gets DEBUG.
/// Call once, before any logging.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .and(std::io::stdout.with_min_level(Level::INFO));

    let console = fmt::layer()
        .event_format(ConsoleFormat)
        .with_writer(writer)
        .with_filter(console_level);
    let file = FileLayer::new(command).map(|layer| layer.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry().with(console).with(file).init();
}
