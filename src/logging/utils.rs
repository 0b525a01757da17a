//! Log file location, timestamps, and escape stripping for the log file.
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

/// Drop ANSI escapes so console styling never reaches the log file.
///
/// A CSI sequence (`ESC [`) runs through its final byte in `@`..=`~`; any
/// other escape swallows the one character after `ESC`.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut segments = s.split('\x1b');
    let mut out = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        let rest = segment.strip_prefix('[').map_or_else(
            || {
                let mut chars = segment.chars();
                chars.next();
                chars.as_str()
            },
            |csi| {
                csi.find(|c: char| ('@'..='~').contains(&c))
                    .and_then(|end| csi.get(end + 1..))
                    .unwrap_or_default()
            },
        );
        out.push_str(rest);
    }
    out
}

fn non_empty_var(name: &str) -> Option<OsString> {
    env::var_os(name).filter(|value| !value.is_empty())
}

/// `$XDG_CACHE_HOME/claude-config`, falling back to `~/.cache/claude-config`.
/// Created on demand.
fn cache_dir() -> Option<PathBuf> {
    let base = non_empty_var("XDG_CACHE_HOME").map(PathBuf::from).or_else(|| {
        non_empty_var("HOME")
            .or_else(|| non_empty_var("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(".cache"))
    })?;
    let dir = base.join("claude-config");
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Log file for one subcommand, e.g. `generate.log`.
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    Some(cache_dir()?.join(format!("{command}.log")))
}

/// UTC time for the run header.
pub(super) fn header_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// UTC time prefixed to each log line.
pub(super) fn line_timestamp() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}
