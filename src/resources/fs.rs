//! File-system helpers shared by resources and tasks.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use super::ResourceState;

/// List the `*.md` regular files directly inside `dir` (non-recursive).
///
/// Results come back in glob order, which is sorted by path, so copies are
/// performed in a stable order on every platform.
///
/// # Errors
///
/// Returns an error if `dir` is not valid UTF-8 or a directory entry cannot
/// be read.
pub fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let dir_str = dir
        .to_str()
        .with_context(|| format!("path is not valid UTF-8: {}", dir.display()))?;
    let pattern = format!("{}/*.md", glob::Pattern::escape(dir_str));

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("invalid glob: {pattern}"))? {
        let path = entry.with_context(|| format!("reading entry in {}", dir.display()))?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// Compare the file at `dest` against the bytes it should contain.
///
/// # Errors
///
/// Returns an error if `dest` exists but cannot be read.
pub fn content_state(dest: &Path, expected: &[u8]) -> Result<ResourceState> {
    if dest.is_dir() {
        return Ok(ResourceState::Invalid {
            reason: "destination is a directory".to_string(),
        });
    }
    if !dest.exists() {
        return Ok(ResourceState::Missing);
    }
    let current =
        std::fs::read(dest).with_context(|| format!("reading {}", dest.display()))?;
    if current == expected {
        Ok(ResourceState::Correct)
    } else {
        Ok(ResourceState::Incorrect {
            current: format!("{} bytes with different contents", current.len()),
        })
    }
}
