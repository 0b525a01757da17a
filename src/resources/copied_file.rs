//! Copy a library file into the output tree.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use super::fs::{content_state, ensure_parent_dir};
use super::{Applicable, Resource, ResourceChange, ResourceState};

/// A file copied verbatim from `source` to `dest`.
#[derive(Debug, Clone)]
pub struct CopiedFileResource {
    /// File to read.
    pub source: PathBuf,
    /// Destination path in the output tree.
    pub dest: PathBuf,
}

impl CopiedFileResource {
    /// Create a copy from `source` to `dest`.
    #[must_use]
    pub const fn new(source: PathBuf, dest: PathBuf) -> Self {
        Self { source, dest }
    }

    /// Copy `source` into `dir`, keeping its file name.
    ///
    /// Returns `None` when `source` has no file name component.
    #[must_use]
    pub fn into_dir(source: &Path, dir: &Path) -> Option<Self> {
        let name = source.file_name()?;
        Some(Self::new(source.to_path_buf(), dir.join(name)))
    }
}

impl Applicable for CopiedFileResource {
    fn description(&self) -> String {
        format!("{} -> {}", self.source.display(), self.dest.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        if !self.source.is_file() {
            return Ok(ResourceChange::Skipped {
                reason: format!("source missing: {}", self.source.display()),
            });
        }
        ensure_parent_dir(&self.dest)?;
        std::fs::copy(&self.source, &self.dest).with_context(|| {
            format!(
                "copying {} to {}",
                self.source.display(),
                self.dest.display()
            )
        })?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for CopiedFileResource {
    fn current_state(&self) -> Result<ResourceState> {
        let expected = std::fs::read(&self.source)
            .with_context(|| format!("reading {}", self.source.display()))?;
        content_state(&self.dest, &expected)
    }
}
