//! Write generated contents (rendered agents, settings) to the output tree.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::fs::{content_state, ensure_parent_dir};
use super::{Applicable, Resource, ResourceChange, ResourceState};

/// A file whose full contents are known up front.
#[derive(Debug, Clone)]
pub struct GeneratedFileResource {
    /// Destination path in the output tree.
    pub dest: PathBuf,
    /// Exact contents to write.
    pub contents: String,
}

impl GeneratedFileResource {
    /// Create a resource writing `contents` to `dest`.
    #[must_use]
    pub fn new(dest: PathBuf, contents: impl Into<String>) -> Self {
        Self {
            dest,
            contents: contents.into(),
        }
    }
}

impl Applicable for GeneratedFileResource {
    fn description(&self) -> String {
        self.dest.display().to_string()
    }

    fn apply(&self) -> Result<ResourceChange> {
        ensure_parent_dir(&self.dest)?;
        std::fs::write(&self.dest, &self.contents)
            .with_context(|| format!("writing {}", self.dest.display()))?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for GeneratedFileResource {
    fn current_state(&self) -> Result<ResourceState> {
        content_state(&self.dest, self.contents.as_bytes())
    }
}
