//! Ensure an output directory exists.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::{Applicable, Resource, ResourceChange, ResourceState};

/// A directory that must exist. Existing contents are never touched.
#[derive(Debug, Clone)]
pub struct DirectoryResource {
    /// Directory path.
    pub path: PathBuf,
}

impl DirectoryResource {
    /// Create a resource for `path`.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Applicable for DirectoryResource {
    fn description(&self) -> String {
        format!("{}/", self.path.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("creating {}", self.path.display()))?;
        Ok(ResourceChange::Applied)
    }
}

impl Resource for DirectoryResource {
    fn current_state(&self) -> Result<ResourceState> {
        if self.path.is_dir() {
            Ok(ResourceState::Correct)
        } else if self.path.exists() {
            Ok(ResourceState::Invalid {
                reason: "a file is in the way".to_string(),
            })
        } else {
            Ok(ResourceState::Missing)
        }
    }
}
