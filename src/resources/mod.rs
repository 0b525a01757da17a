//! Idempotent resource primitives (check + apply pattern).
pub mod copied_file;
pub mod directory;
pub mod fs;
pub mod generated_file;

use anyhow::Result;

/// Minimal interface for resources that can be described and applied.
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Apply the resource change.
    ///
    /// This method should:
    /// - Create parent directories if needed
    /// - Update the resource to match the desired state
    /// - Return the appropriate `ResourceChange` result
    ///
    /// # Errors
    ///
    /// Returns an error if the resource cannot be applied due to I/O failures,
    /// permission issues, invalid paths, or other system errors.
    fn apply(&self) -> Result<ResourceChange>;
}

/// State of an output file.
///
/// # Examples
///
/// ```
/// use claude_config_cli::resources::ResourceState;
///
/// let missing = ResourceState::Missing;
/// let stale = ResourceState::Incorrect { current: "contents differ".into() };
///
/// assert_ne!(missing, ResourceState::Correct);
/// assert_ne!(stale, ResourceState::Correct);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState {
    /// Resource does not exist or is not present.
    Missing,
    /// Resource exists and matches the desired state.
    Correct,
    /// Resource exists but does not match the desired state.
    Incorrect {
        /// Description of the current value.
        current: String,
    },
    /// Resource cannot be applied (e.g., the destination is a directory).
    Invalid {
        /// Reason why the resource cannot be applied.
        reason: String,
    },
}

/// Result of applying a resource change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// Resource was created or updated.
    Applied,
    /// Resource was skipped (e.g., the source vanished).
    Skipped {
        /// Reason why the resource was skipped.
        reason: String,
    },
}

/// Unified interface for resources that can be checked and applied.
pub trait Resource: Applicable {
    /// Check the current state of the resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource state cannot be determined due to I/O
    /// failures or permission issues.
    fn current_state(&self) -> Result<ResourceState>;
}

impl<T: Applicable + ?Sized> Applicable for &T {
    fn description(&self) -> String {
        (**self).description()
    }

    fn apply(&self) -> Result<ResourceChange> {
        (**self).apply()
    }
}

impl<T: Resource + ?Sized> Resource for &T {
    fn current_state(&self) -> Result<ResourceState> {
        (**self).current_state()
    }
}
