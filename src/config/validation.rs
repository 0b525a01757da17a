//! Pre-flight checks on the tag lists.
use std::collections::HashSet;
use std::path::{Component, Path};

use super::ProjectConfig;
use super::category::Category;

/// A validation warning detected after configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The configuration key (e.g., "languages", "commands").
    pub source: String,
    /// The specific tag or entry that triggered the warning.
    pub item: String,
    /// Human-readable warning message.
    pub message: String,
}

impl ValidationWarning {
    /// Create a new warning.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        item: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            item: item.into(),
            message: message.into(),
        }
    }
}

/// Whether `tag` is usable as a single directory name under a category root.
///
/// Tags must be non-empty and resolve to exactly one normal path component,
/// so `"../x"`, `"a/b"` and absolute paths are rejected.
///
/// # Examples
///
/// ```
/// use claude_config_cli::config::validation::is_valid_tag;
///
/// assert!(is_valid_tag("python"));
/// assert!(is_valid_tag("next.js"));
/// assert!(!is_valid_tag(""));
/// assert!(!is_valid_tag("../secrets"));
/// assert!(!is_valid_tag("frameworks/react"));
/// ```
#[must_use]
pub fn is_valid_tag(tag: &str) -> bool {
    if tag.trim().is_empty() || tag.contains(['/', '\\']) {
        return false;
    }
    let mut components = Path::new(tag).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Check the configuration for repeated tags and empty custom rule paths.
///
/// Duplicates are legal (they copy the same files twice) but usually a typo.
/// Invalid tags and agent names are left to the tasks, which skip them and
/// record an invalid-tag warning.
#[must_use]
pub fn validate(config: &ProjectConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let lists = Category::ALL
        .into_iter()
        .map(|c| (c.config_key(), c.tags(config)))
        .chain(std::iter::once(("commands", config.commands.as_slice())));

    for (key, tags) in lists {
        let mut seen = HashSet::new();
        for tag in tags.iter().filter(|tag| is_valid_tag(tag)) {
            if !seen.insert(tag.as_str()) {
                warnings.push(ValidationWarning::new(key, tag, "listed more than once"));
            }
        }
    }

    for rule in &config.custom_rules {
        if rule.path.trim().is_empty() {
            warnings.push(ValidationWarning::new(
                "custom_rules",
                "",
                "entry has no path",
            ));
        }
    }

    warnings
}
