//! Tag categories and their directory conventions.
use std::fmt;

use super::ProjectConfig;

/// A tagged category of library content.
///
/// Each category maps a tag to `<category root>/<tag>/<source subfolder>`
/// inside the library and copies into a fixed output subfolder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Programming languages (`languages/<tag>/rules`).
    Language,
    /// Backend frameworks (`frameworks/backend/<tag>/rules`).
    Backend,
    /// Frontend frameworks (`frameworks/frontend/<tag>/rules`).
    Frontend,
    /// Infrastructure (`infrastructure/<tag>/rules`).
    Infrastructure,
    /// Business domains (`domains/<tag>/skills`).
    Domain,
}

impl Category {
    /// All tagged categories in processing order.
    ///
    /// Later categories overwrite earlier ones when file names collide, so
    /// this order is part of the output contract.
    pub const ALL: [Self; 5] = [
        Self::Language,
        Self::Backend,
        Self::Frontend,
        Self::Infrastructure,
        Self::Domain,
    ];

    /// Path of the category root relative to the library root.
    #[must_use]
    pub const fn root_dir(self) -> &'static str {
        match self {
            Self::Language => "languages",
            Self::Backend => "frameworks/backend",
            Self::Frontend => "frameworks/frontend",
            Self::Infrastructure => "infrastructure",
            Self::Domain => "domains",
        }
    }

    /// Subfolder under `<root>/<tag>/` holding the files to copy.
    #[must_use]
    pub const fn source_subfolder(self) -> &'static str {
        match self {
            Self::Domain => "skills",
            _ => "rules",
        }
    }

    /// Subfolder of `.claude/` the files are copied into.
    #[must_use]
    pub const fn output_subfolder(self) -> &'static str {
        self.source_subfolder()
    }

    /// The configured tags for this category.
    #[must_use]
    pub fn tags(self, config: &ProjectConfig) -> &[String] {
        match self {
            Self::Language => &config.languages,
            Self::Backend => &config.backend,
            Self::Frontend => &config.frontend,
            Self::Infrastructure => &config.infrastructure,
            Self::Domain => &config.domains,
        }
    }

    /// Configuration key the tags are read from.
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::Language => "languages",
            Self::Backend => "backend",
            Self::Frontend => "frontend",
            Self::Infrastructure => "infrastructure",
            Self::Domain => "domains",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Language => "language",
            Self::Backend => "backend framework",
            Self::Frontend => "frontend framework",
            Self::Infrastructure => "infrastructure",
            Self::Domain => "domain",
        };
        f.write_str(label)
    }
}
