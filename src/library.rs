//! The rule library: the directory tree that rules, skills, agent templates
//! and commands are resolved from.
//!
//! ```text
//! <root>/
//! ├── core/{rules,agents,commands}/
//! ├── languages/<tag>/rules/
//! ├── frameworks/{backend,frontend}/<tag>/{rules,commands}/
//! ├── infrastructure/<tag>/rules/
//! └── domains/<tag>/skills/
//! ```
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config::category::Category;
use crate::error::LibraryError;

/// Environment variable consulted when `--root` is not given.
pub const ROOT_ENV_VAR: &str = "CLAUDE_CONFIG_ROOT";

/// A located rule library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    root: PathBuf,
}

impl Library {
    /// Wrap an existing library root without checking its layout.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the library root from an explicit override or auto-detection.
    ///
    /// Order: `explicit`, then [`ROOT_ENV_VAR`], then the binary's location
    /// (`target/<profile>/` or an installed `bin/`), then the current
    /// directory. Auto-detected candidates must contain `core/rules`.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::RootNotFound`] if no candidate qualifies.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, LibraryError> {
        let env = std::env::var_os(ROOT_ENV_VAR);
        let exe = std::env::current_exe().ok();
        let cwd = std::env::current_dir().ok();
        Self::resolve_from(explicit, env.as_deref(), exe.as_deref(), cwd.as_deref())
    }

    /// [`resolve`](Self::resolve) against the given environment value,
    /// executable path and working directory instead of the process's own.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::RootNotFound`] if no candidate qualifies.
    pub fn resolve_from(
        explicit: Option<&Path>,
        env: Option<&OsStr>,
        exe: Option<&Path>,
        cwd: Option<&Path>,
    ) -> Result<Self, LibraryError> {
        if let Some(root) = explicit {
            return Ok(Self::new(root));
        }

        if let Some(root) = env.filter(|root| !root.is_empty()) {
            return Ok(Self::new(root));
        }

        if let Some(parent) = exe.and_then(Path::parent) {
            let candidates = [
                parent.join("../.."), // target/release/ → repo root
                parent.join(".."),    // bin/ → install root
            ];
            for candidate in &candidates {
                if Self::looks_like_library(candidate) {
                    let root = dunce::canonicalize(candidate)
                        .map_err(|_| LibraryError::RootNotFound)?;
                    return Ok(Self::new(root));
                }
            }
        }

        if let Some(cwd) = cwd
            && Self::looks_like_library(cwd)
        {
            return Ok(Self::new(cwd));
        }

        Err(LibraryError::RootNotFound)
    }

    fn looks_like_library(path: &Path) -> bool {
        path.join("core").join("rules").is_dir()
    }

    /// Check that the mandatory core rules are present.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryError::MissingCoreRules`] if `core/rules` is absent.
    pub fn ensure_core(&self) -> Result<(), LibraryError> {
        let path = self.core_rules_dir();
        if path.is_dir() {
            Ok(())
        } else {
            Err(LibraryError::MissingCoreRules { path })
        }
    }

    /// Library root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `core/`
    #[must_use]
    pub fn core_dir(&self) -> PathBuf {
        self.root.join("core")
    }

    /// `core/rules/`
    #[must_use]
    pub fn core_rules_dir(&self) -> PathBuf {
        self.core_dir().join("rules")
    }

    /// Root directory for a tagged category, e.g. `frameworks/backend/`.
    #[must_use]
    pub fn category_root(&self, category: Category) -> PathBuf {
        self.root.join(category.root_dir())
    }

    /// `core/agents/<name>.template.md`
    #[must_use]
    pub fn agent_template(&self, name: &str) -> PathBuf {
        self.core_dir()
            .join("agents")
            .join(format!("{name}.template.md"))
    }

    /// `core/commands/<name>.md`
    #[must_use]
    pub fn core_command(&self, name: &str) -> PathBuf {
        self.core_dir().join("commands").join(format!("{name}.md"))
    }

    /// `frameworks/<tier>/<framework>/commands/<name>.md`
    #[must_use]
    pub fn framework_command(&self, category: Category, framework: &str, name: &str) -> PathBuf {
        self.category_root(category)
            .join(framework)
            .join("commands")
            .join(format!("{name}.md"))
    }
}
