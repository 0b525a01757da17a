//! Domain-specific error types for the generator.
//!
//! Internal modules return typed errors (e.g. [`ConfigError`],
//! [`LibraryError`]) while command handlers at the CLI boundary convert them
//! to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! GeneratorError
//! ├── Config(ConfigError)     # YAML loading and parsing
//! ├── Library(LibraryError)   # library root resolution and layout
//! └── Task(TaskError)         # task execution failures
//!
//! TemplateError                # agent templates; fails the agents task only
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the generator.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Configuration-related error (missing file, I/O, YAML syntax).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The rule library could not be located or is incomplete.
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    /// One or more tasks failed.
    #[error("Task execution error: {0}")]
    Task(#[from] TaskError),
}

/// Errors that arise from loading the project configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Config file not found: {}", path.display())]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The configuration file exists but could not be read.
    #[error("IO error reading config file {}: {source}", path.display())]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The YAML document is malformed or does not match the expected shape.
    #[error("Invalid YAML in {}: {source}", path.display())]
    Parse {
        /// Path to the offending file.
        path: PathBuf,
        /// Underlying deserialization error.
        source: serde_yaml::Error,
    },
}

/// Errors that arise from locating the rule library.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// No library root was given and none could be detected.
    #[error("cannot determine library root. Use --root or set CLAUDE_CONFIG_ROOT")]
    RootNotFound,

    /// The mandatory `core/rules` directory is absent.
    #[error("core rules directory not found: {}", path.display())]
    MissingCoreRules {
        /// Expected location of the core rules.
        path: PathBuf,
    },
}

/// Errors that arise from agent template handling.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template text is not valid Handlebars.
    #[error("invalid template '{name}': {message}")]
    Parse {
        /// Agent name the template belongs to.
        name: String,
        /// Parser message.
        message: String,
    },

    /// The template parsed but rendering failed.
    #[error("failed to render template '{name}': {message}")]
    Render {
        /// Agent name the template belongs to.
        name: String,
        /// Renderer message.
        message: String,
    },
}

/// Errors that arise during task execution.
#[derive(Error, Debug)]
pub enum TaskError {
    /// The run finished but some tasks recorded failures.
    #[error("{0} task(s) failed")]
    Failures(usize),
}
