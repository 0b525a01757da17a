//! Claude configuration generator.
//!
//! Reads a project's `claude-config.yaml` (languages, frameworks,
//! infrastructure, domains, agents, commands, custom rules) and assembles a
//! `.claude/` directory by copying markdown rules and skills out of a rule
//! library, rendering agent templates, and writing a default settings file.
//!
//! The public API is organised into four layers:
//!
//! - **[`config`]**: parse and validate the YAML configuration
//! - **[`resources`]**: idempotent `check + apply` file primitives
//! - **[`tasks`]**: named, ordered units of work wired to resources
//! - **[`commands`]**: top-level subcommand orchestration (`generate`, `version`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod library;
pub mod logging;
pub mod report;
pub mod resources;
pub mod settings;
pub mod tasks;
pub mod template;
