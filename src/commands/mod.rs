//! Top-level subcommand orchestration.
pub mod generate;
pub mod version;

use std::path::Path;

use crate::config::ProjectConfig;
use crate::config::validation;
use crate::error::GeneratorError;
use crate::library::Library;
use crate::logging::Log;
use crate::tasks::{self, Context, Task};

/// Shared state produced by the common command setup sequence.
///
/// Everything that makes a run impossible (missing config, unparsable YAML,
/// no library) is detected here, before any task touches the filesystem.
#[derive(Debug)]
pub struct CommandSetup {
    /// Parsed project configuration.
    pub config: ProjectConfig,
    /// Located rule library.
    pub library: Library,
}

impl CommandSetup {
    /// Load the configuration, locate the library, and report validation
    /// warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is missing or invalid, the
    /// library root cannot be determined, or `core/rules` is absent.
    pub fn init(
        root: Option<&Path>,
        config_path: &Path,
        log: &dyn Log,
    ) -> Result<Self, GeneratorError> {
        log.stage("Loading configuration");
        log.info(&format!("config: {}", config_path.display()));
        let config = ProjectConfig::load(config_path)?;

        log.debug(&format!("{} languages", config.languages.len()));
        log.debug(&format!("{} backend frameworks", config.backend.len()));
        log.debug(&format!("{} frontend frameworks", config.frontend.len()));
        log.debug(&format!("{} infrastructure tags", config.infrastructure.len()));
        log.debug(&format!("{} domains", config.domains.len()));
        log.debug(&format!("{} agents", config.agents.len()));
        log.debug(&format!("{} commands", config.commands.len()));
        log.debug(&format!("{} custom rules", config.custom_rules.len()));

        let library = Library::resolve(root)?;
        library.ensure_core()?;
        log.info(&format!("library: {}", library.root().display()));

        let warnings = validation::validate(&config);
        if !warnings.is_empty() {
            log.warn(&format!(
                "found {} configuration warning(s):",
                warnings.len()
            ));
            for warning in &warnings {
                log.warn(&format!(
                    "  {} [{}]: {}",
                    warning.source, warning.item, warning.message
                ));
            }
        }

        Ok(Self { config, library })
    }
}

/// Execute every task in order.
///
/// Failures are recorded on the logger and do not stop later tasks.
pub fn run_tasks<'a>(to_run: impl IntoIterator<Item = &'a dyn Task>, ctx: &Context) {
    for task in to_run {
        tasks::execute(task, ctx);
    }
}
