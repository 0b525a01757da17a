//! Project configuration model and loading.
pub mod category;
pub mod validation;
pub mod yaml_loader;

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;
use yaml_loader::{lenient_bool, null_as_default};

/// The project configuration read from `claude-config.yaml`.
///
/// Every key is optional; absent or `null` values become empty collections.
/// Tag order is preserved exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Language tags (`languages/<tag>/rules`).
    #[serde(deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    /// Backend framework tags (`frameworks/backend/<tag>/rules`).
    #[serde(deserialize_with = "null_as_default")]
    pub backend: Vec<String>,
    /// Frontend framework tags (`frameworks/frontend/<tag>/rules`).
    #[serde(deserialize_with = "null_as_default")]
    pub frontend: Vec<String>,
    /// Infrastructure tags (`infrastructure/<tag>/rules`).
    #[serde(deserialize_with = "null_as_default")]
    pub infrastructure: Vec<String>,
    /// Domain tags (`domains/<tag>/skills`).
    #[serde(deserialize_with = "null_as_default")]
    pub domains: Vec<String>,
    /// Agents keyed by name, in file order.
    #[serde(deserialize_with = "null_as_default")]
    pub agents: IndexMap<String, AgentConfig>,
    /// Command names to resolve.
    #[serde(deserialize_with = "null_as_default")]
    pub commands: Vec<String>,
    /// Extra files copied into `.claude/custom/`.
    #[serde(deserialize_with = "null_as_default")]
    pub custom_rules: Vec<CustomRule>,
}

/// Per-agent configuration block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Only enabled agents are rendered. Accepts `yes`/`on`/`y` and friends.
    #[serde(deserialize_with = "lenient_bool")]
    pub enabled: bool,
    /// Free-form context entries passed to the template as `contexts`.
    #[serde(deserialize_with = "null_as_default")]
    pub contexts: Vec<serde_json::Value>,
    /// Free-form check entries passed to the template as `custom_checks`.
    #[serde(deserialize_with = "null_as_default")]
    pub custom_checks: Vec<serde_json::Value>,
}

/// A user-supplied rule file, relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CustomRule {
    /// Path to the file. Empty means "nothing to copy".
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
}

impl ProjectConfig {
    /// Load the project configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or not valid YAML
    /// of the expected shape.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        yaml_loader::load_yaml(path)
    }

    /// Derive the human-readable project type shown in agent templates.
    ///
    /// Backend tags and frontend tags are each joined with `" + "`, then the
    /// non-empty groups are joined the same way. With neither, the project is
    /// `"multi-language"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use claude_config_cli::config::ProjectConfig;
    ///
    /// let config = ProjectConfig {
    ///     backend: vec!["fastapi".into()],
    ///     frontend: vec!["react".into()],
    ///     ..ProjectConfig::default()
    /// };
    /// assert_eq!(config.project_type(), "fastapi + react");
    /// assert_eq!(ProjectConfig::default().project_type(), "multi-language");
    /// ```
    #[must_use]
    pub fn project_type(&self) -> String {
        let parts: Vec<String> = [&self.backend, &self.frontend]
            .into_iter()
            .filter(|tags| !tags.is_empty())
            .map(|tags| tags.join(" + "))
            .collect();
        if parts.is_empty() {
            "multi-language".to_string()
        } else {
            parts.join(" + ")
        }
    }

    /// Agents whose `enabled` flag is set, in file order.
    pub fn enabled_agents(&self) -> impl Iterator<Item = (&str, &AgentConfig)> {
        self.agents
            .iter()
            .filter(|(_, agent)| agent.enabled)
            .map(|(name, agent)| (name.as_str(), agent))
    }
}
