//! The fixed `settings.local.json` permissions document.
use serde::Serialize;

/// File name of the settings document inside `.claude/`.
pub const SETTINGS_FILE: &str = "settings.local.json";

/// Default tool permissions written for every project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Tools approved without prompting.
    pub auto_approve: Vec<String>,
    /// Pattern-scoped allowances.
    pub always_allow: Vec<AllowRule>,
}

/// A single pattern-scoped tool allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllowRule {
    /// Tool the rule applies to.
    pub tool: String,
    /// Regular expression the invocation must match.
    pub pattern: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_approve: ["read", "glob", "grep"].map(String::from).to_vec(),
            always_allow: vec![AllowRule {
                tool: "bash".to_string(),
                pattern: "^(ls|pwd|cat|git status|git diff|git log) ".to_string(),
            }],
        }
    }
}

impl Settings {
    /// Serialize with a two-space indent and no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
