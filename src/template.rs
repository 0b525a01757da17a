//! Agent template rendering.
//!
//! Agent templates are Handlebars documents. Rendering is markdown-oriented:
//! HTML escaping is off and unknown variables render as empty strings.
use handlebars::Handlebars;
use serde::Serialize;

use crate::config::{AgentConfig, ProjectConfig};
use crate::error::TemplateError;

/// Variables available to an agent template.
#[derive(Debug, Clone, Serialize)]
pub struct AgentVars<'a> {
    /// Derived project type (see [`ProjectConfig::project_type`]).
    pub project_type: String,
    /// Configured language tags.
    pub languages: &'a [String],
    /// Configured backend framework tags.
    pub backend: &'a [String],
    /// Configured frontend framework tags.
    pub frontend: &'a [String],
    /// Configured infrastructure tags.
    pub infrastructure: &'a [String],
    /// The agent's own `contexts` entries.
    pub contexts: &'a [serde_json::Value],
    /// The agent's own `custom_checks` entries.
    pub custom_checks: &'a [serde_json::Value],
}

impl<'a> AgentVars<'a> {
    /// Bind the project configuration and one agent's settings.
    #[must_use]
    pub fn new(config: &'a ProjectConfig, agent: &'a AgentConfig) -> Self {
        Self {
            project_type: config.project_type(),
            languages: &config.languages,
            backend: &config.backend,
            frontend: &config.frontend,
            infrastructure: &config.infrastructure,
            contexts: &agent.contexts,
            custom_checks: &agent.custom_checks,
        }
    }
}

/// Handlebars registry configured for markdown output.
#[derive(Debug)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    /// Create an engine with escaping disabled and non-strict lookups.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }

    /// Parse `text` and register it under `name`, replacing any earlier
    /// template of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Parse`] if the text is not valid Handlebars.
    pub fn register(&mut self, name: &str, text: &str) -> Result<(), TemplateError> {
        self.handlebars
            .register_template_string(name, text)
            .map_err(|e| TemplateError::Parse {
                name: name.to_string(),
                message: e.to_string(),
            })
    }

    /// Render the template registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Render`] if rendering fails (for example a
    /// helper receives the wrong kind of value).
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, TemplateError> {
        self.handlebars
            .render(name, data)
            .map_err(|e| TemplateError::Render {
                name: name.to_string(),
                message: e.to_string(),
            })
    }

    /// Register then render in one step.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`register`](Self::register) and
    /// [`render`](Self::render).
    pub fn render_text<T: Serialize>(
        &mut self,
        name: &str,
        text: &str,
        data: &T,
    ) -> Result<String, TemplateError> {
        self.register(name, text)?;
        self.render(name, data)
    }
}
