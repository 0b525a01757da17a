//! Render enabled agents from `core/agents/<name>.template.md`.
use anyhow::{Context as _, Result};

use super::{Context, ProcessOpts, Task, TaskResult, process_resources};
use crate::config::validation::is_valid_tag;
use crate::report::WarningKind;
use crate::resources::generated_file::GeneratedFileResource;
use crate::template::{AgentVars, TemplateEngine};

/// Render every enabled agent into `.claude/agents/<name>.md`.
#[derive(Debug)]
pub struct GenerateAgents;

impl Task for GenerateAgents {
    fn name(&self) -> &str {
        "Generate agents"
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        true
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        if ctx.config.agents.is_empty() {
            return Ok(TaskResult::Skipped("no agents configured".to_string()));
        }

        let mut engine = TemplateEngine::new();
        let mut rendered = Vec::new();
        for (name, agent) in ctx.config.enabled_agents() {
            if !is_valid_tag(name) {
                ctx.warn(
                    WarningKind::InvalidTag,
                    name,
                    &format!("invalid agent name '{name}' (skipping)"),
                );
                continue;
            }

            let template_path = ctx.library.agent_template(name);
            if !template_path.is_file() {
                ctx.warn(
                    WarningKind::MissingAgentTemplate,
                    name,
                    &format!("{name}: template not found (skipping)"),
                );
                continue;
            }

            let text = std::fs::read_to_string(&template_path)
                .with_context(|| format!("reading {}", template_path.display()))?;
            let contents = engine.render_text(name, &text, &AgentVars::new(&ctx.config, agent))?;
            ctx.log.debug(&format!("rendered agent: {name}"));
            rendered.push(GeneratedFileResource::new(
                ctx.output_dir("agents").join(format!("{name}.md")),
                contents,
            ));
        }

        let stats = process_resources(ctx, rendered, &ProcessOpts::apply_all("write"))?;
        ctx.log.info(&format!("agents: {} files", stats.copied()));
        Ok(stats.finish(ctx))
    }
}
