#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `generate` command.
//!
//! Each test builds a temporary rule library and project, runs the full task
//! list through [`generate`](claude_config_cli::commands::generate::generate)
//! and inspects the resulting `.claude/` tree and report.

mod common;

use std::collections::HashSet;

use claude_config_cli::error::{ConfigError, GeneratorError, LibraryError};
use claude_config_cli::logging::TaskStatus;
use claude_config_cli::report::WarningKind;
use claude_config_cli::settings::Settings;
use claude_config_cli::tasks;
use common::{IntegrationTestContext, TestContextBuilder};

fn full_library() -> TestContextBuilder {
    TestContextBuilder::new()
        .with_library_file("languages/python/rules/python-style.md", "# Python\n")
        .with_library_file("languages/typescript/rules/ts-style.md", "# TS\n")
        .with_library_file("frameworks/backend/fastapi/rules/fastapi.md", "# FastAPI\n")
        .with_library_file("frameworks/frontend/react/rules/react.md", "# React\n")
        .with_library_file("infrastructure/docker/rules/docker.md", "# Docker\n")
        .with_library_file("domains/ecommerce/skills/checkout.md", "# Checkout\n")
        .with_library_file(
            "core/agents/reviewer.template.md",
            "Reviewer for {{project_type}}: {{#each contexts}}[{{this}}]{{/each}}\n",
        )
        .with_library_file("core/commands/review.md", "core review\n")
        .with_library_file("frameworks/backend/fastapi/commands/review.md", "fastapi review\n")
        .with_library_file("frameworks/frontend/react/commands/component.md", "react component\n")
}

const FULL_CONFIG: &str = "\
languages: [python, typescript]
backend: [fastapi]
frontend: [react]
infrastructure: [docker]
domains: [ecommerce]
agents:
  reviewer:
    enabled: true
    contexts: [payments, auth]
  tester:
    enabled: false
commands: [review, component]
custom_rules:
  - path: docs/team.md
";

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// Snapshot of all generate task names in execution order.
#[test]
fn generate_task_names() {
    let all_tasks = tasks::all_generate_tasks();
    let task_names: Vec<&str> = all_tasks.iter().map(|t| t.name()).collect();
    insta::assert_snapshot!("generate_task_names", task_names.join("\n"));
}

/// Snapshot of the settings document.
#[test]
fn settings_document() {
    let json = Settings::default().to_json().unwrap();
    insta::assert_snapshot!("settings_document", json);
}

#[test]
fn generate_task_names_are_unique() {
    let all_tasks = tasks::all_generate_tasks();
    let mut seen = HashSet::new();
    for task in &all_tasks {
        assert!(seen.insert(task.name()), "duplicate task name: {}", task.name());
    }
}

// ---------------------------------------------------------------------------
// End-to-end behaviour
// ---------------------------------------------------------------------------

#[test]
fn empty_config_yields_core_rules_and_settings_only() {
    let ctx = IntegrationTestContext::new();
    let report = ctx.generate();

    assert!(!report.has_failures());
    assert!(report.warnings.is_empty());
    assert_eq!(
        ctx.output_files(),
        vec![
            "rules/code-review.md",
            "rules/security.md",
            "settings.local.json",
        ]
    );
    for dir in ["rules", "skills", "agents", "commands"] {
        assert!(ctx.claude_dir().join(dir).is_dir(), "{dir}/ should exist");
    }
    assert!(!ctx.claude_dir().join("custom").exists());
}

#[test]
fn full_config_populates_every_folder() {
    let ctx = full_library()
        .with_config(FULL_CONFIG)
        .with_project_file("docs/team.md", "# Team\n")
        .build();
    let report = ctx.generate();

    assert!(!report.has_failures(), "{:?}", report.tasks);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert_eq!(
        ctx.output_files(),
        vec![
            "agents/reviewer.md",
            "commands/component.md",
            "commands/review.md",
            "custom/team.md",
            "rules/code-review.md",
            "rules/docker.md",
            "rules/fastapi.md",
            "rules/python-style.md",
            "rules/react.md",
            "rules/security.md",
            "rules/ts-style.md",
            "settings.local.json",
            "skills/checkout.md",
        ]
    );
    assert_eq!(
        ctx.read_output("agents/reviewer.md"),
        "Reviewer for fastapi + react: [payments][auth]\n"
    );
}

#[test]
fn running_twice_is_byte_identical() {
    let ctx = full_library()
        .with_config(FULL_CONFIG)
        .with_project_file("docs/team.md", "# Team\n")
        .build();

    ctx.generate();
    let first = ctx.output();
    let report = ctx.generate();
    let second = ctx.output();

    assert_eq!(first, second);
    assert!(!report.has_failures());
}

#[test]
fn core_command_takes_precedence() {
    let ctx = full_library().with_config(FULL_CONFIG).build();
    ctx.generate();
    assert_eq!(ctx.read_output("commands/review.md"), "core review\n");
}

#[test]
fn frontend_command_fallback() {
    let ctx = full_library()
        .with_library_file("frameworks/backend/fastapi/commands/migrate.md", "migrate\n")
        .with_config("backend: [fastapi]\nfrontend: [react]\ncommands: [component]\n")
        .build();
    let report = ctx.generate();

    assert_eq!(ctx.read_output("commands/component.md"), "react component\n");
    assert_eq!(report.warnings_of(WarningKind::MissingCommand).count(), 0);
}

#[test]
fn settings_are_independent_of_config() {
    let plain = IntegrationTestContext::new();
    plain.generate();
    let full = full_library().with_config(FULL_CONFIG).build();
    full.generate();

    assert_eq!(
        plain.read_output("settings.local.json"),
        full.read_output("settings.local.json")
    );
}

#[test]
fn disabled_agent_and_missing_template() {
    let ctx = TestContextBuilder::new()
        .with_config(
            "agents:\n  reviewer:\n    enabled: false\n  architect:\n    enabled: true\n",
        )
        .with_library_file("core/agents/reviewer.template.md", "reviewer")
        .build();
    let report = ctx.generate();

    assert!(!report.has_failures());
    assert!(tree_is_empty(&ctx, "agents"));
    let missing: Vec<&str> = report
        .warnings_of(WarningKind::MissingAgentTemplate)
        .map(|w| w.item.as_str())
        .collect();
    assert_eq!(missing, vec!["architect"]);
}

#[test]
fn yaml_1_1_flags_enable_agents() {
    let ctx = TestContextBuilder::new()
        .with_config("agents:\n  reviewer:\n    enabled: yes\n  tester:\n    enabled: off\n")
        .with_library_file("core/agents/reviewer.template.md", "reviewer\n")
        .with_library_file("core/agents/tester.template.md", "tester\n")
        .build();
    let report = ctx.generate();

    assert!(!report.has_failures());
    let agents: Vec<String> = common::tree(&ctx.claude_dir().join("agents"))
        .into_keys()
        .collect();
    assert_eq!(agents, vec!["reviewer.md"]);
}

#[test]
fn missing_tags_warn_once_each() {
    let ctx = TestContextBuilder::new()
        .with_config("languages: [cobol]\nbackend: [rails]\ndomains: [fintech]\n")
        .build();
    let report = ctx.generate();

    assert!(!report.has_failures());
    let rules: Vec<&str> = report
        .warnings_of(WarningKind::MissingRules)
        .map(|w| w.item.as_str())
        .collect();
    assert_eq!(rules, vec!["cobol", "rails"]);
    assert_eq!(report.warnings_of(WarningKind::MissingSkills).count(), 1);
    assert_eq!(
        ctx.output_files(),
        vec![
            "rules/code-review.md",
            "rules/security.md",
            "settings.local.json",
        ]
    );
}

#[test]
fn later_category_wins_on_collision() {
    let ctx = TestContextBuilder::new()
        .with_library_file("languages/python/rules/security.md", "python security\n")
        .with_library_file("infrastructure/aws/rules/security.md", "aws security\n")
        .with_config("languages: [python]\ninfrastructure: [aws]\n")
        .build();
    ctx.generate();

    assert_eq!(ctx.read_output("rules/security.md"), "aws security\n");
}

#[test]
fn dry_run_writes_nothing_but_reports_warnings() {
    let ctx = full_library()
        .with_config("languages: [python, cobol]\ncommands: [deploy]\n")
        .build();
    let report = ctx.generate_dry_run();

    assert!(!ctx.claude_dir().exists());
    assert_eq!(report.warnings.len(), 2);
    assert!(
        report
            .tasks
            .iter()
            .any(|t| t.name == "Copy core rules" && t.status == TaskStatus::DryRun)
    );
}

#[test]
fn invalid_tags_never_escape_the_library() {
    let ctx = TestContextBuilder::new()
        .with_library_file("secret/rules/leak.md", "leak\n")
        .with_config("languages: ['', '../secret', 'a/b']\n")
        .build();
    let report = ctx.generate();

    assert_eq!(report.warnings_of(WarningKind::InvalidTag).count(), 3);
    assert!(!ctx.claude_dir().join("rules/leak.md").exists());
}

#[test]
fn null_lists_are_empty() {
    let ctx = TestContextBuilder::new()
        .with_config("languages:\nbackend: ~\nagents:\ncommands:\n")
        .build();
    let report = ctx.generate();

    assert!(!report.has_failures());
    assert!(report.warnings.is_empty());
}

#[test]
fn custom_rule_missing_is_recorded_quietly() {
    let ctx = TestContextBuilder::new()
        .with_config("custom_rules:\n  - path: docs/absent.md\n")
        .build();
    let report = ctx.generate();

    assert_eq!(report.warnings_of(WarningKind::MissingCustomRule).count(), 1);
    assert!(ctx.claude_dir().join("custom").is_dir());
}

#[test]
fn template_error_fails_only_the_agents_task() {
    let ctx = TestContextBuilder::new()
        .with_library_file("core/agents/reviewer.template.md", "{{#if}}")
        .with_config("agents:\n  reviewer:\n    enabled: true\n")
        .build();
    let report = ctx.generate();

    let failed: Vec<&str> = report
        .tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Failed)
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(failed, vec!["Generate agents"]);
    assert!(ctx.claude_dir().join("settings.local.json").is_file());
}

// ---------------------------------------------------------------------------
// Fatal errors
// ---------------------------------------------------------------------------

#[test]
fn missing_config_is_fatal() {
    let ctx = IntegrationTestContext::new();
    std::fs::remove_file(ctx.config_path()).unwrap();

    let err = ctx.try_generate(false).unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::Config(ConfigError::NotFound { .. })
    ));
    assert_eq!(
        err.to_string(),
        format!("Config file not found: {}", ctx.config_path().display())
    );
    assert!(!ctx.claude_dir().exists());
}

#[test]
fn malformed_yaml_names_the_file() {
    let ctx = TestContextBuilder::new()
        .with_config("languages: [python\n")
        .build();

    let err = ctx.try_generate(false).unwrap_err();
    assert!(matches!(err, GeneratorError::Config(ConfigError::Parse { .. })));
    assert!(err.to_string().contains("claude-config.yaml"));
}

#[test]
fn missing_core_rules_is_fatal() {
    let ctx = IntegrationTestContext::new();
    std::fs::remove_dir_all(ctx.library().join("core/rules")).unwrap();

    let err = ctx.try_generate(false).unwrap_err();
    assert!(matches!(
        err,
        GeneratorError::Library(LibraryError::MissingCoreRules { .. })
    ));
    assert!(!ctx.claude_dir().exists());
}

fn tree_is_empty(ctx: &IntegrationTestContext, sub: &str) -> bool {
    common::tree(&ctx.claude_dir().join(sub)).is_empty()
}
