// Shared helpers for integration tests.
//
// Provides a temporary rule library next to a project directory, plus a
// fluent builder so each integration test can describe the library files and
// configuration it needs without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use claude_config_cli::commands::generate::generate;
use claude_config_cli::error::GeneratorError;
use claude_config_cli::logging::Logger;
use claude_config_cli::report::GenerationReport;

/// Name of the configuration file written into the project directory.
pub const CONFIG_FILE: &str = "claude-config.yaml";

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, contents).expect("write file");
}

/// Write the minimal library layout: `core/rules/` with two rules.
pub fn setup_minimal_library(root: &Path) {
    write_file(&root.join("core/rules/code-review.md"), "# Code review\n");
    write_file(&root.join("core/rules/security.md"), "# Security\n");
}

/// Every file under `dir`, keyed by its path relative to `dir`.
pub fn tree(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fn walk(base: &Path, dir: &Path, out: &mut BTreeMap<String, Vec<u8>>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.map(|e| e.expect("read dir entry")) {
            let path = entry.path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                let rel = path
                    .strip_prefix(base)
                    .expect("path under base")
                    .to_string_lossy()
                    .replace('\\', "/");
                out.insert(rel, std::fs::read(&path).expect("read file"));
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(dir, dir, &mut out);
    out
}

/// An isolated library + project pair backed by a [`tempfile::TempDir`].
pub struct IntegrationTestContext {
    /// Temporary directory holding `library/` and `project/`.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new context with a minimal library and an empty config.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        setup_minimal_library(&root.path().join("library"));
        let ctx = Self { root };
        std::fs::create_dir_all(ctx.project()).expect("create project dir");
        write_file(&ctx.config_path(), "");
        ctx
    }

    /// Library root.
    pub fn library(&self) -> PathBuf {
        self.root.path().join("library")
    }

    /// Project (output) directory.
    pub fn project(&self) -> PathBuf {
        self.root.path().join("project")
    }

    /// `<project>/.claude`.
    pub fn claude_dir(&self) -> PathBuf {
        self.project().join(".claude")
    }

    /// Path of the project configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.project().join(CONFIG_FILE)
    }

    /// Run generation, returning the report or the fatal error.
    pub fn try_generate(&self, dry_run: bool) -> Result<GenerationReport, GeneratorError> {
        let log = Arc::new(Logger::with_log_file(None));
        generate(
            Some(&self.library()),
            &self.config_path(),
            &self.project(),
            &log,
            dry_run,
        )
    }

    /// Run generation and expect it to get past setup.
    pub fn generate(&self) -> GenerationReport {
        self.try_generate(false).expect("generate")
    }

    /// Run generation in dry-run mode.
    pub fn generate_dry_run(&self) -> GenerationReport {
        self.try_generate(true).expect("generate (dry run)")
    }

    /// Every file in the generated `.claude` directory.
    pub fn output(&self) -> BTreeMap<String, Vec<u8>> {
        tree(&self.claude_dir())
    }

    /// Relative paths of the generated files.
    pub fn output_files(&self) -> Vec<String> {
        self.output().into_keys().collect()
    }

    /// Contents of a generated file as a string.
    pub fn read_output(&self, rel: &str) -> String {
        std::fs::read_to_string(self.claude_dir().join(rel)).expect("read output file")
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context backed by a minimal library.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write `contents` to `rel` under the library root.
    pub fn with_library_file(self, rel: &str, contents: &str) -> Self {
        write_file(&self.ctx.library().join(rel), contents);
        self
    }

    /// Write `contents` to `rel` under the project directory.
    pub fn with_project_file(self, rel: &str, contents: &str) -> Self {
        write_file(&self.ctx.project().join(rel), contents);
        self
    }

    /// Replace the project configuration.
    pub fn with_config(self, yaml: &str) -> Self {
        write_file(&self.ctx.config_path(), yaml);
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
