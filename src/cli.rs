//! Command-line interface definition.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::version::VERSION;

/// Top-level CLI entry point.
#[derive(Parser, Debug)]
#[command(
    name = "claude-config",
    about = "Assemble a project's .claude/ directory from a YAML tag list",
    version = VERSION
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Options shared across all subcommands.
    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone)]
pub struct GlobalOpts {
    /// Preview changes without writing anything
    #[arg(short = 'd', long, global = true)]
    pub dry_run: bool,

    /// Rule library root (defaults to $CLAUDE_CONFIG_ROOT or auto-detection)
    #[arg(long, global = true, value_name = "LIBRARY")]
    pub root: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate .claude/ from a configuration file
    Generate(GenerateOpts),
    /// Print version information
    Version,
}

/// Options for the `generate` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct GenerateOpts {
    /// Project configuration (e.g. claude-config.yaml)
    #[arg(value_name = "CONFIG_FILE")]
    pub config_file: PathBuf,

    /// Project directory to write .claude/ into (defaults to the current directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_with_output_dir() {
        let cli = Cli::parse_from(["claude-config", "generate", "claude-config.yaml", "app"]);
        let Command::Generate(opts) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(opts.config_file, PathBuf::from("claude-config.yaml"));
        assert_eq!(opts.output_dir, Some(PathBuf::from("app")));
    }

    #[test]
    fn output_dir_is_optional() {
        let cli = Cli::parse_from(["claude-config", "generate", "claude-config.yaml"]);
        assert!(matches!(
            cli.command,
            Command::Generate(GenerateOpts {
                output_dir: None,
                ..
            })
        ));
    }

    #[test]
    fn config_file_is_required() {
        let err = Cli::try_parse_from(["claude-config", "generate"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn help_and_version_are_not_errors() {
        for flag in ["--help", "--version"] {
            let err = Cli::try_parse_from(["claude-config", flag]).unwrap_err();
            assert!(!err.use_stderr(), "{flag} should print to stdout");
        }
    }

    #[test]
    fn parse_dry_run_short() {
        let cli = Cli::parse_from(["claude-config", "-d", "generate", "c.yaml"]);
        assert!(cli.global.dry_run);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "claude-config",
            "generate",
            "c.yaml",
            "--root",
            "/opt/library",
            "-v",
        ]);
        assert_eq!(cli.global.root, Some(PathBuf::from("/opt/library")));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_version() {
        let cli = Cli::parse_from(["claude-config", "version"]);
        assert!(matches!(cli.command, Command::Version));
    }
}
