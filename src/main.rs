//! `claude-config` binary entry point.
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use claude_config_cli::{cli, commands, logging};

#[allow(clippy::print_stdout)]
fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();

    let args = match cli::Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // Usage errors exit 1; --help and --version exit 0.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let result = match &args.command {
        cli::Command::Generate(opts) => {
            logging::init_subscriber(args.verbose, "generate");
            let log = Arc::new(logging::Logger::new("generate"));
            commands::generate::run(&args.global, opts, &log)
        }
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
