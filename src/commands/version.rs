//! Command: print version information.

/// Version string: the build-time `CLAUDE_CONFIG_VERSION` if set, otherwise
/// the crate version.
pub const VERSION: &str = match option_env!("CLAUDE_CONFIG_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Print the version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("claude-config {VERSION}");
}
