//! `tracing` subscriber setup for the shell.

use tracing_subscriber::EnvFilter;

/// Install a stderr `fmt` subscriber filtered by `directive`.
///
/// An unparsable directive falls back to `warn`. Installing twice is a
/// no-op, which keeps tests that build several sessions quiet.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
