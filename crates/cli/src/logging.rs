// crates/cli/src/logging.rs
use crate::error::Result;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive for a `-v` count. Warnings are always shown.
#[must_use]
pub const fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Engine diagnostics go through the `log`
/// facade and are picked up by the subscriber's log bridge.
///
/// # Errors
/// Fails if a global subscriber or logger is already installed.
pub fn init(verbose: u8) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level_for(verbose)))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .finish()
        .try_init()?;
    Ok(())
}
