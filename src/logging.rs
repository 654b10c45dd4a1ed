//! Diagnostic logging setup
//!
//! Library code logs through `tracing` macros. The binary installs a
//! stderr subscriber once at startup; `RUST_LOG` overrides the level derived
//! from `-v` flags and config.

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Default filter directive for a verbosity level
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "info",
        Verbosity::Debug => "debug",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity == Verbosity::Debug);

    // Debug output keeps timestamps; everything else stays terse
    let _ = if verbosity == Verbosity::Debug {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };
}
