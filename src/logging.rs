//! Diagnostic logging for the command-line binary.
//!
//! The library only emits `tracing` events. The binary installs a
//! `tracing-subscriber` formatter writing to stderr, so stdout stays free
//! for reports.

use tracing_subscriber::{EnvFilter, fmt};

/// Maps `-v` occurrences to a default filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` wins over `verbosity` when set. Calling this more than once
/// is harmless: later calls leave the first subscriber in place.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chatlens={}", level_for(verbosity))));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    tracing::debug!(verbosity, "logging initialized");
}

/// Initialize logging for tests (captured by the test harness).
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
