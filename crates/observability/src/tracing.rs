//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
///
/// Logs go to stderr so the CLI's stdout stays clean for command output.
/// Default level is `warn`; raise it via `RUST_LOG` (e.g.
/// `RUST_LOG=storekit_flows=debug`).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .with_target(true)
        .try_init();
}
