//! Tracing/logging initialization.
//!
//! The domain crates emit structured debug events (classification counts,
//! notification totals); this wires them to JSON output when a host process
//! wants them.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// JSON logs, configurable via `RUST_LOG`, defaulting to `info`. Safe to
/// call multiple times (subsequent calls are no-ops), so embedders and
/// tests can call it unconditionally.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .with_target(false)
        .try_init();
}
