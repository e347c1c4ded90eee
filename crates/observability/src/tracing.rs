//! Tracing/logging initialization.
//!
//! The engine crates emit `tracing` events; hosts call in here once at
//! startup. `RUST_LOG` overrides the fallback filter.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process, falling back to
/// `default_filter` when `RUST_LOG` is unset.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
