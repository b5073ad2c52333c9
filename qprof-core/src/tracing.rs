//! Observability setup.
//! `tracing` crate with `EnvFilter`, per-subsystem log levels.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the qprof tracing/logging system.
///
/// Reads the `QPROF_LOG` environment variable for per-subsystem log
/// levels, e.g. `QPROF_LOG=qprof_storage=debug,qprof_exchange=info`.
/// Falls back to the given filter (usually from config) when the
/// variable is not set or invalid.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing(fallback_filter: &str) {
    let fallback = fallback_filter.to_string();
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("QPROF_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
