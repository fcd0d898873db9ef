//! Shared helpers for the integration tests.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber for test output.
///
/// Safe to call from every test. Enable with `RUST_LOG=lustre_scanner=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_test_writer())
                .with(filter)
                .init();
        }
    });
}
