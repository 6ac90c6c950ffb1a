//! Global initialization utilities for the suite

use std::sync::Once;

static ENV_INIT: Once = Once::new();
static TRACING_INIT: Once = Once::new();

/// Initialize the process environment
///
/// Loads environment variables from a `.env` file if one exists, searching
/// upward from the current directory. Safe to call multiple times - will
/// only run once.
pub fn initialize_environment() {
    ENV_INIT.call_once(|| {
        dotenvy::dotenv().ok();
    });
}

/// Install the tracing subscriber used by test binaries
///
/// Honors `RUST_LOG` via the standard env filter and writes to the test
/// writer so output interleaves correctly with the harness. Safe to call
/// from every test; only the first call installs.
pub fn initialize_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;

        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}
