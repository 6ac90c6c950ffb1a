//! Shared test utilities for all shelfcheck integration tests
//!
//! The suite's client is deliberately blocking, but `wiremock` doubles of
//! the system under test need an async runtime to serve from. This crate
//! provides one persistent multi-thread Tokio runtime shared across ALL
//! integration tests, so mock servers keep serving while the test thread
//! drives blocking requests against them, plus an atomic counter for
//! collision-free resource IDs across parallel tests.
//!
//! ## Usage
//!
//! In your test crate's `Cargo.toml`:
//! ```toml
//! [dev-dependencies]
//! shelfcheck-test-utils = { path = "../shelfcheck-test-utils" }
//! ```
//!
//! In your tests:
//! ```ignore
//! let server = shelfcheck_test_utils::test_runtime()
//!     .block_on(wiremock::MockServer::start());
//! // ... drive blocking requests at server.uri() from the test thread ...
//! ```

use std::sync::OnceLock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Shared Tokio runtime for ALL integration tests across ALL crates
///
/// A single runtime that outlives every test keeps mock servers' spawned
/// tasks alive for the whole suite and avoids "runtime is being shutdown"
/// errors when a server outlives the test that started it.
static TEST_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Global atomic counter for unique resource IDs across test crates
static RESOURCE_COUNTER: AtomicI64 = AtomicI64::new(0);

/// Get the shared test runtime (creates on first call, reuses thereafter)
///
/// Workers default to CPU count; override with `SHELFCHECK_TEST_WORKERS`.
///
/// # Panics
/// Panics if the runtime cannot be created (should never happen in normal
/// conditions).
#[allow(clippy::expect_used)] // Test infrastructure - panic on init failure is acceptable
pub fn test_runtime() -> &'static tokio::runtime::Runtime {
    TEST_RUNTIME.get_or_init(|| {
        let workers = std::env::var("SHELFCHECK_TEST_WORKERS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(std::num::NonZero::get)
                    .unwrap_or(4)
            });

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("shelfcheck-test")
            .worker_threads(workers)
            .build()
            .expect("Failed to create test runtime")
    })
}

/// Get the next unique resource counter value
///
/// Monotonically increasing across every test crate in the workspace; use
/// it to derive IDs that cannot collide between parallel tests.
pub fn next_resource_counter() -> i64 {
    RESOURCE_COUNTER.fetch_add(1, Ordering::SeqCst)
}
