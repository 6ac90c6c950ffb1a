//! Fixture error types
//!
//! Allocation and cleanup failures are infrastructure failures: they leave
//! the shared remote collections in a state that can corrupt ID allocation
//! for later tests, so they are kept distinct from ordinary assertion
//! failures.

use shelfcheck_client::ClientError;
use thiserror::Error;

/// Errors raised by test-data fixtures
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The collection fetch behind ID allocation did not succeed
    #[error("Failed to fetch {resource} collection: status {status}")]
    Allocation { resource: &'static str, status: u16 },

    /// A teardown deletion did not succeed; the resource is leaked
    #[error("Cleanup failed for {resource} id {id}: status {status}")]
    Cleanup {
        resource: &'static str,
        id: i64,
        status: u16,
    },

    /// Transport-level failure from the client
    #[error("Client error: {0}")]
    Client(#[from] ClientError),
}

/// Result type for fixture operations
pub type FixtureResult<T> = Result<T, FixtureError>;
