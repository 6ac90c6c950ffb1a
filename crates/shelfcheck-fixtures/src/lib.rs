//! Test-data lifecycle management for the Books/Authors conformance suite
//!
//! Payload generation, next-free-ID allocation against the live
//! collections, create-with-guaranteed-cleanup guards, and the
//! outcome-wrapping markers for known defects and flaky behavior.

pub mod allocate;
pub mod error;
pub mod generate;
pub mod lifecycle;
pub mod outcome;

pub use allocate::{Resource, next_available_id};
pub use error::{FixtureError, FixtureResult};
pub use generate::{author_payload, book_payload, remove_field};
pub use lifecycle::{ResourceGuard, with_cleanup};
pub use outcome::{expect_defect, flaky};
