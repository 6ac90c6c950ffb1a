//! Common utilities and patterns shared across shelfcheck crates
//!
//! This crate provides shared functionality to reduce duplication across
//! the various shelfcheck components.

pub mod error;
pub mod init;

pub use error::ErrorContext;
pub use init::{initialize_environment, initialize_tracing};
