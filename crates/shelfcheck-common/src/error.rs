//! Common error handling utilities
//!
//! Each shelfcheck crate exposes its own `thiserror` enum; this module
//! carries the one piece they share at the seams.

use std::fmt;

/// Trait for adding context to errors
///
/// Flattens a typed error into a `String` with a leading context label,
/// for places (assertion messages, `expect` calls) where the concrete
/// error type no longer matters.
pub trait ErrorContext<T> {
    /// Add context to an error
    fn context<C>(self, context: C) -> Result<T, String>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T, String>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| format!("{context}: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("Other error: {0}")]
    struct TestError(String);

    #[test]
    fn context_prefixes_the_original_error() {
        let result: Result<(), TestError> = Err(TestError("original error".to_string()));
        let with_context = result.context("while fetching collection");
        assert_eq!(
            with_context.unwrap_err(),
            "while fetching collection: Other error: original error"
        );
    }

    #[test]
    fn ok_values_pass_through() {
        let result: Result<i32, TestError> = Ok(7);
        assert_eq!(result.context("unused"), Ok(7));
    }
}
