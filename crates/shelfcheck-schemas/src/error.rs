//! Schema validation error types

use thiserror::Error;

/// Errors raised while validating response bodies
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SchemaError {
    /// The value does not conform to the schema
    #[error("Schema violation at '{path}': {rule}")]
    Violation {
        /// Instance path of the offending value (element index included
        /// when validating a sequence)
        path: String,
        /// Human-readable description of the rule that failed
        rule: String,
    },

    /// A sequence validator was handed something that is not a sequence
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: String,
    },

    /// The schema document itself is not a valid JSON Schema
    #[error("Schema failed to compile: {0}")]
    Compile(String),
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
