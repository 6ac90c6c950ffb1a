//! Schema registry and validator for the Books/Authors conformance suite
//!
//! Schemas are kept as plain `serde_json` data so one bad-request template
//! can be parameterized per field via placeholder substitution, then
//! compiled and checked with the `jsonschema` crate.

pub mod error;
pub mod registry;
pub mod validator;

pub use error::{SchemaError, SchemaResult};
pub use registry::{
    PLACEHOLDER, author_schema, bad_request_schema, book_schema, unsupported_media_type_schema,
};
pub use validator::{resolve_placeholder, validate_many, validate_single};
