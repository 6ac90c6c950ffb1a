//! Client error types

use thiserror::Error;

/// Errors surfaced by the HTTP client
///
/// Note that non-2xx responses are *not* errors: the suite asserts on
/// status codes explicitly, so only transport-level failures land here.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or protocol failure from the transport
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Request body could not be serialized as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Caller-supplied header pair was not valid HTTP
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
