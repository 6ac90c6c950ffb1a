//! Static JSON Schema documents for the Books/Authors API
//!
//! Schemas are plain structured data, built once and shared; the
//! bad-request schema carries the reserved `{PLACEHOLDER}` token that
//! [`crate::validator::resolve_placeholder`] substitutes with the concrete
//! field path under test.

use once_cell::sync::Lazy;
use serde_json::{Value, json};

/// Reserved token substituted with a concrete field path before use
pub const PLACEHOLDER: &str = "{PLACEHOLDER}";

static AUTHOR_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer", "minimum": 1},
            "idBook": {"type": "integer", "minimum": 1},
            "firstName": {"type": ["string", "null"]},
            "lastName": {"type": ["string", "null"]}
        },
        "required": ["id", "idBook", "firstName", "lastName"],
        "additionalProperties": false
    })
});

static BOOK_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "id": {"type": "integer", "minimum": 1},
            "title": {"type": ["string", "null"]},
            "description": {"type": ["string", "null"]},
            "pageCount": {"type": "integer", "minimum": 1},
            "excerpt": {"type": ["string", "null"]},
            "publishDate": {"type": "string", "format": "date-time"}
        },
        "required": ["id", "title", "description", "pageCount", "excerpt", "publishDate"],
        "additionalProperties": false
    })
});

static BAD_REQUEST_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "type": {"type": "string", "format": "uri"},
            "title": {"type": "string"},
            "status": {"type": "integer"},
            "traceId": {"type": "string"},
            "errors": {
                "type": "object",
                "properties": {
                    PLACEHOLDER: {
                        "type": "array",
                        "items": {"type": "string"}
                    }
                },
                "required": [PLACEHOLDER],
                "additionalProperties": false
            }
        },
        "required": ["type", "title", "status", "traceId", "errors"],
        "additionalProperties": false
    })
});

static UNSUPPORTED_MEDIA_TYPE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "object",
        "properties": {
            "type": {
                "type": "string",
                "format": "uri",
                "const": "https://tools.ietf.org/html/rfc7231#section-6.5.13"
            },
            "title": {"type": "string", "const": "Unsupported Media Type"},
            "status": {"type": "integer", "const": 415},
            "traceId": {"type": "string"}
        },
        "required": ["type", "title", "status", "traceId"],
        "additionalProperties": false
    })
});

/// Expected shape of a single author object
pub fn author_schema() -> &'static Value {
    &AUTHOR_SCHEMA
}

/// Expected shape of a single book object
pub fn book_schema() -> &'static Value {
    &BOOK_SCHEMA
}

/// Error envelope for 400 responses, keyed by `{PLACEHOLDER}`
///
/// Resolve the placeholder to the field path under test before validating.
pub fn bad_request_schema() -> &'static Value {
    &BAD_REQUEST_SCHEMA
}

/// Error envelope for 415 responses, with fixed `type`/`title`/`status`
pub fn unsupported_media_type_schema() -> &'static Value {
    &UNSUPPORTED_MEDIA_TYPE_SCHEMA
}
