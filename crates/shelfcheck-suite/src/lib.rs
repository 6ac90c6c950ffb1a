//! Black-box conformance suite for the Books/Authors REST API
//!
//! The test cases live under `tests/`, one file per verb/resource pair.
//! Tests against the live system under test are `#[ignore]`d by default;
//! run them with `cargo test -- --ignored` once `SHELFCHECK_BASE_URL`
//! points at a reachable deployment. The hermetic tests (wiremock doubles
//! of the documented API behavior) run everywhere.
//!
//! This library carries the pieces every test file needs: a prelude, the
//! live-client constructor, and the assertion helpers for the two error
//! envelopes.

use shelfcheck_client::{ApiClient, ApiResponse};
use shelfcheck_common::ErrorContext;
use shelfcheck_config::SuiteConfig;
use shelfcheck_schemas::{
    bad_request_schema, resolve_placeholder, unsupported_media_type_schema, validate_single,
};
use std::time::Duration;

/// Common imports for test files
pub mod prelude {
    pub use crate::{assert_bad_request, assert_unsupported_media_type, live_client};
    pub use serde_json::{Value, json};
    pub use shelfcheck_client::{ApiClient, ApiResponse};
    pub use shelfcheck_fixtures::{
        Resource, ResourceGuard, author_payload, book_payload, expect_defect, flaky,
        next_available_id, remove_field, with_cleanup,
    };
    pub use shelfcheck_schemas::{
        author_schema, bad_request_schema, book_schema, unsupported_media_type_schema,
        validate_many, validate_single,
    };
}

/// Build a client for the configured live system under test
///
/// Each test constructs its own client rather than sharing module-level
/// state; the session inside is still persistent for that test's
/// requests.
///
/// # Panics
/// Panics if the configuration is invalid or the client cannot be built -
/// there is no point running any test without a usable client.
#[allow(clippy::expect_used)]
pub fn live_client() -> ApiClient {
    shelfcheck_common::initialize_tracing();
    let config = SuiteConfig::from_env_validated()
        .context("suite configuration")
        .expect("suite configuration is valid");
    ApiClient::with_timeout(
        &config.base_url,
        Duration::from_secs(config.timeout_seconds),
    )
    .expect("HTTP client builds")
}

/// Assert a 400 response carrying the bad-request envelope for one field
///
/// Checks the status code, validates the body against the envelope schema
/// resolved to `field_key`, and asserts the first message under that key
/// contains `expected_fragment`.
///
/// # Panics
/// Panics (fails the test) on any mismatch.
#[allow(clippy::expect_used, clippy::panic)]
pub fn assert_bad_request(response: &ApiResponse, field_key: &str, expected_fragment: &str) {
    assert_eq!(
        response.status, 400,
        "expected 400 status code but got {} (body: {:?})",
        response.status, response.body
    );

    let body = response.json_or_fail();
    let schema = resolve_placeholder(bad_request_schema(), field_key);
    validate_single(&body, &schema).expect("body matches the bad-request envelope");

    let first_message = body["errors"][field_key]
        .as_array()
        .and_then(|messages| messages.first())
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string();
    assert!(
        first_message.contains(expected_fragment),
        "expected error message '{expected_fragment}' but got '{first_message}'"
    );
}

/// Assert a 415 response carrying the unsupported-media-type envelope
///
/// # Panics
/// Panics (fails the test) on any mismatch.
#[allow(clippy::expect_used)]
pub fn assert_unsupported_media_type(response: &ApiResponse) {
    validate_single(&response.json_or_fail(), unsupported_media_type_schema())
        .expect("body matches the unsupported-media-type envelope");
    assert_eq!(
        response.status, 415,
        "expected 415 status code but got {}",
        response.status
    );
}
