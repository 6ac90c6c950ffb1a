//! Raw response envelope returned to test code

use reqwest::header::HeaderMap;
use serde_json::Value;

/// An HTTP response, captured unmodified and uninterpreted
///
/// The client never turns a non-2xx status into an error; tests inspect
/// `status` themselves because many of them *expect* 4xx responses.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Status code as sent by the server
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body text (may be empty)
    pub body: String,
}

impl ApiResponse {
    /// Whether the status code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON, returning `None` if it is empty or not JSON
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Parse the body as JSON or panic with a readable assertion message
    ///
    /// For test code only; assertion helpers want the body in the failure
    /// output when the server returns something unexpected.
    ///
    /// # Panics
    /// Panics if the body is empty or not valid JSON.
    #[allow(clippy::panic)]
    pub fn json_or_fail(&self) -> Value {
        self.json().unwrap_or_else(|| {
            panic!(
                "expected a JSON body but got (status {}): {:?}",
                self.status, self.body
            )
        })
    }
}
