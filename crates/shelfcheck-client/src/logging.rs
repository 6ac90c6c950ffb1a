//! Request/response logging middleware
//!
//! Wraps every dispatch at client-construction time rather than decorating
//! individual verb methods. The contract: log before dispatch, log after
//! the response arrives, and never let a logging problem escape into the
//! request path.

use crate::error::ClientResult;
use crate::response::ApiResponse;
use serde_json::Value;
use tracing::{info, warn};

/// Marker logged when a response body is empty
const EMPTY_BODY: &str = "<empty>";

/// Run `dispatch` with request/response logging around it
///
/// `headers` are the caller-supplied pairs only; the client adds no
/// defaults, so this is the complete outgoing header set besides what the
/// transport itself requires.
pub fn traced<F>(
    method: &str,
    url: &str,
    headers: &[(&str, &str)],
    payload: Option<&Value>,
    dispatch: F,
) -> ClientResult<ApiResponse>
where
    F: FnOnce() -> ClientResult<ApiResponse>,
{
    info!(
        method,
        url,
        headers = ?headers,
        payload = %payload.map_or_else(|| "None".to_string(), |v| v.to_string()),
        "request"
    );

    let result = dispatch();

    match &result {
        Ok(response) => {
            // Undecodable bodies degrade to raw text, empty ones to a marker.
            let body = if response.body.is_empty() {
                EMPTY_BODY.to_string()
            } else {
                response
                    .json()
                    .map_or_else(|| response.body.clone(), |v| v.to_string())
            };
            info!(status = response.status, body = %body, "response");
        }
        Err(error) => {
            warn!(method, url, %error, "request failed");
        }
    }

    result
}
