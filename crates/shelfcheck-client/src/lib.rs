//! Thin HTTP client for driving the system under test
//!
//! One persistent session per suite run, no default headers (the API under
//! test is sensitive to header presence), JSON request bodies, and raw
//! responses handed back uninterpreted. Request/response logging wraps the
//! dispatch via [`logging::traced`].

pub mod error;
pub mod logging;
pub mod response;

pub use error::{ClientError, ClientResult};
pub use response::ApiResponse;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use serde_json::Value;
use std::time::Duration;

/// Blocking HTTP client bound to a base URL
///
/// Constructed once per test (no hidden globals) and passed explicitly to
/// fixtures and assertions.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// Create a client with the transport's default timeout
    ///
    /// # Errors
    /// Returns `ClientError::Transport` if the underlying client cannot be
    /// built.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            base_url: normalize(base_url),
            http,
        })
    }

    /// Create a client with an explicit per-request timeout
    ///
    /// # Errors
    /// Returns `ClientError::Transport` if the underlying client cannot be
    /// built.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: normalize(base_url),
            http,
        })
    }

    /// The configured base URL, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a GET request
    ///
    /// # Errors
    /// Only transport-level failures; non-2xx statuses are returned as
    /// ordinary responses.
    pub fn get(&self, path: &str) -> ClientResult<ApiResponse> {
        self.send(Method::GET, path, None, &[])
    }

    /// Send a GET request with caller-supplied headers
    ///
    /// # Errors
    /// Only transport-level failures or invalid header pairs.
    pub fn get_with_headers(
        &self,
        path: &str,
        headers: &[(&str, &str)],
    ) -> ClientResult<ApiResponse> {
        self.send(Method::GET, path, None, headers)
    }

    /// Send a POST request with a JSON body
    ///
    /// # Errors
    /// Only transport-level or serialization failures.
    pub fn post(&self, path: &str, body: &Value) -> ClientResult<ApiResponse> {
        self.send(Method::POST, path, Some(body), &[])
    }

    /// Send a POST request with a JSON body and caller-supplied headers
    ///
    /// A caller-supplied `Content-Type` takes precedence over the JSON one
    /// the client would otherwise set.
    ///
    /// # Errors
    /// Only transport-level or serialization failures, or invalid headers.
    pub fn post_with_headers(
        &self,
        path: &str,
        body: &Value,
        headers: &[(&str, &str)],
    ) -> ClientResult<ApiResponse> {
        self.send(Method::POST, path, Some(body), headers)
    }

    /// Send a PUT request with a JSON body
    ///
    /// # Errors
    /// Only transport-level or serialization failures.
    pub fn put(&self, path: &str, body: &Value) -> ClientResult<ApiResponse> {
        self.send(Method::PUT, path, Some(body), &[])
    }

    /// Send a PUT request with a JSON body and caller-supplied headers
    ///
    /// # Errors
    /// Only transport-level or serialization failures, or invalid headers.
    pub fn put_with_headers(
        &self,
        path: &str,
        body: &Value,
        headers: &[(&str, &str)],
    ) -> ClientResult<ApiResponse> {
        self.send(Method::PUT, path, Some(body), headers)
    }

    /// Send a DELETE request
    ///
    /// # Errors
    /// Only transport-level failures.
    pub fn delete(&self, path: &str) -> ClientResult<ApiResponse> {
        self.send(Method::DELETE, path, None, &[])
    }

    /// Send a DELETE request with caller-supplied headers
    ///
    /// # Errors
    /// Only transport-level failures or invalid header pairs.
    pub fn delete_with_headers(
        &self,
        path: &str,
        headers: &[(&str, &str)],
    ) -> ClientResult<ApiResponse> {
        self.send(Method::DELETE, path, None, headers)
    }

    fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: &[(&str, &str)],
    ) -> ClientResult<ApiResponse> {
        let url = format!("{}{path}", self.base_url);
        let method_name = method.to_string();

        logging::traced(&method_name, &url, headers, body, || {
            let mut request = self.http.request(method, url.as_str());

            if let Some(payload) = body {
                request = request.body(serde_json::to_vec(payload)?);
                // Caller headers win; only default the content type when
                // the caller said nothing about it.
                if !has_content_type(headers) {
                    request = request.header(CONTENT_TYPE, "application/json");
                }
            }

            for (name, value) in headers {
                let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    ClientError::InvalidHeader {
                        name: (*name).to_string(),
                        reason: e.to_string(),
                    }
                })?;
                let header_value =
                    HeaderValue::from_str(value).map_err(|e| ClientError::InvalidHeader {
                        name: (*name).to_string(),
                        reason: e.to_string(),
                    })?;
                request = request.header(header_name, header_value);
            }

            let response = request.send()?;
            let status = response.status().as_u16();
            let response_headers = response.headers().clone();
            let body_text = response.text().unwrap_or_default();

            Ok(ApiResponse {
                status,
                headers: response_headers,
                body: body_text,
            })
        })
    }
}

fn normalize(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

fn has_content_type(headers: &[(&str, &str)]) -> bool {
    headers
        .iter()
        .any(|(name, _)| name.eq_ignore_ascii_case("content-type"))
}
