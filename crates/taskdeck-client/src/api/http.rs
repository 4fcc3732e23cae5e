//! HTTP Transport
//!
//! `reqwest`-backed [`Transport`]. In the browser every request goes out
//! through `fetch` with `credentials: include`; native builds keep the
//! session cookie in the client's own cookie store.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use super::{ApiError, ApiResult, Method, Transport};

/// Transport bound to one backend origin
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// `base_url` must be absolute (`https://api.example.com`); trailing
    /// slashes are dropped so endpoint paths can start with `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: build_client(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|e| {
            log::warn!("[api] cookie-aware client unavailable ({}), using default", e);
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> reqwest::Client {
    reqwest::Client::new()
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<Value> {
        let url = self.url(path);
        debug!("[api] {} {}", method, url);

        let request = self.client.request(method, &url);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();
        let request = match body {
            Some(body) => request.json(&body),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_response(status, &text)
    }
}

/// Turn a status and raw body into the transport result.
///
/// A 2xx body that is not JSON is passed through as a string; the typed
/// layer decides whether that is acceptable for the endpoint.
pub(crate) fn decode_response(status: u16, text: &str) -> ApiResult<Value> {
    let parsed = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    };

    if (200..300).contains(&status) {
        return Ok(parsed);
    }

    let message = parsed
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_string);
    Err(ApiError::Request { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_bodies() {
        assert_eq!(decode_response(200, r#"{"tasks":[]}"#), Ok(json!({"tasks": []})));
        assert_eq!(decode_response(204, ""), Ok(Value::Null));
        assert_eq!(decode_response(201, "Created"), Ok(json!("Created")));
    }

    #[test]
    fn test_error_message_extracted() {
        assert_eq!(
            decode_response(400, r#"{"message":"User already exists"}"#),
            Err(ApiError::Request {
                status: 400,
                message: Some("User already exists".into())
            })
        );
    }

    #[test]
    fn test_error_without_message() {
        assert_eq!(
            decode_response(500, "<html>oops</html>"),
            Err(ApiError::Request {
                status: 500,
                message: None
            })
        );
        assert_eq!(
            decode_response(401, r#"{"error":"nope"}"#),
            Err(ApiError::Request {
                status: 401,
                message: None
            })
        );
    }

    #[test]
    fn test_base_url_trimmed() {
        let transport = HttpTransport::new("http://localhost:5000/");
        assert_eq!(transport.base_url(), "http://localhost:5000");
        assert_eq!(transport.url("/api/login"), "http://localhost:5000/api/login");
    }
}
