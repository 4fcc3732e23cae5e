//! Transport Seam
//!
//! Abstract interface for sending one request to the backend.
//! The browser build uses [`super::HttpTransport`]; tests script their own.

use async_trait::async_trait;
use serde_json::Value;

use super::ApiResult;

pub use reqwest::Method;

/// Sends a single credentialed JSON request.
///
/// Futures are `?Send`: everything runs on the browser's event loop.
#[async_trait(?Send)]
pub trait Transport {
    /// Issue `method path` relative to the configured origin.
    ///
    /// Returns the parsed body on 2xx (`Value::Null` when empty), otherwise
    /// [`super::ApiError::Request`] or [`super::ApiError::Network`].
    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<Value>;
}
