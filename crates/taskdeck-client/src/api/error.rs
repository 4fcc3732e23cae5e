//! API Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a single backend call. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status
    #[error("request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Request {
        status: u16,
        /// The body's `message` field, when there was one
        message: Option<String>,
    },

    /// No response at all
    #[error("network error: {0}")]
    Network(String),

    /// 2xx body that does not match the endpoint's schema
    #[error("unexpected response: {0}")]
    Schema(String),
}

impl ApiError {
    /// Text for the inline error slot: the server's own message if it sent
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Request {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}
