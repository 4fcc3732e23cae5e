//! API Client
//!
//! Two layers: a [`Transport`] that moves JSON to and from the backend with
//! session credentials attached, and a typed [`Backend`] that knows every
//! endpoint and validates the response shapes.

mod backend;
mod error;
mod http;
mod transport;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::Backend;
pub use error::{ApiError, ApiResult};
pub use http::HttpTransport;
pub use transport::{Method, Transport};
