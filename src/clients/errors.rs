//! Transport and provider error types.
//!
//! - [`HttpError`]: the request never produced a response (network failure,
//!   timeout, TLS setup)
//! - [`ProviderError`]: a response was received and classified as a failure,
//!   either by HTTP status, by content type, or because VK declared an
//!   `error` in the body
//!
//! # Example
//!
//! ```rust
//! use vkontakte_oauth::clients::ProviderError;
//! use serde_json::json;
//!
//! let error = ProviderError::new(5, "User authorization failed", json!({}));
//! assert_eq!(error.code, 5);
//! assert_eq!(error.to_string(), "VK API error 5: User authorization failed");
//! ```

use thiserror::Error;

/// A failure classified from a completed VK response.
///
/// Built by [`check_response`](crate::clients::check_response) and never
/// modified afterwards. `body` holds the parsed response body exactly as
/// received, so callers can inspect provider-specific details such as
/// `captcha_sid` or `redirect_uri`.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("VK API error {code}: {message}")]
pub struct ProviderError {
    /// The VK `error_code`, or the HTTP status code when VK supplied none.
    pub code: i64,
    /// The most specific human-readable message available.
    pub message: String,
    /// The raw parsed response body.
    pub body: serde_json::Value,
}

impl ProviderError {
    /// Creates a new provider error.
    #[must_use]
    pub fn new(code: i64, message: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            body,
        }
    }
}

/// Error returned when a request could not be completed by the transport.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network, timeout, or client construction error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns `true` if the transport gave up because of a timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout(),
        }
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ProviderError>();
    assert_send_sync::<HttpError>();
};
