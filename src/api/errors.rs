//! Errors returned by [`VkClient`](crate::api::VkClient) operations.

use thiserror::Error;

use crate::clients::{HttpError, ProviderError};

/// Everything a VK API call can fail with.
///
/// Nothing is retried or swallowed: each variant is propagated to the caller
/// as soon as it occurs.
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::api::ApiError;
///
/// fn describe(error: &ApiError) -> String {
///     match error {
///         ApiError::InvalidInput { reason } => format!("bad call: {reason}"),
///         ApiError::Transport(e) => format!("network: {e}"),
///         ApiError::Provider(e) => format!("VK said {}: {}", e.code, e.message),
///         ApiError::UnexpectedShape { reason } => format!("odd response: {reason}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The call was rejected before any request was built.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was missing or wrong.
        reason: String,
    },

    /// No response was received.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// VK responded with an error.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// VK responded successfully but the body could not be mapped.
    #[error("Unexpected response shape: {reason}")]
    UnexpectedShape {
        /// What the mapper expected.
        reason: String,
    },
}

impl ApiError {
    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            reason: reason.into(),
        }
    }
}

// Verify ApiError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
};
