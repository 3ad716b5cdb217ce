//! OAuth-specific error types.
//!
//! # Error Types
//!
//! - [`OAuthError::StateMismatch`]: OAuth state parameter doesn't match expected
//! - [`OAuthError::AuthorizationDenied`]: The user or VK refused the authorization
//! - [`OAuthError::InvalidCallback`]: Callback parameters are malformed
//! - [`OAuthError::MissingRedirectUri`]: No redirect URI configured
//! - [`OAuthError::TokenExchangeFailed`]: Token response could not be used
//! - [`OAuthError::Provider`]: VK answered the token request with an error
//! - [`OAuthError::HttpError`]: Wrapped transport error
//!
//! # Example
//!
//! ```rust
//! use vkontakte_oauth::auth::oauth::OAuthError;
//!
//! let error = OAuthError::StateMismatch {
//!     expected: "abc123".to_string(),
//!     received: "xyz789".to_string(),
//! };
//! assert!(error.to_string().contains("abc123"));
//! ```

use crate::clients::{HttpError, ProviderError};
use thiserror::Error;

/// Errors that can occur during OAuth operations.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// OAuth state parameter mismatch.
    ///
    /// The state parameter in the callback does not match the state that was
    /// generated by `begin_auth()`.
    #[error("State parameter mismatch: expected '{expected}', received '{received}'")]
    StateMismatch {
        /// The expected state value that was generated.
        expected: String,
        /// The state value received in the callback.
        received: String,
    },

    /// VK redirected back with an `error` instead of a code.
    #[error("Authorization denied: {error} ({description})")]
    AuthorizationDenied {
        /// The `error` callback parameter (e.g. `access_denied`).
        error: String,
        /// The `error_description` callback parameter, possibly empty.
        description: String,
    },

    /// Callback parameters are invalid or malformed.
    #[error("Invalid callback: {reason}")]
    InvalidCallback {
        /// Description of what's invalid about the callback.
        reason: String,
    },

    /// No redirect URI is configured in `VkConfig`.
    ///
    /// Configure it via `VkConfigBuilder::redirect_uri()`.
    #[error("Redirect URI must be configured in VkConfig for OAuth")]
    MissingRedirectUri,

    /// The token endpoint answered successfully but the body is unusable.
    #[error("Token exchange failed: {reason}")]
    TokenExchangeFailed {
        /// Why the response could not be turned into a token.
        reason: String,
    },

    /// The token endpoint response was classified as an error.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Wrapped HTTP client error.
    #[error(transparent)]
    HttpError(#[from] HttpError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_state_mismatch_includes_expected_and_received() {
        let error = OAuthError::StateMismatch {
            expected: "abc123".to_string(),
            received: "xyz789".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("abc123"));
        assert!(message.contains("xyz789"));
    }

    #[test]
    fn test_authorization_denied_includes_error_and_description() {
        let error = OAuthError::AuthorizationDenied {
            error: "access_denied".to_string(),
            description: "User denied your request".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("access_denied"));
        assert!(message.contains("User denied your request"));
    }

    #[test]
    fn test_from_provider_error_is_transparent() {
        let provider = ProviderError::new(401, "client_secret is incorrect", json!({}));
        let error: OAuthError = provider.clone().into();
        assert_eq!(error.to_string(), provider.to_string());
        assert!(matches!(error, OAuthError::Provider(e) if e.code == 401));
    }

    #[test]
    fn test_missing_redirect_uri_message() {
        let error = OAuthError::MissingRedirectUri;
        assert!(error.to_string().contains("Redirect URI"));
    }

    #[test]
    fn test_oauth_error_implements_std_error() {
        let error: &dyn std::error::Error = &OAuthError::InvalidCallback {
            reason: "test".to_string(),
        };
        let _ = error;
    }
}
