//! OAuth 2.0 authorization code flow against VK.
//!
//! # Overview
//!
//! - [`OAuthFlow`]: The capability the rest of the crate depends on
//! - [`VkOAuth`]: The VK implementation (authorize URL and code exchange)
//! - [`begin_auth`]: Generates a state and the URL to redirect the user to
//! - [`validate_callback`]: Checks the callback and exchanges the code
//! - [`StateParam`]: CSRF state with constant-time comparison
//! - [`OAuthError`]: Everything that can go wrong along the way
//!
//! # Example
//!
//! ```rust,ignore
//! use vkontakte_oauth::auth::oauth::{begin_auth, validate_callback, CallbackQuery, VkOAuth};
//!
//! let flow = VkOAuth::new(config)?;
//!
//! // 1. Redirect the user
//! let result = begin_auth(&flow, None)?;
//! session.set("oauth_state", result.state.as_ref());
//! // redirect to result.auth_url
//!
//! // 2. Handle the callback
//! let token = validate_callback(&flow, &query, &stored_state).await?;
//! println!("user {:?} granted access", token.user_id());
//! ```

mod begin_auth;
mod error;
mod provider;
mod state;
mod validate_callback;

use std::future::Future;

pub use begin_auth::{begin_auth, BeginAuthResult};
pub use error::OAuthError;
pub use provider::VkOAuth;
pub use state::StateParam;
pub use validate_callback::{validate_callback, CallbackQuery};

use crate::auth::{AccessToken, AuthScopes};

/// The generic parts of an OAuth 2.0 authorization code flow.
///
/// Implementors build the URL the user is sent to and turn the code from
/// the callback into an [`AccessToken`]. Response classification and
/// resource mapping stay outside of this trait.
pub trait OAuthFlow {
    /// Builds the authorization URL for `state`.
    ///
    /// `scope_override` replaces the configured scopes for this request only.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError`] if the flow is not configured for redirects.
    fn authorization_url(
        &self,
        state: &StateParam,
        scope_override: Option<&AuthScopes>,
    ) -> Result<String, OAuthError>;

    /// Exchanges an authorization code for an access token.
    ///
    /// Implementations issue exactly one request and do not retry.
    fn exchange_code(
        &self,
        code: &str,
    ) -> impl Future<Output = Result<AccessToken, OAuthError>> + Send;
}
