//! OAuth authorization URL generation.
//!
//! [`begin_auth`] is the first step of the flow. It generates a fresh
//! [`StateParam`] and the URL the user should be redirected to.

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::auth::oauth::OAuthFlow;
use crate::auth::AuthScopes;

/// Result of initiating OAuth authorization.
///
/// # Important
///
/// The `state` value **must** be stored by your application and passed to
/// [`validate_callback`](crate::auth::oauth::validate_callback) when handling
/// the callback.
#[derive(Clone, Debug)]
pub struct BeginAuthResult {
    /// The full authorization URL to redirect the user to.
    pub auth_url: String,

    /// The state parameter generated for this authorization request.
    pub state: StateParam,
}

/// Initiates the OAuth authorization code flow.
///
/// # Arguments
///
/// * `flow` - The OAuth flow to build the URL with
/// * `scope_override` - Optional scope override (uses the configured scopes if `None`)
///
/// # Errors
///
/// Returns whatever [`OAuthFlow::authorization_url`] returns, e.g.
/// [`OAuthError::MissingRedirectUri`].
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::{BaseUrl, ClientId, ClientSecret, VkConfig};
/// use vkontakte_oauth::auth::oauth::{begin_auth, VkOAuth};
///
/// let config = VkConfig::builder()
///     .client_id(ClientId::new("51234567").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .redirect_uri(BaseUrl::new("https://myapp.example.com/auth/vk").unwrap())
///     .build()
///     .unwrap();
/// let flow = VkOAuth::new(config).unwrap();
///
/// let result = begin_auth(&flow, None).unwrap();
/// assert!(result.auth_url.contains(&format!("state={}", result.state)));
/// ```
pub fn begin_auth<F: OAuthFlow>(
    flow: &F,
    scope_override: Option<&AuthScopes>,
) -> Result<BeginAuthResult, OAuthError> {
    let state = StateParam::new();
    let auth_url = flow.authorization_url(&state, scope_override)?;
    Ok(BeginAuthResult { auth_url, state })
}

// Verify BeginAuthResult is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BeginAuthResult>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::oauth::VkOAuth;
    use crate::config::{BaseUrl, ClientId, ClientSecret, VkConfig};

    fn create_test_flow() -> VkOAuth {
        let config = VkConfig::builder()
            .client_id(ClientId::new("test-client").unwrap())
            .client_secret(ClientSecret::new("test-secret").unwrap())
            .redirect_uri(BaseUrl::new("https://myapp.example.com/auth/vk").unwrap())
            .build()
            .unwrap();
        VkOAuth::new(config).unwrap()
    }

    #[test]
    fn test_begin_auth_state_in_url_matches_returned_state() {
        let result = begin_auth(&create_test_flow(), None).unwrap();
        let expected = format!("state={}", result.state);
        assert!(result.auth_url.contains(&expected));
    }

    #[test]
    fn test_begin_auth_unique_states() {
        let flow = create_test_flow();
        let first = begin_auth(&flow, None).unwrap();
        let second = begin_auth(&flow, None).unwrap();
        assert_ne!(first.state, second.state);
    }

    #[test]
    fn test_begin_auth_uses_scope_override() {
        let scopes: AuthScopes = "wall".parse().unwrap();
        let result = begin_auth(&create_test_flow(), Some(&scopes)).unwrap();
        assert!(result.auth_url.contains("scope=wall"));
    }
}
