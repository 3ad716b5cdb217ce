//! OAuth callback validation and code exchange.
//!
//! After the user answers the consent screen, VK redirects to the configured
//! redirect URI with either `code` and `state`, or `error`,
//! `error_description`, and `state`. [`validate_callback`] checks the state,
//! turns a refusal into [`OAuthError::AuthorizationDenied`], and exchanges
//! the code.

use serde::Deserialize;

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::auth::oauth::OAuthFlow;
use crate::auth::AccessToken;

/// Query parameters VK appends to the redirect URI.
///
/// Derives `Deserialize` so it can be extracted directly by web frameworks.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CallbackQuery {
    /// The authorization code, present on success.
    #[serde(default)]
    pub code: Option<String>,
    /// The state echoed back by VK.
    #[serde(default)]
    pub state: String,
    /// The error code, present when authorization was refused.
    #[serde(default)]
    pub error: Option<String>,
    /// A human-readable description of `error`.
    #[serde(default)]
    pub error_description: Option<String>,
}

impl CallbackQuery {
    /// Creates a successful callback query.
    #[must_use]
    pub fn new(code: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            state: state.into(),
            ..Self::default()
        }
    }
}

/// Validates an OAuth callback and exchanges the code for an access token.
///
/// 1. **State Verification**: constant-time comparison with `expected_state`
/// 2. **Refusal**: an `error` parameter becomes [`OAuthError::AuthorizationDenied`]
/// 3. **Code**: a missing or empty `code` is [`OAuthError::InvalidCallback`]
/// 4. **Token Exchange**: delegated to [`OAuthFlow::exchange_code`]
///
/// # Errors
///
/// Any of the variants above, plus whatever the exchange returns.
pub async fn validate_callback<F: OAuthFlow + Sync>(
    flow: &F,
    query: &CallbackQuery,
    expected_state: &str,
) -> Result<AccessToken, OAuthError> {
    if !StateParam::from_raw(expected_state).matches(&query.state) {
        return Err(OAuthError::StateMismatch {
            expected: expected_state.to_string(),
            received: query.state.clone(),
        });
    }

    if let Some(error) = query.error.as_deref().filter(|e| !e.is_empty()) {
        tracing::warn!(error, "VK authorization was refused");
        return Err(OAuthError::AuthorizationDenied {
            error: error.to_string(),
            description: query.error_description.clone().unwrap_or_default(),
        });
    }

    let code = query
        .code
        .as_deref()
        .filter(|c| !c.is_empty())
        .ok_or_else(|| OAuthError::InvalidCallback {
            reason: "missing authorization code".to_string(),
        })?;

    flow.exchange_code(code).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthScopes;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records exchanges instead of performing them.
    #[derive(Default)]
    struct RecordingFlow {
        exchanges: AtomicUsize,
    }

    impl OAuthFlow for RecordingFlow {
        fn authorization_url(
            &self,
            state: &StateParam,
            _scope_override: Option<&AuthScopes>,
        ) -> Result<String, OAuthError> {
            Ok(format!("https://oauth.test/authorize?state={state}"))
        }

        async fn exchange_code(&self, code: &str) -> Result<AccessToken, OAuthError> {
            self.exchanges.fetch_add(1, Ordering::SeqCst);
            Ok(AccessToken::new(format!("token-for-{code}")))
        }
    }

    #[tokio::test]
    async fn test_valid_callback_exchanges_code() {
        let flow = RecordingFlow::default();
        let query = CallbackQuery::new("abc", "state123");

        let token = validate_callback(&flow, &query, "state123").await.unwrap();
        assert_eq!(token.token(), "token-for-abc");
        assert_eq!(flow.exchanges.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_state_mismatch_is_rejected_before_exchange() {
        let flow = RecordingFlow::default();
        let query = CallbackQuery::new("abc", "forged");

        let result = validate_callback(&flow, &query, "state123").await;
        assert!(matches!(result, Err(OAuthError::StateMismatch { .. })));
        assert_eq!(flow.exchanges.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_error_callback_is_authorization_denied() {
        let flow = RecordingFlow::default();
        let query = CallbackQuery {
            state: "state123".to_string(),
            error: Some("access_denied".to_string()),
            error_description: Some("User denied your request".to_string()),
            ..CallbackQuery::default()
        };

        match validate_callback(&flow, &query, "state123").await {
            Err(OAuthError::AuthorizationDenied { error, description }) => {
                assert_eq!(error, "access_denied");
                assert_eq!(description, "User denied your request");
            }
            other => panic!("Expected AuthorizationDenied, got {other:?}"),
        }
        assert_eq!(flow.exchanges.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_code_is_invalid_callback() {
        let flow = RecordingFlow::default();
        let query = CallbackQuery {
            state: "state123".to_string(),
            ..CallbackQuery::default()
        };

        let result = validate_callback(&flow, &query, "state123").await;
        assert!(matches!(result, Err(OAuthError::InvalidCallback { .. })));
    }

    #[test]
    fn test_callback_query_deserializes_from_json() {
        let query: CallbackQuery =
            serde_json::from_str(r#"{"code": "c", "state": "s"}"#).unwrap();
        assert_eq!(query, CallbackQuery::new("c", "s"));
    }
}
