//! The VK implementation of [`OAuthFlow`].

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::auth::oauth::OAuthFlow;
use crate::auth::{AccessToken, AuthScopes};
use crate::clients::{HttpClient, QueryParams};
use crate::config::VkConfig;

/// Authorization code flow against `oauth.vk.com`.
///
/// The authorization URL carries `client_id`, `redirect_uri`,
/// `response_type=code`, `scope`, `state`, `approval_prompt=auto`, and the API
/// version `v`. The code is exchanged by POSTing the client credentials to
/// `{oauth_base_uri}/access_token`.
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::{BaseUrl, ClientId, ClientSecret, VkConfig};
/// use vkontakte_oauth::auth::oauth::{OAuthFlow, StateParam, VkOAuth};
///
/// let config = VkConfig::builder()
///     .client_id(ClientId::new("51234567").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .redirect_uri(BaseUrl::new("https://myapp.example.com/auth/vk").unwrap())
///     .build()
///     .unwrap();
///
/// let flow = VkOAuth::new(config).unwrap();
/// let url = flow
///     .authorization_url(&StateParam::from_raw("xyz"), None)
///     .unwrap();
///
/// assert!(url.starts_with("https://oauth.vk.com/authorize?"));
/// assert!(url.contains("response_type=code"));
/// assert!(url.contains("scope=email%2Cgroups"));
/// assert!(url.contains("state=xyz"));
/// ```
#[derive(Clone, Debug)]
pub struct VkOAuth {
    config: VkConfig,
    http: HttpClient,
}

// Verify VkOAuth is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VkOAuth>();
};

impl VkOAuth {
    /// Creates the flow for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::HttpError`] if the HTTP client cannot be created.
    pub fn new(config: VkConfig) -> Result<Self, OAuthError> {
        let http = HttpClient::new(&config)?;
        Ok(Self { config, http })
    }

    /// Returns the configuration this flow was built from.
    #[must_use]
    pub const fn config(&self) -> &VkConfig {
        &self.config
    }

    /// Returns the authorization endpoint, without parameters.
    #[must_use]
    pub fn base_authorization_url(&self) -> String {
        self.config.oauth_base_uri().join("authorize")
    }

    /// Returns the token endpoint.
    #[must_use]
    pub fn access_token_url(&self) -> String {
        self.config.oauth_base_uri().join("access_token")
    }
}

impl OAuthFlow for VkOAuth {
    fn authorization_url(
        &self,
        state: &StateParam,
        scope_override: Option<&AuthScopes>,
    ) -> Result<String, OAuthError> {
        let redirect_uri = self
            .config
            .redirect_uri()
            .ok_or(OAuthError::MissingRedirectUri)?;
        let scopes = scope_override.unwrap_or_else(|| self.config.scopes());

        let mut params = QueryParams::new();
        params
            .set("client_id", self.config.client_id().as_ref())
            .set("redirect_uri", redirect_uri.as_ref())
            .set("response_type", "code")
            .set_opt("scope", Some(scopes.to_string()))
            .set("state", state.as_ref())
            .set("approval_prompt", "auto")
            .set("v", self.config.api_version().to_string());

        Ok(format!(
            "{}?{}",
            self.base_authorization_url(),
            params.to_query_string()
        ))
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, OAuthError> {
        if code.trim().is_empty() {
            return Err(OAuthError::InvalidCallback {
                reason: "authorization code is empty".to_string(),
            });
        }
        let redirect_uri = self
            .config
            .redirect_uri()
            .ok_or(OAuthError::MissingRedirectUri)?;

        let form = [
            ("client_id", self.config.client_id().as_ref()),
            ("client_secret", self.config.client_secret().as_ref()),
            ("redirect_uri", redirect_uri.as_ref()),
            ("code", code),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http.post_form(&self.access_token_url(), &form).await?;
        response.check()?;

        let token = AccessToken::from_response(&response.body)?;
        tracing::debug!(user_id = ?token.user_id(), "Exchanged VK authorization code");
        Ok(token)
    }
}
