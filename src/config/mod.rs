//! Configuration types for the VK OAuth SDK.
//!
//! This module provides the configuration shared by the OAuth flow
//! ([`VkOAuth`](crate::auth::oauth::VkOAuth)) and the resource endpoints
//! ([`VkClient`](crate::api::VkClient)).
//!
//! # Overview
//!
//! - [`VkConfig`]: The configuration struct holding all SDK settings
//! - [`VkConfigBuilder`]: A builder for constructing [`VkConfig`] instances
//! - [`ClientId`], [`ClientSecret`]: Validated application credentials
//! - [`BaseUrl`]: A validated absolute URL (endpoint bases, redirect URI)
//! - [`Language`]: The optional response language
//! - [`ApiVersion`]: The VK API version sent with each call
//! - [`UserFields`]: The profile fields requested on user lookups
//!
//! # Example
//!
//! ```rust
//! use vkontakte_oauth::{VkConfig, ClientId, ClientSecret, Language};
//!
//! let config = VkConfig::builder()
//!     .client_id(ClientId::new("51234567").unwrap())
//!     .client_secret(ClientSecret::new("secret").unwrap())
//!     .language(Language::new("en").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_version().to_string(), "5.199");
//! ```

mod fields;
mod newtypes;
mod version;

pub use fields::UserFields;
pub use newtypes::{BaseUrl, ClientId, ClientSecret, Language};
pub use version::ApiVersion;

use std::time::Duration;

use crate::auth::AuthScopes;
use crate::error::ConfigError;

/// Default base URI of the VK OAuth server.
pub const DEFAULT_OAUTH_BASE_URI: &str = "https://oauth.vk.com";

/// Default base URI of the VK API methods.
pub const DEFAULT_API_BASE_URI: &str = "https://api.vk.com/method";

/// Configuration for the VK OAuth SDK.
///
/// # Thread Safety
///
/// `VkConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::{VkConfig, ClientId, ClientSecret, BaseUrl};
///
/// let config = VkConfig::builder()
///     .client_id(ClientId::new("51234567").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .redirect_uri(BaseUrl::new("https://myapp.example.com/auth/vk").unwrap())
///     .scopes("email,friends".parse().unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.scopes().to_string(), "email,friends");
/// assert!(config.language().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct VkConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    redirect_uri: Option<BaseUrl>,
    scopes: AuthScopes,
    user_fields: UserFields,
    api_version: ApiVersion,
    language: Option<Language>,
    oauth_base_uri: BaseUrl,
    api_base_uri: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl VkConfig {
    /// Creates a new builder for constructing a `VkConfig`.
    #[must_use]
    pub fn builder() -> VkConfigBuilder {
        VkConfigBuilder::new()
    }

    /// Returns the application ID.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the application secure key.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the redirect URI registered for the application, if configured.
    #[must_use]
    pub const fn redirect_uri(&self) -> Option<&BaseUrl> {
        self.redirect_uri.as_ref()
    }

    /// Returns the OAuth scopes.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the profile fields requested on user lookups.
    #[must_use]
    pub const fn user_fields(&self) -> &UserFields {
        &self.user_fields
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the response language, if configured.
    #[must_use]
    pub const fn language(&self) -> Option<&Language> {
        self.language.as_ref()
    }

    /// Replaces the response language.
    ///
    /// Passing `None` stops sending the `lang` parameter.
    pub fn set_language(&mut self, language: Option<Language>) {
        self.language = language;
    }

    /// Returns the OAuth server base URI.
    #[must_use]
    pub const fn oauth_base_uri(&self) -> &BaseUrl {
        &self.oauth_base_uri
    }

    /// Returns the API methods base URI.
    #[must_use]
    pub const fn api_base_uri(&self) -> &BaseUrl {
        &self.api_base_uri
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VkConfig>();
};

/// Builder for constructing [`VkConfig`] instances.
///
/// Required fields are `client_id` and `client_secret`.
///
/// # Defaults
///
/// - `scopes`: `email,groups`
/// - `user_fields`: [`UserFields::DEFAULT`]
/// - `api_version`: [`ApiVersion::latest`]
/// - `language`: `None`
/// - `redirect_uri`: `None` (required only to start the OAuth flow)
/// - `oauth_base_uri`: [`DEFAULT_OAUTH_BASE_URI`]
/// - `api_base_uri`: [`DEFAULT_API_BASE_URI`]
/// - `user_agent_prefix`, `timeout`: `None`
#[derive(Debug, Default)]
pub struct VkConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    redirect_uri: Option<BaseUrl>,
    scopes: Option<AuthScopes>,
    user_fields: Option<UserFields>,
    api_version: Option<ApiVersion>,
    language: Option<Language>,
    oauth_base_uri: Option<BaseUrl>,
    api_base_uri: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl VkConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application ID (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the application secure key (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the redirect URI registered for the application.
    #[must_use]
    pub fn redirect_uri(mut self, uri: BaseUrl) -> Self {
        self.redirect_uri = Some(uri);
        self
    }

    /// Sets the OAuth scopes.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the profile fields requested on user lookups.
    #[must_use]
    pub fn user_fields(mut self, fields: UserFields) -> Self {
        self.user_fields = Some(fields);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Overrides the OAuth server base URI.
    #[must_use]
    pub fn oauth_base_uri(mut self, uri: BaseUrl) -> Self {
        self.oauth_base_uri = Some(uri);
        self
    }

    /// Overrides the API methods base URI.
    #[must_use]
    pub fn api_base_uri(mut self, uri: BaseUrl) -> Self {
        self.api_base_uri = Some(uri);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a timeout applied by the transport to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`VkConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set.
    pub fn build(self) -> Result<VkConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let oauth_base_uri = match self.oauth_base_uri {
            Some(uri) => uri,
            None => BaseUrl::new(DEFAULT_OAUTH_BASE_URI)?,
        };
        let api_base_uri = match self.api_base_uri {
            Some(uri) => uri,
            None => BaseUrl::new(DEFAULT_API_BASE_URI)?,
        };

        Ok(VkConfig {
            client_id,
            client_secret,
            redirect_uri: self.redirect_uri,
            scopes: self.scopes.unwrap_or_else(AuthScopes::default_scopes),
            user_fields: self.user_fields.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_default(),
            language: self.language,
            oauth_base_uri,
            api_base_uri,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
