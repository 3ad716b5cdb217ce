//! The VK API endpoint client.
//!
//! Each operation builds the query, performs exactly one GET, classifies the
//! response, and maps the body. A classified error short-circuits before any
//! mapping happens.

use serde_json::Value;

use crate::api::errors::ApiError;
use crate::api::options::RequestOptions;
use crate::auth::AccessToken;
use crate::clients::{endpoint_url, HttpClient, QueryParams};
use crate::config::{Language, VkConfig};
use crate::resources::{map_friends, map_groups, map_owner, map_users, RawRecord, VkUser};

/// `users.get` method name.
pub const USERS_GET: &str = "users.get";
/// `friends.get` method name.
pub const FRIENDS_GET: &str = "friends.get";
/// `groups.getById` method name.
pub const GROUPS_GET: &str = "groups.getById";

/// Client for the VK API methods used to describe a user.
///
/// The only state is the configuration and a pooled HTTP client, so one
/// instance can serve concurrent calls. The language is changed through
/// [`set_language`](Self::set_language), which needs `&mut self` and
/// therefore never races a call in flight.
///
/// # Thread Safety
///
/// `VkClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use vkontakte_oauth::api::{RequestOptions, VkClient};
///
/// let client = VkClient::new(config)?;
/// let owner = client.resolve_owner(&token).await?;
/// println!("{} {}", owner.first_name(), owner.last_name());
///
/// let friends = client
///     .friends_get(Some(owner.id()), RequestOptions::new().with_token(&token))
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct VkClient {
    config: VkConfig,
    http: HttpClient,
}

// Verify VkClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<VkClient>();
};

impl VkClient {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the HTTP client cannot be created.
    pub fn new(config: VkConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(&config)?;
        Ok(Self { config, http })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &VkConfig {
        &self.config
    }

    /// Sets or clears the `lang` sent with every call.
    pub fn set_language(&mut self, language: Option<Language>) {
        self.config.set_language(language);
    }

    /// The URL [`resolve_owner`](Self::resolve_owner) requests.
    #[must_use]
    pub fn resource_owner_url(&self, token: &AccessToken) -> String {
        let params = self.default_params(QueryParams::new(), Some(token));
        endpoint_url(self.config.api_base_uri(), USERS_GET, &params)
    }

    /// Fetches the user who granted `token`.
    ///
    /// The `email` and `user_id` VK returned with the token are merged into
    /// the record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`], [`ApiError::Provider`], or
    /// [`ApiError::UnexpectedShape`].
    pub async fn resolve_owner(&self, token: &AccessToken) -> Result<VkUser, ApiError> {
        let body = self.fetch(&self.resource_owner_url(token)).await?;
        map_owner(&body, token)
    }

    /// Calls `users.get` for `ids`, or for the token owner when `ids` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidInput`] without sending anything when `ids`
    /// is empty and no token is given. Otherwise the same errors as
    /// [`resolve_owner`](Self::resolve_owner).
    pub async fn users_get(
        &self,
        ids: &[&str],
        options: RequestOptions<'_>,
    ) -> Result<Vec<VkUser>, ApiError> {
        if ids.is_empty() && options.token.is_none() {
            return Err(ApiError::InvalidInput {
                reason: "user ids or an access token are required".to_string(),
            });
        }

        let mut leading = QueryParams::new();
        leading.set_opt("user_ids", Some(ids.join(",")));
        let body = self.call(USERS_GET, leading, options).await?;
        map_users(&body)
    }

    /// Calls `friends.get` for `user_id`, or for the token owner when `None`.
    ///
    /// # Errors
    ///
    /// Same as [`resolve_owner`](Self::resolve_owner).
    pub async fn friends_get(
        &self,
        user_id: Option<i64>,
        options: RequestOptions<'_>,
    ) -> Result<Vec<VkUser>, ApiError> {
        let body = self
            .call(FRIENDS_GET, Self::user_param(user_id), options)
            .await?;
        map_friends(&body)
    }

    /// Calls `groups.getById` for `user_id` and returns the raw group records.
    ///
    /// # Errors
    ///
    /// Same as [`resolve_owner`](Self::resolve_owner).
    pub async fn groups_get(
        &self,
        user_id: Option<i64>,
        options: RequestOptions<'_>,
    ) -> Result<Vec<RawRecord>, ApiError> {
        let body = self
            .call(GROUPS_GET, Self::user_param(user_id), options)
            .await?;
        map_groups(&body)
    }

    fn user_param(user_id: Option<i64>) -> QueryParams {
        let mut params = QueryParams::new();
        params.set_opt("user_id", user_id.map(|id| id.to_string()));
        params
    }

    /// Appends the parameters every call carries to `leading`.
    fn default_params(&self, mut leading: QueryParams, token: Option<&AccessToken>) -> QueryParams {
        leading
            .set_opt("fields", Some(self.config.user_fields().to_string()))
            .set_opt("access_token", token.map(AccessToken::token))
            .set("v", self.config.api_version().to_string())
            .set_opt("lang", self.config.language().map(AsRef::<str>::as_ref));
        leading
    }

    async fn call(
        &self,
        method: &str,
        leading: QueryParams,
        options: RequestOptions<'_>,
    ) -> Result<Value, ApiError> {
        let mut params = self.default_params(leading, options.token);
        params.merge(options.params);
        let url = endpoint_url(self.config.api_base_uri(), method, &params);
        self.fetch(&url).await
    }

    async fn fetch(&self, url: &str) -> Result<Value, ApiError> {
        let response = self.http.get(url).await?;
        response.check()?;
        Ok(response.body)
    }
}
