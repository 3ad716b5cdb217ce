//! Per-call options for [`VkClient`](crate::api::VkClient) operations.

use crate::auth::AccessToken;
use crate::clients::QueryParams;

/// Optional arguments shared by the bulk operations.
///
/// `token` adds `access_token` to the query. `params` is merged over the
/// default query: same keys replace the default in place, new keys are
/// appended, and keys marked with [`QueryParams::unset`] remove the default.
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::AccessToken;
/// use vkontakte_oauth::api::RequestOptions;
///
/// let token = AccessToken::new("token");
/// let options = RequestOptions::new()
///     .with_token(&token)
///     .with_param("count", "10")
///     .without_param("fields");
///
/// assert_eq!(options.params.get("count"), Some("10"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions<'a> {
    /// Token to authenticate the call with.
    pub token: Option<&'a AccessToken>,
    /// Extra query parameters.
    pub params: QueryParams,
}

impl<'a> RequestOptions<'a> {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the token.
    #[must_use]
    pub const fn with_token(mut self, token: &'a AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Adds or overrides a query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.set(key, value);
        self
    }

    /// Removes a default query parameter.
    #[must_use]
    pub fn without_param(mut self, key: impl Into<String>) -> Self {
        self.params.unset(key);
        self
    }
}
