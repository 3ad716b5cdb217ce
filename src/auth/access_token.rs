//! Access tokens returned by the VK token endpoint.
//!
//! VK returns more than the token itself: the same response carries
//! `user_id`, and `email` when the `email` scope was granted. Those extra keys
//! are kept in [`AccessToken::values`] and are later merged into the resource
//! owner record.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use crate::auth::oauth::OAuthError;
use crate::resources::raw::{as_integer, as_text, present, RawRecord};

/// Keys of the token response that are modelled as dedicated fields.
const RESERVED_KEYS: [&str; 3] = ["access_token", "refresh_token", "expires_in"];

/// An OAuth access token plus the side-channel values VK sent with it.
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::AccessToken;
/// use serde_json::json;
///
/// let token = AccessToken::from_response(&json!({
///     "access_token": "533bacf01e1",
///     "expires_in": 0,
///     "user_id": 12345,
///     "email": "a@b.com",
/// }))
/// .unwrap();
///
/// assert_eq!(token.token(), "533bacf01e1");
/// assert_eq!(token.email(), Some("a@b.com".to_string()));
/// assert_eq!(token.user_id(), Some(12345));
/// assert!(!token.has_expired());
/// ```
#[derive(Clone, PartialEq)]
pub struct AccessToken {
    token: String,
    expires: Option<DateTime<Utc>>,
    refresh_token: Option<String>,
    values: RawRecord,
}

// Verify AccessToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessToken>();
};

impl AccessToken {
    /// Creates a non-expiring token with no side-channel values.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires: None,
            refresh_token: None,
            values: RawRecord::new(),
        }
    }

    /// Builds a token from a parsed token endpoint response.
    ///
    /// `expires_in` is relative to now; a missing or zero value means the
    /// token does not expire (the `offline` scope), and so does a value too
    /// large to be represented as a date. Every key other than
    /// `access_token`, `refresh_token`, and `expires_in` is kept in
    /// [`values`](Self::values).
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::TokenExchangeFailed`] if the body is not an
    /// object or has no `access_token`.
    pub fn from_response(body: &Value) -> Result<Self, OAuthError> {
        let Some(object) = body.as_object() else {
            return Err(OAuthError::TokenExchangeFailed {
                reason: "token response is not an object".to_string(),
            });
        };

        let token = present(object.get("access_token"))
            .map(as_text)
            .ok_or_else(|| OAuthError::TokenExchangeFailed {
                reason: "token response has no access_token".to_string(),
            })?;

        let expires = present(object.get("expires_in"))
            .and_then(as_integer)
            .filter(|seconds| *seconds > 0)
            .and_then(expiry_from_now);

        let refresh_token = present(object.get("refresh_token")).map(as_text);

        let values = object
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            token,
            expires,
            refresh_token,
            values,
        })
    }

    /// Sets the expiry time.
    #[must_use]
    pub const fn with_expires(mut self, expires: DateTime<Utc>) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Replaces the side-channel values.
    #[must_use]
    pub fn with_values(mut self, values: RawRecord) -> Self {
        self.values = values;
        self
    }

    /// Returns the access token string.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns when the token expires, or `None` if it never does.
    #[must_use]
    pub const fn expires(&self) -> Option<DateTime<Utc>> {
        self.expires
    }

    /// Returns the refresh token, if VK issued one.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Returns `true` if the token has an expiry time in the past.
    #[must_use]
    pub fn has_expired(&self) -> bool {
        self.expires.is_some_and(|expires| expires <= Utc::now())
    }

    /// Returns every other key of the token response.
    #[must_use]
    pub const fn values(&self) -> &RawRecord {
        &self.values
    }

    /// Returns the email VK sent with the token.
    #[must_use]
    pub fn email(&self) -> Option<String> {
        present(self.values.get("email")).map(as_text)
    }

    /// Returns the id of the user who granted the token.
    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        present(self.values.get("user_id")).and_then(as_integer)
    }
}

/// Converts a relative lifetime to an absolute expiry, or `None` on overflow.
fn expiry_from_now(seconds: i64) -> Option<DateTime<Utc>> {
    let expiry = Duration::try_seconds(seconds)
        .and_then(|lifetime| Utc::now().checked_add_signed(lifetime));
    if expiry.is_none() {
        tracing::debug!(
            expires_in = seconds,
            "Token lifetime out of range, treating as non-expiring"
        );
    }
    expiry
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"*****")
            .field("expires", &self.expires)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "*****"))
            .field("values", &self.values)
            .finish()
    }
}
