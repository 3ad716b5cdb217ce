//! Query string assembly for VK endpoints.
//!
//! [`QueryParams`] is an ordered parameter list. Defaults are set first by
//! the endpoint client; caller-supplied extras are then merged on top with
//! [`QueryParams::merge`]. An extra with the same key replaces the default in
//! place, new keys are appended in insertion order, and an extra created with
//! [`QueryParams::unset`] removes the default altogether.
//!
//! # Example
//!
//! ```rust
//! use vkontakte_oauth::clients::{endpoint_url, QueryParams};
//! use vkontakte_oauth::config::BaseUrl;
//!
//! let mut params = QueryParams::new();
//! params.set("fields", "id,sex");
//! params.set("v", "5.199");
//!
//! let mut extras = QueryParams::new();
//! extras.set("v", "5.131");
//! extras.set("count", "10");
//! params.merge(extras);
//!
//! let base = BaseUrl::new("https://api.vk.com/method").unwrap();
//! assert_eq!(
//!     endpoint_url(&base, "friends.get", &params),
//!     "https://api.vk.com/method/friends.get?fields=id%2Csex&v=5.131&count=10"
//! );
//! ```

use crate::config::BaseUrl;

/// An ordered list of query parameters.
///
/// Entries without a value are "unset" markers: they are never rendered, and
/// when merged they remove the matching entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets `key` to `value`, replacing an existing entry in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.put(key.into(), Some(value.into()));
        self
    }

    /// Sets `key` only when `value` is present and non-empty.
    ///
    /// Use this for parameters that must be omitted entirely when absent,
    /// such as `lang` or `access_token`.
    pub fn set_opt<V: Into<String>>(&mut self, key: impl Into<String>, value: Option<V>) -> &mut Self {
        if let Some(value) = value.map(Into::into).filter(|v| !v.is_empty()) {
            self.put(key.into(), Some(value));
        }
        self
    }

    /// Marks `key` as unset.
    ///
    /// The entry is no longer rendered, and merging this list into another
    /// removes `key` from it.
    pub fn unset(&mut self, key: impl Into<String>) -> &mut Self {
        self.put(key.into(), None);
        self
    }

    /// Returns the value of `key`, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Returns `true` if `key` has a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if no parameter would be rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| v.is_none())
    }

    /// Iterates over the parameters that have a value, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    /// Applies `overrides` on top of this list.
    ///
    /// Matching keys keep their position and take the override's value; an
    /// unset override removes the key. Remaining keys are appended in order.
    pub fn merge(&mut self, overrides: Self) -> &mut Self {
        for (key, value) in overrides.entries {
            match value {
                Some(value) => self.put(key, Some(value)),
                None => self.entries.retain(|(k, _)| *k != key),
            }
        }
        self
    }

    /// Renders the list as a percent-encoded query string, without `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn put(&mut self, key: String, value: Option<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

/// Builds the full URL for a VK API method.
///
/// The `?` is only added when at least one parameter is set.
#[must_use]
pub fn endpoint_url(base: &BaseUrl, method: &str, params: &QueryParams) -> String {
    let url = base.join(method);
    if params.is_empty() {
        url
    } else {
        format!("{url}?{}", params.to_query_string())
    }
}
