//! The profile field list sent as the `fields` query parameter.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An ordered, de-duplicated list of VK profile fields.
///
/// Every user lookup asks VK for exactly these fields. Fields not in the list
/// are simply missing from the response, which [`VkUser`](crate::VkUser)
/// accessors report as absent.
///
/// See <https://dev.vk.com/reference/objects/user>.
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::UserFields;
///
/// let fields: UserFields = "first_name,last_name,photo_max".parse().unwrap();
/// assert_eq!(fields.to_string(), "first_name,last_name,photo_max");
///
/// let defaults = UserFields::default();
/// assert!(defaults.contains("friend_status"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserFields {
    fields: Vec<String>,
}

impl UserFields {
    /// Fields requested when none are configured.
    pub const DEFAULT: [&'static str; 17] = [
        "bdate",
        "city",
        "country",
        "domain",
        "first_name",
        "friend_status",
        "has_photo",
        "home_town",
        "id",
        "is_friend",
        "last_name",
        "maiden_name",
        "nickname",
        "photo_max",
        "photo_max_orig",
        "screen_name",
        "sex",
    ];

    /// Creates an empty field list.
    #[must_use]
    pub const fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Returns `true` if no fields are requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns `true` if `field` is requested.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    /// Returns a copy of this list with `field` appended.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidFields`] if the field name is malformed.
    pub fn with(mut self, field: &str) -> Result<Self, ConfigError> {
        self.push(field)?;
        Ok(self)
    }

    /// Returns an iterator over the fields in request order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    fn push(&mut self, field: &str) -> Result<(), ConfigError> {
        let field = field.trim();
        if field.is_empty() {
            return Ok(());
        }
        if !field
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(ConfigError::InvalidFields {
                reason: format!("Invalid characters in field: '{field}'"),
            });
        }
        if !self.contains(field) {
            self.fields.push(field.to_string());
        }
        Ok(())
    }
}

impl Default for UserFields {
    fn default() -> Self {
        Self {
            fields: Self::DEFAULT.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

impl FromStr for UserFields {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = Self::empty();
        for field in s.split(',') {
            fields.push(field)?;
        }
        Ok(fields)
    }
}

impl fmt::Display for UserFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.join(","))
    }
}

impl Serialize for UserFields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for UserFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
