//! VK API version definitions.
//!
//! This module provides the [`ApiVersion`] type sent as the `v` query
//! parameter on every API call.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// VK API version in `MAJOR.MINOR` form.
///
/// VK versions its whole method surface with a single number such as `5.199`.
/// Response shapes change between versions (for example `friends.get`
/// returning `{count, items}` instead of a bare list), which is why the
/// version is part of the client configuration rather than hard-coded.
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::ApiVersion;
///
/// let version = ApiVersion::latest();
/// assert_eq!(version.to_string(), "5.199");
///
/// let version: ApiVersion = "5.131".parse().unwrap();
/// assert!(version < ApiVersion::latest());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiVersion {
    major: u16,
    minor: u16,
}

impl ApiVersion {
    /// Creates a version from its numeric parts.
    #[must_use]
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Returns the API version this SDK was written against.
    #[must_use]
    pub const fn latest() -> Self {
        Self::new(5, 199)
    }

    /// Returns the major component.
    #[must_use]
    pub const fn major(&self) -> u16 {
        self.major
    }

    /// Returns the minor component.
    #[must_use]
    pub const fn minor(&self) -> u16 {
        self.minor
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ConfigError::InvalidApiVersion {
            version: s.to_string(),
        };

        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        // Leading zeros would not survive Display ("5.01" -> "5.1").
        let is_number = |part: &str| {
            !part.is_empty()
                && part.chars().all(|c| c.is_ascii_digit())
                && (part == "0" || !part.starts_with('0'))
        };
        if !is_number(major) || !is_number(minor) {
            return Err(invalid());
        }

        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
        })
    }
}

impl Serialize for ApiVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
