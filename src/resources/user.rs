//! The normalized VK user record.
//!
//! See <https://dev.vk.com/reference/objects/user> for the meaning of each
//! field. Every accessor applies the empty-is-absent rule from
//! [`is_absent`](crate::resources::is_absent): a missing, `null`, `0`, `"0"`,
//! `""`, `false`, or empty value reads as the type's empty value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resources::raw::{as_integer, present, RawRecord};

/// A city or country reference, as VK embeds it in a user record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Place {
    /// The VK database id.
    pub id: i64,
    /// The localized name.
    pub title: String,
}

impl Place {
    /// Reads a place from `{"id": .., "title": ..}`.
    ///
    /// Older API versions send a bare id instead of an object; that yields a
    /// place with an empty title.
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self {
                id: present(map.get("id")).and_then(as_integer).unwrap_or(0),
                title: present(map.get("title"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            },
            other => Self {
                id: as_integer(other).unwrap_or(0),
                title: String::new(),
            },
        }
    }
}

/// The `sex` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sex {
    /// Not specified (`0` or absent).
    #[default]
    Unspecified,
    /// `1`.
    Female,
    /// `2`.
    Male,
    /// Any other value VK may introduce.
    Other(i64),
}

impl From<i64> for Sex {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Unspecified,
            1 => Self::Female,
            2 => Self::Male,
            other => Self::Other(other),
        }
    }
}

/// The `friend_status` field, relative to the user the token belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FriendStatus {
    /// Not a friend (`0` or absent).
    #[default]
    NotFriend,
    /// A friend request was sent to this user (`1`).
    RequestSent,
    /// This user sent a friend request (`2`).
    IncomingRequest,
    /// Mutual friends (`3`).
    Friend,
    /// Any other value VK may introduce.
    Other(i64),
}

impl From<i64> for FriendStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::NotFriend,
            1 => Self::RequestSent,
            2 => Self::IncomingRequest,
            3 => Self::Friend,
            other => Self::Other(other),
        }
    }
}

/// One user as returned by `users.get` or `friends.get`.
///
/// A read-only view over the raw record. Serializes as the raw record itself.
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::resources::{Sex, VkUser};
/// use serde_json::json;
///
/// let user: VkUser = serde_json::from_value(json!({
///     "uid": 12345,
///     "id": 1,
///     "first_name": "Pavel",
///     "sex": 2,
///     "has_photo": 0,
/// }))
/// .unwrap();
///
/// assert_eq!(user.id(), 12345);
/// assert_eq!(user.first_name(), "Pavel");
/// assert_eq!(user.sex(), Sex::Male);
/// assert!(!user.has_photo());
/// assert_eq!(user.last_name(), "");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VkUser {
    raw: RawRecord,
}

impl VkUser {
    /// Wraps a raw record.
    #[must_use]
    pub const fn new(raw: RawRecord) -> Self {
        Self { raw }
    }

    /// Returns the raw record.
    #[must_use]
    pub const fn raw(&self) -> &RawRecord {
        &self.raw
    }

    /// Consumes the user and returns the raw record.
    #[must_use]
    pub fn into_raw(self) -> RawRecord {
        self.raw
    }

    /// Returns a field unless it is missing or absent.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        present(self.raw.get(key))
    }

    fn text(&self, key: &str) -> &str {
        self.field(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    fn integer(&self, key: &str) -> i64 {
        self.field(key).and_then(as_integer).unwrap_or(0)
    }

    fn place(&self, key: &str) -> Place {
        self.field(key).map(Place::from_value).unwrap_or_default()
    }

    /// The user id: the legacy `uid` when present, else `id`.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.field("uid")
            .or_else(|| self.field("id"))
            .and_then(as_integer)
            .unwrap_or(0)
    }

    /// `bdate`, formatted `D.M.YYYY`, or `D.M` when the year is hidden.
    #[must_use]
    pub fn birthday(&self) -> &str {
        self.text("bdate")
    }

    /// `city`.
    #[must_use]
    pub fn city(&self) -> Place {
        self.place("city")
    }

    /// `country`.
    #[must_use]
    pub fn country(&self) -> Place {
        self.place("country")
    }

    /// `domain`, the short address of the profile page.
    #[must_use]
    pub fn domain(&self) -> &str {
        self.text("domain")
    }

    /// `first_name`.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.text("first_name")
    }

    /// `friend_status`.
    #[must_use]
    pub fn friend_status(&self) -> FriendStatus {
        FriendStatus::from(self.integer("friend_status"))
    }

    /// `has_photo`.
    #[must_use]
    pub fn has_photo(&self) -> bool {
        self.field("has_photo").is_some()
    }

    /// `home_town`.
    #[must_use]
    pub fn home_town(&self) -> &str {
        self.text("home_town")
    }

    /// `is_friend`.
    #[must_use]
    pub fn is_friend(&self) -> bool {
        self.field("is_friend").is_some()
    }

    /// `last_name`.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.text("last_name")
    }

    /// `maiden_name`.
    #[must_use]
    pub fn maiden_name(&self) -> &str {
        self.text("maiden_name")
    }

    /// `nickname`.
    #[must_use]
    pub fn nickname(&self) -> &str {
        self.text("nickname")
    }

    /// `photo_max`, a square photo URL.
    #[must_use]
    pub fn photo_max(&self) -> &str {
        self.text("photo_max")
    }

    /// `photo_max_orig`, the largest original photo URL.
    #[must_use]
    pub fn photo_max_orig(&self) -> &str {
        self.text("photo_max_orig")
    }

    /// `screen_name`.
    #[must_use]
    pub fn screen_name(&self) -> &str {
        self.text("screen_name")
    }

    /// `sex`.
    #[must_use]
    pub fn sex(&self) -> Sex {
        Sex::from(self.integer("sex"))
    }

    /// `email`, only ever present on the resource owner.
    #[must_use]
    pub fn email(&self) -> &str {
        self.text("email")
    }
}

impl From<RawRecord> for VkUser {
    fn from(raw: RawRecord) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(value: Value) -> VkUser {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_id_prefers_uid() {
        assert_eq!(user(json!({"uid": 12345, "id": 1})).id(), 12345);
        assert_eq!(user(json!({"uid": 0, "id": 7})).id(), 7);
        assert_eq!(user(json!({"id": "42"})).id(), 42);
        assert_eq!(user(json!({})).id(), 0);
    }

    #[test]
    fn test_empty_values_read_as_absent() {
        let user = user(json!({
            "first_name": "",
            "nickname": "0",
            "has_photo": 0,
            "is_friend": "0",
            "city": {},
            "sex": null,
            "friend_status": 0,
        }));

        assert_eq!(user.first_name(), "");
        assert_eq!(user.nickname(), "");
        assert!(!user.has_photo());
        assert!(!user.is_friend());
        assert_eq!(user.city(), Place::default());
        assert_eq!(user.sex(), Sex::Unspecified);
        assert_eq!(user.friend_status(), FriendStatus::NotFriend);
        assert!(user.field("first_name").is_none());
    }

    #[test]
    fn test_populated_accessors() {
        let user = user(json!({
            "id": 1,
            "bdate": "10.4.1984",
            "city": {"id": 2, "title": "Saint Petersburg"},
            "country": {"id": 1, "title": "Russia"},
            "domain": "durov",
            "first_name": "Pavel",
            "last_name": "Durov",
            "maiden_name": "M",
            "nickname": "P",
            "home_town": "Leningrad",
            "has_photo": 1,
            "is_friend": 1,
            "friend_status": 3,
            "photo_max": "https://example.com/max.jpg",
            "photo_max_orig": "https://example.com/orig.jpg",
            "screen_name": "durov",
            "sex": 2,
            "email": "a@b.com",
        }));

        assert_eq!(user.birthday(), "10.4.1984");
        assert_eq!(
            user.city(),
            Place {
                id: 2,
                title: "Saint Petersburg".to_string()
            }
        );
        assert_eq!(user.country().title, "Russia");
        assert_eq!(user.domain(), "durov");
        assert_eq!(user.first_name(), "Pavel");
        assert_eq!(user.last_name(), "Durov");
        assert_eq!(user.maiden_name(), "M");
        assert_eq!(user.nickname(), "P");
        assert_eq!(user.home_town(), "Leningrad");
        assert!(user.has_photo());
        assert!(user.is_friend());
        assert_eq!(user.friend_status(), FriendStatus::Friend);
        assert_eq!(user.photo_max(), "https://example.com/max.jpg");
        assert_eq!(user.photo_max_orig(), "https://example.com/orig.jpg");
        assert_eq!(user.screen_name(), "durov");
        assert_eq!(user.sex(), Sex::Male);
        assert_eq!(user.email(), "a@b.com");
    }

    #[test]
    fn test_bare_place_id() {
        assert_eq!(user(json!({"city": 5})).city().id, 5);
    }

    #[test]
    fn test_unknown_enum_codes_are_kept() {
        let user = user(json!({"sex": 9, "friend_status": "4"}));
        assert_eq!(user.sex(), Sex::Other(9));
        assert_eq!(user.friend_status(), FriendStatus::Other(4));
    }

    #[test]
    fn test_serializes_as_raw_record() {
        let raw = json!({"id": 1, "first_name": "X"});
        let user = user(raw.clone());
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
        assert_eq!(user.into_raw().len(), 2);
    }

    #[test]
    fn test_deserialize_rejects_non_objects() {
        assert!(serde_json::from_value::<VkUser>(json!(111)).is_err());
    }
}
