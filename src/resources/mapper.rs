//! Mapping of successful VK bodies into records.
//!
//! Every successful body has the envelope `{"response": ...}`, but what sits
//! inside depends on the method and the API version:
//!
//! | Method           | `response`                                         |
//! |------------------|----------------------------------------------------|
//! | `users.get`      | `[{..}, ..]` or `{"items": [{..}, ..]}`            |
//! | `friends.get`    | `[111, {..}]` or `{"count": n, "items": [..]}`     |
//! | `groups.getById` | `[{..}, ..]` or `{"groups": [{..}, ..]}`           |
//!
//! [`ResponseShape::detect`] recognizes the list layouts; the `map_*`
//! functions then convert each element.

use serde_json::Value;

use crate::api::ApiError;
use crate::auth::AccessToken;
use crate::resources::raw::{is_numeric, present, RawRecord};
use crate::resources::user::VkUser;

/// The list layouts VK wraps records in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResponseShape<'a> {
    /// `response` is the array itself.
    List(&'a [Value]),
    /// `response` is an object with an `items` array.
    Items(&'a [Value]),
    /// `response` is an object with a `groups` array.
    Groups(&'a [Value]),
}

impl<'a> ResponseShape<'a> {
    /// Recognizes the layout of `response`.
    ///
    /// A non-empty `items` array is preferred over `groups`; an object whose
    /// list keys are both empty is read as an empty `items` list. Returns
    /// `None` for anything else.
    #[must_use]
    pub fn detect(response: &'a Value) -> Option<Self> {
        match response {
            Value::Array(list) => Some(Self::List(list)),
            Value::Object(map) => {
                let items = map
                    .get("items")
                    .and_then(Value::as_array)
                    .map(Vec::as_slice);
                let groups = map
                    .get("groups")
                    .and_then(Value::as_array)
                    .map(Vec::as_slice);
                match (items, groups) {
                    (Some(items), _) if !items.is_empty() => Some(Self::Items(items)),
                    (_, Some(groups)) if !groups.is_empty() => Some(Self::Groups(groups)),
                    (items, groups) => items.or(groups).map(Self::Items),
                }
            }
            _ => None,
        }
    }

    /// Returns the records, whatever the layout.
    #[must_use]
    pub const fn records(self) -> &'a [Value] {
        match self {
            Self::List(list) | Self::Items(list) | Self::Groups(list) => list,
        }
    }
}

/// Extracts the `response` value of a successful body.
fn response_of(body: &Value) -> Result<&Value, ApiError> {
    match body.get("response") {
        Some(Value::Null) | None => Err(ApiError::shape("body has no `response`")),
        Some(response) => Ok(response),
    }
}

fn records_of(body: &Value) -> Result<&[Value], ApiError> {
    let response = response_of(body)?;
    ResponseShape::detect(response)
        .map(ResponseShape::records)
        .ok_or_else(|| ApiError::shape("`response` is neither a list nor a wrapped list"))
}

fn record_at(index: usize, value: &Value) -> Result<RawRecord, ApiError> {
    value
        .as_object()
        .cloned()
        .ok_or_else(|| ApiError::shape(format!("element {index} of `response` is not an object")))
}

/// Builds the resource owner from a `users.get` body.
///
/// Takes the first record and merges the side-channel values of `token`:
/// a present `email` overwrites the record's `email`, and a present `user_id`
/// overwrites its `id`.
///
/// # Errors
///
/// Returns [`ApiError::UnexpectedShape`] if there is no first record or it is
/// not an object.
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::AccessToken;
/// use vkontakte_oauth::resources::map_owner;
/// use serde_json::json;
///
/// let token = AccessToken::from_response(&json!({
///     "access_token": "t",
///     "email": "a@b.com",
/// }))
/// .unwrap();
/// let body = json!({"response": [{"uid": 12345, "first_name": "Pavel"}]});
///
/// let owner = map_owner(&body, &token).unwrap();
/// assert_eq!(owner.id(), 12345);
/// assert_eq!(owner.email(), "a@b.com");
/// ```
pub fn map_owner(body: &Value, token: &AccessToken) -> Result<VkUser, ApiError> {
    let first = records_of(body)?
        .first()
        .ok_or_else(|| ApiError::shape("`response` is empty"))?;
    let mut record = record_at(0, first)?;

    if let Some(email) = present(token.values().get("email")) {
        record.insert("email".to_string(), email.clone());
    }
    if let Some(user_id) = present(token.values().get("user_id")) {
        record.insert("id".to_string(), user_id.clone());
    }

    Ok(VkUser::new(record))
}

/// Maps a `users.get` body. No side-channel merge happens here.
///
/// # Errors
///
/// Returns [`ApiError::UnexpectedShape`] if `response` is not a list of
/// objects, directly or under `items`.
pub fn map_users(body: &Value) -> Result<Vec<VkUser>, ApiError> {
    records_of(body)?
        .iter()
        .enumerate()
        .map(|(index, value)| record_at(index, value).map(VkUser::new))
        .collect()
}

/// Maps a `friends.get` body.
///
/// Without `fields`, VK returns bare ids; each becomes a record holding only
/// `id`. Full records are kept as they are.
///
/// # Errors
///
/// Returns [`ApiError::UnexpectedShape`] if an element is neither a number
/// nor an object.
pub fn map_friends(body: &Value) -> Result<Vec<VkUser>, ApiError> {
    records_of(body)?
        .iter()
        .enumerate()
        .map(|(index, value)| {
            if is_numeric(value) {
                let mut record = RawRecord::new();
                record.insert("id".to_string(), value.clone());
                Ok(VkUser::new(record))
            } else {
                record_at(index, value).map(VkUser::new)
            }
        })
        .collect()
}

/// Maps a `groups.getById` body into raw records, unchanged.
///
/// # Errors
///
/// Returns [`ApiError::UnexpectedShape`] if `response` is not a list of
/// objects, directly or under `groups` or `items`.
pub fn map_groups(body: &Value) -> Result<Vec<RawRecord>, ApiError> {
    records_of(body)?
        .iter()
        .enumerate()
        .map(|(index, value)| record_at(index, value))
        .collect()
}
