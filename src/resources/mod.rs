//! VK records and the mapping of API bodies into them.
//!
//! - [`RawRecord`]: one JSON object exactly as VK sent it
//! - [`VkUser`]: typed, read-only accessors over a user record
//! - [`map_owner`], [`map_users`], [`map_friends`], [`map_groups`]: per-method
//!   body mapping
//! - [`is_absent`]: the empty-is-absent rule every accessor applies

pub mod mapper;
pub mod raw;
mod user;

pub use mapper::{map_friends, map_groups, map_owner, map_users, ResponseShape};
pub use raw::{is_absent, RawRecord};
pub use user::{FriendStatus, Place, Sex, VkUser};
