//! VK API operations.
//!
//! - [`VkClient`]: `users.get`, `friends.get`, and `groups.getById`, plus the
//!   resource owner lookup
//! - [`RequestOptions`]: per-call token and extra parameters
//! - [`ApiError`]: the error taxonomy of these calls

mod client;
mod errors;
mod options;

pub use client::{VkClient, FRIENDS_GET, GROUPS_GET, USERS_GET};
pub use errors::ApiError;
pub use options::RequestOptions;
