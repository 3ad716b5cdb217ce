//! Authentication types.
//!
//! # Overview
//!
//! - [`AuthScopes`]: The ordered, comma-joined list of VK permission scopes
//! - [`AccessToken`]: The token returned by the code exchange, with the
//!   `email` and `user_id` VK sends alongside it
//! - [`oauth`]: OAuth 2.0 authorization code flow implementation
//!
//! # OAuth Flow
//!
//! ```rust,ignore
//! use vkontakte_oauth::auth::oauth::{begin_auth, validate_callback, VkOAuth};
//!
//! let flow = VkOAuth::new(config)?;
//!
//! // 1. Generate authorization URL
//! let result = begin_auth(&flow, None)?;
//! // Redirect user to result.auth_url
//!
//! // 2. Handle callback and get a token
//! let token = validate_callback(&flow, &query, &stored_state).await?;
//! ```

mod access_token;
pub mod oauth;
mod scopes;

pub use access_token::AccessToken;
pub use scopes::AuthScopes;
