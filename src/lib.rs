//! # VK OAuth
//!
//! An OAuth 2.0 identity provider adapter for VK (VKontakte): it drives the
//! authorization code flow and turns VK's loosely-typed JSON into normalized
//! user records.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`VkConfig`] and [`VkConfigBuilder`]
//! - Validated newtypes for credentials, URLs, language, and API version
//! - OAuth 2.0 authorization code flow via [`auth::oauth`]
//! - Response classification of VK's status, content-type, and error body
//!   conventions via [`clients::check_response`]
//! - `users.get`, `friends.get`, and `groups.getById` via [`api::VkClient`]
//! - Typed, empty-is-absent accessors over user records via [`VkUser`]
//!
//! ## Quick Start
//!
//! ```rust
//! use vkontakte_oauth::{ApiVersion, BaseUrl, ClientId, ClientSecret, VkConfig};
//!
//! let config = VkConfig::builder()
//!     .client_id(ClientId::new("51234567").unwrap())
//!     .client_secret(ClientSecret::new("your-secret").unwrap())
//!     .redirect_uri(BaseUrl::new("https://your-app.com/auth/vk").unwrap())
//!     .scopes("email,friends".parse().unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## OAuth Authentication
//!
//! ```rust,ignore
//! use vkontakte_oauth::auth::oauth::{begin_auth, validate_callback, CallbackQuery, VkOAuth};
//!
//! let flow = VkOAuth::new(config.clone())?;
//!
//! // Step 1: Begin authorization
//! let result = begin_auth(&flow, None)?;
//! // Redirect user to result.auth_url
//! // Store result.state in session
//!
//! // Step 2: Handle callback
//! let token = validate_callback(&flow, &query, &stored_state).await?;
//! ```
//!
//! ## Resource Owner and Friends
//!
//! ```rust,ignore
//! use vkontakte_oauth::api::{RequestOptions, VkClient};
//!
//! let client = VkClient::new(config)?;
//!
//! // The email VK sent with the token is merged into the owner record
//! let owner = client.resolve_owner(&token).await?;
//! println!("{} <{}>", owner.first_name(), owner.email());
//!
//! let friends = client
//!     .friends_get(Some(owner.id()), RequestOptions::new().with_token(&token))
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **One request per call**: Nothing is retried or cached

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use auth::{AccessToken, AuthScopes};
pub use config::{
    ApiVersion, BaseUrl, ClientId, ClientSecret, Language, UserFields, VkConfig, VkConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{HttpClient, HttpError, HttpResponse, ProviderError};

// Re-export OAuth types for convenience
pub use auth::oauth::{
    begin_auth, validate_callback, BeginAuthResult, CallbackQuery, OAuthError, OAuthFlow,
    StateParam, VkOAuth,
};

// Re-export API and resource types
pub use api::{ApiError, RequestOptions, VkClient};
pub use resources::{FriendStatus, Place, RawRecord, Sex, VkUser};
