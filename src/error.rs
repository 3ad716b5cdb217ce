//! Error types for the VK OAuth SDK.
//!
//! This module contains the configuration error type. Errors raised while
//! talking to VK live next to the code that raises them:
//!
//! - [`crate::clients::HttpError`] and [`crate::clients::ProviderError`] for the transport
//!   and response classification layers
//! - [`crate::auth::oauth::OAuthError`] for the authorization code flow
//! - [`crate::api::ApiError`] for the resource endpoints
//!
//! # Example
//!
//! ```rust
//! use vkontakte_oauth::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Each variant is raised by a validated newtype constructor or by
/// [`VkConfigBuilder::build`](crate::VkConfigBuilder::build).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client ID cannot be empty.
    #[error("Client ID cannot be empty. Please provide the VK application ID.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the VK application secure key.")]
    EmptyClientSecret,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'MAJOR.MINOR' (e.g., '5.199').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Scopes are invalid.
    #[error("Invalid scopes: {reason}")]
    InvalidScopes {
        /// The reason the scopes are invalid.
        reason: String,
    },

    /// User fields are invalid.
    #[error("Invalid user fields: {reason}")]
    InvalidFields {
        /// The reason the field list is invalid.
        reason: String,
    },

    /// Language code is invalid.
    #[error("Invalid language '{language}'. Expected a short code such as 'en' or 'ru'.")]
    InvalidLanguage {
        /// The invalid language that was provided.
        language: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// URL is invalid.
    #[error("Invalid URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://myapp.example.com').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
