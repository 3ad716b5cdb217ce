//! HTTP plumbing shared by the OAuth flow and the API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async transport, one request per call, no retries
//! - [`HttpResponse`]: A fully received response with its parsed JSON body
//! - [`check_response`]: Classifies a response as success or [`ProviderError`]
//! - [`QueryParams`]: Ordered query parameters with override and unset rules
//! - [`endpoint_url`]: Joins an API base, a method name, and parameters
//!
//! # Error Classification
//!
//! A response is a failure when its status is 400 or above, when its media
//! type is not `application/json`, or when the body carries a non-empty
//! `error`. VK uses two error layouts:
//!
//! ```json
//! {"error": "invalid_client", "error_description": "client_secret is incorrect"}
//! {"error": {"error_code": 5, "error_msg": "User authorization failed"}}
//! ```
//!
//! Both are folded into a [`ProviderError`] carrying a numeric code, a
//! message, and the raw body.

pub mod classify;
mod errors;
mod http_client;
mod http_response;
pub mod query;

pub use classify::check_response;
pub use errors::{HttpError, ProviderError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;
pub use query::{endpoint_url, QueryParams};
