//! HTTP transport for VK communication.
//!
//! This module provides the [`HttpClient`] type, a thin wrapper over a pooled
//! `reqwest` client that sends exactly one request per call and hands back a
//! fully received [`HttpResponse`]. Classification is left to the caller.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::config::VkConfig;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client used for both the OAuth host and the API host.
///
/// The client handles:
/// - Default headers including User-Agent and Accept
/// - The transport timeout configured on [`VkConfig`]
/// - Response parsing into [`HttpResponse`], with an empty object standing
///   in for a body that is empty or not JSON
///
/// It never retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::{ClientId, ClientSecret, VkConfig};
/// use vkontakte_oauth::clients::HttpClient;
///
/// let config = VkConfig::builder()
///     .client_id(ClientId::new("123456").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config).unwrap();
/// assert!(client.default_headers().contains_key("User-Agent"));
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new(config: &VkConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}VK OAuth Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request to a fully built URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if no response was received.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        tracing::debug!(method = "GET", url = %redact(url), "Sending VK request");
        self.send(self.client.get(url)).await
    }

    /// Sends a POST request with a form-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if no response was received.
    pub async fn post_form(
        &self,
        url: &str,
        form: &[(&str, &str)],
    ) -> Result<HttpResponse, HttpError> {
        tracing::debug!(method = "POST", url = %redact(url), "Sending VK request");
        self.send(self.client.post(url).form(form)).await
    }

    async fn send(&self, mut req_builder: reqwest::RequestBuilder) -> Result<HttpResponse, HttpError> {
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;

        let status = res.status();
        let code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|e| {
                tracing::debug!(code, error = %e, "VK response body is not JSON");
                serde_json::json!({})
            })
        };

        Ok(HttpResponse::new(code, reason, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Drops the query string so tokens never reach the logs.
fn redact(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}
