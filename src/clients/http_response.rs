//! HTTP response type handed from the transport to the classifier.

use std::collections::HashMap;

use crate::clients::classify::check_response;
use crate::clients::errors::ProviderError;

/// A fully received HTTP response from VK.
///
/// Header names are stored lowercased; a header may carry several values.
/// `body` is the parsed JSON body, or an empty object when the body was
/// empty or not JSON.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The HTTP reason phrase (e.g. `OK`, `Not Found`).
    pub reason: String,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        code: u16,
        reason: impl Into<String>,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            reason: reason.into(),
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the raw `Content-Type` header value, parameters included.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Classifies this response.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the status is 400 or above, the content
    /// type is not `application/json`, or the body declares an `error`.
    pub fn check(&self) -> Result<(), ProviderError> {
        check_response(
            self.code,
            &self.reason,
            self.content_type().unwrap_or_default(),
            &self.body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn json_headers() -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json; charset=utf-8".to_string()],
        );
        headers
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, "OK", json_headers(), json!({}));
        assert_eq!(
            response.header("Content-Type"),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(response.content_type(), response.header("content-type"));
        assert!(response.header("x-missing").is_none());
    }

    #[test]
    fn test_is_ok_range() {
        assert!(HttpResponse::new(200, "OK", HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(299, "", HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(302, "Found", HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(500, "Internal Server Error", HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_check_uses_content_type_header() {
        let ok = HttpResponse::new(200, "OK", json_headers(), json!({"response": []}));
        assert!(ok.check().is_ok());

        let no_header = HttpResponse::new(200, "OK", HashMap::new(), json!({"response": []}));
        let error = no_header.check().unwrap_err();
        assert_eq!(error.code, 200);
        assert_eq!(error.message, "OK");
    }
}
