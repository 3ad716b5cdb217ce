//! Response classification.
//!
//! VK reports failures in several ways: a 4xx/5xx status, an HTML or plain
//! text page instead of JSON, a flat OAuth error
//! (`{"error": "invalid_grant", "error_description": "..."}`), or an API error
//! object inside an otherwise successful 200 response
//! (`{"error": {"error_code": 5, "error_msg": "..."}}`). [`check_response`]
//! folds all of them into a single [`ProviderError`].

use serde_json::Value;

use crate::clients::errors::ProviderError;
use crate::resources::raw::{as_integer, as_text, present};

/// The only content type a successful response may carry.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Decides whether a completed response is a success.
///
/// The message reported to the caller is picked in this order:
/// `error.error_msg`, then `error_description`, then the HTTP reason phrase.
/// The code is `error.error_code` when the body declares an error (falling
/// back to the status code when the error carries no code), otherwise the
/// HTTP status code.
///
/// # Arguments
///
/// * `code` - HTTP status code
/// * `reason` - HTTP reason phrase
/// * `content_type` - Raw `Content-Type` header, parameters included
/// * `body` - Parsed response body (an empty object if there was none)
///
/// # Errors
///
/// Returns [`ProviderError`] if any of these hold:
/// - the status code is 400 or above
/// - the media type is not `application/json`
/// - `body.error` is present and not empty
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::clients::check_response;
/// use serde_json::json;
///
/// let body = json!({"error": {"error_code": 123, "error_msg": "m"}});
/// let error = check_response(200, "OK", "application/json; charset=utf-8", &body).unwrap_err();
/// assert_eq!(error.code, 123);
/// assert_eq!(error.message, "m");
///
/// assert!(check_response(200, "OK", "application/json", &json!({"response": []})).is_ok());
/// ```
pub fn check_response(
    code: u16,
    reason: &str,
    content_type: &str,
    body: &Value,
) -> Result<(), ProviderError> {
    let media_type = content_type.split(';').next().unwrap_or_default().trim();

    let error = present(body.get("error"));
    let error_code = error
        .and_then(|e| present(e.get("error_code")))
        .and_then(as_integer)
        .unwrap_or_else(|| i64::from(code));
    let error_description = present(body.get("error_description")).map(as_text);
    let error_message = error
        .and_then(|e| present(e.get("error_msg")))
        .map(as_text)
        .or(error_description);
    let message = error_message.unwrap_or_else(|| reason.to_string());

    let failed = code >= 400 || media_type != JSON_CONTENT_TYPE || error.is_some();
    if !failed {
        return Ok(());
    }

    let code = if error.is_some() {
        error_code
    } else {
        i64::from(code)
    };
    tracing::warn!(code, %message, "VK responded with an error");

    Err(ProviderError::new(code, message, body.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const JSON_UTF8: &str = "application/json; encoding=utf-8";

    fn flat_error() -> Value {
        json!({
            "error": "mock_error_message",
            "error_description": "mock_error_description",
        })
    }

    fn tree_error() -> Value {
        json!({
            "error": {
                "error_code": 123,
                "error_msg": "mock_error_message",
            },
        })
    }

    #[test]
    fn test_success_with_json_and_charset() {
        let body = json!({"response": [{"id": 1}]});
        assert!(check_response(200, "OK", JSON_UTF8, &body).is_ok());
        assert!(check_response(200, "OK", " application/json ", &body).is_ok());
    }

    #[test]
    fn test_empty_body_is_success_when_json() {
        assert!(check_response(200, "OK", "application/json", &json!({})).is_ok());
    }

    #[test]
    fn test_flat_error_uses_description_and_status() {
        let error = check_response(200, "OK", JSON_UTF8, &flat_error()).unwrap_err();
        assert_eq!(error.message, "mock_error_description");
        assert_eq!(error.code, 200);
        assert_eq!(error.body, flat_error());
    }

    #[test]
    fn test_flat_error_on_401_keeps_status_code() {
        let error = check_response(401, "Unauthorized", JSON_UTF8, &flat_error()).unwrap_err();
        assert_eq!(error.message, "mock_error_description");
        assert_eq!(error.code, 401);
    }

    #[test]
    fn test_tree_error_uses_nested_code_and_message() {
        let error = check_response(200, "OK", JSON_UTF8, &tree_error()).unwrap_err();
        assert_eq!(error.message, "mock_error_message");
        assert_eq!(error.code, 123);
    }

    #[test]
    fn test_tree_error_code_is_independent_of_status() {
        for status in [200, 400, 500] {
            let error = check_response(status, "Whatever", JSON_UTF8, &tree_error()).unwrap_err();
            assert_eq!(error.code, 123);
            assert_eq!(error.message, "mock_error_message");
        }
    }

    #[test]
    fn test_nested_message_wins_over_description() {
        let body = json!({
            "error": {"error_code": 5, "error_msg": "User authorization failed"},
            "error_description": "ignored",
        });
        let error = check_response(200, "OK", JSON_UTF8, &body).unwrap_err();
        assert_eq!(error.message, "User authorization failed");
    }

    #[test]
    fn test_error_object_without_message_falls_back_to_description() {
        let body = json!({"error": {"error_code": 7}, "error_description": "described"});
        let error = check_response(200, "OK", JSON_UTF8, &body).unwrap_err();
        assert_eq!(error.message, "described");
        assert_eq!(error.code, 7);
    }

    #[test]
    fn test_error_without_code_or_message_falls_back_to_status_and_reason() {
        let body = json!({"error": "invalid_request"});
        let error = check_response(200, "OK", JSON_UTF8, &body).unwrap_err();
        assert_eq!(error.message, "OK");
        assert_eq!(error.code, 200);
    }

    #[test]
    fn test_string_error_code_is_coerced() {
        let body = json!({"error": {"error_code": "15", "error_msg": "Access denied"}});
        let error = check_response(200, "OK", JSON_UTF8, &body).unwrap_err();
        assert_eq!(error.code, 15);
    }

    #[test]
    fn test_any_status_from_400_fails_regardless_of_body() {
        for status in [400u16, 401, 403, 404, 429, 500, 502, 599] {
            let result = check_response(status, "Failure", JSON_UTF8, &json!({"response": [1]}));
            let error = result.unwrap_err();
            assert_eq!(error.code, i64::from(status));
            assert_eq!(error.message, "Failure");
        }
    }

    #[test]
    fn test_status_399_is_not_an_error_by_itself() {
        assert!(check_response(399, "Odd", "application/json", &json!({})).is_ok());
    }

    #[test]
    fn test_non_json_content_type_fails_with_reason_phrase() {
        let error = check_response(200, "OK", "text/html; charset=utf-8", &json!({})).unwrap_err();
        assert_eq!(error.code, 200);
        assert_eq!(error.message, "OK");
    }

    #[test]
    fn test_missing_content_type_fails() {
        assert!(check_response(200, "OK", "", &json!({"response": []})).is_err());
    }

    #[test]
    fn test_empty_error_values_are_ignored() {
        for error in [json!(""), json!({}), json!(0), json!(null), json!(false)] {
            let body = json!({"error": error, "response": []});
            assert!(check_response(200, "OK", JSON_UTF8, &body).is_ok());
        }
    }

    #[test]
    fn test_description_alone_does_not_fail() {
        let body = json!({"error_description": "informational", "response": []});
        assert!(check_response(200, "OK", JSON_UTF8, &body).is_ok());
    }
}
