//! Raw provider records and the empty-is-absent rule.
//!
//! VK omits fields, sends `0`, `""`, or `{}` for "not set", and mixes numbers
//! and numeric strings for the same key depending on the method and API
//! version. Everything that reads a loosely-typed value goes through the
//! helpers here so the rule is applied the same way everywhere.

use serde_json::{Map, Value};

/// One record exactly as received from VK, with key order preserved.
pub type RawRecord = Map<String, Value>;

/// Returns `true` if `value` counts as "not provided".
///
/// Absent values are: `null`, `false`, the number zero (integer or float),
/// the empty string, the string `"0"`, and empty arrays or objects. An
/// explicit `0` is deliberately absent, as VK uses it for "unset".
///
/// # Example
///
/// ```rust
/// use vkontakte_oauth::resources::is_absent;
/// use serde_json::json;
///
/// assert!(is_absent(&json!(0)));
/// assert!(is_absent(&json!("")));
/// assert!(is_absent(&json!({})));
/// assert!(!is_absent(&json!(1)));
/// assert!(!is_absent(&json!("a")));
/// ```
#[must_use]
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Returns `value` unless it is missing or absent.
#[must_use]
pub fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !is_absent(v))
}

/// Coerces a loosely-typed value to an integer.
///
/// Integers are returned as-is, floats are truncated, numeric strings are
/// parsed, and `true` is 1. Anything else yields `None`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Renders a loosely-typed value as text.
///
/// Strings are returned without quotes; other values use their JSON form.
#[must_use]
pub fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Returns `true` if `value` is a bare numeric identifier.
///
/// Matches JSON numbers and strings that parse as numbers, the two forms
/// `friends.get` uses for entries requested without extra fields.
#[must_use]
pub fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => {
            let s = s.trim();
            !s.is_empty() && s.parse::<f64>().is_ok_and(f64::is_finite)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_absent_matches_empty_values() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!("0"),
            json!([]),
            json!({}),
        ] {
            assert!(is_absent(&value), "{value} should be absent");
        }
    }

    #[test]
    fn test_is_absent_keeps_meaningful_values() {
        for value in [
            json!(true),
            json!(1),
            json!(-1),
            json!(0.5),
            json!(" "),
            json!("00"),
            json!("false"),
            json!([0]),
            json!({"id": 0}),
        ] {
            assert!(!is_absent(&value), "{value} should be present");
        }
    }

    #[test]
    fn test_present_filters_missing_and_absent() {
        let record = json!({"a": 1, "b": 0});
        assert_eq!(present(record.get("a")), Some(&json!(1)));
        assert!(present(record.get("b")).is_none());
        assert!(present(record.get("c")).is_none());
    }

    #[test]
    fn test_as_integer_coercions() {
        assert_eq!(as_integer(&json!(12345)), Some(12345));
        assert_eq!(as_integer(&json!(12.9)), Some(12));
        assert_eq!(as_integer(&json!("42")), Some(42));
        assert_eq!(as_integer(&json!(" 7 ")), Some(7));
        assert_eq!(as_integer(&json!("1.5")), Some(1));
        assert_eq!(as_integer(&json!(true)), Some(1));
        assert_eq!(as_integer(&json!("abc")), None);
        assert_eq!(as_integer(&json!({"id": 1})), None);
    }

    #[test]
    fn test_as_text_unquotes_strings() {
        assert_eq!(as_text(&json!("hello")), "hello");
        assert_eq!(as_text(&json!(5)), "5");
        assert_eq!(as_text(&json!(true)), "true");
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric(&json!(111)));
        assert!(is_numeric(&json!("111")));
        assert!(is_numeric(&json!(1.5)));
        assert!(!is_numeric(&json!("id111")));
        assert!(!is_numeric(&json!("")));
        assert!(!is_numeric(&json!({"id": 111})));
        assert!(!is_numeric(&json!(null)));
    }
}
