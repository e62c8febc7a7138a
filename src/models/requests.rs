//! Request DTOs for the relay server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde_json::Value;
use url::Url;

use crate::error::{RelayError, Result};

/// Request body for POST /storeURL
///
/// The body is read as loose JSON regardless of `Content-Type`. Anything that
/// is not a JSON object counts as an empty body, and `url` may hold any JSON
/// value; [`StoreUrlRequest::validate`] decides what is usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreUrlRequest {
    /// The submitted `url` field, if any
    pub url: Option<Value>,
}

impl StoreUrlRequest {
    /// Builds a request from raw body bytes.
    pub fn from_body(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(mut map)) => Self {
                url: map.remove("url"),
            },
            _ => Self::default(),
        }
    }

    /// Validates the request and returns the URL to store.
    ///
    /// A missing or falsy `url` (`null`, `false`, `0`, `""`) is
    /// [`RelayError::UrlRequired`]. Any other value is converted to its
    /// string form and must parse as an absolute URL. The string is returned
    /// as submitted, not in normalized form.
    pub fn validate(self) -> Result<String> {
        let url = match self.url {
            Some(value) if is_truthy(&value) => stringify(&value),
            _ => return Err(RelayError::UrlRequired),
        };

        Url::parse(&url).map_err(|_| RelayError::InvalidUrl)?;
        Ok(url)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of a JSON value under script-style coercion: arrays join
/// their elements with `,` (null elements become empty), objects become
/// `[object Object]`.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(body: &str) -> Result<String> {
        StoreUrlRequest::from_body(body.as_bytes()).validate()
    }

    #[test]
    fn test_store_request_from_body() {
        let req = StoreUrlRequest::from_body(br#"{"url": "https://example.com"}"#);
        assert_eq!(req.url, Some(Value::String("https://example.com".to_string())));
    }

    #[test]
    fn test_missing_url_field() {
        assert_eq!(validate("{}"), Err(RelayError::UrlRequired));
    }

    #[test]
    fn test_falsy_urls() {
        for body in [
            r#"{"url": null}"#,
            r#"{"url": ""}"#,
            r#"{"url": false}"#,
            r#"{"url": 0}"#,
            r#"{"url": 0.0}"#,
        ] {
            assert_eq!(validate(body), Err(RelayError::UrlRequired), "body {}", body);
        }
    }

    #[test]
    fn test_unusable_bodies_count_as_empty() {
        for body in ["", "not json", r#"{"url": "#, r#"["https://a.b"]"#, r#""https://a.b""#] {
            assert_eq!(validate(body), Err(RelayError::UrlRequired), "body {:?}", body);
        }
    }

    #[test]
    fn test_invalid_url_format() {
        for body in [
            r#"{"url": "not-a-url"}"#,
            r#"{"url": "/relative/path"}"#,
            r#"{"url": 42}"#,
            r#"{"url": true}"#,
            r#"{"url": []}"#,
            r#"{"url": {"href": "https://a.b"}}"#,
        ] {
            assert_eq!(validate(body), Err(RelayError::InvalidUrl), "body {}", body);
        }
    }

    #[test]
    fn test_single_element_array_is_coerced() {
        assert_eq!(validate(r#"{"url": ["https://a.b"]}"#).unwrap(), "https://a.b");
    }

    #[test]
    fn test_stringify_nested_array() {
        let value: Value = serde_json::from_str(r#"["a", null, ["b", 1]]"#).unwrap();
        assert_eq!(stringify(&value), "a,,b,1");
    }

    #[test]
    fn test_valid_url_kept_verbatim() {
        assert_eq!(validate(r#"{"url": "HTTPS://A.B"}"#).unwrap(), "HTTPS://A.B");
    }

    #[test]
    fn test_non_http_scheme_accepted() {
        assert!(validate(r#"{"url": "mailto:someone@example.com"}"#).is_ok());
    }
}
