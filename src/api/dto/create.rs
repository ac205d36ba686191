//! DTO for the create endpoint.

use serde::Deserialize;
use serde_json::{Deserializer, Map, Value};
use validator::{Validate, ValidationError};

use crate::error::AppError;
use crate::utils::url_syntax::check_url_syntax;

/// Body of `POST /`.
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// A missing `url` field deserialises to an empty string and is then rejected
/// by validation, same as an explicit `""`. The key is matched exactly first,
/// then case-insensitively, so `{"URL": "..."}` is accepted too.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "URL must not be empty"))]
    #[validate(custom(function = "validate_url_syntax"))]
    pub url: String,
}

impl CreateRequest {
    /// Decodes the first JSON value in `body`, which must be an object.
    ///
    /// Content type is not checked and anything after the first value is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] for an empty body, malformed JSON, a
    /// top-level value that is not an object, or a non-string `url`.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        let mut object = Deserializer::from_slice(body)
            .into_iter::<Map<String, Value>>()
            .next()
            .ok_or_else(|| AppError::bad_request("empty request body"))?
            .map_err(|e| AppError::bad_request(format!("malformed JSON body: {e}")))?;

        let mut fields = Map::new();
        if let Some(url) = take_url_field(&mut object) {
            fields.insert("url".to_string(), url);
        }

        serde_json::from_value(Value::Object(fields))
            .map_err(|e| AppError::bad_request(format!("malformed JSON body: {e}")))
    }
}

/// Removes the `url` member, falling back to a case-insensitive key match.
fn take_url_field(object: &mut Map<String, Value>) -> Option<Value> {
    if let Some(url) = object.remove("url") {
        return Some(url);
    }

    let key = object
        .keys()
        .find(|key| key.eq_ignore_ascii_case("url"))?
        .clone();
    object.remove(&key)
}

fn validate_url_syntax(url: &str) -> Result<(), ValidationError> {
    check_url_syntax(url).map_err(|e| {
        let mut error = ValidationError::new("url_syntax");
        error.message = Some(e.to_string().into());
        error
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_body() {
        let request = CreateRequest::from_body(br#"{"url":"https://example.com"}"#).unwrap();

        assert_eq!(request.url, "https://example.com");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let request =
            CreateRequest::from_body(br#"{"url":"https://example.com","note":1}"#).unwrap();
        assert_eq!(request.url, "https://example.com");
    }

    #[test]
    fn test_decode_ignores_trailing_data() {
        let request =
            CreateRequest::from_body(b"{\"url\":\"https://example.com\"}\ngarbage").unwrap();
        assert_eq!(request.url, "https://example.com");
    }

    #[test]
    fn test_decode_missing_url_fails_validation() {
        let request = CreateRequest::from_body(b"{}").unwrap();

        assert!(request.url.is_empty());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_decode_empty_body() {
        let result = CreateRequest::from_body(b"");
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn test_decode_malformed_json() {
        let result = CreateRequest::from_body(b"{\"url\":");
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn test_decode_wrong_type() {
        let result = CreateRequest::from_body(br#"{"url": 42}"#);
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[test]
    fn test_decode_rejects_non_object() {
        let bodies: [&[u8]; 4] = [
            br#"["https://example.com"]"#,
            br#""https://example.com""#,
            b"42",
            b"null",
        ];
        for body in bodies {
            let result = CreateRequest::from_body(body);
            assert!(matches!(result, Err(AppError::BadRequest { .. })));
        }
    }

    #[test]
    fn test_decode_url_key_case_insensitive() {
        let request = CreateRequest::from_body(br#"{"URL":"https://example.com"}"#).unwrap();
        assert_eq!(request.url, "https://example.com");

        let request = CreateRequest::from_body(br#"{"Url":"https://example.com"}"#).unwrap();
        assert_eq!(request.url, "https://example.com");
    }

    #[test]
    fn test_decode_exact_key_wins() {
        let request =
            CreateRequest::from_body(br#"{"URL":"https://upper.example","url":"https://exact.example"}"#)
                .unwrap();
        assert_eq!(request.url, "https://exact.example");
    }

    #[test]
    fn test_validate_rejects_unparsable_url() {
        let request = CreateRequest {
            url: "http://[::1".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }
}
