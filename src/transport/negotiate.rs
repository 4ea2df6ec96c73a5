//! Response body negotiation.
//!
//! # Responsibilities
//! - Compare the response `Content-Type` with the endpoint's expectation
//! - Decode a success body into structured data exactly once
//!
//! # Design Decisions
//! - A header mismatch is logged, not fatal; the body is still decoded once
//! - JSON expected: parse failure is surfaced as [`McsmError::Decode`]
//! - Plain text expected: JSON is tried first, otherwise the raw text is
//!   returned as a string value

use serde_json::Value;

use crate::error::{McsmError, Result};
use crate::transport::endpoint::ContentType;

/// Decode a 200 response body according to the expected content type.
pub fn decode_body(body: &str, header: Option<&str>, expect: ContentType) -> Result<Value> {
    match header {
        Some(actual) if !expect.matches(actual) => {
            tracing::warn!(
                expected = expect.as_str(),
                actual = %actual,
                "Response content type differs from expected, decoding anyway"
            );
        }
        None => {
            tracing::debug!(expected = expect.as_str(), "Response has no content type");
        }
        _ => {}
    }

    match expect {
        ContentType::Json => serde_json::from_str(body).map_err(|e| McsmError::Decode {
            content_type: expect.as_str().to_string(),
            message: e.to_string(),
        }),
        ContentType::PlainText => Ok(serde_json::from_str(body)
            .unwrap_or_else(|_| Value::String(body.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_body_decoded() {
        let value = decode_body(
            r#"{"status":200,"data":{"version":"9.9"}}"#,
            Some("application/json; charset=utf-8"),
            ContentType::Json,
        )
        .unwrap();
        assert_eq!(value, json!({"status": 200, "data": {"version": "9.9"}}));
    }

    #[test]
    fn test_json_mismatched_header_still_decoded() {
        let value = decode_body("[1,2]", Some("text/html"), ContentType::Json).unwrap();
        assert_eq!(value, json!([1, 2]));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = decode_body("<html>", Some("application/json"), ContentType::Json).unwrap_err();
        match err {
            McsmError::Decode { content_type, .. } => {
                assert_eq!(content_type, "application/json")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_plain_text_falls_back_to_string() {
        assert_eq!(
            decode_body("true", Some("text/plain"), ContentType::PlainText).unwrap(),
            json!(true)
        );
        assert_eq!(
            decode_body("OK", Some("text/plain"), ContentType::PlainText).unwrap(),
            json!("OK")
        );
    }
}
