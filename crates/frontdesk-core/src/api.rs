//! Transform API types.
//!
//! The wire contract for the single `/api/transform` endpoint: a request
//! carrying one `text` field and a response carrying one `result` field.

use serde::{Deserialize, Serialize};

/// Fixed prefix prepended to every transformed text.
pub const GREETING_PREFIX: &str = "Hello, ";

/// Request body for the transform endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TransformRequest {
    /// The text to transform.
    pub text: String,
}

/// Response body for the transform endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TransformResponse {
    /// The transformed text.
    pub result: String,
}

/// Applies the fixed transformation: the greeting prefix concatenated with
/// the input, byte-for-byte. No trimming, case conversion, or encoding
/// changes.
#[must_use]
pub fn transform(text: &str) -> String {
    format!("{GREETING_PREFIX}{text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_is_exact_concatenation() {
        assert_eq!(transform("World"), "Hello, World");
        assert_eq!(transform(""), "Hello, ");
        assert_eq!(transform("  spaced  "), "Hello,   spaced  ");
        assert_eq!(transform("wörld \u{1f30d}"), "Hello, wörld \u{1f30d}");
    }

    #[test]
    fn test_transform_is_idempotent_across_calls() {
        for _ in 0..3 {
            assert_eq!(transform("world"), "Hello, world");
        }
    }

    #[test]
    fn test_request_deserialization() {
        let req: TransformRequest = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(req.text, "hi");

        // Unknown fields are ignored, matching the wire contract.
        let req: TransformRequest =
            serde_json::from_str(r#"{"text": "hi", "extra": 1}"#).unwrap();
        assert_eq!(req.text, "hi");
    }

    #[test]
    fn test_request_rejects_missing_text() {
        let err = serde_json::from_str::<TransformRequest>("{}").unwrap_err();
        assert!(err.to_string().contains("text"));
    }

    #[test]
    fn test_request_rejects_non_string_text() {
        assert!(serde_json::from_str::<TransformRequest>(r#"{"text": 42}"#).is_err());
        assert!(serde_json::from_str::<TransformRequest>(r#"{"text": null}"#).is_err());
        assert!(serde_json::from_str::<TransformRequest>(r#"{"text": ["a"]}"#).is_err());
    }

    #[test]
    fn test_response_serialization() {
        let response = TransformResponse {
            result: transform("World"),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"result":"Hello, World"}"#);
    }

    #[test]
    fn test_serde_error_converts_to_core_error() {
        let err = serde_json::from_str::<TransformRequest>("{").unwrap_err();
        let core_err: crate::Error = err.into();
        assert!(matches!(core_err, crate::Error::Serialization(_)));
    }
}
