//! Body serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Content type of an encoded payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Plain text content type (`text/plain; charset=utf-8`).
    PlainText,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::PlainText => "text/plain; charset=utf-8",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use statusmap_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct NotFound { resource: String }
///
/// let body = NotFound { resource: "user".to_string() };
/// let bytes = to_json(&body).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"resource":"user"}"#);
/// ```
pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so that the error names the exact field that
/// failed to deserialize.
///
/// # Errors
///
/// Returns an error if JSON deserialization fails, with the error message
/// including the path to the problematic field (e.g., "user.address.city").
///
/// # Example
///
/// ```
/// use statusmap_core::from_json;
/// use serde::Deserialize;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Unauthorized { realm: String }
///
/// let value: Unauthorized = from_json(br#"{"realm":"admin"}"#).expect("deserialize");
/// assert_eq!(value, Unauthorized { realm: "admin".to_string() });
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_as_str() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(ContentType::PlainText.as_str(), "text/plain; charset=utf-8");
    }

    #[test]
    fn content_type_display() {
        assert_eq!(ContentType::Json.to_string(), "application/json");
    }

    #[test]
    fn to_json_serialize() {
        #[derive(serde::Serialize)]
        struct Conflict {
            id: u64,
            reason: String,
        }

        let conflict = Conflict {
            id: 7,
            reason: "already exists".to_string(),
        };

        let bytes = to_json(&conflict).expect("serialize");
        assert_eq!(bytes.as_ref(), br#"{"id":7,"reason":"already exists"}"#);
    }

    #[test]
    fn from_json_syntax_error() {
        #[derive(Debug, serde::Deserialize)]
        struct Conflict {
            #[allow(dead_code)]
            id: u64,
        }

        let result: Result<Conflict> = from_json(b"not json");

        let err = result.expect_err("should fail");
        assert!(err.to_string().contains("JSON deserialization error"));
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Limits {
            #[allow(dead_code)]
            retry_after: u64,
        }

        #[derive(Debug, serde::Deserialize)]
        struct TooManyRequests {
            #[allow(dead_code)]
            limits: Limits,
        }

        let result: Result<TooManyRequests> = from_json(br#"{"limits":{}}"#);

        let msg = result.expect_err("should fail").to_string();
        assert!(msg.contains("limits"), "Expected path 'limits' in error: {msg}");
        assert!(
            msg.contains("retry_after"),
            "Expected field 'retry_after' mentioned in error: {msg}"
        );
    }
}
