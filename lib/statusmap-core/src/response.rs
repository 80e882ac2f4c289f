//! HTTP response values exchanged with the HTTP layer.
//!
//! [`Response`] carries status, headers, and body. Registries produce one on
//! encode and consume one on decode; writing it to a socket is left to the
//! surrounding HTTP stack.
//!
//! # Example
//!
//! ```ignore
//! let response = registry.encode(&value)?;
//! assert_eq!(response.content_type(), Some("application/json"));
//! ```

use std::collections::HashMap;

use bytes::Bytes;
use http::header::CONTENT_TYPE;

/// HTTP response with status, headers, and body.
#[derive(Debug, Clone)]
pub struct Response<B = Bytes> {
    status: u16,
    headers: HashMap<String, String>,
    body: B,
}

impl<B> Response<B> {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: B) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// The `content-type` header, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE.as_str())
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &B {
        &self.body
    }

    /// Consume into body.
    #[must_use]
    pub fn into_body(self) -> B {
        self.body
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, HashMap<String, String>, B) {
        (self.status, self.headers, self.body)
    }
}

impl Response<Bytes> {
    /// Response whose `content-type` header is set when `content_type` is given.
    #[must_use]
    pub fn with_content_type(status: u16, content_type: Option<&str>, body: Bytes) -> Self {
        let mut headers = HashMap::new();
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE.as_str().to_string(), content_type.to_string());
        }
        Self::new(status, headers, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_basic() {
        let response = Response::with_content_type(
            404,
            Some("application/json"),
            Bytes::from(r#"{"resource":"user"}"#),
        );

        assert_eq!(response.status(), 404);
        assert_eq!(response.content_type(), Some("application/json"));
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.body(), &Bytes::from(r#"{"resource":"user"}"#));
    }

    #[test]
    fn response_without_content_type() {
        let response = Response::with_content_type(204, None, Bytes::new());
        assert!(response.headers().is_empty());
        assert_eq!(response.content_type(), None);
    }

    #[test]
    fn response_into_parts() {
        let response = Response::new(503, HashMap::new(), Bytes::from("try later"));
        let (status, headers, body) = response.into_parts();
        assert_eq!(status, 503);
        assert!(headers.is_empty());
        assert_eq!(body, Bytes::from("try later"));
    }
}
