//! Payload codecs.
//!
//! A [`PayloadCodec`] turns a value of the registry type into response bytes
//! and back. Each variant owns one codec:
//! - [`JsonCodec`] - the whole value as JSON
//! - [`JsonVariantCodec`] - one case of a tagged union as JSON
//! - [`TextCodec`] - the value as UTF-8 text
//! - [`EmptyCodec`] - no body at all

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use bytes::Bytes;

use crate::{ClassKey, ContentType, Error, Result, from_json, to_json};

/// Encodes and decodes the payload of a variant.
pub trait PayloadCodec<T>: Send + Sync {
    /// Content type of encoded payloads, `None` for an empty body.
    fn content_type(&self) -> Option<ContentType>;

    /// Encode `value` into a response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented by this codec.
    fn encode(&self, value: &T) -> Result<Bytes>;

    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not a valid payload.
    fn decode(&self, body: &[u8]) -> Result<T>;

    /// Declared payload class, used by class-based discriminators.
    fn payload_class(&self) -> Option<ClassKey> {
        None
    }

    /// Payload type name, for documentation.
    fn payload_name(&self) -> &'static str;
}

// ============================================================================
// JSON
// ============================================================================

/// Encodes the whole value as JSON.
pub struct JsonCodec<T>(PhantomData<fn() -> T>);

impl<T> JsonCodec<T> {
    /// Create a JSON codec.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonCodec<{}>", std::any::type_name::<T>())
    }
}

impl<T> PayloadCodec<T> for JsonCodec<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + 'static,
{
    fn content_type(&self) -> Option<ContentType> {
        Some(ContentType::Json)
    }

    fn encode(&self, value: &T) -> Result<Bytes> {
        to_json(value)
    }

    fn decode(&self, body: &[u8]) -> Result<T> {
        from_json(body)
    }

    fn payload_class(&self) -> Option<ClassKey> {
        Some(ClassKey::of::<T>())
    }

    fn payload_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Encodes one case `P` of a tagged union `T` as JSON.
///
/// `wrap` builds the union from a decoded payload, `project` extracts the
/// payload from the union (or `None` for any other case).
///
/// # Example
///
/// ```ignore
/// let codec = JsonVariantCodec::new(ApiError::NotFound, |e| match e {
///     ApiError::NotFound(p) => Some(p),
///     _ => None,
/// });
/// ```
pub struct JsonVariantCodec<T, P> {
    wrap: fn(P) -> T,
    project: fn(&T) -> Option<&P>,
}

impl<T, P> JsonVariantCodec<T, P> {
    /// Create a codec for the case selected by `project`.
    #[must_use]
    pub const fn new(wrap: fn(P) -> T, project: fn(&T) -> Option<&P>) -> Self {
        Self { wrap, project }
    }
}

impl<P> JsonVariantCodec<Box<dyn Any + Send + Sync>, P>
where
    P: Any + Send + Sync,
{
    /// Create a codec for type-erased values carrying a `P`.
    #[must_use]
    pub const fn boxed() -> Self {
        Self::new(box_any::<P>, downcast_any::<P>)
    }
}

fn box_any<P: Any + Send + Sync>(payload: P) -> Box<dyn Any + Send + Sync> {
    Box::new(payload)
}

#[allow(clippy::borrowed_box)]
fn downcast_any<P: Any>(value: &Box<dyn Any + Send + Sync>) -> Option<&P> {
    value.downcast_ref::<P>()
}

impl<T, P> fmt::Debug for JsonVariantCodec<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JsonVariantCodec<{}, {}>",
            std::any::type_name::<T>(),
            std::any::type_name::<P>()
        )
    }
}

impl<T, P> PayloadCodec<T> for JsonVariantCodec<T, P>
where
    T: 'static,
    P: serde::Serialize + serde::de::DeserializeOwned + 'static,
{
    fn content_type(&self) -> Option<ContentType> {
        Some(ContentType::Json)
    }

    fn encode(&self, value: &T) -> Result<Bytes> {
        let payload = (self.project)(value).ok_or_else(Error::payload_mismatch::<P>)?;
        to_json(payload)
    }

    fn decode(&self, body: &[u8]) -> Result<T> {
        from_json(body).map(self.wrap)
    }

    fn payload_class(&self) -> Option<ClassKey> {
        Some(ClassKey::of::<P>())
    }

    fn payload_name(&self) -> &'static str {
        std::any::type_name::<P>()
    }
}

// ============================================================================
// Text
// ============================================================================

/// Encodes the value through `Display`, decodes through `From<String>`.
pub struct TextCodec<T>(PhantomData<fn() -> T>);

impl<T> TextCodec<T> {
    /// Create a text codec.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for TextCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for TextCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextCodec<{}>", std::any::type_name::<T>())
    }
}

impl<T> PayloadCodec<T> for TextCodec<T>
where
    T: fmt::Display + From<String> + 'static,
{
    fn content_type(&self) -> Option<ContentType> {
        Some(ContentType::PlainText)
    }

    fn encode(&self, value: &T) -> Result<Bytes> {
        Ok(Bytes::from(value.to_string()))
    }

    fn decode(&self, body: &[u8]) -> Result<T> {
        let text = String::from_utf8(body.to_vec())?;
        Ok(T::from(text))
    }

    fn payload_class(&self) -> Option<ClassKey> {
        Some(ClassKey::of::<T>())
    }

    fn payload_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

// ============================================================================
// Empty
// ============================================================================

/// Variant without a body; decoding always yields `make()`.
pub struct EmptyCodec<T> {
    make: fn() -> T,
}

impl<T> EmptyCodec<T> {
    /// Create an empty-body codec.
    #[must_use]
    pub const fn new(make: fn() -> T) -> Self {
        Self { make }
    }
}

impl<T> fmt::Debug for EmptyCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EmptyCodec<{}>", std::any::type_name::<T>())
    }
}

impl<T: 'static> PayloadCodec<T> for EmptyCodec<T> {
    fn content_type(&self) -> Option<ContentType> {
        None
    }

    fn encode(&self, _value: &T) -> Result<Bytes> {
        Ok(Bytes::new())
    }

    fn decode(&self, _body: &[u8]) -> Result<T> {
        Ok((self.make)())
    }

    fn payload_name(&self) -> &'static str {
        "()"
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct NotFound {
        resource: String,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Unauthorized {
        realm: String,
    }

    #[derive(Debug, PartialEq)]
    enum ApiError {
        NotFound(NotFound),
        Unauthorized(Unauthorized),
        Gone,
    }

    fn not_found_codec() -> JsonVariantCodec<ApiError, NotFound> {
        JsonVariantCodec::new(ApiError::NotFound, |e| match e {
            ApiError::NotFound(p) => Some(p),
            _ => None,
        })
    }

    #[test]
    fn json_variant_encodes_its_case() {
        let codec = not_found_codec();
        let value = ApiError::NotFound(NotFound {
            resource: "user".to_string(),
        });

        let body = codec.encode(&value).expect("encode");
        assert_eq!(body.as_ref(), br#"{"resource":"user"}"#);
        assert_eq!(codec.decode(&body).expect("decode"), value);
    }

    #[test]
    fn json_variant_rejects_other_cases() {
        let codec = not_found_codec();
        let value = ApiError::Unauthorized(Unauthorized {
            realm: "admin".to_string(),
        });

        let err = codec.encode(&value).expect_err("mismatch");
        assert!(matches!(err, Error::PayloadMismatch { .. }));
        assert!(err.to_string().contains("NotFound"));
    }

    #[test]
    fn json_variant_declares_payload_class() {
        let codec = not_found_codec();
        assert_eq!(codec.payload_class(), Some(ClassKey::of::<NotFound>()));
        assert_eq!(codec.content_type(), Some(ContentType::Json));
    }

    #[test]
    fn boxed_variant_codec() {
        let codec = JsonVariantCodec::<Box<dyn Any + Send + Sync>, Unauthorized>::boxed();
        let value: Box<dyn Any + Send + Sync> = Box::new(Unauthorized {
            realm: "ops".to_string(),
        });

        let body = codec.encode(&value).expect("encode");
        assert_eq!(body.as_ref(), br#"{"realm":"ops"}"#);

        let decoded = codec.decode(&body).expect("decode");
        assert_eq!(
            decoded.downcast_ref::<Unauthorized>(),
            Some(&Unauthorized {
                realm: "ops".to_string()
            })
        );
    }

    #[test]
    fn json_codec_whole_value() {
        let codec = JsonCodec::<NotFound>::new();
        let body = codec
            .encode(&NotFound {
                resource: "repo".to_string(),
            })
            .expect("encode");
        assert_eq!(body.as_ref(), br#"{"resource":"repo"}"#);
    }

    #[test]
    fn text_codec() {
        let codec = TextCodec::<String>::new();
        let body = codec.encode(&"realm1".to_string()).expect("encode");
        assert_eq!(body.as_ref(), b"realm1");
        assert_eq!(codec.decode(b"realm1").expect("decode"), "realm1");
        assert!(matches!(
            codec.decode(&[0xff, 0xfe]),
            Err(Error::InvalidText(_))
        ));
    }

    #[test]
    fn empty_codec() {
        let codec = EmptyCodec::new(|| ApiError::Gone);
        assert_eq!(codec.content_type(), None);
        assert!(codec.encode(&ApiError::Gone).expect("encode").is_empty());
        assert_eq!(codec.decode(b"ignored").expect("decode"), ApiError::Gone);
        assert_eq!(codec.payload_class(), None);
    }
}
