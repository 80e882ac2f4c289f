//! Error types for statusmap.
//!
//! Two families are kept apart:
//! - [`ConfigError`] is raised while a registry is being built. It is fatal at
//!   startup and never surfaces while serving requests.
//! - [`Error`] is raised by dispatch: selecting a variant, encoding a value or
//!   decoding a body.

use bytes::Bytes;
use derive_more::{Display, Error, From};

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while building a [`crate::Registry`] or a [`crate::DispatchConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Status code outside of `100..=599`.
    #[display("invalid status code {_0}: expected a value in 100..=599")]
    InvalidStatusCode(#[error(not(source))] u16),

    /// A default variant was registered twice.
    #[display("a default variant is already registered")]
    DuplicateDefault,

    /// Two class-based variants share the same erased runtime class.
    #[display(
        "class-based variants for `{first}` and `{second}` both erase to `{erased}`; \
         use a value matcher or a MatchType tag to tell them apart"
    )]
    ErasedClassConflict {
        /// Payload type of the variant registered first.
        first: &'static str,
        /// Payload type of the rejected variant.
        second: &'static str,
        /// Runtime class both payload types erase to.
        erased: String,
    },

    /// Class-based variant whose codec does not declare a payload class.
    #[display("class-based variant for status {status} needs a codec with a payload class")]
    MissingPayloadClass {
        /// Status code of the rejected variant.
        status: u16,
    },

    /// Match-type tag that the tagged union does not declare.
    #[display("unknown tag `{tag}` for `{union}`, expected one of {known:?}")]
    UnknownTag {
        /// Requested tag.
        tag: &'static str,
        /// Tagged union type name.
        union: &'static str,
        /// Tags declared by the union.
        known: &'static [&'static str],
    },
}

// ============================================================================
// Dispatch Errors
// ============================================================================

/// Main error type for dispatch operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// No discriminator matched the value and no default is registered.
    ///
    /// This is a programming error in the endpoint definition.
    #[display("no variant matches a value of `{type_name}` and no default is registered")]
    #[from(skip)]
    NoMatchingVariant {
        /// Type of the value being encoded.
        type_name: &'static str,
    },

    /// Observed status code is not mapped and no default is registered.
    #[display("unknown status code {status}")]
    #[from(skip)]
    UnknownStatusCode {
        /// Observed HTTP status code.
        status: u16,
        /// Raw response body, kept for diagnostics.
        #[error(not(source))]
        body: Bytes,
    },

    /// The selected codec cannot encode the value it was handed.
    #[display("value does not carry a `{payload}` payload")]
    #[from(skip)]
    PayloadMismatch {
        /// Payload type the codec expects.
        payload: &'static str,
    },

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "user.address.city").
        path: String,
        /// Error message.
        message: String,
    },

    /// Text payload is not valid UTF-8.
    #[display("invalid text payload: {_0}")]
    #[from]
    InvalidText(std::string::FromUtf8Error),

    /// Invalid registry configuration.
    #[display("invalid configuration: {_0}")]
    #[from]
    Config(ConfigError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a no-matching-variant error for the type `T`.
    #[must_use]
    pub fn no_matching_variant<T: ?Sized>() -> Self {
        Self::NoMatchingVariant {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create an unknown status code error carrying the raw body.
    #[must_use]
    pub fn unknown_status(status: u16, body: Bytes) -> Self {
        Self::UnknownStatusCode { status, body }
    }

    /// Create a payload mismatch error for the payload type `P`.
    #[must_use]
    pub fn payload_mismatch<P: ?Sized>() -> Self {
        Self::PayloadMismatch {
            payload: std::any::type_name::<P>(),
        }
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if no variant matched on the encode path.
    #[must_use]
    pub const fn is_no_matching_variant(&self) -> bool {
        matches!(self, Self::NoMatchingVariant { .. })
    }

    /// Returns `true` if the observed status code was not mapped.
    #[must_use]
    pub const fn is_unknown_status(&self) -> bool {
        matches!(self, Self::UnknownStatusCode { .. })
    }

    /// Returns the observed status code if this is an unknown status error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnknownStatusCode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the raw body if this is an unknown status error.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Self::UnknownStatusCode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Try to decode the raw body of an unknown status error as JSON.
    ///
    /// Returns `None` if this is not an unknown status error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// match registry.decode(status, body) {
    ///     Ok(value) => handle(value),
    ///     Err(e) => {
    ///         if let Some(Ok(raw)) = e.decode_body::<serde_json::Value>() {
    ///             tracing::warn!(%raw, "unmapped response");
    ///         }
    ///     }
    /// }
    /// ```
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidStatusCode(99);
        assert_eq!(
            err.to_string(),
            "invalid status code 99: expected a value in 100..=599"
        );

        let err = ConfigError::DuplicateDefault;
        assert_eq!(err.to_string(), "a default variant is already registered");

        let err = ConfigError::MissingPayloadClass { status: 404 };
        assert_eq!(
            err.to_string(),
            "class-based variant for status 404 needs a codec with a payload class"
        );
    }

    #[test]
    fn error_display() {
        let err = Error::unknown_status(502, Bytes::new());
        assert_eq!(err.to_string(), "unknown status code 502");

        let err = Error::no_matching_variant::<u32>();
        assert_eq!(
            err.to_string(),
            "no variant matches a value of `u32` and no default is registered"
        );

        let err = Error::json_deserialization("user.address.city", "missing field `city`");
        assert_eq!(
            err.to_string(),
            "JSON deserialization error at 'user.address.city': missing field `city`"
        );
    }

    #[test]
    fn error_predicates() {
        let err = Error::unknown_status(418, Bytes::from_static(b"teapot"));
        assert!(err.is_unknown_status());
        assert!(!err.is_no_matching_variant());
        assert_eq!(err.status(), Some(418));
        assert_eq!(err.body(), Some(&Bytes::from_static(b"teapot")));

        let err = Error::no_matching_variant::<String>();
        assert!(err.is_no_matching_variant());
        assert_eq!(err.status(), None);
        assert!(err.body().is_none());
    }

    #[test]
    fn error_from_config() {
        let err = Error::from(ConfigError::DuplicateDefault);
        assert!(matches!(err, Error::Config(ConfigError::DuplicateDefault)));
    }

    #[test]
    fn error_decode_body() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Problem {
            detail: String,
        }

        let body = Bytes::from(r#"{"detail": "upstream down"}"#);
        let err = Error::unknown_status(503, body);

        let decoded = err.decode_body::<Problem>().expect("should have body");
        assert_eq!(
            decoded.expect("should decode"),
            Problem {
                detail: "upstream down".to_string()
            }
        );

        assert!(
            Error::no_matching_variant::<u8>()
                .decode_body::<Problem>()
                .is_none()
        );
    }
}
