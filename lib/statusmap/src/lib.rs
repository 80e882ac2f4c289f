//! Status-coded variant dispatch for typed HTTP endpoints.
//!
//! Map the variants of an output or error type to HTTP status codes, pick
//! the variant for a value when responding, and pick the decoder for an
//! observed status when reading a response.
//!
//! # Example
//!
//! ```ignore
//! use statusmap::prelude::*;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! pub struct NotFound {
//!     id: u64,
//! }
//!
//! #[derive(Debug, MatchType, Classify)]
//! pub enum ApiError {
//!     NotFound(NotFound),
//!     Unknown(Problem),
//! }
//!
//! let errors = Registry::error_builder()
//!     .add_variant(Variant::by_tag(
//!         404,
//!         JsonVariantCodec::new(ApiError::NotFound, |e| match e {
//!             ApiError::NotFound(payload) => Some(payload),
//!             _ => None,
//!         }),
//!         "NotFound",
//!     ))?
//!     .add_default(DefaultVariant::new(unknown_codec))?
//!     .build();
//!
//! let response = errors.encode(&ApiError::NotFound(NotFound { id: 42 }))?;
//! assert_eq!(response.status(), 404);
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
pub mod middleware;
pub mod prelude;

// Re-export tower for middleware composition
pub use tower;

// Re-export core types
pub use statusmap_core::{
    Branch, ClassKey, Classify, ConfigError, ContentType, DefaultVariant, DispatchConfig,
    DispatchConfigBuilder, Discriminator, DiscriminatorKind, EmptyCodec, Endpoint, ErasurePolicy,
    Error, JsonCodec, JsonVariantCodec, MatchType, PayloadCodec, Registry, RegistryBuilder,
    Response, Result, Selected, Slot, StatusDoc, StatusDocs, TextCodec, VALID_STATUS, Variant,
    from_json, to_json, validate_status,
};

// Re-export http types for status codes and headers
pub use statusmap_core::{StatusCode, header};

// Re-export macros
pub use statusmap_macro::{Classify, MatchType};
