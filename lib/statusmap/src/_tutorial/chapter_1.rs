//! # Chapter 1: Discriminators
//!
//! Decide which variant applies to a value.
//!
//! ## Value Matchers
//!
//! A predicate over the value, the most general strategy:
//!
//! ```ignore
//! Variant::matching(401, unauthorized_codec, |e: &ApiError| {
//!     matches!(e, ApiError::Unauthorized(_))
//! })
//! ```
//!
//! ## Tags
//!
//! Derive [`MatchType`](crate::MatchType) on a tagged union and select by tag:
//!
//! ```ignore
//! #[derive(Debug, MatchType, Classify)]
//! #[match_type(rename_all = "snake_case")]
//! pub enum ApiError {
//!     NotFound(NotFound),
//!     Unauthorized(Unauthorized),
//!     Unknown(Problem),
//! }
//!
//! let codec = JsonVariantCodec::new(ApiError::NotFound, |e| match e {
//!     ApiError::NotFound(payload) => Some(payload),
//!     _ => None,
//! });
//! Variant::by_tag(404, codec, "not_found")
//! ```
//!
//! Only the outermost tag is inspected. Use a value matcher to look inside
//! nested unions.
//!
//! ## Classes
//!
//! Derive [`Classify`](crate::Classify) and let the codec's payload type
//! select the variant:
//!
//! ```ignore
//! // Matches values whose runtime class is `NotFound`
//! Variant::by_class(404, codec)
//! ```
//!
//! Two class-based variants whose payload types only differ by generic
//! arguments, like `Vec<NotFound>` and `Vec<Unauthorized>`, are rejected with
//! [`ConfigError::ErasedClassConflict`](crate::ConfigError::ErasedClassConflict):
//!
//! ```ignore
//! let config = DispatchConfig::builder()
//!     .erasure_policy(ErasurePolicy::Warn) // log a warning instead
//!     .build()?;
//! let builder = Registry::error_builder().with_config(config);
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 2: Endpoints & Middleware][super::chapter_2] - Both branches, client and server
