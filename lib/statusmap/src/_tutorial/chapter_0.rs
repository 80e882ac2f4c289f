//! # Chapter 0: Getting Started
//!
//! Your first status-coded registry in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Register variants with [`Registry::error_builder`](crate::Registry::error_builder)
//! - Add a default variant
//! - Encode a value and decode a body
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! statusmap = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ## Your First Registry
//!
//! ```ignore
//! use statusmap::prelude::*;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! pub struct Problem {
//!     pub code: String,
//!     pub detail: String,
//! }
//!
//! let errors = Registry::error_builder()
//!     .add_variant(
//!         Variant::matching(404, JsonCodec::new(), |p: &Problem| p.code == "not_found")
//!             .description("Resource does not exist"),
//!     )?
//!     .add_default(DefaultVariant::new(JsonCodec::new()))?
//!     .build();
//!
//! // Server side: the first matching variant decides the status
//! let response = errors.encode(&Problem {
//!     code: "not_found".into(),
//!     detail: "no user 42".into(),
//! })?;
//! assert_eq!(response.status(), 404);
//! assert_eq!(response.content_type(), Some("application/json"));
//!
//! // Client side: the observed status decides the decoder
//! let problem: Problem = errors.decode(503, response.into_body())?;
//! ```
//!
//! ## How Selection Works
//!
//! ```text
//! encode(value)                     decode(status, body)
//!   first variant whose               variant registered for status
//!   discriminator matches               else default variant
//!     else default variant                else UnknownStatusCode
//!       else NoMatchingVariant
//! ```
//!
//! - Variants are tried in registration order, the first match wins
//! - A default variant without an explicit status uses `400` for errors and
//!   `200` for outputs
//! - Status codes outside `100..=599` are rejected when the registry is built
//!
//! ## Next Steps
//!
//! - [Chapter 1: Discriminators][super::chapter_1] - Matchers, tags, and classes
