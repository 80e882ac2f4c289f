//! Core types for statusmap status-coded response dispatch.
//!
//! This crate provides the foundational types used by statusmap:
//! - [`Registry`] and [`RegistryBuilder`] - Frozen table of status-coded variants
//! - [`Variant`] and [`DefaultVariant`] - Entries of a registry
//! - [`Discriminator`] - Class-based, value-matcher, and match-type strategies
//! - [`PayloadCodec`] - Payload encoding, with JSON, text, and empty codecs
//! - [`Endpoint`] - Output and error registries of one endpoint
//! - [`StatusDocs`] - Read-only introspection for documentation
//! - [`Error`], [`ConfigError`] and [`Result`] - Error handling
//! - [`DispatchConfig`] - Default status policy and erasure handling
//! - [`Response`] - Response value handed to the HTTP layer
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)

mod body;
mod class;
mod codec;
mod config;
mod discriminator;
mod doc;
mod endpoint;
mod error;
mod match_type;
pub mod prelude;
mod registry;
mod response;
mod variant;

pub use body::{ContentType, from_json, to_json};
pub use class::{ClassKey, Classify};
pub use codec::{EmptyCodec, JsonCodec, JsonVariantCodec, PayloadCodec, TextCodec};
pub use config::{
    Branch, DispatchConfig, DispatchConfigBuilder, ErasurePolicy, VALID_STATUS, validate_status,
};
pub use discriminator::{Discriminator, DiscriminatorKind};
pub use doc::{StatusDoc, StatusDocs};
pub use endpoint::Endpoint;
pub use error::{ConfigError, Error, Result};
pub use match_type::MatchType;
pub use registry::{Registry, RegistryBuilder, Selected, Slot};
pub use response::Response;
pub use variant::{DefaultVariant, Variant};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
