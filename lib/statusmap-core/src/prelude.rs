//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use statusmap_core::prelude::*;
//! ```

pub use crate::{
    Classify, ConfigError, ContentType, DefaultVariant, Discriminator, EmptyCodec, Endpoint,
    Error, JsonCodec, JsonVariantCodec, MatchType, PayloadCodec, Registry, Response, Result,
    TextCodec, Variant, from_json, to_json,
};
