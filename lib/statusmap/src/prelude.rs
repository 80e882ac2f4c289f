//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, functions, and macros
//! for easy glob importing:
//!
//! ```ignore
//! use statusmap::prelude::*;
//! ```

pub use crate::{
    Classify, ConfigError, ContentType, DefaultVariant, DispatchConfig, Discriminator, EmptyCodec,
    Endpoint, ErasurePolicy, Error, JsonCodec, JsonVariantCodec, MatchType, PayloadCodec,
    Registry, Response, Result, StatusCode, TextCodec, Variant, from_json, to_json,
};
pub use crate::middleware::{DispatchLayer, RespondLayer};
pub use serde::{Deserialize, Serialize};
