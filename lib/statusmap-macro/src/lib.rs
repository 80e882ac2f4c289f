//! Procedural macros for statusmap status-coded variant dispatch.
//!
//! This crate provides the derive macros used by discriminators:
//! - `#[derive(MatchType)]` - Derive the tag set of a tagged union
//! - `#[derive(Classify)]` - Derive the runtime class reported by each variant
//!
//! # Example
//!
//! ```ignore
//! use statusmap::prelude::*;
//!
//! #[derive(Debug, Serialize, Deserialize, MatchType, Classify)]
//! #[match_type(rename_all = "snake_case")]
//! enum ApiError {
//!     NotFound(NotFound),
//!     Unauthorized(Unauthorized),
//! }
//!
//! let errors = Registry::error_builder()
//!     .add_variant(Variant::by_tag(404, JsonCodec::new(), "not_found"))?
//!     .add_variant(Variant::by_tag(401, JsonCodec::new(), "unauthorized"))?
//!     .build();
//! ```

mod classify_derive;
mod match_type_derive;
mod rename;

use proc_macro::TokenStream;

/// Derive the `MatchType` trait for an enum.
///
/// Every variant gets a tag, used by `Discriminator::tag` to select a
/// variant without writing a predicate. Only the outermost enum is tagged:
/// a variant wrapping another tagged union reports its own tag.
///
/// # Enum Attributes
///
/// - `#[match_type(rename_all = "snake_case")]` - Rename all tags using a case convention
///
/// Supported case conventions:
/// - `lowercase`, `UPPERCASE`
/// - `camelCase`, `PascalCase`
/// - `snake_case`, `SCREAMING_SNAKE_CASE`
/// - `kebab-case`, `SCREAMING-KEBAB-CASE`
///
/// # Variant Attributes
///
/// - `#[match_type(rename = "name")]` - Use an explicit tag (overrides `rename_all`)
///
/// # Example
///
/// ```ignore
/// use statusmap::MatchType;
///
/// #[derive(MatchType)]
/// #[match_type(rename_all = "kebab-case")]
/// enum ApiError {
///     NotFound(NotFound),         // tag "not-found"
///     #[match_type(rename = "auth")]
///     Unauthorized(Unauthorized), // tag "auth"
///     Teapot,                     // tag "teapot"
/// }
/// ```
#[proc_macro_derive(MatchType, attributes(match_type))]
pub fn derive_match_type(input: TokenStream) -> TokenStream {
    match_type_derive::expand_match_type_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derive the `Classify` trait for an enum.
///
/// A newtype variant reports the class of its payload, any other variant
/// reports the enum itself. Class-based discriminators compare that class
/// with the payload class of their codec.
///
/// # Example
///
/// ```ignore
/// use statusmap::Classify;
///
/// #[derive(Classify)]
/// enum ApiError {
///     NotFound(NotFound),  // runtime class `NotFound`
///     Teapot,              // runtime class `ApiError`
/// }
/// ```
#[proc_macro_derive(Classify)]
pub fn derive_classify(input: TokenStream) -> TokenStream {
    classify_derive::expand_classify_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
