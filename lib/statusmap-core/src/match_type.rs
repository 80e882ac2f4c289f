//! Structural description of tagged unions.

/// A tagged union whose active case can be read as a tag.
///
/// This is automatically implemented by the `#[derive(MatchType)]` macro.
/// Only the outermost tag is described: a case that itself holds a tagged
/// union reports its own tag, never the nested one.
///
/// # Example
///
/// ```ignore
/// use statusmap::MatchType;
///
/// #[derive(MatchType)]
/// #[match_type(rename_all = "snake_case")]
/// enum ApiError {
///     NotFound(NotFound),
///     Unauthorized { realm: String },
///     #[match_type(rename = "teapot")]
///     ImATeapot,
/// }
///
/// assert_eq!(ApiError::TAGS, &["not_found", "unauthorized", "teapot"]);
/// ```
pub trait MatchType {
    /// Every tag of the union, in declaration order.
    const TAGS: &'static [&'static str];

    /// Tag of the active case.
    fn tag(&self) -> &'static str;

    /// Returns `true` if `tag` is one of [`Self::TAGS`].
    #[must_use]
    fn declares(tag: &str) -> bool {
        Self::TAGS.contains(&tag)
    }
}
