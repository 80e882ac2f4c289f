//! Variants: one status code, one payload codec, one discriminator.

use std::fmt;
use std::sync::Arc;

use crate::{Classify, Discriminator, MatchType, PayloadCodec};

/// A status-coded response variant.
///
/// # Example
///
/// ```ignore
/// let not_found = Variant::by_tag(404, not_found_codec, "NotFound")
///     .description("Resource does not exist");
/// let unauthorized = Variant::matching(401, unauthorized_codec, |e| {
///     matches!(e, ApiError::Unauthorized(_))
/// });
/// ```
pub struct Variant<T> {
    pub(crate) status: u16,
    pub(crate) codec: Arc<dyn PayloadCodec<T>>,
    pub(crate) discriminator: Discriminator<T>,
    pub(crate) description: Option<String>,
}

impl<T: 'static> Variant<T> {
    /// Variant selected by an explicit discriminator.
    pub fn new<C>(status: u16, codec: C, discriminator: Discriminator<T>) -> Self
    where
        C: PayloadCodec<T> + 'static,
    {
        Self {
            status,
            codec: Arc::new(codec),
            discriminator,
            description: None,
        }
    }

    /// Variant selected by a hand-written value matcher.
    pub fn matching<C, F>(status: u16, codec: C, predicate: F) -> Self
    where
        C: PayloadCodec<T> + 'static,
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(status, codec, Discriminator::matcher(predicate))
    }

    /// Variant selected by the tag of a [`MatchType`] union.
    pub fn by_tag<C>(status: u16, codec: C, tag: &'static str) -> Self
    where
        C: PayloadCodec<T> + 'static,
        T: MatchType,
    {
        Self::new(status, codec, Discriminator::tag(tag))
    }

    /// Variant selected by the runtime class of the codec's payload.
    pub fn by_class<C>(status: u16, codec: C) -> Self
    where
        C: PayloadCodec<T> + 'static,
        T: Classify,
    {
        let class = codec.payload_class();
        Self::new(status, codec, Discriminator::class(class))
    }
}

impl<T> Variant<T> {
    /// Attach a human-readable description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Status code of the variant.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Payload codec of the variant.
    #[must_use]
    pub fn codec(&self) -> &dyn PayloadCodec<T> {
        self.codec.as_ref()
    }

    /// Discriminator of the variant.
    #[must_use]
    pub const fn discriminator(&self) -> &Discriminator<T> {
        &self.discriminator
    }

    /// Returns `true` if `value` belongs to this variant.
    pub fn matches(&self, value: &T) -> bool {
        self.discriminator.matches(value)
    }
}

impl<T> Clone for Variant<T> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            codec: Arc::clone(&self.codec),
            discriminator: self.discriminator.clone(),
            description: self.description.clone(),
        }
    }
}

impl<T> fmt::Debug for Variant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant")
            .field("status", &self.status)
            .field("payload", &self.codec.payload_name())
            .field("discriminator", &self.discriminator)
            .field("description", &self.description)
            .finish()
    }
}

/// Catch-all variant, used when no other variant applies.
///
/// Without an explicit status the registry's branch policy provides one
/// on encode (200 for outputs, 400 for errors by default).
pub struct DefaultVariant<T> {
    pub(crate) status: Option<u16>,
    pub(crate) codec: Arc<dyn PayloadCodec<T>>,
    pub(crate) description: Option<String>,
}

impl<T: 'static> DefaultVariant<T> {
    /// Default variant without an explicit status code.
    pub fn new<C>(codec: C) -> Self
    where
        C: PayloadCodec<T> + 'static,
    {
        Self {
            status: None,
            codec: Arc::new(codec),
            description: None,
        }
    }

    /// Default variant with an explicit status code.
    pub fn with_status<C>(status: u16, codec: C) -> Self
    where
        C: PayloadCodec<T> + 'static,
    {
        Self {
            status: Some(status),
            ..Self::new(codec)
        }
    }
}

impl<T> DefaultVariant<T> {
    /// Attach a human-readable description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Explicit status code, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Payload codec of the default variant.
    #[must_use]
    pub fn codec(&self) -> &dyn PayloadCodec<T> {
        self.codec.as_ref()
    }
}

impl<T> Clone for DefaultVariant<T> {
    fn clone(&self) -> Self {
        Self {
            status: self.status,
            codec: Arc::clone(&self.codec),
            description: self.description.clone(),
        }
    }
}

impl<T> fmt::Debug for DefaultVariant<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultVariant")
            .field("status", &self.status)
            .field("payload", &self.codec.payload_name())
            .field("description", &self.description)
            .finish()
    }
}
