//! The variant registry.
//!
//! A [`RegistryBuilder`] accumulates variants while an endpoint is being
//! defined; [`RegistryBuilder::build`] freezes them into a [`Registry`] that
//! is shared read-only by every request handled for that endpoint.
//!
//! # Example
//!
//! ```ignore
//! let errors = Registry::error_builder()
//!     .add_variant(Variant::by_tag(404, not_found, "NotFound"))?
//!     .add_variant(Variant::by_tag(401, unauthorized, "Unauthorized"))?
//!     .add_default(DefaultVariant::new(JsonCodec::new()))?
//!     .build();
//!
//! let response = errors.encode(&ApiError::Unauthorized(realm))?;
//! assert_eq!(response.status(), 401);
//! ```

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::config::validate_status;
use crate::{
    Branch, ConfigError, DefaultVariant, DispatchConfig, Error, ErasurePolicy, PayloadCodec,
    Response, Result, StatusDoc, StatusDocs, Variant,
};

// ============================================================================
// Selection
// ============================================================================

/// Position of a selected entry in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Explicit variant, by registration index.
    Variant(usize),
    /// The default variant.
    Default,
}

/// Outcome of a variant selection.
pub struct Selected<'a, T> {
    status: u16,
    slot: Slot,
    codec: &'a dyn PayloadCodec<T>,
    description: Option<&'a str>,
}

impl<'a, T> Selected<'a, T> {
    /// Status code: the variant's own, the branch default, or the observed one.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Selected entry.
    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.slot
    }

    /// Returns `true` if the default variant was selected.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self.slot, Slot::Default)
    }

    /// Codec of the selected entry.
    #[must_use]
    pub fn codec(&self) -> &'a dyn PayloadCodec<T> {
        self.codec
    }

    /// Description of the selected entry.
    #[must_use]
    pub const fn description(&self) -> Option<&'a str> {
        self.description
    }
}

impl<T> fmt::Debug for Selected<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selected")
            .field("status", &self.status)
            .field("slot", &self.slot)
            .field("payload", &self.codec.payload_name())
            .finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Accumulates variants before freezing them into a [`Registry`].
pub struct RegistryBuilder<T> {
    branch: Branch,
    config: DispatchConfig,
    variants: Vec<Variant<T>>,
    default: Option<DefaultVariant<T>>,
}

impl<T: 'static> RegistryBuilder<T> {
    /// Create an empty builder for `branch`.
    #[must_use]
    pub fn new(branch: Branch) -> Self {
        Self {
            branch,
            config: DispatchConfig::default(),
            variants: Vec::new(),
            default: None,
        }
    }

    /// Replace the dispatch configuration.
    #[must_use]
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Append a variant.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidStatusCode`] if the status lies outside `100..=599`
    /// - [`ConfigError::MissingPayloadClass`] for a class-based variant whose
    ///   codec has no payload class
    /// - [`ConfigError::UnknownTag`] for a tag the union does not declare
    /// - [`ConfigError::ErasedClassConflict`] if a class-based variant erases
    ///   to the same class as an earlier one (unless the policy is
    ///   [`ErasurePolicy::Warn`])
    pub fn add_variant(mut self, variant: Variant<T>) -> std::result::Result<Self, ConfigError> {
        validate_status(variant.status)?;
        variant.discriminator.validate(variant.status)?;
        self.check_erasure(&variant)?;
        self.variants.push(variant);
        Ok(self)
    }

    /// Register the default variant.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::DuplicateDefault`] if a default is already registered
    /// - [`ConfigError::InvalidStatusCode`] if its explicit status lies outside `100..=599`
    pub fn add_default(
        mut self,
        default: DefaultVariant<T>,
    ) -> std::result::Result<Self, ConfigError> {
        if self.default.is_some() {
            return Err(ConfigError::DuplicateDefault);
        }
        if let Some(status) = default.status {
            validate_status(status)?;
        }
        self.default = Some(default);
        Ok(self)
    }

    /// Freeze the registry.
    #[must_use]
    pub fn build(self) -> Registry<T> {
        Registry {
            inner: Arc::new(Inner {
                branch: self.branch,
                fallback_status: self.config.default_status(self.branch),
                variants: self.variants,
                default: self.default,
            }),
        }
    }

    fn check_erasure(&self, variant: &Variant<T>) -> std::result::Result<(), ConfigError> {
        let Some(class) = variant.discriminator.class_key() else {
            return Ok(());
        };

        let conflicting = self
            .variants
            .iter()
            .filter_map(|existing| existing.discriminator.class_key())
            .find(|existing| existing.is_ambiguous_with(&class));

        match (conflicting, self.config.erasure_policy) {
            (None, _) => Ok(()),
            (Some(first), ErasurePolicy::Reject) => Err(ConfigError::ErasedClassConflict {
                first: first.type_name(),
                second: class.type_name(),
                erased: class.erased_name(),
            }),
            (Some(first), ErasurePolicy::Warn) => {
                warn!(
                    first = first.type_name(),
                    second = class.type_name(),
                    erased = %class.erased_name(),
                    status = variant.status,
                    "class-based variants share an erased class; \
                     prefer a value matcher or a MatchType tag"
                );
                Ok(())
            }
        }
    }
}

impl<T> fmt::Debug for RegistryBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryBuilder")
            .field("branch", &self.branch)
            .field("config", &self.config)
            .field("variants", &self.variants)
            .field("default", &self.default)
            .finish()
    }
}

// ============================================================================
// Registry
// ============================================================================

struct Inner<T> {
    branch: Branch,
    fallback_status: u16,
    variants: Vec<Variant<T>>,
    default: Option<DefaultVariant<T>>,
}

/// Frozen, ordered table of status-coded variants.
///
/// Cloning is cheap and every operation is a pure lookup, so a registry can
/// be shared by any number of concurrent requests.
pub struct Registry<T> {
    inner: Arc<Inner<T>>,
}

impl<T: 'static> Registry<T> {
    /// Builder for a registry of normal outputs.
    #[must_use]
    pub fn builder() -> RegistryBuilder<T> {
        RegistryBuilder::new(Branch::Output)
    }

    /// Builder for a registry of error outputs.
    #[must_use]
    pub fn error_builder() -> RegistryBuilder<T> {
        RegistryBuilder::new(Branch::Error)
    }
}

impl<T> Registry<T> {
    /// Branch described by this registry.
    #[must_use]
    pub fn branch(&self) -> Branch {
        self.inner.branch
    }

    /// Explicit variants, in registration order.
    #[must_use]
    pub fn variants(&self) -> &[Variant<T>] {
        &self.inner.variants
    }

    /// The default variant, if any.
    #[must_use]
    pub fn default_variant(&self) -> Option<&DefaultVariant<T>> {
        self.inner.default.as_ref()
    }

    /// Returns `true` if a default variant is registered.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.inner.default.is_some()
    }

    /// Returns `true` if an explicit variant carries `status`.
    #[must_use]
    pub fn has_explicit(&self, status: u16) -> bool {
        self.inner.variants.iter().any(|v| v.status == status)
    }

    /// Pick the variant a value is encoded with.
    ///
    /// Variants are tried in registration order; the first whose
    /// discriminator matches wins, then the default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoMatchingVariant`] if nothing matches and no default exists.
    pub fn select_for_encode(&self, value: &T) -> Result<Selected<'_, T>> {
        if let Some((index, variant)) = self
            .inner
            .variants
            .iter()
            .enumerate()
            .find(|(_, variant)| variant.matches(value))
        {
            return Ok(Selected {
                status: variant.status,
                slot: Slot::Variant(index),
                codec: variant.codec.as_ref(),
                description: variant.description.as_deref(),
            });
        }

        let default = self
            .inner
            .default
            .as_ref()
            .ok_or_else(Error::no_matching_variant::<T>)?;
        let status = default.status.unwrap_or(self.inner.fallback_status);
        debug!(status, branch = %self.inner.branch, "no variant matched, using default");
        Ok(Selected {
            status,
            slot: Slot::Default,
            codec: default.codec.as_ref(),
            description: default.description.as_deref(),
        })
    }

    /// Pick the variant a body observed with `status` is decoded with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStatusCode`] if `status` is unmapped and no
    /// default exists. The error carries an empty body; use
    /// [`Registry::decode`] to keep the raw body.
    pub fn select_for_decode(&self, status: u16) -> Result<Selected<'_, T>> {
        self.lookup(status)
            .ok_or_else(|| Error::unknown_status(status, Bytes::new()))
    }

    /// Encode `value` into a response.
    ///
    /// # Errors
    ///
    /// Returns an error if no variant applies or the codec fails.
    pub fn encode(&self, value: &T) -> Result<Response<Bytes>> {
        let selected = self.select_for_encode(value)?;
        let body = selected.codec.encode(value)?;
        let content_type = selected.codec.content_type();
        Ok(Response::with_content_type(
            selected.status,
            content_type.as_ref().map(|c| c.as_str()),
            body,
        ))
    }

    /// Decode a body received with `status`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStatusCode`] (carrying `status` and `body`) if
    /// the status is unmapped and no default exists, or the codec's error if
    /// the body is malformed.
    pub fn decode(&self, status: u16, body: Bytes) -> Result<T> {
        match self.lookup(status) {
            Some(selected) => selected.codec.decode(&body),
            None => Err(Error::unknown_status(status, body)),
        }
    }

    /// Decode a response.
    ///
    /// # Errors
    ///
    /// See [`Registry::decode`].
    pub fn decode_response(&self, response: Response<Bytes>) -> Result<T> {
        let (status, _, body) = response.into_parts();
        self.decode(status, body)
    }

    /// Document every variant, default last.
    #[must_use]
    pub fn describe(&self) -> StatusDocs {
        let explicit = self.inner.variants.iter().map(|variant| StatusDoc {
            status: Some(variant.status),
            description: variant
                .description
                .clone()
                .or_else(|| StatusDoc::reason(Some(variant.status))),
            content_type: variant.codec.content_type(),
            payload: variant.codec.payload_name(),
            kind: Some(variant.discriminator.kind()),
            is_default: false,
        });
        let default = self.inner.default.iter().map(|default| StatusDoc {
            status: default.status,
            description: default
                .description
                .clone()
                .or_else(|| StatusDoc::reason(default.status)),
            content_type: default.codec.content_type(),
            payload: default.codec.payload_name(),
            kind: None,
            is_default: true,
        });
        StatusDocs(explicit.chain(default).collect())
    }

    fn lookup(&self, status: u16) -> Option<Selected<'_, T>> {
        if let Some((index, variant)) = self
            .inner
            .variants
            .iter()
            .enumerate()
            .find(|(_, variant)| variant.status == status)
        {
            return Some(Selected {
                status,
                slot: Slot::Variant(index),
                codec: variant.codec.as_ref(),
                description: variant.description.as_deref(),
            });
        }

        self.inner.default.as_ref().map(|default| {
            debug!(status, branch = %self.inner.branch, "unmapped status, using default");
            Selected {
                status,
                slot: Slot::Default,
                codec: default.codec.as_ref(),
                description: default.description.as_deref(),
            }
        })
    }
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("branch", &self.inner.branch)
            .field("fallback_status", &self.inner.fallback_status)
            .field("variants", &self.inner.variants)
            .field("default", &self.inner.default)
            .finish()
    }
}
