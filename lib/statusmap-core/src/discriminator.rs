//! Discriminators decide whether a value belongs to a variant.
//!
//! Three interchangeable strategies exist, one per variant:
//! - class-based: the runtime type of the value's payload
//! - value-matcher: a hand-written predicate over the value
//! - match-type-derived: the tag of a [`MatchType`] union

use std::fmt;
use std::sync::Arc;

use derive_more::Display;

use crate::{ClassKey, Classify, ConfigError, MatchType};

type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Discriminator strategy, for introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DiscriminatorKind {
    /// Runtime type check against the codec's payload class.
    #[display("class")]
    Class,
    /// Hand-written predicate.
    #[display("matcher")]
    Matcher,
    /// Predicate derived from a [`MatchType`] tag.
    #[display("tag")]
    Tag,
}

#[derive(Debug, Clone, Copy)]
enum Strategy {
    Class(Option<ClassKey>),
    Matcher,
    Tag {
        tag: &'static str,
        union: &'static str,
        known: &'static [&'static str],
    },
}

/// Predicate deciding whether a value of `T` belongs to a variant.
pub struct Discriminator<T> {
    strategy: Strategy,
    predicate: Predicate<T>,
}

impl<T: 'static> Discriminator<T> {
    /// Hand-written value matcher.
    pub fn matcher<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            strategy: Strategy::Matcher,
            predicate: Arc::new(predicate),
        }
    }

    /// Matcher derived from the tag of a [`MatchType`] union.
    ///
    /// Behaves exactly like `matches!(value, T::Case { .. })` for the case
    /// whose tag is `tag`.
    pub fn tag(tag: &'static str) -> Self
    where
        T: MatchType,
    {
        Self {
            strategy: Strategy::Tag {
                tag,
                union: std::any::type_name::<T>(),
                known: T::TAGS,
            },
            predicate: Arc::new(move |value: &T| value.tag() == tag),
        }
    }

    /// Runtime type check against `class`.
    ///
    /// Without a class nothing matches; registries reject such variants.
    pub fn class(class: Option<ClassKey>) -> Self
    where
        T: Classify,
    {
        let predicate: Predicate<T> = match class {
            Some(key) => Arc::new(move |value: &T| key.is_instance(value.runtime_class())),
            None => Arc::new(|_: &T| false),
        };
        Self {
            strategy: Strategy::Class(class),
            predicate,
        }
    }
}

impl<T> Discriminator<T> {
    /// Returns `true` if `value` belongs to the variant.
    pub fn matches(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Strategy of this discriminator.
    #[must_use]
    pub const fn kind(&self) -> DiscriminatorKind {
        match self.strategy {
            Strategy::Class(_) => DiscriminatorKind::Class,
            Strategy::Matcher => DiscriminatorKind::Matcher,
            Strategy::Tag { .. } => DiscriminatorKind::Tag,
        }
    }

    /// Payload class checked by a class-based discriminator.
    #[must_use]
    pub const fn class_key(&self) -> Option<ClassKey> {
        match self.strategy {
            Strategy::Class(class) => class,
            _ => None,
        }
    }

    /// Tag matched by a match-type-derived discriminator.
    #[must_use]
    pub const fn tag_name(&self) -> Option<&'static str> {
        match self.strategy {
            Strategy::Tag { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub(crate) fn validate(&self, status: u16) -> Result<(), ConfigError> {
        match self.strategy {
            Strategy::Class(None) => Err(ConfigError::MissingPayloadClass { status }),
            Strategy::Tag { tag, union, known } if !known.contains(&tag) => {
                Err(ConfigError::UnknownTag { tag, union, known })
            }
            _ => Ok(()),
        }
    }
}

impl<T> Clone for Discriminator<T> {
    fn clone(&self) -> Self {
        Self {
            strategy: self.strategy,
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Discriminator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Discriminator")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;

    #[derive(Debug)]
    enum Outcome {
        NotFound(u32),
        Unauthorized(String),
    }

    impl MatchType for Outcome {
        const TAGS: &'static [&'static str] = &["NotFound", "Unauthorized"];

        fn tag(&self) -> &'static str {
            match self {
                Self::NotFound(_) => "NotFound",
                Self::Unauthorized(_) => "Unauthorized",
            }
        }
    }

    impl Classify for Outcome {
        fn runtime_class(&self) -> &dyn Any {
            match self {
                Self::NotFound(inner) => inner as &dyn Any,
                Self::Unauthorized(inner) => inner as &dyn Any,
            }
        }
    }

    #[test]
    fn matcher_uses_predicate() {
        let disc = Discriminator::matcher(|o: &Outcome| matches!(o, Outcome::NotFound(_)));
        assert!(disc.matches(&Outcome::NotFound(1)));
        assert!(!disc.matches(&Outcome::Unauthorized("r".to_string())));
        assert_eq!(disc.kind(), DiscriminatorKind::Matcher);
    }

    #[test]
    fn tag_agrees_with_hand_written_matcher() {
        let derived = Discriminator::<Outcome>::tag("Unauthorized");
        let manual = Discriminator::matcher(|o: &Outcome| matches!(o, Outcome::Unauthorized(_)));

        for value in [Outcome::NotFound(3), Outcome::Unauthorized("realm".to_string())] {
            assert_eq!(derived.matches(&value), manual.matches(&value), "{value:?}");
        }
        assert_eq!(derived.tag_name(), Some("Unauthorized"));
    }

    #[test]
    fn class_checks_runtime_type() {
        let disc = Discriminator::<Outcome>::class(Some(ClassKey::of::<String>()));
        assert!(disc.matches(&Outcome::Unauthorized("realm".to_string())));
        assert!(!disc.matches(&Outcome::NotFound(404)));
        assert_eq!(disc.class_key(), Some(ClassKey::of::<String>()));
        assert_eq!(disc.kind(), DiscriminatorKind::Class);
    }

    #[test]
    fn validate_rejects_unknown_tag() {
        let disc = Discriminator::<Outcome>::tag("Forbidden");
        assert!(matches!(
            disc.validate(403),
            Err(ConfigError::UnknownTag { tag: "Forbidden", .. })
        ));
    }

    #[test]
    fn validate_rejects_missing_class() {
        let disc = Discriminator::<Outcome>::class(None);
        assert!(!disc.matches(&Outcome::NotFound(1)));
        assert_eq!(
            disc.validate(404),
            Err(ConfigError::MissingPayloadClass { status: 404 })
        );
    }
}
