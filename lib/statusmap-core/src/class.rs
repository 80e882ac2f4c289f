//! Runtime classes for class-based discriminators.
//!
//! A [`ClassKey`] identifies a payload type twice: exactly, through its
//! [`TypeId`], and after type erasure, through its type path with generic
//! arguments dropped. `Vec<NotFound>` and `Vec<Unauthorized>` have distinct
//! type ids but the same erased class `alloc::vec::Vec`, so any consumer that
//! only sees the erased representation (a schema, a wire format, a client in
//! another language) cannot tell them apart. Registries refuse such pairs.

use std::any::{Any, TypeId};
use std::fmt;

/// Runtime class of a payload type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassKey {
    type_id: TypeId,
    type_name: &'static str,
}

impl ClassKey {
    /// Runtime class of `P`.
    #[must_use]
    pub fn of<P: Any>() -> Self {
        Self {
            type_id: TypeId::of::<P>(),
            type_name: std::any::type_name::<P>(),
        }
    }

    /// Exact type identity.
    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Full type name, generic arguments included.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Type name with every generic argument list removed.
    #[must_use]
    pub fn erased_name(&self) -> String {
        erase(self.type_name)
    }

    /// Returns `true` if both classes have the same erased representation
    /// while being different types.
    #[must_use]
    pub fn is_ambiguous_with(&self, other: &Self) -> bool {
        self.type_id != other.type_id && self.erased_name() == other.erased_name()
    }

    /// Returns `true` if `value` is an instance of this class.
    #[must_use]
    pub fn is_instance(&self, value: &dyn Any) -> bool {
        value.type_id() == self.type_id
    }
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name)
    }
}

fn erase(type_name: &str) -> String {
    let mut erased = String::with_capacity(type_name.len());
    let mut depth = 0_usize;
    let mut previous = None;
    for c in type_name.chars() {
        match c {
            '<' => depth += 1,
            // `->` of a function pointer type
            '>' if previous == Some('-') => {
                if depth == 0 {
                    erased.push(c);
                }
            }
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => erased.push(c),
            _ => {}
        }
        previous = Some(c);
    }
    erased
}

/// Values that expose the runtime class of their payload.
///
/// Derive it on tagged unions with `#[derive(Classify)]`: newtype cases
/// report their field, other cases report the value itself.
pub trait Classify: 'static {
    /// The value whose runtime type is checked by class-based discriminators.
    fn runtime_class(&self) -> &dyn Any;
}

impl Classify for Box<dyn Any + Send + Sync> {
    fn runtime_class(&self) -> &dyn Any {
        &**self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NotFound;
    struct Unauthorized;

    #[test]
    fn erased_name_drops_generic_arguments() {
        let key = ClassKey::of::<Vec<u32>>();
        assert_eq!(key.type_name(), "alloc::vec::Vec<u32>");
        assert_eq!(key.erased_name(), "alloc::vec::Vec");

        let key = ClassKey::of::<u32>();
        assert_eq!(key.erased_name(), "u32");
    }

    #[test]
    fn generic_containers_are_ambiguous() {
        let left = ClassKey::of::<Vec<NotFound>>();
        let right = ClassKey::of::<Vec<Unauthorized>>();
        assert!(left.is_ambiguous_with(&right));
        assert!(!left.is_ambiguous_with(&left));
        assert!(!ClassKey::of::<NotFound>().is_ambiguous_with(&ClassKey::of::<Unauthorized>()));
    }

    #[test]
    fn erasure_keeps_text_after_generic_arguments() {
        let left = ClassKey::of::<(Vec<u8>, NotFound)>();
        let right = ClassKey::of::<(Vec<u8>, Unauthorized)>();
        assert_eq!(
            left.erased_name(),
            format!("(alloc::vec::Vec, {})", std::any::type_name::<NotFound>())
        );
        assert!(!left.is_ambiguous_with(&right));

        let left = ClassKey::of::<(Vec<NotFound>, u8)>();
        let right = ClassKey::of::<(Vec<Unauthorized>, u8)>();
        assert_eq!(left.erased_name(), "(alloc::vec::Vec, u8)");
        assert!(left.is_ambiguous_with(&right));
    }

    #[test]
    fn erasure_skips_function_arrows() {
        let key = ClassKey::of::<Vec<fn(u8) -> u8>>();
        assert_eq!(key.erased_name(), "alloc::vec::Vec");

        let key = ClassKey::of::<fn(Vec<u8>) -> u8>();
        assert_eq!(key.erased_name(), "fn(alloc::vec::Vec) -> u8");
    }

    #[test]
    fn boxed_any_reports_inner_class() {
        let value: Box<dyn Any + Send + Sync> = Box::new(NotFound);
        assert!(ClassKey::of::<NotFound>().is_instance(value.runtime_class()));
        assert!(!ClassKey::of::<Unauthorized>().is_instance(value.runtime_class()));
    }
}
