//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** of their own - they are defined entirely by
//! their attribute values. Two value objects with the same values are equal, even
//! when they live in different places in memory.

/// Marker trait for value objects, plus an explicit instance-identity check.
///
/// ## Value equality vs instance identity
///
/// - `==` (via `PartialEq`) compares attribute values. Implementations that model
///   a small hierarchy of kinds must treat the kind as one of those values, so two
///   values of different kinds never compare equal.
/// - [`ValueObject::same_instance`] answers the other question: do both references
///   point at the very same value in memory? Copies are equal but never the same
///   instance.
///
/// ## Immutability
///
/// To "modify" a value object, build a new one from the old one. The source value
/// stays untouched.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Name {
///     first: String,
///     last: String,
/// }
///
/// impl ValueObject for Name {}
///
/// let a = Name { first: "Ada".into(), last: "Lovelace".into() };
/// let b = a.clone();
/// assert_eq!(a, b);
/// assert!(!a.same_instance(&b));
/// assert!(a.same_instance(&a));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Whether `self` and `other` are the same value in memory.
    fn same_instance(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

/// Free-function form of [`ValueObject::same_instance`].
pub fn identity_equals<T: ValueObject>(a: &T, b: &T) -> bool {
    a.same_instance(b)
}
