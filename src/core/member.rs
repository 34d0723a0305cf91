//! Named property accessors.
//!
//! A `Member` pairs the stable name of a property with a getter for its
//! value. Rules are keyed by that name, and rule imports look members up by
//! it, so two models with a same-named property can share validators.

use std::fmt;

/// A named, typed accessor for one property of a subject type.
///
/// # Example
///
/// ```rust
/// use rulebind::{member, Member};
///
/// struct Person {
///     age: u32,
/// }
///
/// let age: Member<Person, u32> = member!(Person, age);
/// assert_eq!(age.name(), "age");
/// assert_eq!(*age.get(&Person { age: 42 }), 42);
/// ```
pub struct Member<T, P> {
    name: &'static str,
    getter: fn(&T) -> &P,
}

impl<T, P> Member<T, P> {
    /// Create a member from a name and a getter.
    pub fn new(name: &'static str, getter: fn(&T) -> &P) -> Self {
        Self { name, getter }
    }

    /// The stable member name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Read the member's value from a subject.
    pub fn get<'s>(&self, subject: &'s T) -> &'s P {
        (self.getter)(subject)
    }
}

impl<T, P> Clone for Member<T, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, P> Copy for Member<T, P> {}

impl<T, P> fmt::Debug for Member<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member").field("name", &self.name).finish()
    }
}

/// Build a [`Member`] from a struct field, using the field name as the
/// member name.
///
/// ```rust
/// use rulebind::member;
///
/// struct Address {
///     street: String,
/// }
///
/// let street = member!(Address, street);
/// assert_eq!(street.name(), "street");
/// ```
#[macro_export]
macro_rules! member {
    ($subject:ty, $field:ident) => {
        $crate::core::Member::new(stringify!($field), |subject: &$subject| &subject.$field)
    };
}
