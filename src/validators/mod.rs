//! A handful of ready-made validator units.

use crate::core::{PropertyValidator, PROPERTY_NAME_PLACEHOLDER};
use std::fmt::Display;

/// Rejects `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NotNull;

impl<V> PropertyValidator<Option<V>> for NotNull {
    fn name(&self) -> &str {
        "NotNull"
    }

    fn is_valid(&self, value: &Option<V>) -> bool {
        value.is_some()
    }

    fn message_template(&self) -> String {
        format!("'{}' must not be empty.", PROPERTY_NAME_PLACEHOLDER)
    }
}

/// Rejects empty strings and collections.
#[derive(Clone, Copy, Debug, Default)]
pub struct NotEmpty;

impl PropertyValidator<String> for NotEmpty {
    fn name(&self) -> &str {
        "NotEmpty"
    }

    fn is_valid(&self, value: &String) -> bool {
        !value.trim().is_empty()
    }

    fn message_template(&self) -> String {
        format!("'{}' must not be empty.", PROPERTY_NAME_PLACEHOLDER)
    }
}

impl<E> PropertyValidator<Vec<E>> for NotEmpty {
    fn name(&self) -> &str {
        "NotEmpty"
    }

    fn is_valid(&self, value: &Vec<E>) -> bool {
        !value.is_empty()
    }

    fn message_template(&self) -> String {
        format!("'{}' must not be empty.", PROPERTY_NAME_PLACEHOLDER)
    }
}

/// Accepts values in `from..=to`.
#[derive(Clone, Debug)]
pub struct InclusiveBetween<N> {
    from: N,
    to: N,
}

impl<N> InclusiveBetween<N> {
    pub fn new(from: N, to: N) -> Self {
        Self { from, to }
    }
}

impl<N> PropertyValidator<N> for InclusiveBetween<N>
where
    N: PartialOrd + Display + Send + Sync,
{
    fn name(&self) -> &str {
        "InclusiveBetween"
    }

    fn is_valid(&self, value: &N) -> bool {
        *value >= self.from && *value <= self.to
    }

    fn message_template(&self) -> String {
        format!(
            "'{}' must be between {} and {}.",
            PROPERTY_NAME_PLACEHOLDER, self.from, self.to
        )
    }
}

/// Accepts values for which a closure returns `true`.
pub struct Predicate<F> {
    name: String,
    predicate: F,
}

impl<F> Predicate<F> {
    pub fn new(name: impl Into<String>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<P, F> PropertyValidator<P> for Predicate<F>
where
    F: Fn(&P) -> bool + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn is_valid(&self, value: &P) -> bool {
        (self.predicate)(value)
    }

    fn message_template(&self) -> String {
        format!(
            "The specified condition was not met for '{}'.",
            PROPERTY_NAME_PLACEHOLDER
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_null_rejects_none() {
        assert!(PropertyValidator::<Option<u8>>::is_valid(&NotNull, &Some(1)));
        assert!(!PropertyValidator::<Option<u8>>::is_valid(&NotNull, &None));
    }

    #[test]
    fn not_empty_rejects_blank_strings_and_empty_vecs() {
        assert!(NotEmpty.is_valid(&"x".to_string()));
        assert!(!NotEmpty.is_valid(&"   ".to_string()));
        assert!(PropertyValidator::<Vec<u8>>::is_valid(&NotEmpty, &vec![1]));
        assert!(!PropertyValidator::<Vec<u8>>::is_valid(&NotEmpty, &Vec::new()));
    }

    #[test]
    fn inclusive_between_includes_bounds() {
        let range = InclusiveBetween::new(0, 150);

        assert!(range.is_valid(&0));
        assert!(range.is_valid(&150));
        assert!(!range.is_valid(&151));
        assert_eq!(
            range.message_template(),
            "'{PropertyName}' must be between 0 and 150."
        );
    }

    #[test]
    fn predicate_uses_closure_and_name() {
        let even = Predicate::new("Even", |v: &u32| v % 2 == 0);

        assert!(even.is_valid(&2));
        assert!(!even.is_valid(&3));
        assert_eq!(PropertyValidator::<u32>::name(&even), "Even");
    }
}
