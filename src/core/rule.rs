//! Property rules: the validators accumulated for one property.

use super::failure::{combine, ValidationOutcome};
use super::member::Member;
use super::unit::{PropertyContext, SharedValidator};
use std::fmt;

/// Ordered validators bound to one property of subject type `T`.
///
/// Insertion order is evaluation order and duplicates are kept. Units are
/// appended through a [`RuleBuilder`](crate::builder::RuleBuilder); the rule
/// itself only exposes read access and message configuration.
pub struct PropertyRule<T, P> {
    member: Member<T, P>,
    display_name: Option<String>,
    message: Option<String>,
    validators: Vec<SharedValidator<P>>,
}

impl<T, P> PropertyRule<T, P> {
    /// Create an empty rule for a member.
    pub fn new(member: Member<T, P>) -> Self {
        Self {
            member,
            display_name: None,
            message: None,
            validators: Vec::new(),
        }
    }

    /// Stable name of the property this rule validates.
    pub fn property_name(&self) -> &'static str {
        self.member.name()
    }

    /// The accessor this rule reads values through.
    pub fn member(&self) -> Member<T, P> {
        self.member
    }

    /// Label used in messages; falls back to the property name.
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.member.name())
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    /// Custom message replacing every unit's template, if set.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Attached validators in evaluation order.
    pub fn validators(&self) -> &[SharedValidator<P>] {
        &self.validators
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub(crate) fn push(&mut self, validator: SharedValidator<P>) {
        self.validators.push(validator);
    }

    /// Run every attached validator against the property of `instance`.
    pub fn validate(&self, instance: &T) -> ValidationOutcome {
        let value = self.member.get(instance);
        let context = PropertyContext {
            property_name: self.property_name(),
            display_name: self.display_name(),
            message: self.message(),
        };

        let outcomes = self
            .validators
            .iter()
            .map(|validator| validator.check(&context, value))
            .collect();

        combine(outcomes)
    }
}

impl<T, P> fmt::Debug for PropertyRule<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.validators.iter().map(|v| v.name()).collect();
        f.debug_struct("PropertyRule")
            .field("property_name", &self.property_name())
            .field("display_name", &self.display_name)
            .field("message", &self.message)
            .field("validators", &names)
            .finish()
    }
}
