//! Whole-object validators and the rule table they expose.

use crate::core::{SharedValidator, ValidationOutcome};
use std::any::Any;
use std::fmt;

/// A validator unit as reported by a [`RuleDescriptor`].
///
/// The unit is type-erased so that descriptors of any subject type can be
/// queried uniformly; [`downcast`](Self::downcast) recovers it for a
/// property type.
pub struct DescribedValidator {
    member: String,
    name: String,
    unit: Box<dyn Any + Send + Sync>,
}

impl DescribedValidator {
    pub fn new<P: 'static>(member: impl Into<String>, unit: SharedValidator<P>) -> Self {
        Self {
            member: member.into(),
            name: unit.name().to_string(),
            unit: Box::new(unit),
        }
    }

    /// Member of the described subject this unit is registered against.
    pub fn member(&self) -> &str {
        &self.member
    }

    /// Name of the unit.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recover the unit for properties of type `P`.
    ///
    /// Returns `None` when the unit validates another property type.
    pub fn downcast<P: 'static>(self) -> Option<SharedValidator<P>> {
        self.unit
            .downcast::<SharedValidator<P>>()
            .ok()
            .map(|unit| *unit)
    }
}

impl fmt::Debug for DescribedValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DescribedValidator")
            .field("member", &self.member)
            .field("name", &self.name)
            .finish()
    }
}

/// Read-only view of a validator's rule table.
pub trait RuleDescriptor: Send + Sync {
    /// Names of every member with at least one rule, in declaration order.
    fn members(&self) -> Vec<&str>;

    /// Units registered against `member`, in evaluation order.
    ///
    /// An unknown member yields an empty list.
    fn validators_for_member(&self, member: &str) -> Vec<DescribedValidator>;
}

/// Validates whole instances of `T`.
///
/// Every validator also describes its rules so others can import them.
pub trait Validator<T>: RuleDescriptor {
    fn validate(&self, instance: &T) -> ValidationOutcome;
}
