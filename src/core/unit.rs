//! Validator units: atomic predicates over a single property value.

use super::failure::{ValidationFailure, ValidationOutcome};
use std::sync::Arc;
use stillwater::validation::Validation;

/// Placeholder replaced by the property's display name in messages.
pub const PROPERTY_NAME_PLACEHOLDER: &str = "{PropertyName}";

/// A shared, already configured validator unit for values of type `P`.
pub type SharedValidator<P> = Arc<dyn PropertyValidator<P>>;

/// The property a unit is being run against.
#[derive(Clone, Copy, Debug)]
pub struct PropertyContext<'a> {
    pub property_name: &'a str,
    pub display_name: &'a str,
    pub message: Option<&'a str>,
}

impl PropertyContext<'_> {
    /// Render a message template for this property.
    ///
    /// A custom message set on the rule takes precedence over the template.
    pub fn format(&self, template: &str) -> String {
        self.message
            .unwrap_or(template)
            .replace(PROPERTY_NAME_PLACEHOLDER, self.display_name)
    }
}

/// An atomic predicate applied to a property value.
///
/// Units know nothing about rules or composition; they answer whether a
/// value is valid and describe themselves for messages.
///
/// # Example
///
/// ```rust
/// use rulebind::PropertyValidator;
///
/// struct Even;
///
/// impl PropertyValidator<u32> for Even {
///     fn name(&self) -> &str {
///         "Even"
///     }
///
///     fn is_valid(&self, value: &u32) -> bool {
///         value % 2 == 0
///     }
/// }
///
/// assert!(Even.is_valid(&4));
/// assert!(!Even.is_valid(&3));
/// ```
pub trait PropertyValidator<P>: Send + Sync {
    /// Name used in failures and logs.
    fn name(&self) -> &str;

    /// Check a single value.
    fn is_valid(&self, value: &P) -> bool;

    /// Message template used when the value is rejected.
    fn message_template(&self) -> String {
        format!("'{}' is not valid.", PROPERTY_NAME_PLACEHOLDER)
    }

    /// Run the unit against a property value.
    ///
    /// The default produces at most one failure from `is_valid`; units that
    /// report several failures (such as child validators) override it.
    fn check(&self, context: &PropertyContext<'_>, value: &P) -> ValidationOutcome {
        if self.is_valid(value) {
            Validation::success(())
        } else {
            Validation::fail(ValidationFailure::new(
                context.property_name,
                context.format(&self.message_template()),
                self.name(),
            ))
        }
    }
}
