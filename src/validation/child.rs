//! Adapter running a whole-object validator as a property unit.

use super::descriptor::Validator;
use crate::core::{combine, failures_of, PropertyContext, PropertyValidator, ValidationOutcome};
use std::sync::Arc;
use stillwater::validation::Validation;

/// Wraps a [`Validator<P>`] so it can be attached to a rule over a `P`
/// property.
///
/// Failures reported by the child validator keep their own property paths,
/// prefixed with the name of the property being validated.
pub struct ChildValidatorAdaptor<P> {
    validator: Arc<dyn Validator<P>>,
}

impl<P> ChildValidatorAdaptor<P> {
    pub fn new(validator: Arc<dyn Validator<P>>) -> Self {
        Self { validator }
    }

    /// The wrapped validator.
    pub fn validator(&self) -> &Arc<dyn Validator<P>> {
        &self.validator
    }
}

impl<P> PropertyValidator<P> for ChildValidatorAdaptor<P> {
    fn name(&self) -> &str {
        "ChildValidatorAdaptor"
    }

    fn is_valid(&self, value: &P) -> bool {
        self.validator.validate(value).is_success()
    }

    fn check(&self, context: &PropertyContext<'_>, value: &P) -> ValidationOutcome {
        let outcome = self.validator.validate(value);
        if outcome.is_success() {
            return outcome;
        }

        let nested = failures_of(&outcome)
            .into_iter()
            .map(|failure| Validation::fail(failure.nested_under(context.property_name)))
            .collect();

        combine(nested)
    }
}
