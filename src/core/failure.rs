//! Validation failures produced by validator units.

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of running one or more validators.
///
/// Failures accumulate instead of stopping at the first one, so a single run
/// reports every unit that rejected its value.
pub type ValidationOutcome = Validation<(), NonEmptyVec<ValidationFailure>>;

/// A single rejected value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Path of the property that failed, e.g. `address.street`
    pub property_name: String,

    /// Formatted message shown to the user
    pub error_message: String,

    /// Name of the validator unit that produced the failure
    pub validator: String,
}

impl ValidationFailure {
    pub fn new(
        property_name: impl Into<String>,
        error_message: impl Into<String>,
        validator: impl Into<String>,
    ) -> Self {
        Self {
            property_name: property_name.into(),
            error_message: error_message.into(),
            validator: validator.into(),
        }
    }

    /// Prefix the property path with a parent property name.
    pub fn nested_under(mut self, parent: &str) -> Self {
        self.property_name = format!("{}.{}", parent, self.property_name);
        self
    }
}

/// Combine a list of outcomes, keeping every failure.
pub fn combine(outcomes: Vec<ValidationOutcome>) -> ValidationOutcome {
    Validation::all_vec(outcomes).map(|_| ())
}

/// Collect the failures of an outcome into a plain vector.
pub fn failures_of(outcome: &ValidationOutcome) -> Vec<ValidationFailure> {
    match outcome {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
