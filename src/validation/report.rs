//! Serializable summary of a validation run.

use crate::core::{failures_of, ValidationFailure, ValidationOutcome};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A [`ValidationReport`] could not be written to or read from JSON.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The report could not be rendered as JSON.
    #[error("Cannot write validation report as JSON: {0}")]
    SerializationFailed(String),

    /// The input is not a JSON validation report.
    #[error("Cannot read validation report from JSON: {0}")]
    DeserializationFailed(String),
}

/// Flat list of the failures from one validation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures reported for one property path.
    pub fn failures_for<'a>(
        &'a self,
        property_name: &'a str,
    ) -> impl Iterator<Item = &'a ValidationFailure> + 'a {
        self.failures
            .iter()
            .filter(move |failure| failure.property_name == property_name)
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReportError> {
        serde_json::from_str(json).map_err(|e| ReportError::DeserializationFailed(e.to_string()))
    }
}

impl From<&ValidationOutcome> for ValidationReport {
    fn from(outcome: &ValidationOutcome) -> Self {
        Self {
            failures: failures_of(outcome),
        }
    }
}
