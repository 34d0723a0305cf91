//! Rulebind: type-safe rule composition for declarative validation
//!
//! Rulebind attaches validators to the properties of a model through a
//! fluent builder. The builder ties each property's static type to the
//! validators allowed on it, imports rules declared on other validators by
//! member name, and obtains validator instances through a pluggable resolver
//! rather than constructing them itself.
//!
//! # Core Concepts
//!
//! - **Member**: A named accessor for one property, built with [`member!`]
//! - **PropertyValidator**: An atomic predicate over a property value
//! - **PropertyRule**: The ordered validators bound to one property
//! - **RuleBuilder**: The fluent façade that attaches validators to a rule
//! - **Resolver**: The factory seam the builder constructs validators through
//! - **RuleSet**: All rules for a subject type; runs them and describes them
//!
//! # Example
//!
//! ```rust
//! use rulebind::validators::{InclusiveBetween, NotNull};
//! use rulebind::{member, RuleSet};
//!
//! struct Patient {
//!     age: Option<u32>,
//!     weight_kg: u32,
//! }
//!
//! let mut rules = RuleSet::new();
//! rules
//!     .rule_for(member!(Patient, age), |rule| {
//!         rule.set_validator(NotNull)?
//!             .configure(|rule| rule.set_display_name("Age"))
//!             .set_validator(NotNull)
//!     })?
//!     .rule_for(member!(Patient, weight_kg), |rule| {
//!         rule.set_validator(InclusiveBetween::new(1, 500))
//!     })?;
//!
//! let report = rules.report(&Patient { age: None, weight_kg: 70 });
//! assert_eq!(report.failures.len(), 2);
//! assert_eq!(report.failures[0].error_message, "'Age' must not be empty.");
//! # Ok::<(), rulebind::builder::BuildError>(())
//! ```

pub mod builder;
pub mod core;
pub mod resolve;
pub mod validation;
pub mod validators;

// Re-export commonly used types
pub use crate::builder::{BuildError, RuleBuilder};
pub use crate::core::{
    Member, PropertyRule, PropertyValidator, SharedValidator, ValidationFailure, ValidationOutcome,
};
pub use crate::resolve::{Container, Resolver, TypeRequest};
pub use crate::validation::{RuleDescriptor, RuleSet, ValidationReport, Validator};
