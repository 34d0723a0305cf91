//! Running rules and sharing them between validators.
//!
//! - [`RuleSet`] owns the rules declared for a subject type and runs them,
//!   accumulating every failure in a `stillwater` `Validation`
//! - [`RuleDescriptor`] lets one validator import another's units by
//!   member name
//! - [`ChildValidatorAdaptor`] turns a whole-object validator into a unit
//!   for a nested property

mod child;
mod descriptor;
mod report;
mod rule_set;

pub use child::ChildValidatorAdaptor;
pub use descriptor::{DescribedValidator, RuleDescriptor, Validator};
pub use report::{ReportError, ValidationReport};
pub use rule_set::RuleSet;
