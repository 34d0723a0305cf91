//! Fluent composition of property rules.
//!
//! A [`RuleBuilder`] starts in the [`Initial`] view, where only attach and
//! import operations exist. The first successful attach returns the
//! [`Options`] view, which adds [`configure`](RuleBuilder::configure).
//! Every attach funnels through one guarded append, so a missing or
//! unresolvable validator always fails with [`BuildError::NullArgument`]
//! before the rule is touched.

pub mod error;
pub mod rule;

pub use error::BuildError;
pub use rule::{Initial, Options, RuleBuilder, Stage};
