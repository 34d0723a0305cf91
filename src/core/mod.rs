//! Core rule types.
//!
//! This module contains the data the composition engine works on:
//! - Named property accessors via `Member`
//! - Validator units via the `PropertyValidator` trait
//! - Per-property accumulators via `PropertyRule`
//! - Accumulated failures via `ValidationOutcome`

mod failure;
mod member;
mod rule;
mod unit;

pub use failure::{combine, failures_of, ValidationFailure, ValidationOutcome};
pub use member::Member;
pub use rule::PropertyRule;
pub use unit::{PropertyContext, PropertyValidator, SharedValidator, PROPERTY_NAME_PLACEHOLDER};
