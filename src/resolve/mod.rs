//! Indirect construction of validators.
//!
//! The composition engine asks a [`Resolver`] for every instance it needs
//! instead of constructing it, so hosts can plug in whatever instantiation
//! mechanism they use. [`Container`] is a minimal registry for hosts that
//! have none.

mod container;
mod resolver;

pub use container::Container;
pub use resolver::{resolve, Instance, Resolver, TypeRequest};
