//! Errors raised while composing rules.

use thiserror::Error;

/// Errors that can occur when attaching validators to a rule.
///
/// A missing validator and a resolver that could not produce one surface as
/// the same error, so callers only ever match one kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Cannot pass a null {argument} to {operation}.")]
    NullArgument {
        argument: &'static str,
        operation: &'static str,
    },
}

impl BuildError {
    /// The builder operation that was misused.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::NullArgument { operation, .. } => operation,
        }
    }
}
