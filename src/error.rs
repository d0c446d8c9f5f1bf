//! Errors raised when leaving the outcome algebra.

use thiserror::Error;

/// Why an outcome could not be turned into a plain value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutcomeError<E> {
    /// The outcome succeeded but held no value
    #[error("Outcome succeeded without a value")]
    EmptySuccess,

    /// The outcome failed without error detail
    #[error("Outcome failed without error detail")]
    EmptyFailure,

    /// The outcome failed with an error
    #[error("Outcome failed: {0}")]
    Failed(E),
}

impl<E> OutcomeError<E> {
    /// The underlying failure error, if there was one.
    pub fn into_inner(self) -> Option<E> {
        match self {
            OutcomeError::Failed(error) => Some(error),
            OutcomeError::EmptySuccess | OutcomeError::EmptyFailure => None,
        }
    }
}
