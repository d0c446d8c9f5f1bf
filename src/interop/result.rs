//! Conversions to and from `std::result::Result`.

use crate::core::Outcome;
use crate::error::OutcomeError;

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(error),
        }
    }
}

impl<V, E> Outcome<V, E> {
    /// Convert into a `Result`, treating empty variants as errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::{Outcome, OutcomeError};
    ///
    /// fn port(raw: &str) -> Result<u16, OutcomeError<std::num::ParseIntError>> {
    ///     let port = Outcome::from_fn(|| raw.parse::<u16>()).into_result()?;
    ///     Ok(port)
    /// }
    ///
    /// assert_eq!(port("8080"), Ok(8080));
    /// assert!(matches!(port("http"), Err(OutcomeError::Failed(_))));
    /// ```
    pub fn into_result(self) -> Result<V, OutcomeError<E>> {
        match self {
            Outcome::Success(Some(value)) => Ok(value),
            Outcome::Success(None) => Err(OutcomeError::EmptySuccess),
            Outcome::Failure(Some(error)) => Err(OutcomeError::Failed(error)),
            Outcome::Failure(None) => Err(OutcomeError::EmptyFailure),
        }
    }
}
