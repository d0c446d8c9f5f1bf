//! Conversions to and from `stillwater::Validation`.
//!
//! A validation always carries a payload, so only non-empty outcomes have
//! a validation counterpart.

use crate::core::Outcome;
use stillwater::validation::Validation;

impl<V, E> From<Validation<V, E>> for Outcome<V, E> {
    fn from(validation: Validation<V, E>) -> Self {
        match validation {
            Validation::Success(value) => Outcome::success(value),
            Validation::Failure(error) => Outcome::failure(error),
        }
    }
}

impl<V, E> Outcome<V, E> {
    /// Convert into a `Validation`, or `None` for an empty outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    /// use stillwater::validation::Validation;
    ///
    /// let checked = Outcome::<i32, Vec<String>>::success(18).into_validation();
    /// assert!(matches!(checked, Some(Validation::Success(18))));
    ///
    /// assert!(Outcome::<i32, Vec<String>>::empty_success().into_validation().is_none());
    /// ```
    pub fn into_validation(self) -> Option<Validation<V, E>> {
        match self {
            Outcome::Success(value) => value.map(Validation::Success),
            Outcome::Failure(error) => error.map(Validation::Failure),
        }
    }
}
