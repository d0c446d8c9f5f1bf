//! Structured logging for outcomes (requires the `tracing` feature).
//!
//! The algebra itself never logs. Callers opt in at the points they care
//! about by calling [`OutcomeTracingExt::traced`].

use crate::core::Outcome;
use std::fmt::Debug;

/// Emit a `tracing` event describing an outcome.
pub trait OutcomeTracingExt: Sized {
    /// Log this outcome under `label` and return it unchanged.
    ///
    /// Successes are logged at `DEBUG`, failures at `WARN`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::{Outcome, OutcomeTracingExt};
    ///
    /// let port = Outcome::from_fn(|| "8080".parse::<u16>()).traced("parse_port");
    /// assert_eq!(port, Outcome::success(8080));
    /// ```
    fn traced(self, label: &str) -> Self;
}

impl<V: Debug, E: Debug> OutcomeTracingExt for Outcome<V, E> {
    fn traced(self, label: &str) -> Self {
        match &self {
            Outcome::Success(value) => {
                tracing::debug!(label = %label, value = ?value, empty = value.is_none(), "outcome succeeded");
            }
            Outcome::Failure(error) => {
                tracing::warn!(label = %label, error = ?error, empty = error.is_none(), "outcome failed");
            }
        }
        self
    }
}
