//! The `Outcome` type: inspection and combinators.
//!
//! An outcome is an immutable value. Every combinator consumes the outcome
//! and hands back a new one (or the same one, for the side-effecting
//! branches), so outcomes chain the way builders do.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Either a successful computation or a failed one.
///
/// Each variant carries an optional payload. `None` marks an *empty*
/// payload: a success that produced no value, or a failure with no
/// error detail. Emptiness is always relative to the active variant.
///
/// # Example
///
/// ```rust
/// use outcome::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::success(42);
/// assert!(parsed.is_success());
/// assert_eq!(parsed.value(), Some(&42));
/// assert_eq!(parsed.error(), None);
///
/// let empty: Outcome<i32, String> = Outcome::empty_success();
/// assert!(empty.is_success());
/// assert!(empty.is_empty());
/// assert!(!empty.is_successful_non_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<V, E> {
    /// The computation succeeded, possibly without a value
    Success(Option<V>),

    /// The computation failed, possibly without error detail
    Failure(Option<E>),
}

impl<V, E> Outcome<V, E> {
    /// Held value for a success, `None` for a failure.
    pub fn value(&self) -> Option<&V> {
        match self {
            Outcome::Success(value) => value.as_ref(),
            Outcome::Failure(_) => None,
        }
    }

    /// Held error for a failure, `None` for a success.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => error.as_ref(),
        }
    }

    /// Consume the outcome, keeping only the success value.
    pub fn into_value(self) -> Option<V> {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => None,
        }
    }

    /// Consume the outcome, keeping only the failure error.
    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => error,
        }
    }

    /// True for a success, empty or not.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// True for a failure, empty or not.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Check whether the active variant's payload is absent.
    ///
    /// A success is empty when it holds no value; a failure is empty when it
    /// holds no error. The inactive slot is never consulted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert!(!Outcome::<i32, String>::failure("boom".to_string()).is_empty());
    /// assert!(Outcome::<i32, String>::empty_failure().is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self {
            Outcome::Success(value) => value.is_none(),
            Outcome::Failure(error) => error.is_none(),
        }
    }

    /// True only for a success that actually holds a value.
    pub fn is_successful_non_empty(&self) -> bool {
        self.is_success() && !self.is_empty()
    }

    /// Run `consumer` with the held value if this is a success.
    ///
    /// The consumer sees `None` for an empty success. It is never called for
    /// a failure. The outcome is returned unchanged either way.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let outcome = Outcome::<&str, String>::success("ready")
    ///     .on_success(|value| seen.push(value.copied()))
    ///     .on_failure(|_| panic!("not a failure"));
    ///
    /// assert_eq!(seen, vec![Some("ready")]);
    /// assert_eq!(outcome, Outcome::success("ready"));
    /// ```
    pub fn on_success<F>(self, consumer: F) -> Self
    where
        F: FnOnce(Option<&V>),
    {
        if let Outcome::Success(value) = &self {
            consumer(value.as_ref());
        }
        self
    }

    /// Run `consumer` with the held error if this is a failure.
    ///
    /// Mirror image of [`Outcome::on_success`].
    pub fn on_failure<F>(self, consumer: F) -> Self
    where
        F: FnOnce(Option<&E>),
    {
        if let Outcome::Failure(error) = &self {
            consumer(error.as_ref());
        }
        self
    }

    /// Transform the success value, leaving failures untouched.
    ///
    /// On a success, `transformer` runs exactly once with the value slot
    /// (`None` for an empty success) and its result becomes the new value.
    /// A failure short-circuits: `transformer` is not called and the same
    /// error is carried into the new outcome.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let doubled = Outcome::<String, String>::success("a".to_string())
    ///     .map(|s| s.unwrap_or_default() + "a");
    /// assert_eq!(doubled, Outcome::success("aa".to_string()));
    ///
    /// let checked = Outcome::<(), String>::empty_success().map(|_| "credentials");
    /// assert_eq!(checked, Outcome::success("credentials"));
    ///
    /// let failed = Outcome::<String, String>::failure("E".to_string())
    ///     .map(|_| -> usize { unreachable!() });
    /// assert_eq!(failed.error().map(String::as_str), Some("E"));
    /// ```
    pub fn map<P, F>(self, transformer: F) -> Outcome<P, E>
    where
        F: FnOnce(Option<V>) -> P,
    {
        match self {
            Outcome::Success(value) => Outcome::success(transformer(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure error, leaving successes untouched.
    ///
    /// This is the explicit step for re-typing an error into another error
    /// type; nothing in this crate converts errors implicitly.
    pub fn map_error<T, F>(self, transformer: F) -> Outcome<V, T>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error.map(transformer)),
        }
    }

    /// Rebind the whole outcome into a new one.
    ///
    /// `transformer` always runs and receives the complete outcome, not just
    /// the payload, so it decides how to treat each variant itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let recovered: Outcome<i32, ()> = Outcome::<&str, &str>::failure("E")
    ///     .flat_map(|_| Outcome::success(1));
    /// assert_eq!(recovered, Outcome::success(1));
    /// ```
    pub fn flat_map<P, T, F>(self, transformer: F) -> Outcome<P, T>
    where
        F: FnOnce(Outcome<V, E>) -> Outcome<P, T>,
    {
        transformer(self)
    }

    /// The held value, or `fallback` when there is none.
    ///
    /// An empty success also yields `fallback`: `V` has no absent value of
    /// its own to return, so emptiness is treated like a failure here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<&str, &str>::success("V").or("D"), "V");
    /// assert_eq!(Outcome::<&str, &str>::failure("E").or("D"), "D");
    /// ```
    pub fn or(self, fallback: V) -> V {
        match self {
            Outcome::Success(Some(value)) => value,
            _ => fallback,
        }
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(Some(value)) => write!(f, "Success[value={}]", value),
            Outcome::Success(None) => write!(f, "Success[empty]"),
            Outcome::Failure(Some(error)) => write!(f, "Failure[error={}]", error),
            Outcome::Failure(None) => write!(f, "Failure[empty]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    const OOOH_YEAH: &str = "Oooh! Yeah!";
    const OOOH_NOOO: &str = "Oooh! Nooo!";

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn success_exposes_value_and_no_error() {
        let outcome: Outcome<&str, &str> = Outcome::success(OOOH_YEAH);

        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
        assert_eq!(outcome.value(), Some(&OOOH_YEAH));
        assert_eq!(outcome.error(), None);
        assert!(!outcome.is_empty());
    }

    #[test]
    fn failure_exposes_error_and_no_value() {
        let outcome: Outcome<&str, &str> = Outcome::failure(OOOH_NOOO);

        assert!(!outcome.is_success());
        assert!(outcome.is_failure());
        assert_eq!(outcome.value(), None);
        assert_eq!(outcome.error(), Some(&OOOH_NOOO));
        assert!(!outcome.is_empty());
    }

    #[test]
    fn emptiness_is_relative_to_active_variant() {
        assert!(Outcome::<&str, &str>::empty_success().is_empty());
        assert!(Outcome::<&str, &str>::empty_failure().is_empty());
        assert!(!Outcome::<&str, &str>::success(OOOH_YEAH).is_empty());
        assert!(!Outcome::<&str, &str>::failure(OOOH_NOOO).is_empty());
    }

    #[test]
    fn successful_non_empty_requires_success_with_value() {
        assert!(!Outcome::<i32, i32>::empty_success().is_successful_non_empty());
        assert!(Outcome::<i32, i32>::success(1).is_successful_non_empty());
        assert!(!Outcome::<i32, i32>::failure(1).is_successful_non_empty());
        assert!(!Outcome::<i32, i32>::empty_failure().is_successful_non_empty());
    }

    #[test]
    fn into_value_and_into_error_take_payload() {
        assert_eq!(Outcome::<i32, &str>::success(7).into_value(), Some(7));
        assert_eq!(Outcome::<i32, &str>::success(7).into_error(), None);
        assert_eq!(Outcome::<i32, &str>::failure("e").into_error(), Some("e"));
        assert_eq!(Outcome::<i32, &str>::failure("e").into_value(), None);
    }

    #[test]
    fn on_success_skips_failure_branch() {
        let calls = Cell::new(0);

        let outcome = Outcome::<&str, &str>::success(OOOH_YEAH)
            .on_success(|value| {
                assert_eq!(value, Some(&OOOH_YEAH));
                calls.set(calls.get() + 1);
            })
            .on_failure(|_| panic!("on_failure should not be called"));

        assert_eq!(calls.get(), 1);
        assert_eq!(outcome, Outcome::success(OOOH_YEAH));
    }

    #[test]
    fn on_failure_skips_success_branch() {
        let calls = Cell::new(0);

        let outcome = Outcome::<&str, &str>::failure(OOOH_NOOO)
            .on_success(|_| panic!("on_success should not be called"))
            .on_failure(|error| {
                assert_eq!(error, Some(&OOOH_NOOO));
                calls.set(calls.get() + 1);
            });

        assert_eq!(calls.get(), 1);
        assert_eq!(outcome, Outcome::failure(OOOH_NOOO));
    }

    #[test]
    fn on_success_sees_empty_success() {
        let seen = Cell::new(false);

        Outcome::<i32, ()>::empty_success().on_success(|value| {
            assert_eq!(value, None);
            seen.set(true);
        });

        assert!(seen.get());
    }

    #[test]
    fn map_transforms_success_once() {
        let calls = Cell::new(0);

        let outcome = Outcome::<String, ()>::success("a".to_string()).map(|s| {
            calls.set(calls.get() + 1);
            assert_eq!(s.as_deref(), Some("a"));
            s.unwrap_or_default() + "a"
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(outcome, Outcome::success("aa".to_string()));
    }

    #[test]
    fn map_short_circuits_on_failure() {
        let outcome: Outcome<usize, &str> = Outcome::<&str, &str>::failure("E")
            .map(|_| -> usize { panic!("transformer should not be called") });

        assert!(outcome.is_failure());
        assert_eq!(outcome.error(), Some(&"E"));
    }

    #[test]
    fn map_transforms_empty_success_once() {
        let calls = Cell::new(0);

        let outcome = Outcome::<(), String>::empty_success().map(|value| {
            assert_eq!(value, None);
            calls.set(calls.get() + 1);
            "credentials"
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(outcome, Outcome::success("credentials"));
        assert!(outcome.is_successful_non_empty());
    }

    #[test]
    fn map_error_retypes_failure_only() {
        let failed = Outcome::<i32, &str>::failure("bad").map_error(str::len);
        assert_eq!(failed, Outcome::failure(3));

        let succeeded = Outcome::<i32, &str>::success(1)
            .map_error(|_| -> usize { panic!("transformer should not be called") });
        assert_eq!(succeeded, Outcome::success(1));
    }

    #[test]
    fn flat_map_always_invokes_transformer() {
        let from_success: Outcome<i32, String> =
            Outcome::<&str, ()>::success(OOOH_YEAH).flat_map(|_| Outcome::success(1));
        let from_failure: Outcome<i32, String> =
            Outcome::<(), &str>::failure(OOOH_NOOO).flat_map(|_| Outcome::success(1));

        assert_eq!(from_success, Outcome::success(1));
        assert_eq!(from_failure, Outcome::success(1));
    }

    #[test]
    fn flat_map_receives_whole_outcome() {
        let outcome: Outcome<usize, String> = Outcome::<&str, &str>::failure("E")
            .flat_map(|original| match original {
                Outcome::Success(value) => Outcome::Success(value.map(str::len)),
                Outcome::Failure(error) => Outcome::Failure(error.map(|e| format!("wrapped {e}"))),
            });

        assert_eq!(outcome, Outcome::failure("wrapped E".to_string()));
    }

    #[test]
    fn or_returns_value_or_fallback() {
        assert_eq!(Outcome::<&str, &str>::success("V").or("D"), "V");
        assert_eq!(Outcome::<&str, &str>::failure("E").or("D"), "D");
        assert_eq!(Outcome::<&str, &str>::empty_success().or("D"), "D");
    }

    #[test]
    fn equality_is_variant_scoped() {
        assert_eq!(Outcome::<i32, i32>::success(1), Outcome::success(1));
        assert_ne!(Outcome::<i32, i32>::success(1), Outcome::failure(1));
        assert_eq!(Outcome::<i32, i32>::empty_failure(), Outcome::empty_failure());
        assert_ne!(Outcome::<i32, i32>::empty_success(), Outcome::empty_failure());
    }

    #[test]
    fn equal_outcomes_hash_equally() {
        assert_eq!(
            hash_of(&Outcome::<&str, ()>::success(OOOH_YEAH)),
            hash_of(&Outcome::<&str, ()>::success(OOOH_YEAH))
        );
        assert_eq!(
            hash_of(&Outcome::<(), &str>::empty_failure()),
            hash_of(&Outcome::<(), &str>::empty_failure())
        );
    }

    #[test]
    fn display_names_variant_and_payload() {
        assert_eq!(
            Outcome::<&str, &str>::success(OOOH_YEAH).to_string(),
            "Success[value=Oooh! Yeah!]"
        );
        assert_eq!(Outcome::<&str, &str>::empty_success().to_string(), "Success[empty]");
        assert_eq!(
            Outcome::<&str, &str>::failure(OOOH_NOOO).to_string(),
            "Failure[error=Oooh! Nooo!]"
        );
        assert_eq!(Outcome::<&str, &str>::empty_failure().to_string(), "Failure[empty]");
    }

    #[test]
    fn outcome_serializes_correctly() {
        let outcome: Outcome<i32, String> = Outcome::failure("boom".to_string());
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);

        let empty: Outcome<i32, String> = Outcome::empty_success();
        let json = serde_json::to_string(&empty).unwrap();
        assert_eq!(json, r#"{"Success":null}"#);
    }
}
