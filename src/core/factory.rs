//! Constructors for `Outcome`.
//!
//! Plain constructors wrap a payload directly. The producer-driven
//! constructors run a [`Producer`] and adapt its `Err` arm into a failure
//! (or a fallback). They never catch panics.

use super::outcome::Outcome;
use super::producer::Producer;

impl<V, E> Outcome<V, E> {
    /// Construct a success holding `value`.
    pub fn success(value: V) -> Self {
        Outcome::Success(Some(value))
    }

    /// Construct a failure holding `error`.
    pub fn failure(error: E) -> Self {
        Outcome::Failure(Some(error))
    }

    /// Construct a success with no value.
    pub fn empty_success() -> Self {
        Outcome::Success(None)
    }

    /// Construct a failure with no error detail.
    pub fn empty_failure() -> Self {
        Outcome::Failure(None)
    }

    /// Alias of [`Outcome::success`].
    pub fn of(value: V) -> Self {
        Self::success(value)
    }

    /// Run `producer`, keeping its error as the failure payload.
    ///
    /// The failure type is the producer's own error type. To land in a
    /// different error type, use [`Outcome::from_fn_with`] or
    /// [`Outcome::map_error`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let port = Outcome::from_fn(|| "8080".parse::<u16>());
    /// assert_eq!(port, Outcome::success(8080));
    ///
    /// let port = Outcome::from_fn(|| "http".parse::<u16>());
    /// assert!(port.is_failure());
    /// assert!(!port.is_empty());
    /// ```
    pub fn from_fn<P>(producer: P) -> Self
    where
        P: Producer<V, E>,
    {
        match producer.produce() {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Run `producer`, converting its error with `adapt`.
    ///
    /// `adapt` only runs when the producer fails.
    pub fn from_fn_with<X, P, A>(producer: P, adapt: A) -> Self
    where
        P: Producer<V, X>,
        A: FnOnce(X) -> E,
    {
        match producer.produce() {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(adapt(error)),
        }
    }

    /// Run `producer`, replacing any error with `error`.
    ///
    /// The producer's own error detail is discarded.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let port: Outcome<u16, &str> = Outcome::or_fail_with(|| "http".parse::<u16>(), "bad port");
    /// assert_eq!(port, Outcome::failure("bad port"));
    /// ```
    pub fn or_fail_with<X, P>(producer: P, error: E) -> Self
    where
        P: Producer<V, X>,
    {
        match producer.produce() {
            Ok(value) => Self::success(value),
            Err(_) => Self::failure(error),
        }
    }

    /// Run `producer`, falling back to `fallback` if it fails.
    ///
    /// Always yields a success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let port: Outcome<i32, ()> = Outcome::or_default(|| "invalid".parse::<i32>(), -1);
    /// assert_eq!(port, Outcome::success(-1));
    /// ```
    pub fn or_default<X, P>(producer: P, fallback: V) -> Self
    where
        P: Producer<V, X>,
    {
        match producer.produce() {
            Ok(value) => Self::success(value),
            Err(_) => Self::success(fallback),
        }
    }
}
