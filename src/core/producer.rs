//! Fallible zero-argument producers.

/// A deferred computation that yields a value or fails.
///
/// The `Err` arm is the one failure signal the outcome factories
/// intercept. Panics are not a failure signal and unwind straight past
/// every factory.
///
/// Any `FnOnce() -> Result<T, X>` is a producer, so closures and function
/// items work directly. Implement the trait by hand for reusable
/// producers that carry their own inputs.
///
/// # Example
///
/// ```rust
/// use outcome::{Outcome, Producer};
///
/// struct ParsePort<'a>(&'a str);
///
/// impl Producer<u16, std::num::ParseIntError> for ParsePort<'_> {
///     fn produce(self) -> Result<u16, std::num::ParseIntError> {
///         self.0.parse()
///     }
/// }
///
/// assert_eq!(Outcome::from_fn(ParsePort("8080")), Outcome::success(8080));
/// assert!(Outcome::from_fn(ParsePort("http")).is_failure());
/// ```
pub trait Producer<T, X> {
    /// Run the computation.
    fn produce(self) -> Result<T, X>;
}

impl<T, X, F> Producer<T, X> for F
where
    F: FnOnce() -> Result<T, X>,
{
    fn produce(self) -> Result<T, X> {
        self()
    }
}
