//! Outcome: an explicit Success/Failure container
//!
//! An [`Outcome`] is either a success or a failure, and callers decide how
//! to react by inspecting it rather than by unwinding. Outcomes are
//! immutable values: combinators consume an outcome and hand back a new
//! one, so they chain fluently.
//!
//! # Core Concepts
//!
//! - **Outcome**: the two-variant container, `Success` or `Failure`
//! - **Emptiness**: either variant may hold no payload (`None`)
//! - **Producer**: a deferred computation whose `Err` arm is adapted into
//!   a failure by the fallible constructors
//!
//! # Example
//!
//! ```rust
//! use outcome::Outcome;
//!
//! #[derive(Debug, PartialEq)]
//! struct Credentials {
//!     login: String,
//! }
//!
//! fn validate(login: &str) -> Outcome<(), String> {
//!     if login.is_empty() {
//!         Outcome::failure("Login is not valid.".to_string())
//!     } else {
//!         Outcome::empty_success()
//!     }
//! }
//!
//! let login = "username";
//! let credentials = validate(login).map(|_| Credentials { login: login.to_string() });
//!
//! assert!(credentials.is_successful_non_empty());
//! assert_eq!(credentials.into_value(), Some(Credentials { login: "username".to_string() }));
//! ```
//!
//! # Features
//!
//! - `tracing`: adds [`OutcomeTracingExt`] for logging outcomes through
//!   the `tracing` crate

pub mod core;
pub mod error;
mod interop;
#[cfg(feature = "tracing")]
pub mod trace;

// Re-export commonly used types
pub use crate::core::{Outcome, Producer};
pub use error::OutcomeError;
#[cfg(feature = "tracing")]
pub use trace::OutcomeTracingExt;
