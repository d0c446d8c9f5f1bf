//! The outcome algebra.
//!
//! This module contains the two-variant `Outcome` type, its constructors,
//! and the `Producer` contract used by the fallible constructors.
//!
//! Nothing here performs I/O or logging, and no operation mutates an
//! existing outcome.

mod factory;
mod outcome;
mod producer;

pub use outcome::Outcome;
pub use producer::Producer;
