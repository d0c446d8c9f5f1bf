//! Conversions between `Outcome` and neighbouring types.
//!
//! - `std::result::Result`, for handing outcomes to `?`-based code
//! - `stillwater::Validation`, for joining validation pipelines

mod result;
mod validation;
