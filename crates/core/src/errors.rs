//! Core error types for the forecast engine.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the forecast engine.
///
/// The engine has a single failure mode: a statically invalid argument.
/// All arithmetic is defined for any real driver value, so pathological
/// inputs produce non-finite numbers in the output rather than errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
