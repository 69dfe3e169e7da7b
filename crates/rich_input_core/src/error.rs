//! Configuration and decoding errors.
//!
//! Engine operations themselves never fail with an error: an out-of-range
//! index or a non-collapsed selection is reported as `None`.

use thiserror::Error;

/// Invalid argument delimiter configuration.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum DelimiterError {
    /// The opening delimiter is an empty string.
    #[error("argument start delimiter must not be empty")]
    EmptyStart,
    /// The closing delimiter is an empty string.
    #[error("argument end delimiter must not be empty")]
    EmptyEnd,
    /// Opening and closing delimiters are the same string.
    #[error("argument start and end delimiters are both {0:?}; an argument could never be closed")]
    Identical(String),
}

/// A decoded token whose `label` disagrees with its value and raw value.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("token label {found:?} does not match its content {expected:?}")]
pub struct LabelMismatch {
    pub expected: String,
    pub found: String,
}
