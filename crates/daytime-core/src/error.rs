//! Error types for Daytime value types

use thiserror::Error;

/// Core Daytime errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DaytimeError {
    #[error("Hour out of range: {0} (expected 0..=23)")]
    HourOutOfRange(i64),

    #[error("Inverted bounds: lower {lower}ms is greater than upper {upper}ms")]
    InvertedBounds { lower: i64, upper: i64 },

    #[error("Type mismatch: value is not a {expected}")]
    TypeMismatch { expected: &'static str },
}

/// Result type for Daytime operations
pub type DaytimeResult<T> = Result<T, DaytimeError>;
