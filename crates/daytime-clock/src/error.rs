//! Error types for the clock

use thiserror::Error;

use crate::{Channel, Precision};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClockError {
    #[error("Channel {channel:?} is finer than the clock's {precision:?} precision")]
    UnsupportedChannel { channel: Channel, precision: Precision },

    #[error("Invalid time scale: {0}")]
    InvalidTimeScale(f64),
}

/// Result type for clock operations
pub type ClockResult<T> = Result<T, ClockError>;
