//! Daytime Core - Fundamental time-of-day value types
//!
//! This crate defines the value types used throughout Daytime:
//! - Unit conversion helpers (milliseconds ↔ seconds/minutes/hours/days)
//! - Duration: a signed, multi-day span of milliseconds
//! - TimeOfDay: a point on the 24-hour wheel, always canonical
//! - Token formatting for time-of-day strings

pub mod time_math;
pub mod duration;
pub mod time_of_day;
pub mod format;
pub mod error;

pub use duration::*;
pub use time_of_day::*;
pub use format::*;
pub use error::*;
