//! Daytime Clock - tiered time-of-day clock with change notifications
//!
//! A [`Clock`] holds one [`TimeOfDay`](daytime_core::TimeOfDay) and a declared
//! [`Precision`]. Each precision level is a tier, and a clock watches every
//! tier from the hour down to its own:
//!
//! ```text
//! Hour         ── Hour
//! Minute       ── Hour, Minute
//! Second       ── Hour, Minute, Second
//! Millisecond  ── Hour, Minute, Second, Millisecond
//! ```
//!
//! Every call to [`Clock::set_time`] compares the stored time with the new one
//! per tier, fires each changed tier's channel once (coarse to fine), then the
//! umbrella [`Channel::Time`] once, and commits the new time. How far the clock
//! jumped does not matter: a tier fires at most once per update.
//!
//! ## Usage
//!
//! ```ignore
//! use daytime_clock::{Channel, Clock};
//! use daytime_core::TimeOfDay;
//!
//! let mut clock = Clock::minute(TimeOfDay::TIME_8_00);
//! clock.subscribe(Channel::Hour, |event| println!("new hour: {}", event.change.time_string))?;
//!
//! // Driven by the host's frame loop, 60x real time
//! clock.set_time_scale(60.0)?;
//! clock.advance_time(frame_delta_seconds);
//! ```

mod clock;
mod config;
mod error;
mod event;
mod frame;
mod tier;

pub use clock::Clock;
pub use config::ClockConfig;
pub use error::{ClockError, ClockResult};
pub use event::{Channel, ClockEvent, SubscriptionId, TimeChanged};
pub use frame::{FixedStep, FrameSource};
pub use tier::Precision;
