//! Tiered clock - detects and reports time-of-day changes per precision tier

use std::fmt;

use daytime_core::{Duration, TimeOfDay};
use tracing::{debug, trace, warn};

use crate::event::Subscribers;
use crate::{
    Channel, ClockConfig, ClockError, ClockEvent, ClockResult, FrameSource, Precision,
    SubscriptionId, TimeChanged,
};

/// Time-of-day clock reporting changes down to its precision
///
/// The clock always stores the full millisecond time; precision only decides
/// which tiers are watched, what `is_equal_to` compares, and the default format.
#[derive(Debug)]
pub struct Clock {
    time: TimeOfDay,
    precision: Precision,
    format: String,
    time_scale: f64,
    subscribers: Subscribers,
}

impl Clock {
    /// Create a clock with the precision's default format and real-time scale
    pub fn new(precision: Precision, time: TimeOfDay) -> Self {
        Clock {
            time,
            precision,
            format: precision.default_format().to_owned(),
            time_scale: 1.0,
            subscribers: Subscribers::default(),
        }
    }

    /// Create a clock from a validated configuration
    pub fn with_config(config: ClockConfig, time: TimeOfDay) -> ClockResult<Self> {
        config.validate()?;
        Ok(Clock {
            time,
            precision: config.precision,
            format: config.effective_format().to_owned(),
            time_scale: config.time_scale,
            subscribers: Subscribers::default(),
        })
    }

    pub fn hour(time: TimeOfDay) -> Self {
        Self::new(Precision::Hour, time)
    }

    pub fn minute(time: TimeOfDay) -> Self {
        Self::new(Precision::Minute, time)
    }

    pub fn second(time: TimeOfDay) -> Self {
        Self::new(Precision::Second, time)
    }

    pub fn millisecond(time: TimeOfDay) -> Self {
        Self::new(Precision::Millisecond, time)
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    /// Change the display format used by `Display` and by notification strings
    pub fn set_format(&mut self, format: impl Into<String>) {
        self.format = format.into();
        debug!(format = %self.format, "clock format changed");
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, time_scale: f64) -> ClockResult<()> {
        if !time_scale.is_finite() {
            return Err(ClockError::InvalidTimeScale(time_scale));
        }
        self.time_scale = time_scale;
        Ok(())
    }

    /// Render the current time with an explicit format
    pub fn format_with(&self, format: &str) -> String {
        self.time.format(format).to_string()
    }

    /// Register a handler for one channel.
    ///
    /// Tier channels finer than the clock's precision never fire, so
    /// subscribing to them is an error. `Channel::Time` is always available.
    pub fn subscribe<F>(&mut self, channel: Channel, handler: F) -> ClockResult<SubscriptionId>
    where
        F: FnMut(&ClockEvent) + 'static,
    {
        if let Some(tier) = channel.tier() {
            if !self.precision.includes(tier) {
                return Err(ClockError::UnsupportedChannel {
                    channel,
                    precision: self.precision,
                });
            }
        }
        Ok(self.subscribers.add(channel, Box::new(handler)))
    }

    /// Returns `false` if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether `candidate` matches the clock's time at the clock's precision.
    /// Compares 24-hour components, so 8 AM and 8 PM differ on an hour clock.
    pub fn is_equal_to(&self, candidate: TimeOfDay) -> bool {
        self.precision.equal_at(self.time, candidate)
    }

    /// Move the clock to `new_time`, firing notifications for what changed.
    ///
    /// Each watched tier whose component differs fires once, coarse to fine,
    /// followed by one `Channel::Time` event. A tier fires at most once no
    /// matter how many times its component rolled over between the two
    /// values. Events are delivered to subscribers before the new time is
    /// committed and are also returned in delivery order.
    pub fn set_time(&mut self, new_time: TimeOfDay) -> Vec<ClockEvent> {
        let previous = self.time;
        let changed: Vec<Precision> = self
            .precision
            .tiers()
            .iter()
            .copied()
            .filter(|tier| !tier.component_equal(previous, new_time))
            .collect();

        let mut events = Vec::with_capacity(changed.len() + 1);
        if !changed.is_empty() {
            let change = TimeChanged::new(new_time, previous, &self.format);
            for tier in changed {
                trace!(
                    ?tier,
                    from = previous.as_millis(),
                    to = new_time.as_millis(),
                    "clock tier changed"
                );
                events.push(ClockEvent {
                    channel: tier.into(),
                    change: change.clone(),
                });
            }
            debug!(
                precision = ?self.precision,
                delta_ms = change.delta.as_millis(),
                "clock time changed"
            );
            events.push(ClockEvent {
                channel: Channel::Time,
                change,
            });

            for event in &events {
                self.subscribers.dispatch(event);
            }
        }

        self.time = new_time;
        events
    }

    /// Advance by `elapsed_seconds` of real time at the clock's time scale
    pub fn advance_time(&mut self, elapsed_seconds: f64) -> Vec<ClockEvent> {
        self.advance_time_scaled(elapsed_seconds, self.time_scale)
    }

    /// Advance by `scalar * elapsed_seconds`.
    ///
    /// Elapsed time is truncated to whole milliseconds before scaling, and the
    /// scaled span is truncated again. Negative or non-finite elapsed values
    /// are treated as zero.
    pub fn advance_time_scaled(&mut self, elapsed_seconds: f64, scalar: f64) -> Vec<ClockEvent> {
        let elapsed = if elapsed_seconds.is_finite() && elapsed_seconds >= 0.0 {
            elapsed_seconds
        } else {
            warn!(elapsed_seconds, "ignoring invalid frame time");
            0.0
        };
        let step = Duration::from_seconds_f64(elapsed) * scalar;
        self.set_time(self.time + step)
    }

    /// Pull one frame time from `source` and advance by it
    pub fn tick<S: FrameSource + ?Sized>(&mut self, source: &mut S) -> Vec<ClockEvent> {
        let elapsed = source.delta_seconds();
        self.advance_time(elapsed)
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.time.format(&self.format), f)
    }
}
