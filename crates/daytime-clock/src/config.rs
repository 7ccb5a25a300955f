//! Clock configuration

use crate::{ClockError, ClockResult, Precision};

/// Clock configuration
#[derive(Clone, Debug, PartialEq)]
pub struct ClockConfig {
    /// Finest tier the clock reports
    pub precision: Precision,
    /// Display format; `None` uses the precision's default
    pub format: Option<String>,
    /// Game time per unit of real time passed to `advance_time`
    pub time_scale: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            precision: Precision::Millisecond,
            format: None,
            time_scale: 1.0,
        }
    }
}

impl ClockConfig {
    fn with_precision(precision: Precision) -> Self {
        ClockConfig {
            precision,
            ..ClockConfig::default()
        }
    }

    /// Hour clock, renders as "9 PM"
    pub fn hour() -> Self {
        Self::with_precision(Precision::Hour)
    }

    /// Minute clock, renders as "9:09 PM"
    pub fn minute() -> Self {
        Self::with_precision(Precision::Minute)
    }

    /// Second clock, renders as "9:09:04 PM"
    pub fn second() -> Self {
        Self::with_precision(Precision::Second)
    }

    /// Millisecond clock, renders as "9:09:04:080 PM"
    pub fn millisecond() -> Self {
        Self::with_precision(Precision::Millisecond)
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Format the clock starts with
    pub fn effective_format(&self) -> &str {
        self.format
            .as_deref()
            .unwrap_or_else(|| self.precision.default_format())
    }

    /// Reject scales that would poison the clock's arithmetic
    pub fn validate(&self) -> ClockResult<()> {
        if !self.time_scale.is_finite() {
            return Err(ClockError::InvalidTimeScale(self.time_scale));
        }
        Ok(())
    }
}
