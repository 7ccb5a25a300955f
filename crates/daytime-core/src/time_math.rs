//! Millisecond unit conversions and 12/24-hour helpers
//!
//! Every conversion is exact integer arithmetic. Division truncates toward
//! zero, so quotient and remainder share the sign of the input and
//! `quotient * unit + remainder == input` always holds.

use crate::{DaytimeError, DaytimeResult};

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = SECONDS_PER_MINUTE * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = SECONDS_PER_HOUR * MILLIS_PER_SECOND;
pub const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * MILLIS_PER_SECOND;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = SECONDS_PER_MINUTE * MINUTES_PER_HOUR;
pub const SECONDS_PER_DAY: i64 = HOURS_PER_DAY * SECONDS_PER_HOUR;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = HOURS_PER_DAY * MINUTES_PER_HOUR;

pub const HOURS_PER_DAY: i64 = 24;

#[inline]
pub const fn millis_to_seconds(millis: i64) -> i64 {
    millis / MILLIS_PER_SECOND
}

/// Whole seconds in `millis` plus the leftover milliseconds
#[inline]
pub const fn millis_to_seconds_rem(millis: i64) -> (i64, i64) {
    (millis / MILLIS_PER_SECOND, millis % MILLIS_PER_SECOND)
}

#[inline]
pub const fn millis_to_minutes(millis: i64) -> i64 {
    millis / MILLIS_PER_MINUTE
}

/// Whole minutes in `millis` plus the leftover milliseconds
#[inline]
pub const fn millis_to_minutes_rem(millis: i64) -> (i64, i64) {
    (millis / MILLIS_PER_MINUTE, millis % MILLIS_PER_MINUTE)
}

#[inline]
pub const fn millis_to_hours(millis: i64) -> i64 {
    millis / MILLIS_PER_HOUR
}

/// Whole hours in `millis` plus the leftover milliseconds
#[inline]
pub const fn millis_to_hours_rem(millis: i64) -> (i64, i64) {
    (millis / MILLIS_PER_HOUR, millis % MILLIS_PER_HOUR)
}

#[inline]
pub const fn millis_to_days(millis: i64) -> i64 {
    millis / MILLIS_PER_DAY
}

/// Whole days in `millis` plus the leftover milliseconds
#[inline]
pub const fn millis_to_days_rem(millis: i64) -> (i64, i64) {
    (millis / MILLIS_PER_DAY, millis % MILLIS_PER_DAY)
}

#[inline]
pub const fn days_to_millis(days: i64) -> i64 {
    days * MILLIS_PER_DAY
}

#[inline]
pub const fn hours_to_millis(hours: i64) -> i64 {
    hours * MILLIS_PER_HOUR
}

#[inline]
pub const fn minutes_to_millis(minutes: i64) -> i64 {
    minutes * MILLIS_PER_MINUTE
}

#[inline]
pub const fn seconds_to_millis(seconds: i64) -> i64 {
    seconds * MILLIS_PER_SECOND
}

/// Fractional seconds to milliseconds, truncated toward zero
///
/// Out-of-range and NaN inputs saturate the way `as i64` does.
#[inline]
pub fn seconds_f64_to_millis(seconds: f64) -> i64 {
    (seconds * MILLIS_PER_SECOND as f64) as i64
}

/// Sum weighted components into one millisecond count.
/// Components are not range-checked; 90 minutes is simply 5_400_000 ms.
#[inline]
pub const fn to_millis(days: i64, hours: i64, minutes: i64, seconds: i64, millis: i64) -> i64 {
    days_to_millis(days)
        + hours_to_millis(hours)
        + minutes_to_millis(minutes)
        + seconds_to_millis(seconds)
        + millis
}

#[inline]
pub const fn hmsf_to_millis(hours: i64, minutes: i64, seconds: i64, millis: i64) -> i64 {
    to_millis(0, hours, minutes, seconds, millis)
}

#[inline]
pub const fn hms_to_millis(hours: i64, minutes: i64, seconds: i64) -> i64 {
    to_millis(0, hours, minutes, seconds, 0)
}

/// Convert a 24-hour clock hour into its 12-hour face value.
///
/// `0 → 12`, `1..=12` unchanged, `13..=23 → hour - 12`.
pub fn hour_24_to_12(hour: i64) -> DaytimeResult<i64> {
    if !(0..HOURS_PER_DAY).contains(&hour) {
        return Err(DaytimeError::HourOutOfRange(hour));
    }
    Ok(wrap_12(hour))
}

/// Caller guarantees `hour` is within `0..24`.
#[inline]
pub(crate) const fn wrap_12(hour: i64) -> i64 {
    match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MILLIS_PER_SECOND, 1_000);
        assert_eq!(MILLIS_PER_MINUTE, 60_000);
        assert_eq!(MILLIS_PER_HOUR, 3_600_000);
        assert_eq!(MILLIS_PER_DAY, 86_400_000);
        assert_eq!(SECONDS_PER_MINUTE, 60);
        assert_eq!(SECONDS_PER_HOUR, 3_600);
        assert_eq!(SECONDS_PER_DAY, 86_400);
        assert_eq!(MINUTES_PER_HOUR, 60);
        assert_eq!(MINUTES_PER_DAY, 1_440);
        assert_eq!(HOURS_PER_DAY, 24);
    }

    #[test]
    fn test_hour_24_to_12() {
        let expected = [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        for (hour, want) in expected.iter().enumerate() {
            assert_eq!(hour_24_to_12(hour as i64), Ok(*want));
        }
    }

    #[test]
    fn test_hour_24_to_12_out_of_range() {
        assert_eq!(hour_24_to_12(-1), Err(DaytimeError::HourOutOfRange(-1)));
        assert_eq!(hour_24_to_12(24), Err(DaytimeError::HourOutOfRange(24)));
    }

    #[test]
    fn test_div_rem_recovers_input() {
        for millis in [0, 1, -1, 59_999, -61_001, 90_061_001, -1_035_288_463] {
            let (s, r) = millis_to_seconds_rem(millis);
            assert_eq!(seconds_to_millis(s) + r, millis);
            let (m, r) = millis_to_minutes_rem(millis);
            assert_eq!(minutes_to_millis(m) + r, millis);
            let (h, r) = millis_to_hours_rem(millis);
            assert_eq!(hours_to_millis(h) + r, millis);
            let (d, r) = millis_to_days_rem(millis);
            assert_eq!(days_to_millis(d) + r, millis);
        }
    }

    #[test]
    fn test_remainder_follows_sign() {
        assert_eq!(millis_to_seconds_rem(-1_500), (-1, -500));
        assert_eq!(millis_to_minutes(-59_999), 0);
    }

    #[test]
    fn test_seconds_f64_truncates() {
        assert_eq!(seconds_f64_to_millis(0.0166), 16);
        assert_eq!(seconds_f64_to_millis(1.9999), 1_999);
        assert_eq!(seconds_f64_to_millis(-0.0015), -1);
    }

    #[test]
    fn test_to_millis_sums_unbounded_components() {
        assert_eq!(to_millis(1, 1, 1, 1, 1), 90_061_001);
        assert_eq!(hms_to_millis(0, 90, 0), 5_400_000);
        assert_eq!(hmsf_to_millis(21, 9, 4, 80), 76_144_080);
        assert_eq!(hms_to_millis(-1, 30, 0), -1_800_000);
    }
}
