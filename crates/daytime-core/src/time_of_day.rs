//! TimeOfDay - a point on the 24-hour wheel
//!
//! The backing value is always canonical: milliseconds since midnight in
//! `[0, 86_400_000)`. Every constructor funnels through the same reduction,
//! so negative inputs count back from midnight and whole days fall away.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::format::{Formatted, DEFAULT_FORMAT};
use crate::time_math::{self, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::{DaytimeError, DaytimeResult, Duration};

const MORNING_SUFFIX: &str = "AM";
const AFTERNOON_SUFFIX: &str = "PM";

/// Time of day at millisecond precision, without a date
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    millis: i32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay::from_millis(0);
    pub const NOON: TimeOfDay = TimeOfDay::hm(12, 0);

    // Half-hour presets
    pub const TIME_0_00: TimeOfDay = TimeOfDay::hm(0, 0);
    pub const TIME_0_30: TimeOfDay = TimeOfDay::hm(0, 30);
    pub const TIME_1_00: TimeOfDay = TimeOfDay::hm(1, 0);
    pub const TIME_1_30: TimeOfDay = TimeOfDay::hm(1, 30);
    pub const TIME_2_00: TimeOfDay = TimeOfDay::hm(2, 0);
    pub const TIME_2_30: TimeOfDay = TimeOfDay::hm(2, 30);
    pub const TIME_3_00: TimeOfDay = TimeOfDay::hm(3, 0);
    pub const TIME_3_30: TimeOfDay = TimeOfDay::hm(3, 30);
    pub const TIME_4_00: TimeOfDay = TimeOfDay::hm(4, 0);
    pub const TIME_4_30: TimeOfDay = TimeOfDay::hm(4, 30);
    pub const TIME_5_00: TimeOfDay = TimeOfDay::hm(5, 0);
    pub const TIME_5_30: TimeOfDay = TimeOfDay::hm(5, 30);
    pub const TIME_6_00: TimeOfDay = TimeOfDay::hm(6, 0);
    pub const TIME_6_30: TimeOfDay = TimeOfDay::hm(6, 30);
    pub const TIME_7_00: TimeOfDay = TimeOfDay::hm(7, 0);
    pub const TIME_7_30: TimeOfDay = TimeOfDay::hm(7, 30);
    pub const TIME_8_00: TimeOfDay = TimeOfDay::hm(8, 0);
    pub const TIME_8_30: TimeOfDay = TimeOfDay::hm(8, 30);
    pub const TIME_9_00: TimeOfDay = TimeOfDay::hm(9, 0);
    pub const TIME_9_30: TimeOfDay = TimeOfDay::hm(9, 30);
    pub const TIME_10_00: TimeOfDay = TimeOfDay::hm(10, 0);
    pub const TIME_10_30: TimeOfDay = TimeOfDay::hm(10, 30);
    pub const TIME_11_00: TimeOfDay = TimeOfDay::hm(11, 0);
    pub const TIME_11_30: TimeOfDay = TimeOfDay::hm(11, 30);
    pub const TIME_12_00: TimeOfDay = TimeOfDay::hm(12, 0);
    pub const TIME_12_30: TimeOfDay = TimeOfDay::hm(12, 30);
    pub const TIME_13_00: TimeOfDay = TimeOfDay::hm(13, 0);
    pub const TIME_13_30: TimeOfDay = TimeOfDay::hm(13, 30);
    pub const TIME_14_00: TimeOfDay = TimeOfDay::hm(14, 0);
    pub const TIME_14_30: TimeOfDay = TimeOfDay::hm(14, 30);
    pub const TIME_15_00: TimeOfDay = TimeOfDay::hm(15, 0);
    pub const TIME_15_30: TimeOfDay = TimeOfDay::hm(15, 30);
    pub const TIME_16_00: TimeOfDay = TimeOfDay::hm(16, 0);
    pub const TIME_16_30: TimeOfDay = TimeOfDay::hm(16, 30);
    pub const TIME_17_00: TimeOfDay = TimeOfDay::hm(17, 0);
    pub const TIME_17_30: TimeOfDay = TimeOfDay::hm(17, 30);
    pub const TIME_18_00: TimeOfDay = TimeOfDay::hm(18, 0);
    pub const TIME_18_30: TimeOfDay = TimeOfDay::hm(18, 30);
    pub const TIME_19_00: TimeOfDay = TimeOfDay::hm(19, 0);
    pub const TIME_19_30: TimeOfDay = TimeOfDay::hm(19, 30);
    pub const TIME_20_00: TimeOfDay = TimeOfDay::hm(20, 0);
    pub const TIME_20_30: TimeOfDay = TimeOfDay::hm(20, 30);
    pub const TIME_21_00: TimeOfDay = TimeOfDay::hm(21, 0);
    pub const TIME_21_30: TimeOfDay = TimeOfDay::hm(21, 30);
    pub const TIME_22_00: TimeOfDay = TimeOfDay::hm(22, 0);
    pub const TIME_22_30: TimeOfDay = TimeOfDay::hm(22, 30);
    pub const TIME_23_00: TimeOfDay = TimeOfDay::hm(23, 0);
    pub const TIME_23_30: TimeOfDay = TimeOfDay::hm(23, 30);

    /// Reduce any millisecond count onto the wheel.
    ///
    /// Non-negative input keeps `m mod 86_400_000`. Negative input counts back
    /// from midnight, so `-1` is `23:59:59.999` and `-86_400_000` is midnight.
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        TimeOfDay {
            millis: millis.rem_euclid(MILLIS_PER_DAY) as i32,
        }
    }

    /// Fractional milliseconds, rounded to the nearest (ties to even)
    #[inline]
    pub fn from_millis_f64(millis: f64) -> Self {
        TimeOfDay::from_millis(millis.round_ties_even() as i64)
    }

    /// Components are summed, not validated: `new(25, 0, 0, 0)` is 01:00.
    #[inline]
    pub const fn new(hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        TimeOfDay::from_millis(time_math::hmsf_to_millis(hours, minutes, seconds, millis))
    }

    #[inline]
    pub const fn hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        TimeOfDay::from_millis(time_math::hms_to_millis(hours, minutes, seconds))
    }

    #[inline]
    pub const fn hm(hours: i64, minutes: i64) -> Self {
        TimeOfDay::hms(hours, minutes, 0)
    }

    #[inline]
    pub const fn from_hours(hours: i64) -> Self {
        TimeOfDay::hm(hours, 0)
    }

    #[inline]
    pub const fn from_minutes(minutes: i64) -> Self {
        TimeOfDay::hm(0, minutes)
    }

    #[inline]
    pub const fn from_seconds(seconds: i64) -> Self {
        TimeOfDay::from_millis(time_math::seconds_to_millis(seconds))
    }

    /// Milliseconds since midnight, `0..86_400_000`
    #[inline]
    pub const fn as_millis(self) -> i32 {
        self.millis
    }

    /// 24-hour clock hour, `0..=23`
    #[inline]
    pub const fn hour(self) -> u32 {
        (self.millis as i64 / MILLIS_PER_HOUR) as u32
    }

    /// 12-hour clock face hour, `1..=12`
    #[inline]
    pub const fn hour_12(self) -> u32 {
        time_math::wrap_12(self.hour() as i64) as u32
    }

    #[inline]
    pub const fn minute(self) -> u32 {
        ((self.millis as i64 % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u32
    }

    #[inline]
    pub const fn second(self) -> u32 {
        ((self.millis as i64 % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u32
    }

    #[inline]
    pub const fn millisecond(self) -> u32 {
        (self.millis as i64 % MILLIS_PER_SECOND) as u32
    }

    /// Inclusive containment that may cross midnight.
    ///
    /// When `lower > upper` the upper bound belongs to the next day:
    /// 22:00..=01:00 contains 23:30 and 00:30 but not 12:00.
    pub fn is_between(self, lower: TimeOfDay, upper: TimeOfDay) -> bool {
        if lower <= upper {
            self >= lower && self <= upper
        } else {
            // Both the evening tail and the early-morning head are inside
            self >= lower || self <= upper
        }
    }

    #[inline]
    pub const fn is_hour_equal(self, other: TimeOfDay) -> bool {
        self.hour() == other.hour()
    }

    #[inline]
    pub const fn is_minute_equal(self, other: TimeOfDay) -> bool {
        self.minute() == other.minute()
    }

    #[inline]
    pub const fn is_second_equal(self, other: TimeOfDay) -> bool {
        self.second() == other.second()
    }

    #[inline]
    pub const fn is_millisecond_equal(self, other: TimeOfDay) -> bool {
        self.millisecond() == other.millisecond()
    }

    /// Fraction of the day elapsed since midnight, in `[0, 1)`
    #[inline]
    pub fn day_progress(self) -> f64 {
        self.millis as f64 / MILLIS_PER_DAY as f64
    }

    #[inline]
    pub const fn is_morning(self) -> bool {
        self.hour() < 12
    }

    /// `"AM"` before noon, `"PM"` from noon on
    #[inline]
    pub const fn time_suffix(self) -> &'static str {
        if self.is_morning() {
            MORNING_SUFFIX
        } else {
            AFTERNOON_SUFFIX
        }
    }

    /// Signed distance `self - earlier` on the raw backing values.
    ///
    /// Unlike `self - earlier`, this never wraps: moving a clock back
    /// from 10:00 to 09:00 yields minus one hour.
    #[inline]
    pub const fn signed_since(self, earlier: TimeOfDay) -> Duration {
        Duration::from_millis(self.millis as i64 - earlier.millis as i64)
    }

    /// Render with a token format string, see [`crate::format`]
    #[inline]
    pub fn format(self, format: &str) -> Formatted<'_> {
        Formatted::new(self, format)
    }

    /// Equality against a dynamically typed value
    pub fn try_eq(&self, other: &dyn Any) -> DaytimeResult<bool> {
        Ok(self == Self::downcast(other)?)
    }

    /// Ordering against a dynamically typed value
    pub fn try_cmp(&self, other: &dyn Any) -> DaytimeResult<Ordering> {
        Ok(self.cmp(Self::downcast(other)?))
    }

    fn downcast(other: &dyn Any) -> DaytimeResult<&TimeOfDay> {
        other
            .downcast_ref::<TimeOfDay>()
            .ok_or(DaytimeError::TypeMismatch { expected: "TimeOfDay" })
    }
}

/// Whole days in the span are discarded; a negative span counts back from midnight.
impl From<Duration> for TimeOfDay {
    #[inline]
    fn from(duration: Duration) -> Self {
        TimeOfDay::from_millis(duration.as_millis())
    }
}

/// Elapsed time since midnight
impl From<TimeOfDay> for Duration {
    #[inline]
    fn from(time: TimeOfDay) -> Self {
        Duration::from_millis(time.millis as i64)
    }
}

impl Add<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        // Reduce first so huge spans cannot overflow the sum
        TimeOfDay::from_millis(self.millis as i64 + rhs.as_millis().rem_euclid(MILLIS_PER_DAY))
    }
}

impl Add<TimeOfDay> for Duration {
    type Output = TimeOfDay;

    #[inline]
    fn add(self, rhs: TimeOfDay) -> Self::Output {
        rhs + self
    }
}

impl AddAssign<Duration> for TimeOfDay {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl Sub<Duration> for TimeOfDay {
    type Output = TimeOfDay;

    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        TimeOfDay::from_millis(self.millis as i64 - rhs.as_millis().rem_euclid(MILLIS_PER_DAY))
    }
}

impl SubAssign<Duration> for TimeOfDay {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

/// Time since `rhs`, assuming `self` is at or after it.
/// 00:00 - 23:00 is one hour, never minus twenty-three. Always in `[0, 1 day)`.
impl Sub for TimeOfDay {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: TimeOfDay) -> Self::Output {
        let output = self.signed_since(rhs);
        if output < Duration::ZERO {
            output + Duration::ONE_DAY
        } else {
            output
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.format(DEFAULT_FORMAT), f)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TimeOfDay({:02}:{:02}:{:02}.{:03})",
            self.hour(),
            self.minute(),
            self.second(),
            self.millisecond()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type T = TimeOfDay;

    #[test]
    fn test_presets() {
        assert_eq!(T::TIME_0_00, T::from_millis(0));
        assert_eq!(T::TIME_0_30, T::from_millis(1_800_000));
        assert_eq!(T::TIME_6_00, T::from_millis(21_600_000));
        assert_eq!(T::TIME_12_00, T::NOON);
        assert_eq!(T::TIME_13_30, T::from_millis(48_600_000));
        assert_eq!(T::TIME_23_30, T::from_millis(84_600_000));
    }

    #[test]
    fn test_canonicalization() {
        assert_eq!(T::from_millis(-1), T::new(23, 59, 59, 999));
        assert_eq!(T::from_millis(86_400_000), T::MIDNIGHT);
        assert_eq!(T::from_millis(-86_400_000).as_millis(), 0);
        assert_eq!(T::from_millis(-3 * 86_400_000 - 7_200_000), T::TIME_22_00);
        assert_eq!(T::new(25, 0, 0, 0), T::TIME_1_00);
        assert_eq!(T::from(Duration::from_hours(-2)), T::TIME_22_00);
        assert_eq!(T::from(Duration::new(5, 3, 30, 0, 0)), T::TIME_3_30);
        assert_eq!(T::from_millis(i64::MIN).as_millis(), i64::MIN.rem_euclid(86_400_000) as i32);
    }

    #[test]
    fn test_components() {
        let t = T::new(21, 9, 4, 80);
        assert_eq!((t.hour(), t.minute(), t.second(), t.millisecond()), (21, 9, 4, 80));
        assert_eq!(t.hour_12(), 9);
        assert_eq!(T::MIDNIGHT.hour_12(), 12);
        assert_eq!(T::NOON.hour_12(), 12);
        let last = T::from_millis(-1);
        assert_eq!((last.hour(), last.minute(), last.second(), last.millisecond()), (23, 59, 59, 999));
    }

    #[test]
    fn test_equality() {
        assert_eq!(T::MIDNIGHT - Duration::from_millis(1), T::new(23, 59, 59, 999));
        assert_eq!(T::TIME_0_00 + Duration::ZERO, T::TIME_0_00);
        assert_eq!(T::TIME_3_30 + Duration::ONE_DAY, T::TIME_3_30);
        assert_eq!(T::TIME_14_00 + Duration::ONE_DAY, T::TIME_14_00);
        assert_eq!(T::TIME_23_00 + Duration::ONE_HOUR, T::TIME_0_00);
        assert_eq!(T::TIME_0_00 - Duration::ONE_HOUR, T::TIME_23_00);
        assert_eq!(T::TIME_22_00 + 12 * Duration::ONE_HOUR, T::TIME_10_00);
        assert_eq!(T::TIME_2_00 - Duration::hm(5, 30), T::TIME_20_30);
        assert_eq!(Duration::ONE_HOUR + T::TIME_1_00, T::TIME_2_00);
    }

    #[test]
    fn test_time_since() {
        assert_eq!(T::TIME_13_30 - T::TIME_6_00, Duration::hm(7, 30));
        assert_eq!(T::TIME_0_00 - T::TIME_23_00, Duration::ONE_HOUR);
        assert_eq!(
            T::TIME_2_30 - T::TIME_22_00,
            4 * Duration::ONE_HOUR + 30 * Duration::ONE_MINUTE
        );
        assert_eq!(T::TIME_9_00 - T::TIME_9_00, Duration::ZERO);
    }

    #[test]
    fn test_signed_since() {
        assert_eq!(T::TIME_9_00.signed_since(T::TIME_10_00), -Duration::ONE_HOUR);
        assert_eq!(T::TIME_0_00.signed_since(T::new(23, 59, 59, 999)), Duration::from_millis(-86_399_999));
    }

    #[test]
    fn test_is_between() {
        assert!(T::TIME_1_00.is_between(T::TIME_0_00, T::TIME_2_00));
        assert!(T::TIME_9_30.is_between(T::TIME_9_30, T::TIME_9_30));
        assert!(T::TIME_13_00.is_between(T::TIME_12_00, T::TIME_13_00));
        assert!(T::TIME_15_30.is_between(T::TIME_15_30, T::TIME_20_30));
        assert!(T::TIME_23_00.is_between(T::TIME_20_00, T::TIME_0_00));
        assert!(T::TIME_15_00.is_between(T::TIME_10_30, T::TIME_1_00));
        assert!(T::TIME_23_30.is_between(T::TIME_23_00, T::TIME_0_00));

        assert!(!T::TIME_0_00.is_between(T::TIME_1_00, T::TIME_2_00));
        assert!(!T::TIME_12_00.is_between(T::TIME_12_30, T::TIME_11_30));
        assert!(!T::TIME_22_00.is_between(T::TIME_23_00, T::TIME_0_00));
    }

    #[test]
    fn test_is_between_crossing_midnight() {
        let lower = T::TIME_22_00;
        let upper = T::TIME_1_00;
        assert!(T::TIME_23_30.is_between(lower, upper));
        assert!(T::TIME_0_30.is_between(lower, upper));
        assert!(T::TIME_22_00.is_between(lower, upper));
        assert!(T::TIME_1_00.is_between(lower, upper));
        assert!(!T::TIME_12_00.is_between(lower, upper));
        assert!(!T::TIME_1_30.is_between(lower, upper));
        assert!(!T::TIME_21_30.is_between(lower, upper));
    }

    #[test]
    fn test_component_equality() {
        let a = T::new(8, 15, 30, 250);
        let b = T::new(20, 15, 31, 250);
        assert!(!a.is_hour_equal(b));
        assert!(a.is_minute_equal(b));
        assert!(!a.is_second_equal(b));
        assert!(a.is_millisecond_equal(b));
    }

    #[test]
    fn test_list_sorting() {
        let mut times = vec![T::TIME_2_00, T::TIME_22_30, T::TIME_0_00, T::TIME_13_30, T::TIME_1_30];
        times.sort();
        assert_eq!(times, vec![T::TIME_0_00, T::TIME_1_30, T::TIME_2_00, T::TIME_13_30, T::TIME_22_30]);
    }

    #[test]
    fn test_day_progress() {
        let tolerance = 0.00001;
        assert_eq!(T::TIME_0_00.day_progress(), 0.0);
        assert!((T::TIME_1_00.day_progress() - 0.041_67).abs() < tolerance);
        assert!((T::TIME_3_30.day_progress() - 0.145_83).abs() < tolerance);
        assert!((T::TIME_12_00.day_progress() - 0.5).abs() < tolerance);
        assert!((T::TIME_16_30.day_progress() - 0.6875).abs() < tolerance);
        assert!((T::TIME_23_30.day_progress() - 0.979_17).abs() < tolerance);
        assert!(T::from_millis(-1).day_progress() < 1.0);
    }

    #[test]
    fn test_suffix() {
        assert!(T::TIME_11_30.is_morning());
        assert!(!T::NOON.is_morning());
        assert_eq!(T::MIDNIGHT.time_suffix(), "AM");
        assert_eq!(T::TIME_18_00.time_suffix(), "PM");
    }

    #[test]
    fn test_float_constructor_rounds() {
        assert_eq!(T::from_millis_f64(1.6), T::from_millis(2));
        assert_eq!(T::from_millis_f64(2.5), T::from_millis(2));
        assert_eq!(T::from_millis_f64(-0.6), T::from_millis(-1));
    }

    #[test]
    fn test_dynamic_comparison() {
        assert_eq!(T::NOON.try_eq(&T::TIME_12_00), Ok(true));
        assert_eq!(T::NOON.try_cmp(&T::MIDNIGHT), Ok(Ordering::Greater));
        assert_eq!(
            T::NOON.try_eq(&Duration::from_hours(12)),
            Err(DaytimeError::TypeMismatch { expected: "TimeOfDay" })
        );
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(T::new(18, 3, 1, 14).to_string(), "06:03:01:014 PM");
        assert_eq!(format!("{:?}", T::new(9, 5, 0, 7)), "TimeOfDay(09:05:00.007)");
    }

    proptest! {
        #[test]
        fn prop_backing_is_canonical(millis in any::<i64>()) {
            let t = TimeOfDay::from_millis(millis);
            prop_assert!((0..86_400_000).contains(&t.as_millis()));
        }

        #[test]
        fn prop_matches_magnitude_rule(millis in -1_000_000_000_000i64..1_000_000_000_000i64) {
            let residue = millis.abs() % 86_400_000;
            let expected = if millis < 0 && residue != 0 { 86_400_000 - residue } else { residue };
            prop_assert_eq!(TimeOfDay::from_millis(millis).as_millis() as i64, expected);
        }

        #[test]
        fn prop_whole_days_are_identity(millis in 0i64..86_400_000, days in -1_000i64..1_000) {
            let t = TimeOfDay::from_millis(millis);
            prop_assert_eq!(t + Duration::from_days(days), t);
        }

        #[test]
        fn prop_duration_round_trip(millis in 0i64..86_400_000) {
            let t = TimeOfDay::from_millis(millis);
            prop_assert_eq!(Duration::from(t).as_millis(), t.as_millis() as i64);
            prop_assert_eq!(TimeOfDay::from(Duration::from(t)), t);
        }

        #[test]
        fn prop_time_since_is_within_a_day(a in 0i64..86_400_000, b in 0i64..86_400_000) {
            let (a, b) = (TimeOfDay::from_millis(a), TimeOfDay::from_millis(b));
            let since = a - b;
            prop_assert!(since >= Duration::ZERO && since < Duration::ONE_DAY);
            prop_assert_eq!(b + since, a);
        }

        #[test]
        fn prop_order_matches_backing(mut values in prop::collection::vec(0i32..86_400_000, 0..64)) {
            let mut times: Vec<TimeOfDay> = values.iter().map(|v| TimeOfDay::from_millis(*v as i64)).collect();
            times.sort();
            values.sort();
            let sorted: Vec<i32> = times.iter().map(|t| t.as_millis()).collect();
            prop_assert_eq!(sorted, values);
        }
    }
}
