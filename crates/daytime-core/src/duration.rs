//! Duration - a signed span of milliseconds
//!
//! A `Duration` is not bounded to one day. The day/hour/minute/second/millisecond
//! views are derived by truncating division, so every component carries the
//! sign of the backing value:
//! `millis == day*86_400_000 + hour*3_600_000 + minute*60_000 + second*1_000 + millisecond`.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::time_math::{
    self, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
};
use crate::{DaytimeError, DaytimeResult};

/// Signed timespan in milliseconds
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration {
    millis: i64,
}

impl Duration {
    /// Additive identity
    pub const ZERO: Duration = Duration::from_millis(0);
    /// Smallest non-zero span
    pub const ONE_MILLISECOND: Duration = Duration::from_millis(1);
    pub const ONE_SECOND: Duration = Duration::from_seconds(1);
    pub const ONE_MINUTE: Duration = Duration::from_minutes(1);
    pub const ONE_HOUR: Duration = Duration::from_hours(1);
    /// Adding this to any `TimeOfDay` yields the same `TimeOfDay`
    pub const ONE_DAY: Duration = Duration::from_days(1);

    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Duration { millis }
    }

    /// Fractional milliseconds, truncated toward zero
    #[inline]
    pub fn from_millis_f64(millis: f64) -> Self {
        Duration::from_millis(millis as i64)
    }

    #[inline]
    pub const fn from_days(days: i64) -> Self {
        Duration::from_millis(time_math::days_to_millis(days))
    }

    #[inline]
    pub const fn from_hours(hours: i64) -> Self {
        Duration::from_millis(time_math::hours_to_millis(hours))
    }

    #[inline]
    pub const fn from_minutes(minutes: i64) -> Self {
        Duration::from_millis(time_math::minutes_to_millis(minutes))
    }

    #[inline]
    pub const fn from_seconds(seconds: i64) -> Self {
        Duration::from_millis(time_math::seconds_to_millis(seconds))
    }

    /// Fractional seconds, truncated toward zero at millisecond precision
    #[inline]
    pub fn from_seconds_f64(seconds: f64) -> Self {
        Duration::from_millis(time_math::seconds_f64_to_millis(seconds))
    }

    /// Hours, minutes and seconds summed into one span.
    /// Components are unbounded: `hms(0, 90, 0)` is an hour and a half.
    #[inline]
    pub const fn hms(hours: i64, minutes: i64, seconds: i64) -> Self {
        Duration::from_millis(time_math::hms_to_millis(hours, minutes, seconds))
    }

    /// Same as [`Duration::hms`] with the seconds left at zero
    #[inline]
    pub const fn hm(hours: i64, minutes: i64) -> Self {
        Duration::hms(hours, minutes, 0)
    }

    #[inline]
    pub const fn new(days: i64, hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        Duration::from_millis(time_math::to_millis(days, hours, minutes, seconds, millis))
    }

    /// Convert from a standard library duration, saturating at `i64::MAX` milliseconds
    pub fn from_std(duration: std::time::Duration) -> Self {
        Duration::from_millis(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
    }

    /// Convert to a standard library duration; `None` for negative spans
    pub fn to_std(self) -> Option<std::time::Duration> {
        u64::try_from(self.millis)
            .ok()
            .map(std::time::Duration::from_millis)
    }

    /// Backing millisecond count
    #[inline]
    pub const fn as_millis(self) -> i64 {
        self.millis
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.millis as f64 / MILLIS_PER_SECOND as f64
    }

    #[inline]
    pub const fn day(self) -> i64 {
        self.millis / MILLIS_PER_DAY
    }

    /// Hour component, `-23..=23`
    #[inline]
    pub const fn hour(self) -> i64 {
        (self.millis % MILLIS_PER_DAY) / MILLIS_PER_HOUR
    }

    /// Minute component, `-59..=59`
    #[inline]
    pub const fn minute(self) -> i64 {
        (self.millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE
    }

    /// Second component, `-59..=59`
    #[inline]
    pub const fn second(self) -> i64 {
        (self.millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
    }

    /// Millisecond component, `-999..=999`
    #[inline]
    pub const fn millisecond(self) -> i64 {
        self.millis % MILLIS_PER_SECOND
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Duration::from_millis(self.millis.abs())
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.millis < 0
    }

    /// Milliseconds left after removing whole days, keeping the sign.
    /// This is the time-of-day sized portion of the span.
    #[inline]
    pub const fn flatten_days(self) -> i64 {
        self.millis % MILLIS_PER_DAY
    }

    /// Inclusive containment on the signed values.
    ///
    /// `-2h` lies between `-3h` and `-1h` but not between `1h` and `3h`.
    /// There is no wraparound here, so `lower > upper` is an error.
    pub fn is_between(self, lower: Duration, upper: Duration) -> DaytimeResult<bool> {
        if lower > upper {
            return Err(DaytimeError::InvertedBounds {
                lower: lower.millis,
                upper: upper.millis,
            });
        }
        Ok(self >= lower && self <= upper)
    }

    /// Equality against a dynamically typed value
    pub fn try_eq(&self, other: &dyn Any) -> DaytimeResult<bool> {
        Ok(self == Self::downcast(other)?)
    }

    /// Ordering against a dynamically typed value
    pub fn try_cmp(&self, other: &dyn Any) -> DaytimeResult<Ordering> {
        Ok(self.cmp(Self::downcast(other)?))
    }

    fn downcast(other: &dyn Any) -> DaytimeResult<&Duration> {
        other
            .downcast_ref::<Duration>()
            .ok_or(DaytimeError::TypeMismatch { expected: "Duration" })
    }
}

impl Add for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        Duration::from_millis(self.millis + rhs.millis)
    }
}

impl Add<i64> for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, millis: i64) -> Self::Output {
        Duration::from_millis(self.millis + millis)
    }
}

impl Add<Duration> for i64 {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        rhs + self
    }
}

impl AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Duration) {
        self.millis += rhs.millis;
    }
}

impl Sub for Duration {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Duration) -> Self::Output {
        Duration::from_millis(self.millis - rhs.millis)
    }
}

impl Sub<i64> for Duration {
    type Output = Duration;

    #[inline]
    fn sub(self, millis: i64) -> Self::Output {
        Duration::from_millis(self.millis - millis)
    }
}

impl SubAssign for Duration {
    #[inline]
    fn sub_assign(&mut self, rhs: Duration) {
        self.millis -= rhs.millis;
    }
}

impl Neg for Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Self::Output {
        Duration::from_millis(-self.millis)
    }
}

impl Mul<i64> for Duration {
    type Output = Duration;

    #[inline]
    fn mul(self, scalar: i64) -> Self::Output {
        Duration::from_millis(self.millis * scalar)
    }
}

impl Mul<Duration> for i64 {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: Duration) -> Self::Output {
        rhs * self
    }
}

/// Scaled span, truncated toward zero
impl Mul<f64> for Duration {
    type Output = Duration;

    #[inline]
    fn mul(self, scalar: f64) -> Self::Output {
        Duration::from_millis_f64(self.millis as f64 * scalar)
    }
}

impl Mul<Duration> for f64 {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: Duration) -> Self::Output {
        rhs * self
    }
}

/// # Panics
/// Panics if `scalar` is zero.
impl Div<i64> for Duration {
    type Output = Duration;

    #[inline]
    fn div(self, scalar: i64) -> Self::Output {
        Duration::from_millis(self.millis / scalar)
    }
}

/// Rounded to the nearest millisecond, ties to even, so repeated
/// division does not drift toward zero.
impl Div<f64> for Duration {
    type Output = Duration;

    #[inline]
    fn div(self, scalar: f64) -> Self::Output {
        Duration::from_millis((self.millis as f64 / scalar).round_ties_even() as i64)
    }
}

/// Integer ratio of two spans.
///
/// # Panics
/// Panics if `rhs` is zero.
impl Div for Duration {
    type Output = i64;

    #[inline]
    fn div(self, rhs: Duration) -> Self::Output {
        self.millis / rhs.millis
    }
}

impl Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Self {
        iter.fold(Duration::ZERO, Add::add)
    }
}

impl fmt::Display for Duration {
    /// `[-][D.]HH:MM:SS.fff`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        if self.day() != 0 {
            write!(f, "{}.", self.day().unsigned_abs())?;
        }
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour().unsigned_abs(),
            self.minute().unsigned_abs(),
            self.second().unsigned_abs(),
            self.millisecond().unsigned_abs()
        )
    }
}

impl fmt::Debug for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duration({}ms)", self.millis)
    }
}
