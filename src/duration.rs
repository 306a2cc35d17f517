// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The `Duration` type.

use std::result::Result as StdResult;
use std::time;

use crate::unit::Unit;
use crate::util::{convert_int, ConvertIntError};

/// A signed span of time with nanosecond precision.
///
/// A `Duration` is a count of nanoseconds in an `i64`, so it covers roughly ±292 years. Every
/// `i64` is a valid `Duration`.
///
/// Durations format as strings like `"72h3m0.5s"` and parse from strings like `"2h45m"` or
/// `"-1.5ms"`; see the `format` and `parse` modules.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[must_use]
pub struct Duration(i64);

impl Duration {
    pub const NANOSECOND: Duration = Duration(Unit::Nanosecond.nanos());
    pub const MICROSECOND: Duration = Duration(Unit::Microsecond.nanos());
    pub const MILLISECOND: Duration = Duration(Unit::Millisecond.nanos());
    pub const SECOND: Duration = Duration(Unit::Second.nanos());
    pub const MINUTE: Duration = Duration(Unit::Minute.nanos());
    pub const HOUR: Duration = Duration(Unit::Hour.nanos());

    pub const ZERO: Duration = Duration(0);

    /// The most negative duration, `-2^63` nanoseconds.
    pub const MIN: Duration = Duration(i64::MIN);

    /// The most positive duration, `2^63 - 1` nanoseconds.
    pub const MAX: Duration = Duration(i64::MAX);

    /// Create a `Duration` from a count of nanoseconds.
    pub const fn from_nanos(nanos: i64) -> Duration {
        Duration(nanos)
    }

    /// Create a `Duration` of `count` of `unit`.
    ///
    /// # Returns
    /// - `None` if the result doesn't fit in a `Duration`.
    pub fn from_unit(count: i64, unit: Unit) -> Option<Duration> {
        count.checked_mul(unit.nanos()).map(Duration)
    }

    /// The duration as an integer nanosecond count.
    #[must_use]
    pub const fn nanoseconds(self) -> i64 {
        self.0
    }

    /// The duration as an integer microsecond count, truncated toward zero.
    #[must_use]
    pub const fn microseconds(self) -> i64 {
        self.0 / Unit::Microsecond.nanos()
    }

    /// The duration as an integer millisecond count, truncated toward zero.
    #[must_use]
    pub const fn milliseconds(self) -> i64 {
        self.0 / Unit::Millisecond.nanos()
    }

    /// The duration as a floating point number of seconds.
    #[must_use]
    pub fn seconds(self) -> f64 {
        self.as_float(Unit::Second)
    }

    /// The duration as a floating point number of minutes.
    #[must_use]
    pub fn minutes(self) -> f64 {
        self.as_float(Unit::Minute)
    }

    /// The duration as a floating point number of hours.
    #[must_use]
    pub fn hours(self) -> f64 {
        self.as_float(Unit::Hour)
    }

    /// Convert to a floating point count of `unit`.
    ///
    /// The whole units and the remainder are converted separately so that converting the result
    /// back to an integer rounds the same way integer division would have. Dividing the whole
    /// nanosecond count as an `f64` can round differently for large values.
    fn as_float(self, unit: Unit) -> f64 {
        let whole = self.0 / unit.nanos();
        let rem = self.0 % unit.nanos();
        whole as f64 + rem as f64 / unit.nanos() as f64
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// `-1`, `0` or `1` according to the sign of the duration.
    #[must_use]
    pub const fn signum(self) -> i64 {
        self.0.signum()
    }

    /// `self + rhs`, or `None` on overflow.
    pub fn checked_add(self, rhs: Duration) -> Option<Duration> {
        self.0.checked_add(rhs.0).map(Duration)
    }

    /// `self - rhs`, or `None` on overflow.
    pub fn checked_sub(self, rhs: Duration) -> Option<Duration> {
        self.0.checked_sub(rhs.0).map(Duration)
    }

    /// `self * rhs`, or `None` on overflow.
    pub fn checked_mul(self, rhs: i64) -> Option<Duration> {
        self.0.checked_mul(rhs).map(Duration)
    }

    /// `-self`, or `None` if `self` is `Duration::MIN`.
    pub fn checked_neg(self) -> Option<Duration> {
        self.0.checked_neg().map(Duration)
    }
}

impl From<i64> for Duration {
    fn from(nanos: i64) -> Self {
        Duration(nanos)
    }
}

impl From<Duration> for i64 {
    fn from(d: Duration) -> Self {
        d.0
    }
}

impl TryFrom<time::Duration> for Duration {
    type Error = Box<ConvertIntError>;

    /// Fails if the duration is longer than `Duration::MAX`.
    fn try_from(d: time::Duration) -> StdResult<Self, Self::Error> {
        convert_int::<i64, _>(d.as_nanos()).map(Duration)
    }
}

impl TryFrom<Duration> for time::Duration {
    type Error = Box<ConvertIntError>;

    /// Fails if the duration is negative.
    fn try_from(d: Duration) -> StdResult<Self, Self::Error> {
        convert_int::<u64, _>(d.0).map(time::Duration::from_nanos)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_ulps_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Duration::NANOSECOND.nanoseconds(), 1);
        assert_eq!(Duration::MICROSECOND.nanoseconds(), 1_000);
        assert_eq!(Duration::MILLISECOND.nanoseconds(), 1_000_000);
        assert_eq!(Duration::SECOND.nanoseconds(), 1_000_000_000);
        assert_eq!(Duration::MINUTE.nanoseconds(), 60_000_000_000);
        assert_eq!(Duration::HOUR.nanoseconds(), 3_600_000_000_000);
        assert_eq!(Duration::MIN.nanoseconds(), i64::MIN);
        assert_eq!(Duration::MAX.nanoseconds(), i64::MAX);
        assert_eq!(Duration::default(), Duration::ZERO);
    }

    #[rstest]
    #[case::zero(0, 0, 0)]
    #[case::sub_micro(999, 0, 0)]
    #[case::micro(1_000, 1, 0)]
    #[case::milli_and_a_bit(1_500_999, 1_500, 1)]
    #[case::neg_truncates_toward_zero(-1_500_999, -1_500, -1)]
    #[case::max(i64::MAX, 9_223_372_036_854_775, 9_223_372_036_854)]
    #[case::min(i64::MIN, -9_223_372_036_854_775, -9_223_372_036_854)]
    fn test_integer_accessors(#[case] nanos: i64, #[case] us: i64, #[case] ms: i64) {
        let d = Duration::from_nanos(nanos);
        assert_eq!(d.nanoseconds(), nanos);
        assert_eq!(d.microseconds(), us);
        assert_eq!(d.milliseconds(), ms);
    }

    #[rstest]
    #[case::zero(0, 0.0)]
    #[case::one_and_a_half(1_500_000_000, 1.5)]
    #[case::neg(-2_250_000_000, -2.25)]
    #[case::one_ns(1, 1e-9)]
    #[case::hour(3_600_000_000_000, 3600.0)]
    #[case::max(i64::MAX, 9_223_372_036.854_775_807)]
    fn test_seconds(#[case] nanos: i64, #[case] expected: f64) {
        assert_ulps_eq!(Duration::from_nanos(nanos).seconds(), expected, max_ulps = 4);
    }

    #[rstest]
    #[case::zero(0, 0.0)]
    #[case::ninety_secs(90_000_000_000, 1.5)]
    #[case::neg(-30_000_000_000, -0.5)]
    #[case::one_sec(1_000_000_000, 1.0 / 60.0)]
    fn test_minutes(#[case] nanos: i64, #[case] expected: f64) {
        assert_ulps_eq!(Duration::from_nanos(nanos).minutes(), expected, max_ulps = 4);
    }

    #[rstest]
    #[case::zero(0, 0.0)]
    #[case::ninety_mins(5_400_000_000_000, 1.5)]
    #[case::neg(-900_000_000_000, -0.25)]
    #[case::min(i64::MIN, -2_562_047.788_015_215_5)]
    fn test_hours(#[case] nanos: i64, #[case] expected: f64) {
        assert_ulps_eq!(Duration::from_nanos(nanos).hours(), expected, max_ulps = 4);
    }

    #[rstest]
    #[case::ok(3, Unit::Hour, Some(10_800_000_000_000))]
    #[case::neg(-3, Unit::Millisecond, Some(-3_000_000))]
    #[case::overflow(i64::MAX / 1000 + 1, Unit::Microsecond, None)]
    fn test_from_unit(#[case] count: i64, #[case] unit: Unit, #[case] expected: Option<i64>) {
        assert_eq!(
            Duration::from_unit(count, unit),
            expected.map(Duration::from_nanos)
        );
    }

    #[test]
    fn test_checked_arithmetic() {
        let one = Duration::NANOSECOND;
        assert_eq!(Duration::MAX.checked_add(one), None);
        assert_eq!(Duration::MIN.checked_sub(one), None);
        assert_eq!(Duration::MIN.checked_neg(), None);
        assert_eq!(Duration::MAX.checked_neg(), Some(Duration::from_nanos(-i64::MAX)));
        assert_eq!(
            Duration::SECOND.checked_add(Duration::MILLISECOND),
            Some(Duration::from_nanos(1_001_000_000))
        );
        assert_eq!(Duration::HOUR.checked_mul(2), Some(Duration::from_nanos(7_200_000_000_000)));
        assert_eq!(Duration::HOUR.checked_mul(i64::MAX), None);
    }

    #[rstest]
    #[case::neg(-5, true, false, -1)]
    #[case::zero(0, false, false, 0)]
    #[case::pos(5, false, true, 1)]
    fn test_sign(
        #[case] nanos: i64,
        #[case] negative: bool,
        #[case] positive: bool,
        #[case] signum: i64,
    ) {
        let d = Duration::from_nanos(nanos);
        assert_eq!(d.is_negative(), negative);
        assert_eq!(d.is_positive(), positive);
        assert_eq!(d.is_zero(), nanos == 0);
        assert_eq!(d.signum(), signum);
    }

    #[test]
    fn test_std_conversions() {
        let std_d = time::Duration::new(2, 5);
        let d = Duration::try_from(std_d).unwrap();
        assert_eq!(d.nanoseconds(), 2_000_000_005);
        assert_eq!(time::Duration::try_from(d).unwrap(), std_d);

        let err = time::Duration::try_from(Duration::from_nanos(-1)).unwrap_err();
        assert_eq!(err.value(), "-1");

        let too_big = time::Duration::from_secs(u64::MAX);
        assert!(Duration::try_from(too_big).is_err());
        assert_eq!(
            Duration::try_from(time::Duration::from_nanos(i64::MAX as u64)).unwrap(),
            Duration::MAX
        );
    }

    #[test]
    fn test_ordering() {
        assert!(Duration::MIN < Duration::ZERO);
        assert!(Duration::NANOSECOND < Duration::MICROSECOND);
        assert!(Duration::HOUR < Duration::MAX);
        assert_eq!(i64::from(Duration::from(42)), 42);
    }
}
