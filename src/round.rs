// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Rounding durations to multiples of other durations.

use crate::duration::Duration;
use crate::util::abs;

impl Duration {
    /// Round toward zero to a multiple of `m`.
    ///
    /// If `m <= 0`, returns `self` unchanged.
    ///
    /// # Examples
    /// ```
    /// use nanodur::Duration;
    ///
    /// let d: Duration = "1h15m30.918273645s".parse().unwrap();
    /// assert_eq!(d.truncate(Duration::MINUTE).to_string(), "1h15m0s");
    /// assert_eq!((-d).truncate(Duration::HOUR).to_string(), "-1h0m0s");
    /// ```
    pub fn truncate(self, m: Duration) -> Duration {
        let (d, m) = (self.nanoseconds(), m.nanoseconds());
        if m <= 0 {
            return self;
        }
        Duration::from_nanos(d - d % m)
    }

    /// Round to the nearest multiple of `m`, with halfway values rounded away from zero.
    ///
    /// If the result would be greater than `Duration::MAX` (or less than `Duration::MIN`), returns
    /// `Duration::MAX` (or `Duration::MIN`). If `m <= 0`, returns `self` unchanged.
    pub fn round(self, m: Duration) -> Duration {
        let (d, m) = (self.nanoseconds(), m.nanoseconds());
        if m <= 0 {
            return self;
        }

        // Truncating remainder: has the sign of d, and |r| < m.
        let r = d % m;
        if less_than_half(r, m) {
            return Duration::from_nanos(d - r);
        }

        // Away from zero. m - |r| is in (0, m] so can't overflow.
        let step = m - r.abs();
        let rounded = if d < 0 {
            d.checked_sub(step)
        } else {
            d.checked_add(step)
        };
        match rounded {
            Some(v) => Duration::from_nanos(v),
            None => {
                let saturated = if d < 0 { Duration::MIN } else { Duration::MAX };
                debug!("rounding {} to a multiple of {}ns saturated", self, m);
                saturated
            }
        }
    }

    /// The absolute value of the duration.
    ///
    /// `Duration::MIN` has no positive counterpart, so its absolute value saturates to
    /// `Duration::MAX`.
    pub fn abs(self) -> Duration {
        match self.checked_neg() {
            Some(neg) if self.is_negative() => neg,
            Some(_) => self,
            None => {
                debug!("absolute value of {} saturated", self);
                Duration::MAX
            }
        }
    }
}

impl std::ops::Neg for Duration {
    type Output = Duration;

    /// # Panics
    /// - If `self` is `Duration::MIN`. Use `Duration::checked_neg` to avoid this.
    fn neg(self) -> Duration {
        match self.checked_neg() {
            Some(d) => d,
            None => panic!("attempt to negate Duration::MIN"),
        }
    }
}

/// Whether `2 * |r| < m`, for `|r| < m` and `m > 0`.
///
/// `2 * |r|` can overflow an `i64` but always fits in a `u64`.
fn less_than_half(r: i64, m: i64) -> bool {
    abs(r) + abs(r) < abs(m)
}
