// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Formatting durations as strings.
//!
//! The canonical form is a sequence of components, largest unit first, e.g. `"72h3m0.5s"`:
//! - Durations of at least one second always have a seconds component, with up to nine
//!   fractional digits. A minutes component is only present if the duration is at least one
//!   minute, and an hours component only if it's at least one hour. Minutes and seconds are
//!   always present once a larger unit is, even if they're zero (`"1h0m0s"`).
//! - Durations shorter than one second use a single component in the largest unit that keeps
//!   the integer part non-zero: `"1.5ms"`, `"1.5µs"`, `"1ns"`.
//! - Trailing zeros in the fraction are omitted, along with the `.` if the fraction is zero.
//! - The zero duration is `"0s"`.
//!
//! Every string produced here is accepted by the parser and parses back to the same duration.

use std::fmt::{self, Write};

use crate::duration::Duration;
use crate::unit::Unit;
use crate::util::abs;

/// Format a duration in the canonical form.
///
/// # Examples
/// ```
/// use nanodur::{format::format, Duration};
///
/// assert_eq!(format(Duration::from_nanos(1_500_000)), "1.5ms");
/// assert_eq!(format(Duration::from_nanos(-90_000_000_000)), "-1m30s");
/// ```
#[must_use]
pub fn format(d: Duration) -> String {
    d.to_string()
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_duration(f, *self)
    }
}

fn write_duration<W: Write>(w: &mut W, d: Duration) -> fmt::Result {
    let nanos = d.nanoseconds();

    // Use the unsigned magnitude: the magnitude of Duration::MIN doesn't fit in an i64.
    let u = abs(nanos);
    if u == 0 {
        return w.write_str("0s");
    }
    if nanos < 0 {
        w.write_char('-')?;
    }

    if u < unit_nanos(Unit::Second) {
        let (unit, prec) = if u < unit_nanos(Unit::Microsecond) {
            (Unit::Nanosecond, 0)
        } else if u < unit_nanos(Unit::Millisecond) {
            (Unit::Microsecond, 3)
        } else {
            (Unit::Millisecond, 6)
        };
        let (int, frac) = split_frac(u, prec);
        write!(w, "{}", int)?;
        write_frac(w, frac, prec)?;
        return w.write_str(unit.suffix());
    }

    let (secs, frac) = split_frac(u, 9);
    let mins = secs / 60;
    if mins > 0 {
        let hours = mins / 60;
        if hours > 0 {
            write!(w, "{}h", hours)?;
        }
        write!(w, "{}m", mins % 60)?;
    }
    write!(w, "{}", secs % 60)?;
    write_frac(w, frac, 9)?;
    w.write_str(Unit::Second.suffix())
}

fn unit_nanos(unit: Unit) -> u64 {
    abs(unit.nanos())
}

/// Split `v` into `v / 10^prec` and `v % 10^prec`.
fn split_frac(v: u64, prec: u32) -> (u64, u64) {
    let p = 10u64.pow(prec);
    (v / p, v % p)
}

/// Write `frac`, a fraction with `prec` decimal digits, as `.ddd` without trailing zeros.
///
/// Writes nothing if `frac` is zero.
fn write_frac<W: Write>(w: &mut W, mut frac: u64, mut prec: u32) -> fmt::Result {
    if frac == 0 {
        return Ok(());
    }
    while frac % 10 == 0 {
        frac /= 10;
        prec -= 1;
    }
    write!(w, ".{:0width$}", frac, width = prec as usize)
}
