// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The table of time units accepted in duration strings.

use std::fmt;

/// A unit of time that can appear as a suffix in a duration string.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Unit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
}

/// Map from every accepted suffix to its unit.
///
/// The microsecond has three spellings: ASCII `us`, U+00B5 MICRO SIGN and U+03BC GREEK SMALL
/// LETTER MU.
static UNITS: phf::Map<&'static str, Unit> = phf::phf_map! {
    "ns" => Unit::Nanosecond,
    "us" => Unit::Microsecond,
    "\u{b5}s" => Unit::Microsecond,
    "\u{3bc}s" => Unit::Microsecond,
    "ms" => Unit::Millisecond,
    "s" => Unit::Second,
    "m" => Unit::Minute,
    "h" => Unit::Hour,
};

/// Every accepted suffix, smallest unit first.
pub const SUFFIXES: [&str; 8] = ["ns", "us", "\u{b5}s", "\u{3bc}s", "ms", "s", "m", "h"];

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Unit; 6] = [
        Unit::Nanosecond,
        Unit::Microsecond,
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
    ];

    /// Look up the unit for a suffix from a duration string.
    ///
    /// # Returns
    /// - `None` if `suffix` is not a known unit. Matching is exact: no case folding or trimming
    ///   is done.
    pub fn from_suffix(suffix: &str) -> Option<Unit> {
        UNITS.get(suffix).copied()
    }

    /// The number of nanoseconds in one of this unit.
    #[must_use]
    pub const fn nanos(self) -> i64 {
        match self {
            Unit::Nanosecond => 1,
            Unit::Microsecond => 1_000,
            Unit::Millisecond => 1_000_000,
            Unit::Second => 1_000_000_000,
            Unit::Minute => 60_000_000_000,
            Unit::Hour => 3_600_000_000_000,
        }
    }

    /// The suffix used when formatting a value in this unit.
    ///
    /// Microseconds format with U+00B5 MICRO SIGN.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Nanosecond => "ns",
            Unit::Microsecond => "\u{b5}s",
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
