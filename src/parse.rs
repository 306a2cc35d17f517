// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Parsing durations from strings.
//!
//! A duration string is an optional sign followed by one or more components, each a decimal
//! number with an optional fraction and a unit suffix:
//!
//! ```plaintext
//! duration:  sign? component+ | sign? "0"
//! sign:      "+" | "-"
//! component: [0-9]* ("." [0-9]*)? unit      (with at least one digit)
//! unit:      "ns" | "us" | "µs" | "μs" | "ms" | "s" | "m" | "h"
//! ```
//!
//! E.g. `"300ms"`, `"-1.5h"`, `"2h45m"`, `"1h1h"`. The unit is the whole run of characters up to
//! the next digit or `.`, so `"1sec"` has the unknown unit `"sec"` rather than being `"1s"`
//! followed by junk.
//!
//! Parsing is exact: the result is the sum of each component's value in nanoseconds, with any
//! fractional nanoseconds truncated. Values outside the range of `Duration` are errors.

use std::str::FromStr;

use crate::duration::Duration;
use crate::error::{Error, Result};
use crate::unit::Unit;
use crate::util::abs;

/// Largest magnitude any intermediate value may reach: that of `Duration::MIN`.
const MAX_MAGNITUDE: u64 = 1 << 63;

/// Parse a duration string.
///
/// # Returns
/// - The parsed `Duration` on success.
/// - An `Error` classifying the problem otherwise. See `Error` for the kinds of error.
///
/// # Examples
/// ```
/// use nanodur::{parse::parse, Duration};
///
/// assert_eq!(parse("2h45m").unwrap(), Duration::from_nanos(9_900_000_000_000));
/// assert_eq!(parse("-1.5ms").unwrap(), Duration::from_nanos(-1_500_000));
/// assert!(parse("10").is_err());
/// ```
pub fn parse(input: &str) -> Result<Duration> {
    Parser::new(input).parse().map_err(|err| {
        trace!("rejected duration {:?}: {}", input, err);
        err
    })
}

impl Duration {
    /// Parse a duration string. Equivalent to `parse::parse`.
    pub fn parse(input: &str) -> Result<Duration> {
        parse(input)
    }
}

impl FromStr for Duration {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// A duration string parser.
#[must_use]
struct Parser<'i> {
    input: &'i str,
    offset: usize,
}

impl<'i> Parser<'i> {
    fn new(input: &'i str) -> Self {
        Self { input, offset: 0 }
    }

    fn parse(&mut self) -> Result<Duration> {
        let neg = match self.peek() {
            Some(b'-') => {
                self.offset += 1;
                true
            }
            Some(b'+') => {
                self.offset += 1;
                false
            }
            _ => false,
        };

        if self.remaining() == "0" {
            return Ok(Duration::ZERO);
        }
        if self.remaining().is_empty() {
            return Err(self.syntax_error(self.offset, 0));
        }

        let start = self.offset;

        // A negative total may reach the magnitude of Duration::MIN; a positive one only that of
        // Duration::MAX.
        let limit = if neg {
            MAX_MAGNITUDE
        } else {
            MAX_MAGNITUDE - 1
        };

        let mut total = 0u64;
        while self.peek().is_some() {
            let nanos = self.parse_component(limit)?;
            total = total
                .checked_add(nanos)
                .filter(|&t| t <= limit)
                .ok_or_else(|| self.overflow_error(start))?;
        }

        let nanos = if neg {
            0i64.checked_sub_unsigned(total)
        } else {
            i64::try_from(total).ok()
        };
        nanos
            .map(Duration::from_nanos)
            .ok_or_else(|| self.overflow_error(start))
    }

    /// Parse one `number unit` component, returning its magnitude in nanoseconds.
    fn parse_component(&mut self, limit: u64) -> Result<u64> {
        let start = self.offset;

        match self.peek() {
            Some(b'0'..=b'9' | b'.') => {}
            _ => {
                let len = self.remaining().chars().next().map_or(0, char::len_utf8);
                return Err(self.syntax_error(start, len));
            }
        }

        let (int, int_digits) = self.leading_int(limit)?;

        let mut frac = 0u64;
        let mut scale = 1u64;
        let mut frac_digits = 0;
        if self.peek() == Some(b'.') {
            self.offset += 1;
            (frac, scale, frac_digits) = self.leading_fraction();
        }

        // E.g. ".s" or "-.s".
        if int_digits == 0 && frac_digits == 0 {
            return Err(self.syntax_error(start, self.offset - start));
        }

        let unit = self.unit(start)?;
        let mult = abs(unit.nanos());

        let whole = int
            .checked_mul(mult)
            .filter(|&n| n <= limit)
            .ok_or_else(|| self.overflow_error(start))?;
        if frac == 0 {
            return Ok(whole);
        }

        // frac < scale, so the fractional part is less than one unit and fits in a u64.
        let frac_nanos = (u128::from(frac) * u128::from(mult) / u128::from(scale)) as u64;
        whole
            .checked_add(frac_nanos)
            .filter(|&n| n <= limit)
            .ok_or_else(|| self.overflow_error(start))
    }

    /// Consume a leading run of digits as an integer.
    ///
    /// # Returns
    /// - `(value, number of digits consumed)` on success.
    /// - An `Error::Overflow` if the value is greater than `limit`.
    fn leading_int(&mut self, limit: u64) -> Result<(u64, usize)> {
        let start = self.offset;
        let mut x = 0u64;
        while let Some(d) = self.peek_digit() {
            x = x
                .checked_mul(10)
                .and_then(|x| x.checked_add(d))
                .filter(|&x| x <= limit)
                .ok_or_else(|| {
                    let end = start + self.digit_run_len(start);
                    self.overflow_error_span(start, end - start)
                })?;
            self.offset += 1;
        }
        Ok((x, self.offset - start))
    }

    /// Consume a leading run of digits as the numerator of a decimal fraction.
    ///
    /// Digits that would overflow the numerator are consumed but otherwise ignored: they only
    /// affect precision beyond what a `Duration` can hold.
    ///
    /// # Returns
    /// `(numerator, scale, number of digits consumed)`, where the fraction is
    /// `numerator / scale`.
    fn leading_fraction(&mut self) -> (u64, u64, usize) {
        let start = self.offset;
        let mut x = 0u64;
        let mut scale = 1u64;
        let mut overflow = false;
        while let Some(d) = self.peek_digit() {
            self.offset += 1;
            if overflow {
                continue;
            }
            let next = x
                .checked_mul(10)
                .and_then(|x| x.checked_add(d))
                .filter(|&x| x <= MAX_MAGNITUDE);
            match (next, scale.checked_mul(10)) {
                (Some(next_x), Some(next_scale)) => {
                    x = next_x;
                    scale = next_scale;
                }
                _ => overflow = true,
            }
        }
        (x, scale, self.offset - start)
    }

    /// Consume a unit suffix: everything up to the next digit or `.`.
    ///
    /// `number_start` is the offset of the number the unit belongs to, used for error spans.
    fn unit(&mut self, number_start: usize) -> Result<Unit> {
        let start = self.offset;
        let len = self
            .remaining()
            .bytes()
            .take_while(|c| !c.is_ascii_digit() && *c != b'.')
            .count();
        if len == 0 {
            return Err(Box::new(Error::MissingUnit {
                input: self.input.to_owned(),
                span: (number_start, start - number_start).into(),
            }));
        }
        self.offset += len;

        // Digits and '.' are ASCII, so the run ends on a char boundary.
        let suffix = &self.input[start..self.offset];
        Unit::from_suffix(suffix).ok_or_else(|| {
            Box::new(Error::UnknownUnit {
                input: self.input.to_owned(),
                span: (start, len).into(),
                unit: suffix.to_owned(),
            })
        })
    }

    fn remaining(&self) -> &'i str {
        &self.input[self.offset..]
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.offset).copied()
    }

    fn peek_digit(&self) -> Option<u64> {
        self.peek()
            .filter(u8::is_ascii_digit)
            .map(|c| u64::from(c - b'0'))
    }

    fn digit_run_len(&self, from: usize) -> usize {
        self.input[from..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count()
    }

    fn syntax_error(&self, offset: usize, len: usize) -> Box<Error> {
        Box::new(Error::Syntax {
            input: self.input.to_owned(),
            span: (offset, len).into(),
        })
    }

    /// An overflow error covering everything from `start` to the current offset.
    fn overflow_error(&self, start: usize) -> Box<Error> {
        self.overflow_error_span(start, self.offset - start)
    }

    fn overflow_error_span(&self, offset: usize, len: usize) -> Box<Error> {
        Box::new(Error::Overflow {
            input: self.input.to_owned(),
            span: (offset, len).into(),
        })
    }
}
