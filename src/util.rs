// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! General utilities

use std::any;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

/// Error returned when an integer doesn't fit in the type it's being converted to.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("Failed converting integer {value} from type {from} to type {to}")]
pub struct ConvertIntError {
    from: String,
    to: String,
    value: String,
}

impl ConvertIntError {
    /// The name of the type the conversion was from.
    pub fn from_type(&self) -> &str {
        &self.from
    }

    /// The name of the type the conversion was to.
    pub fn to_type(&self) -> &str {
        &self.to
    }

    /// The value that failed to convert, in decimal.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Convert between integer types.
///
/// The difference between `To::try_from(value)` and `convert_int<To, _>(value)` is that
/// `convert_int` returns an error type (`ConvertIntError`) from which we can get details of
/// the failed conversion.
pub fn convert_int<To, From>(value: From) -> StdResult<To, Box<ConvertIntError>>
where
    To: TryFrom<From>,
    From: Copy + ToString,
{
    To::try_from(value).map_err(|_| {
        Box::new(ConvertIntError {
            from: any::type_name::<From>().to_owned(),
            to: any::type_name::<To>().to_owned(),
            value: value.to_string(),
        })
    })
}

/// Trait for types that provide an infallible method to get an absolute value.
///
/// Note that `abs()` methods on built-in signed integer types are not infallible because they
/// return Self, which can't represent the absolute value of Self::MIN.
pub trait InfallibleAbs {
    type Output;

    /// Get the absolute value of `self`.
    fn infallible_abs(&self) -> Self::Output;
}

impl InfallibleAbs for i64 {
    type Output = u64;

    fn infallible_abs(&self) -> Self::Output {
        self.unsigned_abs()
    }
}

/// Get the absolute value of a number.
///
/// Unlike e.g. `T::abs`, which returns a `T`, `abs::<T>` is infallible because it returns
/// an unsigned type big enough to hold the result even when the input value is `T::MIN`.
pub fn abs<T>(num: T) -> <T as InfallibleAbs>::Output
where
    T: InfallibleAbs,
{
    num.infallible_abs()
}
