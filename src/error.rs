// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Error types.
use miette::{Diagnostic, SourceSpan};
use thiserror::Error as ThisError;

use crate::unit::SUFFIXES;

pub use crate::util::ConvertIntError;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    Syntax,
    MissingUnit,
    UnknownUnit,
    Overflow,
}

/// Error returned when a duration string can't be parsed.
///
/// Every variant holds the complete input string and a `span` pointing at the part of it that is
/// invalid, so a `miette::Report` made from the error renders the input with the bad part
/// labelled.
#[derive(Debug, Diagnostic, ThisError)]
#[must_use]
pub enum Error {
    /// The input is empty (after any sign), a component has no digits, or a component starts
    /// with something other than a digit or `.`.
    ///
    /// E.g. `""`, `"-"`, `".s"`, `"1s x"`.
    #[error("invalid duration {input:?}")]
    #[diagnostic()]
    Syntax {
        #[source_code]
        input: String,

        #[label("expected a number")]
        span: SourceSpan,
    },

    /// A number isn't followed by a unit.
    ///
    /// E.g. `"10"`, `"1h30"`.
    #[error("missing unit in duration {input:?}")]
    #[diagnostic()]
    MissingUnit {
        #[source_code]
        input: String,

        #[label("expected a unit after this number")]
        span: SourceSpan,
    },

    /// A number is followed by text that isn't a known unit.
    ///
    /// E.g. `"10xyz"`, `"1d"`.
    #[error(
        "unknown unit {unit:?} in duration {input:?} (expecting one of {})",
        itertools::join(SUFFIXES.iter(), ", ")
    )]
    #[diagnostic()]
    UnknownUnit {
        #[source_code]
        input: String,

        #[label("unknown unit")]
        span: SourceSpan,

        unit: String,
    },

    /// The value doesn't fit in a `Duration`.
    ///
    /// Raised for an integer part with too many digits, for an integer part that overflows when
    /// multiplied by its unit, and for a running total that overflows.
    #[error("invalid duration {input:?}: out of range")]
    #[diagnostic()]
    Overflow {
        #[source_code]
        input: String,

        #[label("out of range")]
        span: SourceSpan,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Syntax { .. } => ErrorKind::Syntax,
            Error::MissingUnit { .. } => ErrorKind::MissingUnit,
            Error::UnknownUnit { .. } => ErrorKind::UnknownUnit,
            Error::Overflow { .. } => ErrorKind::Overflow,
        }
    }

    /// The complete string that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Error::Syntax { input, .. }
            | Error::MissingUnit { input, .. }
            | Error::UnknownUnit { input, .. }
            | Error::Overflow { input, .. } => input,
        }
    }

    /// The region of the input that the error refers to.
    #[must_use]
    pub fn span(&self) -> SourceSpan {
        match self {
            Error::Syntax { span, .. }
            | Error::MissingUnit { span, .. }
            | Error::UnknownUnit { span, .. }
            | Error::Overflow { span, .. } => *span,
        }
    }
}

/// A value or an `Error`
pub type Result<T> = std::result::Result<T, Box<Error>>;
