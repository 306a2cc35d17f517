// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! A signed nanosecond `Duration` with an exact text format.
//!
//! ```
//! use nanodur::Duration;
//!
//! let d: Duration = "1h15m30.5s".parse().unwrap();
//! assert_eq!(d.nanoseconds(), 4_530_500_000_000);
//! assert_eq!(d.to_string(), "1h15m30.5s");
//! assert_eq!(d.round(Duration::MINUTE).to_string(), "1h16m0s");
//! ```

#[macro_use]
mod logging;

pub mod duration;
pub mod error;
pub mod format;
pub mod parse;
mod round;
#[cfg(feature = "serde")]
pub mod serialize;
pub mod unit;
pub mod util;

pub use duration::Duration;
pub use error::{Error, ErrorKind, Result};
pub use unit::Unit;
