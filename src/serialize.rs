// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Serde support, enabled by the `serde` feature.
//!
//! By default a `Duration` serializes as its canonical string (`"1h30m0s"`) and deserializes
//! from either a duration string or an integer count of nanoseconds. Use
//! `#[serde(with = "nanodur::serialize::nanoseconds")]` on a field to serialize it as an integer
//! count of nanoseconds instead.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::duration::Duration;

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, se: S) -> Result<S::Ok, S::Error> {
        se.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Duration, D::Error> {
        de.deserialize_any(Visitor)
    }
}

struct Visitor;

impl<'de> de::Visitor<'de> for Visitor {
    type Value = Duration;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a duration string like \"1h30m\" or an integer number of nanoseconds")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Duration, E> {
        Duration::parse(v).map_err(de::Error::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Duration, E> {
        Ok(Duration::from_nanos(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Duration, E> {
        let v = i64::try_from(v).map_err(|_| {
            de::Error::custom(format!(
                "got unsigned integer {v} nanoseconds, which is too big for a Duration"
            ))
        })?;
        self.visit_i64(v)
    }
}

/// (De)serialize a `Duration` as an integer number of nanoseconds.
pub mod nanoseconds {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::duration::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, se: S) -> Result<S::Ok, S::Error> {
        se.serialize_i64(d.nanoseconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Duration, D::Error> {
        i64::deserialize(de).map(Duration::from_nanos)
    }
}
