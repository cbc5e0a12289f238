//! Fixed reference offset
//!
//! Every civil date Chroney reads or prints is interpreted at one fixed UTC
//! offset. The default is UTC-07:00; deployments may choose another, but
//! always a fixed one, never the host's floating local zone.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CommonError;

const SECONDS_PER_HOUR: i32 = 3600;
const SECONDS_PER_MINUTE: i32 = 60;
const DEFAULT_OFFSET_SECONDS: i32 = -7 * SECONDS_PER_HOUR;

/// A fixed UTC offset, stored in seconds east of UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceOffset {
    seconds_east: i32,
}

impl ReferenceOffset {
    /// UTC itself
    pub const fn utc() -> Self {
        Self { seconds_east: 0 }
    }

    /// Build an offset from hours and minutes east of UTC
    ///
    /// The sign of `hours` applies to `minutes` as well, so `(-7, 30)` is
    /// `-07:30`.
    ///
    /// # Errors
    /// Returns `CommonError::Validation` when the offset is a day or more.
    pub fn from_hours_minutes(hours: i32, minutes: i32) -> Result<Self, CommonError> {
        if !(0..60).contains(&minutes) || !(-23..=23).contains(&hours) {
            return Err(CommonError::validation_with_value(
                "utc_offset",
                "offset must be between -23:59 and +23:59",
                format!("{hours}:{minutes}"),
            ));
        }
        let magnitude = hours.abs() * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE;
        let seconds_east = if hours < 0 { -magnitude } else { magnitude };
        Ok(Self { seconds_east })
    }

    /// Seconds east of UTC
    pub const fn seconds_east(&self) -> i32 {
        self.seconds_east
    }

    /// The offset as a chrono [`FixedOffset`]
    pub fn fixed(&self) -> FixedOffset {
        FixedOffset::east_opt(self.seconds_east).unwrap_or_else(|| Utc.fix())
    }

    /// Civil date of `instant` as seen at this offset
    pub fn civil_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.fixed()).date_naive()
    }
}

impl Default for ReferenceOffset {
    fn default() -> Self {
        Self { seconds_east: DEFAULT_OFFSET_SECONDS }
    }
}

impl fmt::Display for ReferenceOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds_east < 0 { '-' } else { '+' };
        let magnitude = self.seconds_east.abs();
        let hours = magnitude / SECONDS_PER_HOUR;
        let minutes = (magnitude % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        write!(f, "{sign}{hours:02}:{minutes:02}")
    }
}

impl FromStr for ReferenceOffset {
    type Err = CommonError;

    /// Accepts `Z`, `UTC`, `+HH`, `+HHMM` and `+HH:MM` (either sign).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
            return Ok(Self::utc());
        }

        let invalid = || {
            CommonError::validation_with_value(
                "utc_offset",
                "expected a fixed offset such as -07:00",
                s,
            )
        };

        let (negative, digits) = match trimmed.chars().next() {
            Some('+') => (false, &trimmed[1..]),
            Some('-') => (true, &trimmed[1..]),
            _ => return Err(invalid()),
        };

        if !digits.is_ascii() {
            return Err(invalid());
        }

        let (hours, minutes) = match digits.len() {
            2 => (digits, "00"),
            4 => digits.split_at(2),
            5 if digits.as_bytes()[2] == b':' => (&digits[..2], &digits[3..]),
            _ => return Err(invalid()),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(hours) || !all_digits(minutes) {
            return Err(invalid());
        }

        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
            return Err(invalid());
        }

        let magnitude = hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE;
        Ok(Self { seconds_east: if negative { -magnitude } else { magnitude } })
    }
}

impl Serialize for ReferenceOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ReferenceOffset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
