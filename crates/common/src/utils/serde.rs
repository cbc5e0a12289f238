//! Serialization utilities for common data types
//!
//! Reusable serde helpers shared by the domain and command layers.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Custom serialization module for a civil date as `[year, month, day]`
///
/// This is the date shape calendar-file encoders expect for all-day events.
///
/// # Usage
/// ```rust
/// use chrono::NaiveDate;
/// use chroney_common::civil_date_triple;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Example {
///     #[serde(with = "civil_date_triple")]
///     start: NaiveDate,
/// }
///
/// let example = Example { start: NaiveDate::from_ymd_opt(2024, 1, 9).unwrap() };
/// assert_eq!(serde_json::to_string(&example).unwrap(), r#"{"start":[2024,1,9]}"#);
/// ```
pub mod civil_date_triple {
    use super::*;

    /// Serde serialization result type
    type SerializeResult<S> = Result<<S as Serializer>::Ok, <S as Serializer>::Error>;

    /// Serialize a date as a `[year, month, day]` sequence
    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        (date.year(), date.month(), date.day()).serialize(serializer)
    }

    /// Deserialize a `[year, month, day]` sequence into a date
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (year, month, day) = <(i32, u32, u32)>::deserialize(deserializer)?;
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid calendar date [{year}, {month}, {day}]"))
        })
    }
}
