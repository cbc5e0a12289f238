//! Date formatting
//!
//! Renders civil dates either as ISO `YYYY-MM-DD` strings or in the en-US
//! long form used by the human-readable schedule output.

use chrono::NaiveDate;

/// Format a date as `YYYY-MM-DD`
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use chroney_common::time::format_iso_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(format_iso_date(date), "2024-03-09");
/// ```
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a date in long form, e.g. `Monday, January 1, 2024`
///
/// Matches the en-US `weekday, month day, year` presentation.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use chroney_common::time::format_long_date;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(format_long_date(date), "Thursday, February 29, 2024");
/// ```
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::format.
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_date_pads_month_and_day() {
        assert_eq!(format_iso_date(date(2024, 1, 1)), "2024-01-01");
        assert_eq!(format_iso_date(date(1999, 12, 31)), "1999-12-31");
    }

    #[test]
    fn test_long_date_has_no_day_padding() {
        assert_eq!(format_long_date(date(2024, 1, 1)), "Monday, January 1, 2024");
        assert_eq!(format_long_date(date(2024, 1, 7)), "Sunday, January 7, 2024");
        assert_eq!(format_long_date(date(2025, 12, 25)), "Thursday, December 25, 2025");
    }
}
