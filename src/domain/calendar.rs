//! Calendar date helpers shared by the report and week comparison

use crate::error::{DcaError, Result};
use chrono::{Datelike, NaiveDate};

/// Display format for every date the tool prints
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ISO_DATE_FORMAT)
        .map_err(|_| DcaError::InvalidDate(input.to_string()))
}

/// Format a date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Move a date back by whole years, keeping month and day.
///
/// Feb 29 landing in a non-leap year rolls over to Mar 1.
pub fn years_before(date: NaiveDate, years: u32) -> Result<NaiveDate> {
    let target_year = i32::try_from(years)
        .ok()
        .and_then(|y| date.year().checked_sub(y))
        .ok_or_else(|| out_of_range(date, years))?;

    if let Some(shifted) = date.with_year(target_year) {
        return Ok(shifted);
    }

    if date.month() == 2 && date.day() == 29 {
        if let Some(rolled) = NaiveDate::from_ymd_opt(target_year, 3, 1) {
            return Ok(rolled);
        }
    }

    Err(out_of_range(date, years))
}

fn out_of_range(date: NaiveDate, years: u32) -> DcaError {
    DcaError::DateOutOfRange(format!(
        "{} minus {} years",
        format_iso_date(date),
        years
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2025-09-01").unwrap(), ymd(2025, 9, 1));
        assert_eq!(parse_iso_date(" 2015-09-14 ").unwrap(), ymd(2015, 9, 14));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_iso_date("2025-13-01").is_err());
        assert!(parse_iso_date("01-09-2025").is_err());
        assert!(parse_iso_date("2023-02-29").is_err());
        match parse_iso_date("yesterday").unwrap_err() {
            DcaError::InvalidDate(s) => assert_eq!(s, "yesterday"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_format_pads_components() {
        assert_eq!(format_iso_date(ymd(2015, 9, 1)), "2015-09-01");
        assert_eq!(format_iso_date(ymd(987, 1, 2)), "0987-01-02");
    }

    #[test]
    fn test_years_before_same_month_day() {
        assert_eq!(years_before(ymd(2025, 9, 1), 10).unwrap(), ymd(2015, 9, 1));
        assert_eq!(years_before(ymd(2025, 9, 1), 0).unwrap(), ymd(2025, 9, 1));
    }

    #[test]
    fn test_years_before_leap_day_rolls_over() {
        assert_eq!(years_before(ymd(2024, 2, 29), 1).unwrap(), ymd(2023, 3, 1));
        // Leap year to leap year keeps Feb 29
        assert_eq!(years_before(ymd(2024, 2, 29), 4).unwrap(), ymd(2020, 2, 29));
    }

    #[test]
    fn test_years_before_out_of_range() {
        assert!(matches!(
            years_before(ymd(2025, 9, 1), u32::MAX),
            Err(DcaError::DateOutOfRange(_))
        ));
        assert!(matches!(
            years_before(ymd(2025, 9, 1), 1_000_000),
            Err(DcaError::DateOutOfRange(_))
        ));
    }
}
