//! Lookback window: an end date and the same calendar day N years earlier

use crate::domain::calendar::years_before;
use crate::error::Result;
use chrono::NaiveDate;

/// Default lookback length in years
pub const DEFAULT_LOOKBACK_YEARS: u32 = 10;

/// Start and end of a lookback window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookbackPair {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl LookbackPair {
    /// Build the pair ending at `end` and starting `years` years before it
    pub fn years_back(end: NaiveDate, years: u32) -> Result<Self> {
        let start = years_before(end, years)?;
        Ok(LookbackPair { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_ten_year_lookback() {
        let end = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let pair = LookbackPair::years_back(end, DEFAULT_LOOKBACK_YEARS).unwrap();

        assert_eq!(pair.start, NaiveDate::from_ymd_opt(2015, 9, 1).unwrap());
        assert_eq!(pair.end, end);
        assert_eq!(pair.start.year(), pair.end.year() - 10);
        assert_eq!(pair.start.month(), pair.end.month());
        assert_eq!(pair.start.day(), pair.end.day());
    }

    #[test]
    fn test_lookback_from_leap_day() {
        let end = NaiveDate::from_ymd_opt(2028, 2, 29).unwrap();
        let pair = LookbackPair::years_back(end, 10).unwrap();
        assert_eq!(pair.start, NaiveDate::from_ymd_opt(2018, 3, 1).unwrap());
    }
}
