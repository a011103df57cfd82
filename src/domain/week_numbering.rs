//! Week-of-year numbering schemes used when bucketing weekly purchases

use chrono::{Datelike, NaiveDate, Weekday};

/// Highest week number the 52-week schemes report
pub const MAX_CALENDAR_WEEK: u32 = 52;

/// Week numbers of a single date under each scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekNumbers {
    pub date: NaiveDate,
    /// ISO-8601 week, Monday start, 1..=53
    pub iso: u32,
    /// Sunday-start week; days before the first Sunday are week 0
    pub us: u32,
    /// Day of year divided into 7-day blocks, capped at 52
    pub simple: u32,
    /// Weeks from the first Monday of the year, capped at 52
    pub financial: u32,
    pub weekday: Weekday,
}

impl WeekNumbers {
    pub fn of(date: NaiveDate) -> Self {
        WeekNumbers {
            date,
            iso: date.iso_week().week(),
            us: us_week(date),
            simple: simple_week(date),
            financial: financial_week(date),
            weekday: date.weekday(),
        }
    }
}

fn us_week(date: NaiveDate) -> u32 {
    (date.ordinal0() + 7 - date.weekday().num_days_from_sunday()) / 7
}

fn simple_week(date: NaiveDate) -> u32 {
    (date.ordinal0() / 7 + 1).min(MAX_CALENDAR_WEEK)
}

fn financial_week(date: NaiveDate) -> u32 {
    let ordinal0 = date.ordinal0();
    let jan1_from_monday = (date.weekday().num_days_from_monday() + 7 - ordinal0 % 7) % 7;
    let first_monday = (7 - jan1_from_monday) % 7;

    if ordinal0 < first_monday {
        // Belongs to the tail of the previous year's last week
        return 1;
    }
    ((ordinal0 - first_monday) / 7 + 1).min(MAX_CALENDAR_WEEK)
}

/// Full English weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
