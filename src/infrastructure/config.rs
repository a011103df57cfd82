//! Report settings

use crate::domain::lookback::DEFAULT_LOOKBACK_YEARS;
use crate::error::{DcaError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Dates and amounts the DCA report is computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// End of the lookback window
    pub lookback_end: NaiveDate,
    pub lookback_years: u32,
    /// First date of the weekly sequence
    pub weekly_anchor: NaiveDate,
    /// Inclusive last date of the weekly sequence
    pub weekly_end: NaiveDate,
    /// Amount invested on each weekly date
    pub contribution: u64,
    /// How many dates to show from each end of the sequence
    pub preview_len: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        ReportSettings {
            lookback_end: DEFAULT_LOOKBACK_END,
            lookback_years: DEFAULT_LOOKBACK_YEARS,
            weekly_anchor: DEFAULT_WEEKLY_ANCHOR,
            weekly_end: DEFAULT_WEEKLY_END,
            contribution: 25,
            preview_len: 5,
        }
    }
}

impl ReportSettings {
    /// Load settings from a TOML file; missing keys keep their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DcaError::Config(format!("Config file not found: {}", path.display()))
            } else {
                DcaError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }
}

/// End of the DCA.HTML lookback window
pub const DEFAULT_LOOKBACK_END: NaiveDate = ymd(2025, 9, 1);
/// First purchase date of the DCA-STRAT.HTML weekly sequence
pub const DEFAULT_WEEKLY_ANCHOR: NaiveDate = ymd(2015, 9, 14);
pub const DEFAULT_WEEKLY_END: NaiveDate = ymd(2025, 9, 1);

// Evaluated at compile time, so an invalid literal fails the build
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid default date"),
    }
}
