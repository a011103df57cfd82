//! CLI command definitions

use crate::domain::calendar::parse_iso_date;
use crate::infrastructure::ReportSettings;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dca-dates")]
#[command(about = "Print the date selections behind the DCA pages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file overriding the built-in dates and amounts
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the lookback pair and weekly sequence (default)
    Report(ReportArgs),

    /// Compare week-of-year numbering schemes
    Weeks {
        /// Dates to inspect (YYYY-MM-DD); defaults to year-boundary dates
        dates: Vec<String>,
    },
}

/// Per-run overrides of the report settings
#[derive(Args, Debug, Default, Clone)]
pub struct ReportArgs {
    /// End of the lookback window
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub lookback_end: Option<NaiveDate>,

    /// Length of the lookback window in years
    #[arg(long)]
    pub years: Option<u32>,

    /// First date of the weekly sequence
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub anchor: Option<NaiveDate>,

    /// Last date (inclusive) of the weekly sequence
    #[arg(long, value_name = "DATE", value_parser = parse_date_arg)]
    pub weekly_end: Option<NaiveDate>,

    /// Amount invested on each weekly date
    #[arg(long)]
    pub amount: Option<u64>,
}

impl ReportArgs {
    /// Apply the given overrides on top of `settings`
    pub fn apply(&self, mut settings: ReportSettings) -> ReportSettings {
        if let Some(date) = self.lookback_end {
            settings.lookback_end = date;
        }
        if let Some(years) = self.years {
            settings.lookback_years = years;
        }
        if let Some(date) = self.anchor {
            settings.weekly_anchor = date;
        }
        if let Some(date) = self.weekly_end {
            settings.weekly_end = date;
        }
        if let Some(amount) = self.amount {
            settings.contribution = amount;
        }
        settings
    }
}

fn parse_date_arg(input: &str) -> Result<NaiveDate, String> {
    parse_iso_date(input).map_err(|e| e.to_string())
}
