//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, ReportArgs};
pub use output::{format_dca_report, format_date_list, format_week_table};
