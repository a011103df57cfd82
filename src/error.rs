//! Error types for dca-dates

use thiserror::Error;

/// Main error type for the dca-dates application
#[derive(Debug, Error)]
pub enum DcaError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Investment total overflows: {count} purchases of {contribution}")]
    InvestmentOverflow { count: usize, contribution: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl DcaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DcaError::Config(_)
            | DcaError::TomlDeserialize(_)
            | DcaError::InvestmentOverflow { .. } => 2,
            DcaError::InvalidDate(_) | DcaError::DateOutOfRange(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DcaError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Examples:\n\
                    dca-dates weeks 2016-01-01\n\
                    dca-dates report --anchor 2015-09-14",
                    input
                )
            }
            DcaError::DateOutOfRange(msg) => {
                format!(
                    "Date out of range: {}\n\n\
                    Suggestions:\n\
                    • Use a smaller --years value\n\
                    • Check the year of --lookback-end",
                    msg
                )
            }
            DcaError::InvestmentOverflow { .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Use a smaller --amount value\n\
                    • Shorten the weekly range with --anchor or --weekly-end",
                    self
                )
            }
            DcaError::Config(msg) => {
                if msg.contains("not found") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Check the path passed to --config\n\
                        • Run without --config to use the built-in dates",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DcaError
pub type Result<T> = std::result::Result<T, DcaError>;
