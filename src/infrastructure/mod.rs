//! Infrastructure layer - Settings files and logging

pub mod config;
pub mod logging;

pub use config::ReportSettings;
