//! Application layer - Use cases and orchestration

pub mod dca_report;
pub mod week_compare;

pub use dca_report::{build_report, DcaReport};
pub use week_compare::compare_weeks;
