//! dca-dates - DCA date selection diagnostics
//!
//! Prints the ten-year lookback pair and the weekly purchase dates used by the
//! DCA pages so the two selections can be compared by eye, plus a comparison
//! of week-of-year numbering schemes.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DcaError;
