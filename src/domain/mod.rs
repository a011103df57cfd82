//! Domain layer - Date arithmetic and week numbering

pub mod calendar;
pub mod lookback;
pub mod week_numbering;
pub mod weekly;

pub use lookback::LookbackPair;
pub use week_numbering::WeekNumbers;
pub use weekly::{WeeklyDateSequence, WeeklySchedule};
