//! Weekly date sequence between an anchor date and an inclusive end date

use crate::error::{DcaError, Result};
use chrono::{Duration, NaiveDate};

/// Days between consecutive dates of a weekly sequence
pub const WEEK_STRIDE_DAYS: i64 = 7;

/// Anchor and inclusive end of a weekly sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySchedule {
    pub anchor: NaiveDate,
    pub end: NaiveDate,
}

impl WeeklySchedule {
    pub fn new(anchor: NaiveDate, end: NaiveDate) -> Self {
        WeeklySchedule { anchor, end }
    }

    /// Iterate the dates of this schedule
    pub fn dates(&self) -> WeeklyDates {
        WeeklyDates {
            next: Some(self.anchor),
            end: self.end,
        }
    }

    /// Collect the full sequence
    pub fn sequence(&self) -> WeeklyDateSequence {
        WeeklyDateSequence {
            dates: self.dates().collect(),
        }
    }

    /// Number of dates the schedule yields, computed from the day span
    pub fn expected_count(&self) -> usize {
        let span = (self.end - self.anchor).num_days();
        if span < 0 {
            0
        } else {
            (span / WEEK_STRIDE_DAYS + 1) as usize
        }
    }
}

/// Iterator over weekly dates, stopping at the first date past the end
#[derive(Debug, Clone)]
pub struct WeeklyDates {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for WeeklyDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|date| *date <= self.end)?;
        self.next = current.checked_add_signed(Duration::days(WEEK_STRIDE_DAYS));
        Some(current)
    }
}

/// Materialized weekly sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyDateSequence {
    dates: Vec<NaiveDate>,
}

impl WeeklyDateSequence {
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Up to `n` dates from the start
    pub fn first(&self, n: usize) -> &[NaiveDate] {
        &self.dates[..n.min(self.dates.len())]
    }

    /// Up to `n` dates from the end
    pub fn last(&self, n: usize) -> &[NaiveDate] {
        &self.dates[self.dates.len().saturating_sub(n)..]
    }

    /// Total invested when buying `contribution` on every date
    pub fn expected_investment(&self, contribution: u64) -> Result<u64> {
        let count = self.dates.len();
        (count as u64)
            .checked_mul(contribution)
            .ok_or(DcaError::InvestmentOverflow {
                count,
                contribution,
            })
    }
}
