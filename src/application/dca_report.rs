//! DCA date report use case

use crate::domain::{LookbackPair, WeeklyDateSequence, WeeklySchedule};
use crate::error::Result;
use crate::infrastructure::ReportSettings;
use tracing::{debug, info};

/// Both date selections, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcaReport {
    pub lookback: LookbackPair,
    pub schedule: WeeklySchedule,
    pub sequence: WeeklyDateSequence,
    pub expected_investment: u64,
    pub preview_len: usize,
}

/// Compute the lookback pair and the weekly sequence from the settings
pub fn build_report(settings: &ReportSettings) -> Result<DcaReport> {
    let lookback = LookbackPair::years_back(settings.lookback_end, settings.lookback_years)?;
    debug!(start = %lookback.start, end = %lookback.end, "computed lookback pair");

    let schedule = WeeklySchedule::new(settings.weekly_anchor, settings.weekly_end);
    let sequence = schedule.sequence();
    let expected_investment = sequence.expected_investment(settings.contribution)?;
    info!(
        anchor = %schedule.anchor,
        end = %schedule.end,
        count = sequence.len(),
        expected_investment,
        "built weekly sequence"
    );

    Ok(DcaReport {
        lookback,
        schedule,
        sequence,
        expected_investment,
        preview_len: settings.preview_len,
    })
}
