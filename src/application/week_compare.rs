//! Week numbering comparison use case

use crate::domain::calendar::parse_iso_date;
use crate::domain::WeekNumbers;
use crate::error::Result;
use tracing::debug;

/// Dates around the 2015/2016 and 2020/2021 year boundaries
pub const BOUNDARY_PROBE_DATES: &[&str] = &[
    "2015-12-28",
    "2015-12-29",
    "2015-12-30",
    "2015-12-31",
    "2016-01-01",
    "2016-01-04",
    "2020-12-28",
    "2020-12-29",
    "2020-12-30",
    "2020-12-31",
    "2021-01-01",
    "2021-01-04",
];

/// Week numbers for the given dates, or for the boundary probes when none are given
pub fn compare_weeks<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<WeekNumbers>> {
    let rows = if inputs.is_empty() {
        debug!("no dates given, using year-boundary probes");
        BOUNDARY_PROBE_DATES
            .iter()
            .map(|s| parse_iso_date(s).map(WeekNumbers::of))
            .collect::<Result<Vec<_>>>()?
    } else {
        inputs
            .iter()
            .map(|s| parse_iso_date(s.as_ref()).map(WeekNumbers::of))
            .collect::<Result<Vec<_>>>()?
    };
    Ok(rows)
}
