//! Output formatting utilities

use crate::application::DcaReport;
use crate::domain::calendar::format_iso_date;
use crate::domain::week_numbering::weekday_name;
use crate::domain::WeekNumbers;
use chrono::NaiveDate;

/// Render the DCA report in its fixed line order
pub fn format_dca_report(report: &DcaReport) -> String {
    let sequence = &report.sequence;
    let mut output = String::new();

    output.push_str("DCA.HTML Logic:\n");
    output.push_str(&format!(
        "Start Date: {}\n",
        format_iso_date(report.lookback.start)
    ));
    output.push_str(&format!(
        "End Date: {}\n",
        format_iso_date(report.lookback.end)
    ));

    output.push_str("\nDCA-STRAT.HTML Logic (weekly intervals):\n");
    output.push_str(&format!(
        "Start Date: {}\n",
        format_iso_date(report.schedule.anchor)
    ));
    output.push_str(&format!(
        "End Date: {}\n",
        format_iso_date(report.schedule.end)
    ));
    output.push_str(&format!("Total weekly intervals: {}\n", sequence.len()));
    output.push_str(&format!(
        "First few dates: {}\n",
        format_date_list(sequence.first(report.preview_len))
    ));
    output.push_str(&format!(
        "Last few dates: {}\n",
        format_date_list(sequence.last(report.preview_len))
    ));
    output.push_str(&format!(
        "Expected investment: {}\n",
        report.expected_investment
    ));

    output
}

/// Format dates as a bracketed list of quoted `YYYY-MM-DD` strings
pub fn format_date_list(dates: &[NaiveDate]) -> String {
    let items: Vec<String> = dates
        .iter()
        .map(|date| format!("'{}'", format_iso_date(*date)))
        .collect();
    format!("[{}]", items.join(", "))
}

/// Format the week numbering comparison table
pub fn format_week_table(rows: &[WeekNumbers]) -> String {
    let rule_len = 80;
    let mut output = String::new();

    output.push_str("Week Numbering Comparison:\n");
    output.push_str(&"=".repeat(rule_len));
    output.push('\n');
    output.push_str(&format!(
        "{:<12} {:<10} {:<12} {:<10} {:<10} {}\n",
        "Date", "ISO Week", "Simple Week", "US Week", "Financial", "Weekday"
    ));
    output.push_str(&"-".repeat(rule_len));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<12} {:<10} {:<12} {:<10} {:<10} {}\n",
            format_iso_date(row.date),
            row.iso,
            row.simple,
            row.us,
            row.financial,
            weekday_name(row.weekday)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::build_report;
    use crate::infrastructure::ReportSettings;

    #[test]
    fn test_format_empty_date_list() {
        assert_eq!(format_date_list(&[]), "[]");
    }

    #[test]
    fn test_format_date_list() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2015, 9, 14).unwrap(),
            NaiveDate::from_ymd_opt(2015, 9, 21).unwrap(),
        ];
        assert_eq!(format_date_list(&dates), "['2015-09-14', '2015-09-21']");
    }

    #[test]
    fn test_format_default_report() {
        let report = build_report(&ReportSettings::default()).unwrap();
        let expected = "\
DCA.HTML Logic:
Start Date: 2015-09-01
End Date: 2025-09-01

DCA-STRAT.HTML Logic (weekly intervals):
Start Date: 2015-09-14
End Date: 2025-09-01
Total weekly intervals: 521
First few dates: ['2015-09-14', '2015-09-21', '2015-09-28', '2015-10-05', '2015-10-12']
Last few dates: ['2025-08-04', '2025-08-11', '2025-08-18', '2025-08-25', '2025-09-01']
Expected investment: 13025
";
        assert_eq!(format_dca_report(&report), expected);
    }

    #[test]
    fn test_format_week_table() {
        let rows = vec![WeekNumbers::of(NaiveDate::from_ymd_opt(2016, 1, 1).unwrap())];
        let output = format_week_table(&rows);
        assert!(output.starts_with("Week Numbering Comparison:\n"));
        assert!(output.contains("2016-01-01   53         1            0          1          Friday"));
    }
}
