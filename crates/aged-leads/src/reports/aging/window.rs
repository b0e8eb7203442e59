use super::domain::TimeWindow;
use crate::reports::ingest::PipelineRecord;
use chrono::{Months, NaiveDateTime};

/// Start of the trailing window. `now` is supplied by the caller so a
/// whole invocation sees one consistent timestamp.
pub fn window_cutoff(window: TimeWindow, now: NaiveDateTime) -> Option<NaiveDateTime> {
    now.checked_sub_months(Months::new(window.months()))
}

/// Retains records whose completion date is present and on or after
/// the cutoff. Records without a completion date are dropped.
pub fn within_window(
    records: &[PipelineRecord],
    window: TimeWindow,
    now: NaiveDateTime,
) -> Vec<&PipelineRecord> {
    let cutoff = match window_cutoff(window, now) {
        Some(cutoff) => cutoff,
        None => return Vec::new(),
    };

    records
        .iter()
        .filter(|record| record.completion.is_some_and(|completed| completed >= cutoff))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at_midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .expect("valid date")
            .and_hms_opt(0, 0, 0)
            .expect("valid time")
    }

    fn completed_on(datetime: NaiveDateTime) -> PipelineRecord {
        PipelineRecord {
            completion: Some(datetime),
            ..PipelineRecord::default()
        }
    }

    #[test]
    fn cutoff_is_inclusive() {
        let now = at_midnight(2024, 7, 1);
        let records = vec![
            completed_on(at_midnight(2024, 1, 1)),
            completed_on(at_midnight(2023, 12, 31)),
        ];

        let kept = within_window(&records, TimeWindow::SixMonths, now);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].completion, Some(at_midnight(2024, 1, 1)));
    }

    #[test]
    fn twelve_month_window_reaches_further_back() {
        let now = at_midnight(2024, 7, 1);
        let records = vec![completed_on(at_midnight(2023, 8, 15))];

        assert!(within_window(&records, TimeWindow::SixMonths, now).is_empty());
        assert_eq!(within_window(&records, TimeWindow::TwelveMonths, now).len(), 1);
    }

    #[test]
    fn records_without_completion_are_dropped() {
        let now = at_midnight(2024, 7, 1);
        let records = vec![PipelineRecord::default()];
        assert!(within_window(&records, TimeWindow::SixMonths, now).is_empty());
    }
}
