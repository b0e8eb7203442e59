use super::super::classify::{age_bucket, employment_bucket};
use super::super::domain::{AgeBucket, EmploymentBucket, TimeWindow};
use super::super::window::within_window;
use super::views::{AgeBucketEntry, AgingReportSummary, EmploymentBucketEntry};
use crate::reports::ingest::PipelineRecord;
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// Raw bucket counts for one invocation: shortlisted age, hired age,
/// and hired employment tenure, all computed over the window-filtered
/// collections. Pure and single-pass; no state survives the call.
#[derive(Debug, Default)]
pub struct AgingReport {
    pub shortlisted_age: HashMap<AgeBucket, usize>,
    pub hired_age: HashMap<AgeBucket, usize>,
    pub hired_employment: HashMap<EmploymentBucket, usize>,
}

impl AgingReport {
    pub fn build(
        shortlisted: &[PipelineRecord],
        hired: &[PipelineRecord],
        window: TimeWindow,
        now: NaiveDateTime,
    ) -> Self {
        let shortlisted = within_window(shortlisted, window, now);
        let hired = within_window(hired, window, now);

        Self {
            shortlisted_age: count_buckets(&shortlisted, |record| age_bucket(record)),
            hired_age: count_buckets(&hired, |record| age_bucket(record)),
            hired_employment: count_buckets(&hired, |record| employment_bucket(record)),
        }
    }

    /// Ordered, zero-filled tables. Every bucket label appears exactly
    /// once, in declared order, even when nothing mapped to it.
    pub fn summary(&self) -> AgingReportSummary {
        AgingReportSummary {
            shortlisted_age: age_entries(&self.shortlisted_age),
            hired_age: age_entries(&self.hired_age),
            hired_employment: employment_entries(&self.hired_employment),
        }
    }
}

fn count_buckets<K, F>(records: &[&PipelineRecord], classify: F) -> HashMap<K, usize>
where
    K: std::hash::Hash + Eq,
    F: Fn(&PipelineRecord) -> Option<K>,
{
    let mut counts = HashMap::new();
    for record in records {
        if let Some(bucket) = classify(record) {
            *counts.entry(bucket).or_insert(0) += 1;
        }
    }
    counts
}

fn age_entries(counts: &HashMap<AgeBucket, usize>) -> Vec<AgeBucketEntry> {
    AgeBucket::ordered()
        .into_iter()
        .map(|bucket| AgeBucketEntry {
            bucket,
            bucket_label: bucket.label(),
            count: counts.get(&bucket).copied().unwrap_or(0),
        })
        .collect()
}

fn employment_entries(counts: &HashMap<EmploymentBucket, usize>) -> Vec<EmploymentBucketEntry> {
    EmploymentBucket::ordered()
        .into_iter()
        .map(|bucket| EmploymentBucketEntry {
            bucket,
            bucket_label: bucket.label(),
            count: counts.get(&bucket).copied().unwrap_or(0),
        })
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

    fn shortlisted_record(inserted: NaiveDateTime, completion: NaiveDateTime) -> PipelineRecord {
        PipelineRecord {
            inserted: Some(inserted),
            completion: Some(completion),
            ..PipelineRecord::default()
        }
    }

    #[test]
    fn tables_are_zero_filled_in_declared_order() {
        let report = AgingReport::build(&[], &[], TimeWindow::SixMonths, at_midnight(2024, 7, 1));
        let summary = report.summary();

        let labels: Vec<_> = summary
            .shortlisted_age
            .iter()
            .map(|entry| entry.bucket_label)
            .collect();
        assert_eq!(
            labels,
            [
                "Less than 1 day",
                "1-3 days",
                "4-7 days",
                "7-9 days",
                "More than 9 days"
            ]
        );
        assert!(summary.shortlisted_age.iter().all(|entry| entry.count == 0));

        let employment_labels: Vec<_> = summary
            .hired_employment
            .iter()
            .map(|entry| entry.bucket_label)
            .collect();
        assert_eq!(
            employment_labels,
            [
                "0-30 Days",
                "31-60 Days",
                "61-90 Days",
                "90 Days and More",
                "Active & Dormant"
            ]
        );
    }

    #[test]
    fn age_buckets_partition_records_with_both_dates() {
        let now = at_midnight(2024, 7, 1);
        let base = at_midnight(2024, 6, 1);
        let shortlisted: Vec<_> = [0i64, 1, 3, 4, 8, 10, 25]
            .into_iter()
            .map(|days| shortlisted_record(base, base + chrono::Duration::days(days)))
            .collect();

        let report = AgingReport::build(&shortlisted, &[], TimeWindow::SixMonths, now);
        let total: usize = report.shortlisted_age.values().sum();
        assert_eq!(total, shortlisted.len());
    }

    #[test]
    fn records_missing_dates_are_excluded_not_defaulted() {
        let now = at_midnight(2024, 7, 1);
        let mut no_inserted = PipelineRecord::default();
        no_inserted.completion = Some(at_midnight(2024, 6, 15));

        let report = AgingReport::build(
            &[no_inserted],
            &[],
            TimeWindow::SixMonths,
            now,
        );
        let total: usize = report.shortlisted_age.values().sum();
        assert_eq!(total, 0);
    }

    #[test]
    fn summary_is_idempotent() {
        let report = AgingReport::build(&[], &[], TimeWindow::SixMonths, at_midnight(2024, 7, 1));
        let first = report.summary();
        let second = report.summary();
        assert_eq!(
            first.shortlisted_age.len(),
            second.shortlisted_age.len()
        );
        for (a, b) in first
            .shortlisted_age
            .iter()
            .zip(second.shortlisted_age.iter())
        {
            assert_eq!(a.bucket, b.bucket);
            assert_eq!(a.count, b.count);
        }
    }
}
