use super::super::domain::{AgeBucket, EmploymentBucket};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AgeBucketEntry {
    pub bucket: AgeBucket,
    pub bucket_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmploymentBucketEntry {
    pub bucket: EmploymentBucket,
    pub bucket_label: &'static str,
    pub count: usize,
}

/// The three ordered count tables handed to the rendering collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct AgingReportSummary {
    pub shortlisted_age: Vec<AgeBucketEntry>,
    pub hired_age: Vec<AgeBucketEntry>,
    pub hired_employment: Vec<EmploymentBucketEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BucketDisplayEntry {
    pub bucket_label: &'static str,
    pub count: usize,
    pub display: String,
}

/// Percentage-annotated rendering of a summary, e.g. `"3 (25%)"`.
#[derive(Debug, Clone, Serialize)]
pub struct AgingReportDisplay {
    pub shortlisted_age: Vec<BucketDisplayEntry>,
    pub hired_age: Vec<BucketDisplayEntry>,
    pub hired_employment: Vec<BucketDisplayEntry>,
}

impl AgingReportSummary {
    pub fn with_percentages(&self) -> AgingReportDisplay {
        AgingReportDisplay {
            shortlisted_age: display_table(
                self.shortlisted_age
                    .iter()
                    .map(|entry| (entry.bucket_label, entry.count)),
            ),
            hired_age: display_table(
                self.hired_age
                    .iter()
                    .map(|entry| (entry.bucket_label, entry.count)),
            ),
            hired_employment: display_table(
                self.hired_employment
                    .iter()
                    .map(|entry| (entry.bucket_label, entry.count)),
            ),
        }
    }
}

fn display_table<I>(entries: I) -> Vec<BucketDisplayEntry>
where
    I: Iterator<Item = (&'static str, usize)>,
{
    let entries: Vec<_> = entries.collect();
    let total: usize = entries.iter().map(|(_, count)| count).sum();

    entries
        .into_iter()
        .map(|(bucket_label, count)| BucketDisplayEntry {
            bucket_label,
            count,
            display: display_value(count, total),
        })
        .collect()
}

/// `total == 0` renders as `0 (0%)` for every label instead of
/// dividing by zero. Percentages round to the nearest whole point.
fn display_value(count: usize, total: usize) -> String {
    if total == 0 {
        return "0 (0%)".to_string();
    }

    let pct = (count * 100 + total / 2) / total;
    format!("{count} ({pct}%)")
}
