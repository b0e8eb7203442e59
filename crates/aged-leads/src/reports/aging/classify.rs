use super::domain::{AgeBucket, EmploymentBucket, EmploymentStatus};
use crate::reports::ingest::PipelineRecord;

/// Absolute whole-day gap between completion and insertion, bucketed.
/// A record missing either date contributes to no bucket at all.
pub fn age_bucket(record: &PipelineRecord) -> Option<AgeBucket> {
    let completion = record.completion?;
    let inserted = record.inserted?;
    let days = (completion.date() - inserted.date()).num_days().abs();
    Some(AgeBucket::classify(days))
}

/// Partitions a hired record by employment status.
///
/// Terminated records need both termination and insertion dates; the
/// tenure difference is signed, not absolute. Active and Dormant
/// records land in the sentinel regardless of dates. Everything else
/// (unrecognized status, Terminated with a missing date) is dropped
/// from the table entirely, matching the upstream reporting behavior.
pub fn employment_bucket(record: &PipelineRecord) -> Option<EmploymentBucket> {
    let status = record
        .employment_status
        .as_deref()
        .and_then(EmploymentStatus::parse)?;

    if !status.is_terminated() {
        return Some(EmploymentBucket::ActiveAndDormant);
    }

    let termination = record.termination?;
    let inserted = record.inserted?;
    let tenure_days = (termination.date() - inserted.date()).num_days();
    Some(EmploymentBucket::classify_tenure(tenure_days))
}
