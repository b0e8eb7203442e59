use super::normalizer::normalize_token;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One row of a pipeline export with every date field already
/// normalized. An unparseable or empty cell is `None`; classification
/// downstream skips records instead of guessing.
#[derive(Debug, Clone, Default)]
pub struct PipelineRecord {
    pub invitation: Option<NaiveDateTime>,
    pub completion: Option<NaiveDateTime>,
    pub activity_created_at: Option<NaiveDateTime>,
    pub inserted: Option<NaiveDateTime>,
    pub termination: Option<NaiveDateTime>,
    pub employment_status: Option<String>,
    pub work_location: Option<String>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<PipelineRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<PipelineRow>() {
        let row = record?;
        records.push(row.into_record());
    }

    Ok(records)
}

/// Raw export row. The five date columns are required headers; a
/// missing one fails the whole import. Status and location only exist
/// on hired exports, so they default to absent.
#[derive(Debug, Deserialize)]
struct PipelineRow {
    #[serde(rename = "INVITATIONDT", deserialize_with = "empty_string_as_none")]
    invitation: Option<String>,
    #[serde(rename = "COMPLETIONDT", deserialize_with = "empty_string_as_none")]
    completion: Option<String>,
    #[serde(rename = "ACTIVITY_CREATED_AT", deserialize_with = "empty_string_as_none")]
    activity_created_at: Option<String>,
    #[serde(rename = "INSERTEDDATE", deserialize_with = "empty_string_as_none")]
    inserted: Option<String>,
    #[serde(rename = "TERMINATIONDATE", deserialize_with = "empty_string_as_none")]
    termination: Option<String>,
    #[serde(
        rename = "EMPLOYMENT_STATUS",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    employment_status: Option<String>,
    #[serde(
        rename = "WORKLOCATION",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    work_location: Option<String>,
}

impl PipelineRow {
    fn into_record(self) -> PipelineRecord {
        PipelineRecord {
            invitation: self.invitation.as_deref().and_then(parse_datetime),
            completion: self.completion.as_deref().and_then(parse_datetime),
            activity_created_at: self.activity_created_at.as_deref().and_then(parse_datetime),
            inserted: self.inserted.as_deref().and_then(parse_datetime),
            termination: self.termination.as_deref().and_then(parse_datetime),
            employment_status: self.employment_status.as_deref().and_then(normalize_token),
            work_location: self.work_location.as_deref().and_then(normalize_token),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%m/%d/%Y") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
