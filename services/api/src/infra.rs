use aged_leads::reports::aging::domain::TimeWindow;
use aged_leads::reports::ingest::{tokens_match, PipelineRecord};
use chrono::{NaiveDate, NaiveDateTime};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) default_window: TimeWindow,
}

/// Exact-match work-location pre-filter. The core classifiers never
/// see location; records are narrowed here before the report builds.
/// `None` keeps every record.
pub(crate) fn apply_location_filter(
    records: Vec<PipelineRecord>,
    location: Option<&str>,
) -> Vec<PipelineRecord> {
    let location = match location {
        Some(location) => location,
        None => return records,
    };

    records
        .into_iter()
        .filter(|record| {
            record
                .work_location
                .as_deref()
                .is_some_and(|candidate| tokens_match(candidate, location))
        })
        .collect()
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    let trimmed = raw.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }

    Err(format!(
        "failed to parse '{raw}' as YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS"
    ))
}

pub(crate) fn parse_window(raw: &str) -> Result<TimeWindow, String> {
    TimeWindow::parse(raw)
        .ok_or_else(|| format!("'{raw}' is not a recognized window (6_months or 12_months)"))
}

pub(crate) fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_timestamp(&value).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn located(location: Option<&str>) -> PipelineRecord {
        PipelineRecord {
            work_location: location.map(str::to_string),
            ..PipelineRecord::default()
        }
    }

    #[test]
    fn location_filter_is_exact_after_normalization() {
        let records = vec![
            located(Some("New York")),
            located(Some("new york")),
            located(Some("Boston")),
            located(None),
        ];

        let kept = apply_location_filter(records, Some(" New  York "));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].work_location.as_deref(), Some("New York"));
    }

    #[test]
    fn no_filter_keeps_everything() {
        let records = vec![located(Some("Boston")), located(None)];
        assert_eq!(apply_location_filter(records, None).len(), 2);
    }

    #[test]
    fn timestamp_parsing_accepts_date_and_datetime_forms() {
        assert!(parse_timestamp("2024-06-01").is_ok());
        assert!(parse_timestamp("2024-06-01T10:30:00").is_ok());
        assert!(parse_timestamp("2024-06-01 10:30:00").is_ok());
        assert!(parse_timestamp("June 1st").is_err());
    }
}
