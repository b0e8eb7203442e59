use crate::infra::{apply_location_filter, deserialize_optional_timestamp, AppState};
use aged_leads::error::AppError;
use aged_leads::reports::aging::domain::TimeWindow;
use aged_leads::reports::aging::report::views::{
    AgeBucketEntry, AgingReportDisplay, EmploymentBucketEntry,
};
use aged_leads::reports::aging::AgingReport;
use aged_leads::reports::ingest::PipelineCsvImporter;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Deserialize)]
pub(crate) struct AgingReportRequest {
    pub(crate) shortlisted_csv: String,
    pub(crate) hired_csv: String,
    #[serde(default)]
    pub(crate) time_window: Option<TimeWindow>,
    #[serde(default)]
    pub(crate) work_location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub(crate) as_of: Option<NaiveDateTime>,
    #[serde(default)]
    pub(crate) include_percentages: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AgingReportResponse {
    pub(crate) as_of: NaiveDateTime,
    pub(crate) time_window: TimeWindow,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) work_location: Option<String>,
    pub(crate) shortlisted_age: Vec<AgeBucketEntry>,
    pub(crate) hired_age: Vec<AgeBucketEntry>,
    pub(crate) hired_employment: Vec<EmploymentBucketEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) display: Option<AgingReportDisplay>,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/reports/aging",
            axum::routing::post(aging_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn aging_report_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AgingReportRequest>,
) -> Result<Json<AgingReportResponse>, AppError> {
    let AgingReportRequest {
        shortlisted_csv,
        hired_csv,
        time_window,
        work_location,
        as_of,
        include_percentages,
    } = payload;

    let shortlisted = PipelineCsvImporter::from_reader(Cursor::new(shortlisted_csv.into_bytes()))?;
    let hired = PipelineCsvImporter::from_reader(Cursor::new(hired_csv.into_bytes()))?;

    let shortlisted = apply_location_filter(shortlisted, work_location.as_deref());
    let hired = apply_location_filter(hired, work_location.as_deref());

    // One timestamp for the whole request so both collections see the
    // same window cutoff.
    let as_of = as_of.unwrap_or_else(|| Local::now().naive_local());
    let time_window = time_window.unwrap_or(state.default_window);

    let report = AgingReport::build(&shortlisted, &hired, time_window, as_of);
    let summary = report.summary();
    let display = include_percentages.then(|| summary.with_percentages());

    Ok(Json(AgingReportResponse {
        as_of,
        time_window,
        work_location,
        shortlisted_age: summary.shortlisted_age,
        hired_age: summary.hired_age,
        hired_employment: summary.hired_employment,
        display,
    }))
}
