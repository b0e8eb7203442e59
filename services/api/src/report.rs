use crate::infra::{apply_location_filter, parse_timestamp, parse_window};
use aged_leads::error::AppError;
use aged_leads::reports::aging::domain::TimeWindow;
use aged_leads::reports::aging::report::views::BucketDisplayEntry;
use aged_leads::reports::aging::{AgingReport, AgingReportSummary};
use aged_leads::reports::ingest::PipelineCsvImporter;
use chrono::{Local, NaiveDateTime};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Path to the shortlisted CSV export
    #[arg(long)]
    pub(crate) shortlisted: PathBuf,
    /// Path to the hired CSV export
    #[arg(long)]
    pub(crate) hired: PathBuf,
    /// Trailing window applied to completion dates (6_months or 12_months)
    #[arg(long, value_parser = parse_window, default_value = "12_months")]
    pub(crate) window: TimeWindow,
    /// Keep only records with this exact work location
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Override the reporting timestamp (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) as_of: Option<NaiveDateTime>,
    /// Annotate each count with its share of the table total
    #[arg(long)]
    pub(crate) percentages: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        shortlisted,
        hired,
        window,
        location,
        as_of,
        percentages,
    } = args;

    let shortlisted = PipelineCsvImporter::from_path(shortlisted)?;
    let hired = PipelineCsvImporter::from_path(hired)?;

    let shortlisted = apply_location_filter(shortlisted, location.as_deref());
    let hired = apply_location_filter(hired, location.as_deref());

    let as_of = as_of.unwrap_or_else(|| Local::now().naive_local());
    let report = AgingReport::build(&shortlisted, &hired, window, as_of);
    let summary = report.summary();

    println!("Aged leads report (window: {}, as of {})", window.label(), as_of);
    if let Some(location) = &location {
        println!("Work location: {location}");
    }

    if percentages {
        render_display_tables(&summary);
    } else {
        render_count_tables(&summary);
    }

    Ok(())
}

fn render_count_tables(summary: &AgingReportSummary) {
    println!("\nCompletion to shortlisted");
    for entry in &summary.shortlisted_age {
        println!("  {:<18} {}", entry.bucket_label, entry.count);
    }

    println!("\nCompletion to hired");
    for entry in &summary.hired_age {
        println!("  {:<18} {}", entry.bucket_label, entry.count);
    }

    println!("\nHired employment tenure");
    for entry in &summary.hired_employment {
        println!("  {:<18} {}", entry.bucket_label, entry.count);
    }
}

fn render_display_tables(summary: &AgingReportSummary) {
    let display = summary.with_percentages();

    println!("\nCompletion to shortlisted");
    render_display_section(&display.shortlisted_age);
    println!("\nCompletion to hired");
    render_display_section(&display.hired_age);
    println!("\nHired employment tenure");
    render_display_section(&display.hired_employment);
}

fn render_display_section(entries: &[BucketDisplayEntry]) {
    for entry in entries {
        println!("  {:<18} {}", entry.bucket_label, entry.display);
    }
}
