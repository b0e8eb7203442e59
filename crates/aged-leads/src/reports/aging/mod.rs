pub mod classify;
pub mod domain;
pub mod report;
pub mod window;

pub use report::views::{AgingReportDisplay, AgingReportSummary};
pub use report::AgingReport;
