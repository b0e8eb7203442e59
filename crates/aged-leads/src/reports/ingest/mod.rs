mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

pub use normalizer::{normalize_token, tokens_match};
pub use parser::PipelineRecord;

#[derive(Debug, thiserror::Error)]
pub enum PipelineImportError {
    #[error("failed to read pipeline export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid pipeline CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads one shortlisted or hired CSV export into normalized records.
///
/// Date parsing failures are tolerated per cell; a missing required
/// header is a schema violation and fails the whole import.
pub struct PipelineCsvImporter;

impl PipelineCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<PipelineRecord>, PipelineImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<PipelineRecord>, PipelineImportError> {
        Ok(parser::parse_records(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    const HEADER: &str =
        "INVITATIONDT,COMPLETIONDT,ACTIVITY_CREATED_AT,INSERTEDDATE,TERMINATIONDATE,EMPLOYMENT_STATUS,WORKLOCATION";

    #[test]
    fn parse_datetime_supports_export_formats() {
        let rfc = parser::parse_datetime_for_tests("2024-03-05T10:00:00Z").expect("parse rfc");
        assert_eq!(
            rfc,
            NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );

        let stamped =
            parser::parse_datetime_for_tests("2024-03-05 10:30:00").expect("parse timestamp");
        assert_eq!(stamped.time().to_string(), "10:30:00");

        let date = parser::parse_datetime_for_tests("2024-03-05").expect("parse date");
        assert_eq!(date.time().to_string(), "00:00:00");

        let us = parser::parse_datetime_for_tests("03/05/2024").expect("parse us date");
        assert_eq!(us.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

        assert!(parser::parse_datetime_for_tests("  ").is_none());
        assert!(parser::parse_datetime_for_tests("not-a-date").is_none());
        assert!(parser::parse_datetime_for_tests("2024-13-40").is_none());
    }

    #[test]
    fn malformed_date_cells_become_absent_without_failing_the_row() {
        let csv = format!("{HEADER}\n,garbage,,2024-01-01,,Active,Remote\n");
        let records = PipelineCsvImporter::from_reader(Cursor::new(csv)).expect("import");
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert!(record.invitation.is_none());
        assert!(record.completion.is_none());
        assert_eq!(
            record.inserted.expect("inserted").date(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
        assert_eq!(record.employment_status.as_deref(), Some("Active"));
        assert_eq!(record.work_location.as_deref(), Some("Remote"));
    }

    #[test]
    fn status_and_location_columns_are_optional() {
        let csv = "INVITATIONDT,COMPLETIONDT,ACTIVITY_CREATED_AT,INSERTEDDATE,TERMINATIONDATE\n\
                   2024-01-01,2024-01-02,2024-01-01,2024-01-01,\n";
        let records = PipelineCsvImporter::from_reader(Cursor::new(csv)).expect("import");
        assert!(records[0].employment_status.is_none());
        assert!(records[0].work_location.is_none());
    }

    #[test]
    fn missing_required_date_column_fails_the_import() {
        let csv = "INVITATIONDT,COMPLETIONDT,ACTIVITY_CREATED_AT,TERMINATIONDATE\n\
                   2024-01-01,2024-01-02,2024-01-01,\n";
        let error = PipelineCsvImporter::from_reader(Cursor::new(csv))
            .expect_err("expected schema error");
        match error {
            PipelineImportError::Csv(_) => {}
            other => panic!("expected csv error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = PipelineCsvImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");
        match error {
            PipelineImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn status_cells_are_normalized() {
        let csv = format!("{HEADER}\n,,,2024-01-01,,\u{feff} Terminated ,  New   York \n");
        let records = PipelineCsvImporter::from_reader(Cursor::new(csv)).expect("import");
        assert_eq!(records[0].employment_status.as_deref(), Some("Terminated"));
        assert_eq!(records[0].work_location.as_deref(), Some("New York"));
    }
}
