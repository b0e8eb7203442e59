pub mod aging;
pub mod ingest;
