//! Tracking export ingestion
//!
//! Reads the vendor CSV format, one player sample per row:
//!
//! ```text
//! ts in ms,group id,x in m,y in m
//! 0,1,-12.0,0.0
//! 0,2,12.0,0.0
//! ```
//!
//! Column names are load-bearing; surrounding whitespace in headers and
//! fields is ignored. Extra columns are allowed.

use crate::domain::types::RawRecord;
use crate::error::AnalysisError;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub const TS_COLUMN: &str = "ts in ms";
pub const GROUP_COLUMN: &str = "group id";
pub const X_COLUMN: &str = "x in m";
pub const Y_COLUMN: &str = "y in m";

const REQUIRED_COLUMNS: [&str; 4] = [TS_COLUMN, GROUP_COLUMN, X_COLUMN, Y_COLUMN];

#[derive(Debug, Deserialize)]
struct TrackingRow {
    #[serde(rename = "ts in ms")]
    ts_ms: i64,
    #[serde(rename = "group id")]
    group_id: i64,
    #[serde(rename = "x in m")]
    x: f64,
    #[serde(rename = "y in m")]
    y: f64,
}

impl From<TrackingRow> for RawRecord {
    fn from(row: TrackingRow) -> Self {
        RawRecord::new(row.ts_ms, row.group_id, row.x, row.y)
    }
}

/// Read all tracking samples from a CSV file
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>, AnalysisError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|source| AnalysisError::Read { path: path.display().to_string(), source })?;

    let records = read_from(file)?;
    debug!(path = %path.display(), records = %records.len(), "tracking_file_loaded");
    Ok(records)
}

/// Read tracking samples from any CSV source
pub fn read_from<R: Read>(source: R) -> Result<Vec<RawRecord>, AnalysisError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(source);

    let headers = reader.headers()?;
    if let Some(missing) =
        REQUIRED_COLUMNS.iter().find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(AnalysisError::MissingColumn(missing.to_string()));
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<TrackingRow>() {
        records.push(row?.into());
    }
    Ok(records)
}
