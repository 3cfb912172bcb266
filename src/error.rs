//! Error types for ingestion and analysis

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("failed to read tracking data from {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("missing column '{0}' in tracking data")]
    MissingColumn(String),

    #[error("malformed tracking data at line {line}: {message}")]
    Malformed { line: u64, message: String },

    #[error("expected at most two distinct group ids, found {0:?}")]
    TooManyGroups(Vec<i64>),

    #[error("no complete snapshots to decide from")]
    EmptyDataset,
}

impl From<csv::Error> for AnalysisError {
    fn from(e: csv::Error) -> Self {
        let line = e.position().map(|p| p.line()).unwrap_or(0);
        AnalysisError::Malformed { line, message: e.to_string() }
    }
}
