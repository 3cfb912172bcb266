//! IO modules - external data interfaces
//!
//! This module contains all external IO operations:
//! - `tracking_csv` - CSV ingestion of vendor tracking exports

pub mod tracking_csv;

// Re-export commonly used functions
pub use tracking_csv::{read_from, read_records};
