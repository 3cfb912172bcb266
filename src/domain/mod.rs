//! Domain models - court geometry and tracking types
//!
//! This module contains the canonical data types used throughout the system:
//! - `Point` - a position on the court plane, in meters
//! - `RawRecord` - one tracking sample as read from a vendor export
//! - `Snapshot` - both teams' positions at a single timestamp
//! - `TeamId` / `Side` - classification outcomes
//! - `geometry` - distance computations between points

pub mod geometry;
pub mod types;

// Re-export commonly used types at module level
pub use geometry::{average_distance, distance};
pub use types::{GroupId, Point, RawRecord, Side, Snapshot, TeamId, LEFT_BASKET};
