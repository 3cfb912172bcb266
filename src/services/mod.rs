//! Services - analysis pipeline
//!
//! This module contains the core analysis logic:
//! - `aggregator` - Groups samples into per-timestamp snapshots, drops incomplete ones
//! - `classifier` - Decides which team is closer to the reference basket in a snapshot
//! - `voter` - Majority vote over all snapshot classifications
//! - `analysis` - Runs the full pipeline and produces a verdict

pub mod aggregator;
pub mod analysis;
pub mod classifier;
pub mod voter;

// Re-export commonly used types
pub use aggregator::{Aggregated, MissingTeam, TimeSeries};
pub use analysis::{analyze, Analysis, AnalysisSettings, Verdict};
pub use classifier::closer_team;
pub use voter::{team_defending, VoteTally};
