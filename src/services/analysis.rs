//! End-to-end baseline analysis
//!
//! Runs the pipeline over in-memory samples:
//! samples -> `TimeSeries` -> completeness filter -> per-snapshot vote -> `Verdict`.

use crate::domain::types::{GroupId, Point, RawRecord, Side, TeamId, LEFT_BASKET};
use crate::error::AnalysisError;
use crate::infra::summary::RunSummary;
use crate::services::aggregator::{MissingTeam, TimeSeries};
use crate::services::voter::{team_defending, VoteTally};
use std::fmt;
use tracing::{debug, warn};

/// Inputs to the analysis that are not part of the tracking data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisSettings {
    /// Left basket location
    pub reference: Point,
    /// Group id treated as team 1
    pub primary_group: GroupId,
    /// Reject inputs with more than two distinct group ids
    pub strict_groups: bool,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self { reference: LEFT_BASKET, primary_group: GroupId(1), strict_groups: false }
    }
}

/// Which side the primary team defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub primary_group: GroupId,
    pub left_defender: TeamId,
    pub side: Side,
    pub tally: VoteTally,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The team with group id {} has its baseline on the {} side",
            self.primary_group, self.side
        )
    }
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub verdict: Verdict,
    pub summary: RunSummary,
}

/// Decide which side the primary team defends.
///
/// `on_missing` is called once per missing team per dropped timestamp, in
/// timestamp order, before the vote. It is called even when the vote then
/// fails for lack of complete snapshots.
pub fn analyze<I, F>(
    records: I,
    settings: &AnalysisSettings,
    mut on_missing: F,
) -> Result<Analysis, AnalysisError>
where
    I: IntoIterator<Item = RawRecord>,
    F: FnMut(&MissingTeam),
{
    let series = TimeSeries::from_records(settings.primary_group, records);
    let records = series.record_count();
    if series.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }
    debug!(records = %records, timestamps = %series.len(), "time_series_built");

    let group_ids: Vec<i64> = series.group_ids().map(|g| g.0).collect();
    if group_ids.len() > 2 {
        if settings.strict_groups {
            return Err(AnalysisError::TooManyGroups(group_ids));
        }
        warn!(group_ids = ?group_ids, "extra_groups_merged_into_team_2");
    }

    let aggregated = series.finalize();
    for missing in &aggregated.missing {
        on_missing(missing);
    }
    debug!(
        timestamps = %aggregated.timestamps,
        complete = %aggregated.snapshots.len(),
        "time_series_filtered"
    );

    let (left_defender, tally) = team_defending(&aggregated.snapshots, settings.reference)?;
    let verdict = Verdict {
        primary_group: settings.primary_group,
        left_defender,
        side: Side::of_team_one(left_defender),
        tally,
    };

    let summary = RunSummary {
        records,
        timestamps: aggregated.timestamps,
        dropped: aggregated.dropped(),
        team_1_votes: tally.votes(TeamId::One),
        team_2_votes: tally.votes(TeamId::Two),
        side: verdict.side,
    };

    Ok(Analysis { verdict, summary })
}
