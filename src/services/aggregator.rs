//! Snapshot aggregation
//!
//! Groups per-player samples by timestamp into two-team snapshots. Samples may
//! arrive in any order. Timestamps where a team has no samples at all are
//! reported and dropped when the series is finalized; they are never backfilled.

use crate::domain::types::{GroupId, RawRecord, Snapshot, TeamId};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::debug;

/// A timestamp where one team has no recorded positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingTeam {
    pub ts_ms: i64,
    pub team: TeamId,
}

impl fmt::Display for MissingTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no data for team {} at {} ms", self.team, self.ts_ms)
    }
}

/// Snapshots that survived the completeness filter, plus what was dropped
#[derive(Debug, Clone, Default)]
pub struct Aggregated {
    /// Complete snapshots in ascending timestamp order
    pub snapshots: Vec<Snapshot>,
    /// One entry per missing team per dropped timestamp, ascending timestamp
    pub missing: Vec<MissingTeam>,
    /// Number of distinct timestamps seen before filtering
    pub timestamps: usize,
}

impl Aggregated {
    /// Number of timestamps removed by the completeness filter
    pub fn dropped(&self) -> usize {
        self.timestamps - self.snapshots.len()
    }
}

/// Time series of snapshots keyed by timestamp (ms)
#[derive(Debug, Clone)]
pub struct TimeSeries {
    snapshots: BTreeMap<i64, Snapshot>,
    primary: GroupId,
    group_ids: BTreeSet<GroupId>,
    records: usize,
}

impl TimeSeries {
    /// Create an empty series. Samples with `primary` as group id go to team 1.
    pub fn new(primary: GroupId) -> Self {
        Self { snapshots: BTreeMap::new(), primary, group_ids: BTreeSet::new(), records: 0 }
    }

    pub fn from_records<I>(primary: GroupId, records: I) -> Self
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let mut series = Self::new(primary);
        series.extend(records);
        series
    }

    /// Add one sample to the snapshot for its timestamp
    pub fn push(&mut self, record: RawRecord) {
        let team = TeamId::for_group(record.group_id, self.primary);
        self.snapshots.entry(record.ts_ms).or_default().push(team, record.position);
        self.group_ids.insert(record.group_id);
        self.records += 1;
    }

    /// Number of distinct timestamps
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Number of samples consumed so far
    pub fn record_count(&self) -> usize {
        self.records
    }

    /// Distinct group ids seen, ascending
    pub fn group_ids(&self) -> impl Iterator<Item = GroupId> + '_ {
        self.group_ids.iter().copied()
    }

    /// Split into complete snapshots and diagnostics for incomplete ones
    pub fn finalize(self) -> Aggregated {
        let timestamps = self.snapshots.len();
        let mut snapshots = Vec::with_capacity(timestamps);
        let mut missing = Vec::new();

        for (ts_ms, snapshot) in self.snapshots {
            if snapshot.is_complete() {
                snapshots.push(snapshot);
                continue;
            }
            for team in snapshot.missing_teams() {
                debug!(ts_ms = %ts_ms, team = %team, "snapshot_incomplete");
                missing.push(MissingTeam { ts_ms, team });
            }
        }

        Aggregated { snapshots, missing, timestamps }
    }
}

impl Extend<RawRecord> for TimeSeries {
    fn extend<I: IntoIterator<Item = RawRecord>>(&mut self, records: I) {
        for record in records {
            self.push(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Point;

    fn series(records: Vec<RawRecord>) -> TimeSeries {
        TimeSeries::from_records(GroupId(1), records)
    }

    #[test]
    fn test_groups_by_timestamp() {
        let ts = series(vec![
            RawRecord::new(0, 1, -12.0, 0.0),
            RawRecord::new(0, 2, 12.0, 0.0),
            RawRecord::new(0, 1, -13.0, 0.0),
            RawRecord::new(40, 2, 11.0, 1.0),
            RawRecord::new(40, 1, -11.0, 1.0),
        ]);

        assert_eq!(ts.len(), 2);
        assert_eq!(ts.record_count(), 5);

        let aggregated = ts.finalize();
        assert!(aggregated.missing.is_empty());
        assert_eq!(aggregated.snapshots.len(), 2);
        assert_eq!(
            aggregated.snapshots[0].team_1,
            vec![Point::new(-12.0, 0.0), Point::new(-13.0, 0.0)]
        );
        assert_eq!(aggregated.snapshots[0].team_2, vec![Point::new(12.0, 0.0)]);
        assert_eq!(aggregated.snapshots[1].team_1, vec![Point::new(-11.0, 1.0)]);
    }

    #[test]
    fn test_out_of_order_input_is_sorted() {
        let aggregated = series(vec![
            RawRecord::new(80, 1, 3.0, 0.0),
            RawRecord::new(0, 1, 1.0, 0.0),
            RawRecord::new(80, 2, 4.0, 0.0),
            RawRecord::new(0, 2, 2.0, 0.0),
        ])
        .finalize();

        assert_eq!(aggregated.snapshots[0].team_1, vec![Point::new(1.0, 0.0)]);
        assert_eq!(aggregated.snapshots[1].team_1, vec![Point::new(3.0, 0.0)]);
    }

    #[test]
    fn test_incomplete_snapshot_dropped() {
        let aggregated = series(vec![
            RawRecord::new(0, 1, -12.0, 0.0),
            RawRecord::new(0, 2, 12.0, 0.0),
            RawRecord::new(40, 1, -12.0, 0.0),
        ])
        .finalize();

        assert_eq!(aggregated.timestamps, 2);
        assert_eq!(aggregated.snapshots.len(), 1);
        assert_eq!(aggregated.dropped(), 1);
        assert_eq!(aggregated.missing, vec![MissingTeam { ts_ms: 40, team: TeamId::Two }]);
    }

    #[test]
    fn test_missing_team_one_reported() {
        let aggregated = series(vec![RawRecord::new(120, 2, 0.0, 0.0)]).finalize();

        assert!(aggregated.snapshots.is_empty());
        assert_eq!(aggregated.missing.len(), 1);
        assert_eq!(aggregated.missing[0].to_string(), "no data for team 1 at 120 ms");
    }

    #[test]
    fn test_diagnostics_in_timestamp_order() {
        let aggregated = series(vec![
            RawRecord::new(200, 1, 0.0, 0.0),
            RawRecord::new(100, 2, 0.0, 0.0),
        ])
        .finalize();

        let lines: Vec<String> = aggregated.missing.iter().map(|m| m.to_string()).collect();
        assert_eq!(lines, vec!["no data for team 1 at 100 ms", "no data for team 2 at 200 ms"]);
    }

    #[test]
    fn test_extra_group_ids_merged_into_team_two() {
        let ts = series(vec![
            RawRecord::new(0, 1, 0.0, 0.0),
            RawRecord::new(0, 2, 1.0, 0.0),
            RawRecord::new(0, 3, 2.0, 0.0),
        ]);

        assert_eq!(ts.group_ids().collect::<Vec<_>>(), vec![GroupId(1), GroupId(2), GroupId(3)]);
        let aggregated = ts.finalize();
        assert_eq!(aggregated.snapshots[0].team_2, vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0)]);
    }

    #[test]
    fn test_custom_primary_group() {
        let aggregated = TimeSeries::from_records(
            GroupId(7),
            vec![RawRecord::new(0, 7, -1.0, 0.0), RawRecord::new(0, 1, 1.0, 0.0)],
        )
        .finalize();

        assert_eq!(aggregated.snapshots[0].team_1, vec![Point::new(-1.0, 0.0)]);
        assert_eq!(aggregated.snapshots[0].team_2, vec![Point::new(1.0, 0.0)]);
    }

    #[test]
    fn test_empty_series() {
        let ts = series(Vec::new());
        assert!(ts.is_empty());

        let aggregated = ts.finalize();
        assert!(aggregated.snapshots.is_empty());
        assert!(aggregated.missing.is_empty());
        assert_eq!(aggregated.dropped(), 0);
    }
}
