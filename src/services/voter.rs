//! Majority vote across snapshots
//!
//! Every complete snapshot casts one vote for the team closer to the reference
//! point. The team with the most votes defends that basket. Equal counts go to
//! the lower team id.

use crate::domain::types::{Point, Snapshot, TeamId};
use crate::error::AnalysisError;
use crate::services::classifier::closer_team;
use tracing::debug;

/// Per-team vote counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    pub team_1: usize,
    pub team_2: usize,
}

impl VoteTally {
    pub fn record(&mut self, team: TeamId) {
        match team {
            TeamId::One => self.team_1 += 1,
            TeamId::Two => self.team_2 += 1,
        }
    }

    pub fn votes(&self, team: TeamId) -> usize {
        match team {
            TeamId::One => self.team_1,
            TeamId::Two => self.team_2,
        }
    }

    pub fn total(&self) -> usize {
        self.team_1 + self.team_2
    }

    /// Team with the most votes, `None` when nothing was counted
    pub fn winner(&self) -> Option<TeamId> {
        if self.total() == 0 {
            return None;
        }
        if self.team_1 >= self.team_2 {
            Some(TeamId::One)
        } else {
            Some(TeamId::Two)
        }
    }
}

/// Classify every snapshot and count the outcomes
pub fn tally(snapshots: &[Snapshot], reference: Point) -> VoteTally {
    let mut tally = VoteTally::default();
    for (index, snapshot) in snapshots.iter().enumerate() {
        match closer_team(snapshot, reference) {
            Some(team) => {
                debug!(snapshot = %index, team = %team, "snapshot_classified");
                tally.record(team);
            }
            None => debug!(snapshot = %index, "snapshot_skipped_incomplete"),
        }
    }
    tally
}

/// Team defending the basket at `reference`, decided over all snapshots
pub fn team_defending(
    snapshots: &[Snapshot],
    reference: Point,
) -> Result<(TeamId, VoteTally), AnalysisError> {
    let tally = tally(snapshots, reference);
    let team = tally.winner().ok_or(AnalysisError::EmptyDataset)?;
    Ok((team, tally))
}
