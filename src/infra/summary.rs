//! Run statistics

use crate::domain::types::Side;
use tracing::info;

/// Counts collected over one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    /// Distinct timestamps before filtering
    pub timestamps: usize,
    /// Timestamps dropped as incomplete
    pub dropped: usize,
    pub team_1_votes: usize,
    pub team_2_votes: usize,
    pub side: Side,
}

impl RunSummary {
    /// Snapshots that took part in the vote
    pub fn voted(&self) -> usize {
        self.team_1_votes + self.team_2_votes
    }

    /// Share of votes for the winning team, 0.5 to 1.0, or 0.0 when nothing was voted
    pub fn margin(&self) -> f64 {
        let voted = self.voted();
        if voted == 0 {
            return 0.0;
        }
        self.team_1_votes.max(self.team_2_votes) as f64 / voted as f64
    }

    pub fn log(&self) {
        info!(
            records = %self.records,
            timestamps = %self.timestamps,
            dropped = %self.dropped,
            voted = %self.voted(),
            team_1_votes = %self.team_1_votes,
            team_2_votes = %self.team_2_votes,
            margin = format!("{:.3}", self.margin()),
            side = %self.side,
            "analysis_summary"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn summary(team_1_votes: usize, team_2_votes: usize) -> RunSummary {
        RunSummary {
            records: 100,
            timestamps: 12,
            dropped: 12 - team_1_votes - team_2_votes,
            team_1_votes,
            team_2_votes,
            side: Side::Left,
        }
    }

    #[test]
    fn test_voted() {
        assert_eq!(summary(7, 3).voted(), 10);
    }

    #[test]
    fn test_margin() {
        assert_relative_eq!(summary(7, 3).margin(), 0.7);
        assert_relative_eq!(summary(2, 6).margin(), 0.75);
        assert_relative_eq!(summary(0, 0).margin(), 0.0);
    }
}
