//! Per-snapshot side classification

use crate::domain::geometry::average_distance;
use crate::domain::types::{Point, Snapshot, TeamId};

/// Team whose players are, on average, closer to `reference` in this snapshot.
///
/// Team 1 only wins on a strictly smaller average distance; an exact tie goes
/// to team 2. Returns `None` if either team has no positions.
pub fn closer_team(snapshot: &Snapshot, reference: Point) -> Option<TeamId> {
    let team_1 = average_distance(&snapshot.team_1, reference)?;
    let team_2 = average_distance(&snapshot.team_2, reference)?;

    if team_1 < team_2 {
        Some(TeamId::One)
    } else {
        Some(TeamId::Two)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::LEFT_BASKET;

    fn snapshot(team_1: &[(f64, f64)], team_2: &[(f64, f64)]) -> Snapshot {
        Snapshot {
            team_1: team_1.iter().map(|&(x, y)| Point::new(x, y)).collect(),
            team_2: team_2.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        }
    }

    #[test]
    fn test_team_one_closer() {
        let s = snapshot(&[(-12.0, 0.0), (-13.0, 0.0)], &[(12.0, 0.0)]);
        assert_eq!(closer_team(&s, LEFT_BASKET), Some(TeamId::One));
    }

    #[test]
    fn test_team_two_closer() {
        let s = snapshot(&[(12.0, 0.0)], &[(-12.0, 0.0), (-13.0, 0.0)]);
        assert_eq!(closer_team(&s, LEFT_BASKET), Some(TeamId::Two));
    }

    #[test]
    fn test_tie_goes_to_team_two() {
        let s = snapshot(&[(-12.75, 1.0)], &[(-12.75, -1.0)]);
        assert_eq!(closer_team(&s, LEFT_BASKET), Some(TeamId::Two));
    }

    #[test]
    fn test_uses_average_not_nearest_player() {
        // Team 1 has the single closest player but is further away on average
        let s = snapshot(&[(-12.75, 0.0), (10.0, 0.0)], &[(-8.0, 0.0), (-8.0, 0.0)]);
        assert_eq!(closer_team(&s, LEFT_BASKET), Some(TeamId::Two));
    }

    #[test]
    fn test_alternate_reference_point() {
        let s = snapshot(&[(-12.0, 0.0)], &[(12.0, 0.0)]);
        let right_basket = Point::new(12.75, 0.0);
        assert_eq!(closer_team(&s, right_basket), Some(TeamId::Two));
    }

    #[test]
    fn test_incomplete_snapshot() {
        let s = snapshot(&[(-12.0, 0.0)], &[]);
        assert_eq!(closer_team(&s, LEFT_BASKET), None);
    }
}
