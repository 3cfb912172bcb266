//! Shared types for the baseline detector

use std::fmt;

/// Left basket position. The basket sits 1.60m in front of the baseline.
pub const LEFT_BASKET: Point = Point::new(-12.75, 0.0);

/// Position on the court plane, in meters, origin at center court
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Newtype wrapper for the vendor's `group id` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct GroupId(pub i64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the two tracked teams.
///
/// Ordering is by team number, so `TeamId::One < TeamId::Two`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TeamId {
    One,
    Two,
}

impl TeamId {
    pub fn number(&self) -> u8 {
        match self {
            TeamId::One => 1,
            TeamId::Two => 2,
        }
    }

    /// Binary team rule: the primary group id is team 1, every other id is team 2
    #[inline]
    pub fn for_group(group_id: GroupId, primary: GroupId) -> Self {
        if group_id == primary {
            TeamId::One
        } else {
            TeamId::Two
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One tracking sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRecord {
    pub ts_ms: i64,
    pub group_id: GroupId,
    pub position: Point,
}

impl RawRecord {
    pub fn new(ts_ms: i64, group_id: i64, x: f64, y: f64) -> Self {
        Self { ts_ms, group_id: GroupId(group_id), position: Point::new(x, y) }
    }
}

/// All player positions of both teams at one timestamp
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub team_1: Vec<Point>,
    pub team_2: Vec<Point>,
}

impl Snapshot {
    pub fn push(&mut self, team: TeamId, position: Point) {
        match team {
            TeamId::One => self.team_1.push(position),
            TeamId::Two => self.team_2.push(position),
        }
    }

    pub fn team(&self, team: TeamId) -> &[Point] {
        match team {
            TeamId::One => &self.team_1,
            TeamId::Two => &self.team_2,
        }
    }

    /// Teams without a single recorded position, in team order
    pub fn missing_teams(&self) -> Vec<TeamId> {
        [TeamId::One, TeamId::Two].into_iter().filter(|team| self.team(*team).is_empty()).collect()
    }

    pub fn is_complete(&self) -> bool {
        !self.team_1.is_empty() && !self.team_2.is_empty()
    }
}

/// Court side, seen from the scorer's table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Side defended by team 1, given the team defending the left basket
    pub fn of_team_one(left_defender: TeamId) -> Self {
        match left_defender {
            TeamId::One => Side::Left,
            TeamId::Two => Side::Right,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
