use crate::geometry::{Axis, Coordinate};
use crate::robot::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A marker left where a robot went over the edge.
///
/// `offset` is the out-of-grid value the robot would have reached on `axis`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scent {
    pub axis: Axis,
    pub offset: i32,
}

impl Scent {
    pub fn new(axis: Axis, offset: i32) -> Self {
        Self { axis, offset }
    }
}

/// Every scent recorded during one simulation run. Only ever grows.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScentSet {
    scents: HashSet<Scent>,
}

impl ScentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `scent`, returning false if it was already present.
    pub(crate) fn insert(&mut self, scent: Scent) -> bool {
        self.scents.insert(scent)
    }

    pub fn contains(&self, scent: &Scent) -> bool {
        self.scents.contains(scent)
    }

    /// True if either component of `candidate` lands on a recorded scent.
    pub fn blocks(&self, candidate: Coordinate) -> bool {
        self.contains(&Scent::new(Axis::X, candidate.x))
            || self.contains(&Scent::new(Axis::Y, candidate.y))
    }

    pub fn len(&self) -> usize {
        self.scents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scent> {
        self.scents.iter()
    }
}

/// Outcome of running one robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "position", rename_all = "lowercase")]
pub enum Report {
    /// The robot finished its instructions on the grid.
    Ok(Position),
    /// The robot fell off; holds the last position it occupied.
    Lost(Position),
}

impl Report {
    pub fn position(&self) -> Position {
        match self {
            Self::Ok(p) | Self::Lost(p) => *p,
        }
    }

    pub fn is_lost(&self) -> bool {
        matches!(self, Self::Lost(_))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(p) => write!(f, "{p}"),
            Self::Lost(p) => write!(f, "{p} LOST"),
        }
    }
}
