//! Grid coordinates, compass orientation and the pure forward step.

use crate::error::ParseError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The largest value any validated coordinate component may take.
pub const MAX_COORDINATE: i32 = 50;

/// A point on the Martian grid.
///
/// Coordinates built with [`Coordinate::new`] lie in `0..=MAX_COORDINATE`. Coordinates produced by [`Orientation::step`] are not:
/// they may sit one unit outside the grid (including below zero) until the
/// engine decides what to do with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    /// The lower-left corner of every grid.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Creates a validated coordinate, rejecting components outside `0..=MAX_COORDINATE`.
    pub fn new(x: i32, y: i32) -> Result<Self, ParseError> {
        if x < 0 || y < 0 {
            return Err(ParseError::BelowOrigin { x, y });
        }
        if x > MAX_COORDINATE || y > MAX_COORDINATE {
            return Err(ParseError::BoundaryExceeded {
                x,
                y,
                max: MAX_COORDINATE,
            });
        }
        Ok(Self { x, y })
    }

    /// Creates a coordinate without any range check.
    pub const fn unchecked(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the component lying on `axis`.
    pub fn component(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// True if the coordinate lies inside the rectangle spanned by the origin and `boundary`.
    pub fn within(self, boundary: Coordinate) -> bool {
        (0..=boundary.x).contains(&self.x) && (0..=boundary.y).contains(&self.y)
    }
}

impl From<Coordinate> for IVec2 {
    fn from(c: Coordinate) -> Self {
        IVec2::new(c.x, c.y)
    }
}

impl From<IVec2> for Coordinate {
    fn from(v: IVec2) -> Self {
        Self::unchecked(v.x, v.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// One of the two grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Compass heading of a robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Turns 90 degrees anticlockwise (N → W → S → E → N).
    pub fn rotate_left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// Turns 90 degrees clockwise (N → E → S → W → N).
    pub fn rotate_right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit offset of one forward step. North is `+Y`.
    pub fn delta(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::South => IVec2::NEG_Y,
            Self::East => IVec2::X,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Returns the coordinate one unit ahead of `from`. The result is not bounds-checked.
    pub fn step(self, from: Coordinate) -> Coordinate {
        (IVec2::from(from) + self.delta()).into()
    }

    /// The single-letter code used in robot input and reports.
    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Inverse of [`letter`](Self::letter).
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Free-function form of [`Orientation::step`].
pub fn step(orientation: Orientation, from: Coordinate) -> Coordinate {
    orientation.step(from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_turns_return_to_start() {
        for o in Orientation::ALL {
            let right = o.rotate_right().rotate_right().rotate_right().rotate_right();
            let left = o.rotate_left().rotate_left().rotate_left().rotate_left();
            assert_eq!(right, o);
            assert_eq!(left, o);
        }
    }

    #[test]
    fn left_undoes_right() {
        for o in Orientation::ALL {
            assert_eq!(o.rotate_right().rotate_left(), o);
            assert_eq!(o.rotate_left().rotate_right(), o);
        }
    }

    #[test]
    fn right_cycle_order() {
        assert_eq!(Orientation::North.rotate_right(), Orientation::East);
        assert_eq!(Orientation::East.rotate_right(), Orientation::South);
        assert_eq!(Orientation::South.rotate_right(), Orientation::West);
        assert_eq!(Orientation::West.rotate_right(), Orientation::North);
    }

    #[test]
    fn step_may_leave_the_grid() {
        let origin = Coordinate::ORIGIN;
        assert_eq!(step(Orientation::South, origin), Coordinate::unchecked(0, -1));
        assert_eq!(step(Orientation::West, origin), Coordinate::unchecked(-1, 0));
        assert_eq!(step(Orientation::North, origin), Coordinate::unchecked(0, 1));
        assert_eq!(step(Orientation::East, origin), Coordinate::unchecked(1, 0));

        let edge = Coordinate::new(MAX_COORDINATE, MAX_COORDINATE).unwrap();
        assert_eq!(Orientation::North.step(edge).y, MAX_COORDINATE + 1);
    }

    #[test]
    fn validated_construction_caps_at_fifty() {
        assert!(Coordinate::new(50, 50).is_ok());
        assert!(matches!(
            Coordinate::new(51, 3),
            Err(ParseError::BoundaryExceeded { x: 51, y: 3, max: 50 })
        ));
        assert!(Coordinate::new(0, 51).is_err());
    }

    #[test]
    fn validated_construction_rejects_negatives() {
        assert!(Coordinate::new(0, 0).is_ok());
        assert_eq!(
            Coordinate::new(-3, -7),
            Err(ParseError::BelowOrigin { x: -3, y: -7 })
        );
        assert!(Coordinate::new(-1, 3).is_err());
        assert!(Coordinate::new(3, -1).is_err());
    }

    #[test]
    fn within_is_inclusive() {
        let boundary = Coordinate::new(5, 3).unwrap();
        assert!(Coordinate::unchecked(5, 3).within(boundary));
        assert!(Coordinate::ORIGIN.within(boundary));
        assert!(!Coordinate::unchecked(6, 3).within(boundary));
        assert!(!Coordinate::unchecked(0, -1).within(boundary));
    }

    #[test]
    fn letters_round_trip() {
        for o in Orientation::ALL {
            assert_eq!(Orientation::from_letter(o.letter()), Some(o));
        }
        assert_eq!(Orientation::from_letter('A'), None);
    }
}
