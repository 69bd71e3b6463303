//! Robot state and the instructions that drive it.

use crate::geometry::{Coordinate, Orientation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A robot's full state at an instant: where it stands and which way it faces.
///
/// Positions are values. Turning or moving yields a new `Position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub coordinate: Coordinate,
    pub orientation: Orientation,
}

impl Position {
    pub fn new(coordinate: Coordinate, orientation: Orientation) -> Self {
        Self {
            coordinate,
            orientation,
        }
    }

    /// Same spot, rotated 90 degrees anticlockwise.
    pub fn turned_left(self) -> Self {
        Self {
            orientation: self.orientation.rotate_left(),
            ..self
        }
    }

    /// Same spot, rotated 90 degrees clockwise.
    pub fn turned_right(self) -> Self {
        Self {
            orientation: self.orientation.rotate_right(),
            ..self
        }
    }

    /// The coordinate one step ahead. May lie off the grid.
    pub fn ahead(self) -> Coordinate {
        self.orientation.step(self.coordinate)
    }

    /// Same heading, standing on `coordinate`.
    pub fn moved_to(self, coordinate: Coordinate) -> Self {
        Self { coordinate, ..self }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.coordinate, self.orientation)
    }
}

/// Commands a robot understands.
///
/// New command types are added here as variants. The engine matches on this
/// enum without a wildcard arm, so an unhandled variant fails to compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Turn 90 degrees left in place (`L`).
    TurnLeft,
    /// Turn 90 degrees right in place (`R`).
    TurnRight,
    /// Move one grid point in the current heading (`F`).
    MoveForward,
}

impl Instruction {
    /// The symbol this instruction is written as in robot input.
    pub fn symbol(self) -> char {
        match self {
            Self::TurnLeft => 'L',
            Self::TurnRight => 'R',
            Self::MoveForward => 'F',
        }
    }
}
