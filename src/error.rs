use crate::geometry::Coordinate;
use thiserror::Error;

/// Errors raised while turning input lines into grid values.
///
/// The simulation engine never produces these: a lost robot is a normal
/// [`Report`](crate::Report), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Boundary line is missing a token or holds a non-integer.
    #[error("unable to parse boundary from {line:?}: {reason}")]
    Boundary { line: String, reason: String },

    /// Position line is missing a token, holds a non-integer coordinate,
    /// or names an unknown orientation.
    #[error("unable to parse initial position from {line:?}: {reason}")]
    Position { line: String, reason: String },

    /// Unknown instruction symbol (strict mode only).
    #[error("invalid instruction found: {symbol}")]
    Instruction { symbol: char },

    /// A coordinate component is larger than the grid allows.
    #[error("coordinate ({x}, {y}) exceeds the boundary limit of {max}")]
    BoundaryExceeded { x: i32, y: i32, max: i32 },

    /// A coordinate component is below the origin.
    #[error("coordinate ({x}, {y}) lies below the origin")]
    BelowOrigin { x: i32, y: i32 },

    /// A start position lies outside the current grid.
    #[error("start {start} lies outside the grid bounded by {boundary}")]
    OffGrid {
        start: Coordinate,
        boundary: Coordinate,
    },

    /// Input ended where another line was required.
    #[error("missing {0} line")]
    MissingLine(&'static str),
}

/// Errors that end a driver session.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Without a grid no robot can run.
    #[error(transparent)]
    Boundary(ParseError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}
