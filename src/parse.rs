//! Turns the text lines of a robot mission into grid values.
//!
//! Instruction symbols are looked up in an [`InstructionTable`]. Unknown
//! symbols are dropped with a warning, or rejected when [`ParseConfig::strict`]
//! is set.

use crate::error::ParseError;
use crate::geometry::{Coordinate, Orientation};
use crate::robot::{Instruction, Position};
use std::num::IntErrorKind;
use tracing::warn;

/// Configuration for instruction parsing.
#[derive(Clone, Debug, Default)]
pub struct ParseConfig {
    /// Reject unknown instruction symbols instead of skipping them.
    pub strict: bool,
}

/// Maps input symbols to [`Instruction`]s.
#[derive(Clone, Debug)]
pub struct InstructionTable {
    entries: Vec<(char, Instruction)>,
}

impl Default for InstructionTable {
    /// The conventional `L`, `R`, `F` mapping.
    fn default() -> Self {
        let mut table = Self::empty();
        for instruction in [
            Instruction::TurnLeft,
            Instruction::TurnRight,
            Instruction::MoveForward,
        ] {
            table.set(instruction.symbol(), instruction);
        }
        table
    }
}

impl InstructionTable {
    /// A table that recognises nothing.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Assigns `instruction` to `symbol`, replacing any previous mapping.
    pub fn set(&mut self, symbol: char, instruction: Instruction) {
        match self.entries.iter_mut().find(|(s, _)| *s == symbol) {
            Some(entry) => entry.1 = instruction,
            None => self.entries.push((symbol, instruction)),
        }
    }

    pub fn resolve(&self, symbol: char) -> Option<Instruction> {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|&(_, instruction)| instruction)
    }
}

/// Reads one non-negative coordinate token. Values too large for `i32`
/// saturate so that [`Coordinate::new`] reports them as out of range.
fn coordinate_token(token: Option<&str>) -> Result<i32, String> {
    let token = token.ok_or_else(|| "missing token".to_string())?;
    match token.parse::<u32>() {
        Ok(v) => Ok(i32::try_from(v).unwrap_or(i32::MAX)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i32::MAX),
        Err(e) => Err(format!("{token:?}: {e}")),
    }
}

/// Parses the grid's upper-right corner, e.g. `"5 3"`.
pub fn parse_boundary(line: &str) -> Result<Coordinate, ParseError> {
    let mut tokens = line.split_ascii_whitespace();
    let fail = |reason: String| ParseError::Boundary {
        line: line.to_string(),
        reason,
    };
    let x = coordinate_token(tokens.next()).map_err(fail)?;
    let y = coordinate_token(tokens.next()).map_err(fail)?;
    Coordinate::new(x, y)
}

/// Parses a robot's starting position, e.g. `"1 1 E"`.
pub fn parse_position(line: &str) -> Result<Position, ParseError> {
    let mut tokens = line.split_ascii_whitespace();
    let fail = |reason: String| ParseError::Position {
        line: line.to_string(),
        reason,
    };
    let x = coordinate_token(tokens.next()).map_err(fail)?;
    let y = coordinate_token(tokens.next()).map_err(fail)?;
    let orientation = match tokens.next() {
        None => return Err(fail("missing orientation".to_string())),
        Some(token) => {
            let mut chars = token.chars();
            match (chars.next().and_then(Orientation::from_letter), chars.next()) {
                (Some(o), None) => o,
                _ => return Err(fail(format!("unknown orientation {token:?}"))),
            }
        }
    };
    Ok(Position::new(Coordinate::new(x, y)?, orientation))
}

/// Parses an instruction line, e.g. `"RFRFRFRF"`.
///
/// Whitespace is skipped. Other unknown symbols are dropped (and logged) unless
/// `config.strict` is set, in which case the first one is returned as an error.
pub fn parse_instructions(
    line: &str,
    table: &InstructionTable,
    config: &ParseConfig,
) -> Result<Vec<Instruction>, ParseError> {
    let mut out = Vec::with_capacity(line.len());
    for symbol in line.chars().filter(|c| !c.is_whitespace()) {
        match table.resolve(symbol) {
            Some(instruction) => out.push(instruction),
            None if config.strict => return Err(ParseError::Instruction { symbol }),
            None => warn!(%symbol, "ignored instruction symbol"),
        }
    }
    Ok(out)
}
