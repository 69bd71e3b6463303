//! Simulation engine that walks robots across the grid one at a time.
//!
//! The entry point is [`SimulationEngine`]. Build one per simulation run, then
//! call [`SimulationEngine::run`] for each robot in input order. Scents left by
//! earlier robots change what later robots do, so the order of calls matters.

use crate::geometry::{Axis, Coordinate};
use crate::report::{Report, Scent, ScentSet};
use crate::robot::{Instruction, Position};
use tracing::{debug, info, trace};

/// Configuration for a simulation run.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Instructions past this many are never executed.
    pub max_instructions: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_instructions: 100,
        }
    }
}

/// Result of resolving a single instruction.
enum Step {
    Continue(Position),
    Fell(Scent),
}

/// Runs robots against a shared, growing set of scents.
#[derive(Debug, Default)]
pub struct SimulationEngine {
    config: EngineConfig,
    scents: ScentSet,
    robots_run: usize,
    robots_lost: usize,
}

impl SimulationEngine {
    /// Creates an engine with the default configuration and no scents.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scents recorded so far in this run.
    pub fn scents(&self) -> &ScentSet {
        &self.scents
    }

    /// Number of robots processed by [`run`](Self::run).
    pub fn robots_run(&self) -> usize {
        self.robots_run
    }

    /// Number of robots that fell off the grid.
    pub fn robots_lost(&self) -> usize {
        self.robots_lost
    }

    /// Drives one robot from `start` through `instructions` on the grid bounded by `boundary`.
    ///
    /// Only the first [`EngineConfig::max_instructions`] instructions are executed.
    /// A forward move onto an offset that already carries a scent, on either
    /// axis, is skipped. A forward move that would leave the grid lays a scent
    /// for the violated axis (X is checked first) and ends the run with
    /// [`Report::Lost`] holding the position before the move.
    ///
    /// `start` must already lie within `boundary`; the [`Driver`](crate::Driver)
    /// rejects robots that do not before they reach the engine.
    pub fn run(
        &mut self,
        boundary: Coordinate,
        start: Position,
        instructions: &[Instruction],
    ) -> Report {
        self.robots_run += 1;
        let limit = instructions.len().min(self.config.max_instructions);
        debug!(%boundary, %start, instructions = limit, "robot starting");

        let mut position = start;
        for &instruction in &instructions[..limit] {
            trace!(?instruction, %position, "executing");
            match self.execute(boundary, position, instruction) {
                Step::Continue(next) => position = next,
                Step::Fell(scent) => {
                    self.scents.insert(scent);
                    self.robots_lost += 1;
                    info!(axis = ?scent.axis, offset = scent.offset, %position, "robot lost, scent left");
                    return Report::Lost(position);
                }
            }
        }

        debug!(%position, "robot finished");
        Report::Ok(position)
    }

    fn execute(&self, boundary: Coordinate, position: Position, instruction: Instruction) -> Step {
        match instruction {
            Instruction::TurnLeft => Step::Continue(position.turned_left()),
            Instruction::TurnRight => Step::Continue(position.turned_right()),
            Instruction::MoveForward => self.move_forward(boundary, position),
        }
    }

    fn move_forward(&self, boundary: Coordinate, position: Position) -> Step {
        let candidate = position.ahead();

        if self.scents.blocks(candidate) {
            trace!(%candidate, "move ignored, scent present");
            return Step::Continue(position);
        }

        for axis in [Axis::X, Axis::Y] {
            let value = candidate.component(axis);
            if !(0..=boundary.component(axis)).contains(&value) {
                return Step::Fell(Scent::new(axis, value));
            }
        }

        Step::Continue(position.moved_to(candidate))
    }
}
