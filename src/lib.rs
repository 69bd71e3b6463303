//! # martian-robots
//!
//! Simulates robots crossing a bounded rectangular grid on Mars.
//!
//! Each robot follows a string of turn/move instructions. A robot that walks
//! off the edge is lost, but leaves a *scent* behind; later robots in the same
//! run ignore any move that would take them over a scented edge. The
//! [`SimulationEngine`] owns that scent state for one run, and the [`Driver`]
//! wraps it in the classic line-oriented mission format.

pub mod driver;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod parse;
pub mod report;
pub mod robot;

pub use driver::*;
pub use engine::*;
pub use error::*;
pub use geometry::*;
pub use parse::*;
pub use report::*;
pub use robot::*;
