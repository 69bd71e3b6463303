//! Line-oriented mission driver.
//!
//! Reads a boundary line followed by position/instruction line pairs, runs each
//! robot through a single [`SimulationEngine`] and writes one output line per
//! robot. A bad robot produces an `error:` line and the session moves on; a bad
//! boundary ends the session.

use crate::engine::{EngineConfig, SimulationEngine};
use crate::error::{DriverError, ParseError};
use crate::parse::{InstructionTable, ParseConfig, parse_boundary, parse_instructions, parse_position};
use crate::report::Report;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// How reports are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `x y O` or `x y O LOST`.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct DriverConfig {
    pub engine: EngineConfig,
    pub parse: ParseConfig,
    pub format: OutputFormat,
}

/// Totals for a finished session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub robots: usize,
    pub lost: usize,
    pub errors: usize,
    pub scents: usize,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum ErrorLine<'a> {
    Error { message: &'a str },
}

/// Drives a whole mission from `input` to `output`.
pub struct Driver {
    config: DriverConfig,
    table: InstructionTable,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            table: InstructionTable::default(),
        }
    }

    /// Replaces the instruction symbol table (builder pattern).
    pub fn with_table(mut self, table: InstructionTable) -> Self {
        self.table = table;
        self
    }

    /// Runs every robot described by `input`, writing one line per robot to `output`.
    ///
    /// Blank lines between robots are skipped. A position line with no
    /// instruction line after it is reported as an error for that robot.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        mut output: W,
    ) -> Result<SessionSummary, DriverError> {
        let mut lines = input.lines();

        let boundary_line = next_content_line(&mut lines)?
            .ok_or(DriverError::Boundary(ParseError::MissingLine("boundary")))?;
        let boundary = parse_boundary(&boundary_line).map_err(DriverError::Boundary)?;
        debug!(%boundary, "grid ready");

        let mut engine = SimulationEngine::with_config(self.config.engine.clone());
        let mut summary = SessionSummary::default();

        while let Some(position_line) = next_content_line(&mut lines)? {
            // The instruction line is consumed even when the position is bad so
            // that the next robot starts on its own position line.
            let instruction_line = lines.next().transpose()?;

            let parsed = parse_position(&position_line).and_then(|start| {
                if !start.coordinate.within(boundary) {
                    return Err(ParseError::OffGrid {
                        start: start.coordinate,
                        boundary,
                    });
                }
                let line = instruction_line.ok_or(ParseError::MissingLine("instruction"))?;
                let instructions = parse_instructions(&line, &self.table, &self.config.parse)?;
                Ok((start, instructions))
            });

            match parsed {
                Ok((start, instructions)) => {
                    let report = engine.run(boundary, start, &instructions);
                    summary.robots += 1;
                    if report.is_lost() {
                        summary.lost += 1;
                    }
                    self.write_report(&mut output, &report)?;
                }
                Err(e) => {
                    warn!(error = %e, "skipping robot");
                    summary.errors += 1;
                    self.write_error(&mut output, &e)?;
                }
            }
        }

        summary.scents = engine.scents().len();
        output.flush()?;
        Ok(summary)
    }

    fn write_report<W: Write>(&self, output: &mut W, report: &Report) -> Result<(), DriverError> {
        match self.config.format {
            OutputFormat::Text => writeln!(output, "{report}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, report)?;
                writeln!(output)?;
            }
        }
        Ok(())
    }

    fn write_error<W: Write>(&self, output: &mut W, error: &ParseError) -> Result<(), DriverError> {
        let message = error.to_string();
        match self.config.format {
            OutputFormat::Text => writeln!(output, "error: {message}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, &ErrorLine::Error { message: &message })?;
                writeln!(output)?;
            }
        }
        Ok(())
    }
}

fn next_content_line<I>(lines: &mut I) -> Result<Option<String>, DriverError>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    for line in lines {
        let line = line?;
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
    }
    Ok(None)
}
