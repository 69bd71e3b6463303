//! Run a Martian robot mission.
//!
//! Usage: `martian-robots [INPUT] [--strict] [--format text|json] [--max-instructions N]`

use clap::{Parser, ValueEnum};
use martian_robots::{Driver, DriverConfig, EngineConfig, OutputFormat, ParseConfig};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "martian-robots")]
#[command(about = "Move robots around a bounded grid on Mars")]
struct Args {
    /// Mission file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Reject unknown instruction symbols instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Output format for robot reports
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Instructions beyond this count are ignored
    #[arg(long = "max-instructions", default_value_t = 100)]
    max_instructions: usize,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();
    let config = DriverConfig {
        engine: EngineConfig {
            max_instructions: args.max_instructions,
        },
        parse: ParseConfig {
            strict: args.strict,
        },
        format: match args.format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        },
    };
    let driver = Driver::new(config);
    let stdout = io::stdout().lock();

    let result = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => driver.run(BufReader::new(file), stdout),
            Err(e) => {
                error!("Failed to open {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => driver.run(io::stdin().lock(), stdout),
    };

    match result {
        Ok(summary) => info!(
            robots = summary.robots,
            lost = summary.lost,
            errors = summary.errors,
            scents = summary.scents,
            "mission complete"
        ),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
