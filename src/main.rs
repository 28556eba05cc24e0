//! Command-line TSP solver.
//!
//! Reads `n` and `n` coordinate pairs from stdin, writes the tour (one
//! point index per line) to stdout and `Final distance: N` to stderr.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use env_logger::{fmt::Formatter, Builder, Target};
use log::{Level, LevelFilter};
use u_tsp::io::{read_points, write_tour};
use u_tsp::pipeline::{Algorithm, Solver, SolverConfig};

#[derive(Parser)]
#[command(name = "u-tsp")]
#[command(about = "Heuristic Euclidean TSP solver")]
#[command(version)]
struct Cli {
    /// Pipeline code 1-9, or `m` for the default (6)
    #[arg(default_value = "m")]
    algorithm: Algorithm,

    /// Seed for the annealing stages (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log verbosity on stderr
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logger(level: LogLevel) -> io::Result<()> {
    Builder::new()
        .filter_level(level.to_filter())
        .write_style(env_logger::WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf: &mut Formatter, record| {
            writeln!(buf, "{} {}", level_tag(record.level()), record.args())
        })
        .try_init()
        .map_err(io::Error::other)
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn run(cli: Cli) -> u_tsp::Result<()> {
    init_logger(cli.log_level)?;

    let points = read_points(io::stdin().lock())?;
    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::debug!("read {} points, algorithm {}, seed {seed}", points.len(), cli.algorithm);

    let solver = Solver::new(SolverConfig::new(cli.algorithm).with_seed(seed));
    let tour = solver.solve(&points)?;

    write_tour(&tour, BufWriter::new(io::stdout().lock()))?;
    eprintln!("Final distance: {}", tour.total_distance());
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
