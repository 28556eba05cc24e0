//! Construction and improvement pipelines.
//!
//! A pipeline is a constructor followed by zero or more improvers, all
//! run on the same tour. [`Algorithm`] names the nine fixed pipelines of
//! the command-line tool; [`Solver`] runs one of them on a point set.

mod config;
mod runner;

pub use config::{Algorithm, Construction, SolverConfig, Step};
pub use runner::Solver;
