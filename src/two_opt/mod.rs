//! 2-opt local search.
//!
//! Each sweep scores every candidate pair and applies the single best
//! improving move; the search stops at a local optimum or when the sweep
//! budget runs out. Candidates come either from the whole tour
//! ([`Neighborhood::Exhaustive`]) or from precomputed nearest-neighbor
//! lists ([`Neighborhood::Nearest`]).
//!
//! # References
//!
//! - Croes (1958), "A Method for Solving Traveling-Salesman Problems"

mod config;
mod runner;

pub use config::{Neighborhood, TwoOptConfig};
pub use runner::{TwoOptResult, TwoOptRunner};
