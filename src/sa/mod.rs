//! Simulated Annealing (SA) over a tour.
//!
//! Perturbs a private copy of the tour with random node swaps (and, in the
//! neighbor-guided variant, segment reversals), accepting worsening moves
//! while the temperature is high. The temperature decays geometrically
//! over a fixed iteration budget; there is no other stopping rule.
//!
//! The canonical tour receives the copy's links every time the copy beats
//! the best length seen, so the tour left behind is the best one visited.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{Acceptance, InitialTemperature, Proposal, SaConfig};
pub use runner::{SaResult, SaRunner};
