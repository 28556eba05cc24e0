//! Pipeline execution.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{Construction, SolverConfig, Step};
use crate::construct::{Constructor, GreedyEdge, NearestNeighbor, MIN_POINTS};
use crate::error::Result;
use crate::sa::SaRunner;
use crate::tour::Tour;
use crate::two_opt::TwoOptRunner;

/// Builds and improves a tour for a point set.
///
/// # Examples
///
/// ```
/// use u_tsp::pipeline::{Algorithm, Solver, SolverConfig};
///
/// let square = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
/// let solver = Solver::new(SolverConfig::new(Algorithm::Greedy));
/// let tour = solver.solve(&square).unwrap();
/// assert_eq!(tour.total_distance(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Runs the configured pipeline on `coords`, indexed in input order.
    ///
    /// Fewer than four points are returned in input order with no
    /// construction, since every cycle over them has the same length.
    pub fn solve(&self, coords: &[(f64, f64)]) -> Result<Tour> {
        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or_else(rand::random));
        self.solve_with_rng(coords, &mut rng)
    }

    /// Like [`Solver::solve`], with annealing stages drawing from `rng`.
    pub fn solve_with_rng<R: Rng>(&self, coords: &[(f64, f64)], rng: &mut R) -> Result<Tour> {
        let algorithm = self.config.algorithm;
        let mut tour = Tour::new(coords.iter().copied());
        if tour.len() < MIN_POINTS {
            log::info!("{} points, keeping input order", tour.len());
            return Ok(tour);
        }

        log::info!("running pipeline {algorithm} over {} points", tour.len());
        let baseline = match algorithm.baseline() {
            Some(construction) => {
                let mut kept = tour.clone();
                construct(construction, &mut kept)?;
                Some(kept)
            }
            None => None,
        };

        for step in algorithm.steps() {
            run_step(&step, &mut tour, rng)?;
        }

        if let Some(kept) = baseline {
            let (kept_distance, improved_distance) = (kept.total_distance(), tour.total_distance());
            log::info!("baseline distance {kept_distance}, improved distance {improved_distance}");
            if kept_distance < improved_distance {
                tour = kept;
            }
        }

        log::info!("pipeline {algorithm} finished, distance {}", tour.total_distance());
        Ok(tour)
    }
}

fn construct(construction: Construction, tour: &mut Tour) -> Result<()> {
    match construction {
        Construction::NearestNeighbor => NearestNeighbor.build(tour),
        Construction::GreedyEdge => GreedyEdge.build(tour),
    }
}

fn run_step<R: Rng>(step: &Step, tour: &mut Tour, rng: &mut R) -> Result<()> {
    match step {
        Step::Construct(construction) => construct(*construction, tour),
        Step::TwoOpt(config) => TwoOptRunner::run(tour, config).map(|_| ()),
        Step::Anneal(config) => SaRunner::run_with_rng(tour, config, rng, None).map(|_| ()),
    }
}
