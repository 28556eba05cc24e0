//! SA execution loop.

use super::config::{Proposal, SaConfig};
use crate::construct::MIN_POINTS;
use crate::edges::NeighborLists;
use crate::error::Result;
use crate::tour::{Move, Tour};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Best distance is sampled into `cost_history` every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// Iterations performed (including draws of the same point twice).
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted moves with negative cost.
    pub improving_moves: usize,

    /// Tour length when the run started.
    pub initial_distance: i64,

    /// Length of the best tour seen, which is the tour left behind.
    pub best_distance: i64,

    /// Temperature after the last iteration.
    pub final_temperature: f64,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best distance sampled at regular intervals.
    pub cost_history: Vec<i64>,
}

/// Executes Simulated Annealing on a tour.
///
/// The search runs on a private copy of the tour. Whenever an accepted
/// move brings the copy below the best length seen so far, the copy's
/// links are written back, so the caller's tour only ever improves.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA, seeding from `config.seed` or from entropy.
    pub fn run(tour: &mut Tour, config: &SaConfig) -> Result<SaResult> {
        Self::run_with_cancel(tour, config, None)
    }

    /// Runs SA with an optional cancellation token, checked every iteration.
    pub fn run_with_cancel(
        tour: &mut Tour,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_else(rand::random));
        Self::run_with_rng(tour, config, &mut rng, cancel)
    }

    /// Runs SA drawing from the given generator; `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        tour: &mut Tour,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        config.validate()?;

        let n = tour.len();
        let initial_distance = tour.total_distance();
        let mut temperature = config.initial_temperature.resolve(initial_distance);
        let mut result = SaResult {
            iterations: 0,
            accepted_moves: 0,
            improving_moves: 0,
            initial_distance,
            best_distance: initial_distance,
            final_temperature: temperature,
            cancelled: false,
            cost_history: vec![initial_distance],
        };

        if config.max_iterations == 0 || n < MIN_POINTS {
            return Ok(result);
        }

        log::info!(
            "annealing: {:?}, {} iterations, t0 = {temperature:.3}, start distance {initial_distance}",
            config.proposal,
            config.max_iterations
        );

        let neighbors = match config.proposal {
            Proposal::RandomPair => None,
            Proposal::Nearest(m) => Some(NeighborLists::build(tour, m)),
        };
        let decay = 10.0 / config.max_iterations as f64;

        let mut current = tour.clone();
        let mut current_distance = initial_distance;
        let mut best_distance = initial_distance;

        for _ in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    result.cancelled = true;
                    break;
                }
            }

            temperature -= temperature * decay;
            result.iterations += 1;

            let a = rng.random_range(0..n);
            let b = match &neighbors {
                Some(lists) if !lists.get(a).is_empty() => {
                    let list = lists.get(a);
                    list[rng.random_range(0..list.len())]
                }
                _ => rng.random_range(0..n),
            };

            if a != b {
                let guided = neighbors.is_some();
                let swap_cost = current.swap_cost(a, b);
                let chosen = match downhill_move(&current, a, b, swap_cost, guided) {
                    Some(mv) => Some(mv),
                    None => {
                        let u: f64 = rng.random();
                        config
                            .acceptance
                            .accepts(swap_cost, temperature, u)
                            .then_some((Move::Swap(a, b), swap_cost))
                    }
                };

                if let Some((mv, cost)) = chosen {
                    current.apply(mv);
                    current_distance += cost;
                    result.accepted_moves += 1;
                    if cost < 0 {
                        result.improving_moves += 1;
                    }

                    if current_distance < best_distance {
                        tour.copy_links_from(&current);
                        best_distance = current_distance;
                        log::debug!(
                            "annealing iteration {}: new best {best_distance} (t = {temperature:.4})",
                            result.iterations
                        );
                    }
                }
            }

            if result.iterations.is_multiple_of(HISTORY_INTERVAL) {
                result.cost_history.push(best_distance);
            }
        }

        if result.cost_history.last() != Some(&best_distance) {
            result.cost_history.push(best_distance);
        }

        debug_assert_eq!(best_distance, tour.total_distance());
        result.best_distance = best_distance;
        result.final_temperature = temperature;

        log::info!(
            "annealing: {} of {} moves accepted, distance {initial_distance} -> {best_distance}",
            result.accepted_moves,
            result.iterations
        );

        Ok(result)
    }
}

/// The move taken without a random draw, if any.
///
/// A swap is taken when it costs nothing or improves. In the guided
/// variant a non-adjacent pair is also scored as a reversal; if either
/// move is non-worsening the cheaper one is taken, with ties going to the
/// reversal.
fn downhill_move(
    current: &Tour,
    a: usize,
    b: usize,
    swap_cost: i64,
    guided: bool,
) -> Option<(Move, i64)> {
    let adjacent = b == current.next(a) || b == current.prev(a);
    let reverse_cost = (guided && !adjacent).then(|| current.two_opt_swap_cost(a, b));

    match reverse_cost {
        Some(rc) if swap_cost <= 0 || rc <= 0 => {
            if swap_cost < rc {
                Some((Move::Swap(a, b), swap_cost))
            } else {
                Some((Move::Reverse(a, b), rc))
            }
        }
        None if swap_cost <= 0 => Some((Move::Swap(a, b), swap_cost)),
        _ => None,
    }
}
