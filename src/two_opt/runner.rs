//! 2-opt execution loop.
//!
//! # Algorithm
//!
//! 1. Scan the whole sweep: for every point `i` (in tour order) and every
//!    candidate partner `j`, score the move for `(i, j)`
//! 2. Apply only the single best (most negative) move of the sweep
//! 3. Repeat until a sweep finds no improving move or the budget runs out
//!
//! Partners directly after `i` are scored as a node swap, the predecessor
//! of `i` is skipped, and every other partner is scored as a segment
//! reversal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::{Neighborhood, TwoOptConfig};
use crate::construct::MIN_POINTS;
use crate::edges::NeighborLists;
use crate::error::Result;
use crate::tour::{Move, Tour};

/// Result of a 2-opt run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoOptResult {
    /// Sweeps performed, including the final non-improving one.
    pub iterations: usize,

    /// Number of moves applied.
    pub moves_applied: usize,

    pub initial_distance: i64,

    pub final_distance: i64,

    /// Whether the run stopped at a local optimum (rather than the budget).
    pub converged: bool,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes best-improvement 2-opt on a tour in place.
pub struct TwoOptRunner;

impl TwoOptRunner {
    /// Runs 2-opt on `tour`.
    pub fn run(tour: &mut Tour, config: &TwoOptConfig) -> Result<TwoOptResult> {
        Self::run_with_cancel(tour, config, None)
    }

    /// Runs 2-opt with an optional cancellation token, checked between sweeps.
    pub fn run_with_cancel(
        tour: &mut Tour,
        config: &TwoOptConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TwoOptResult> {
        config.validate()?;

        let initial_distance = tour.total_distance();
        let mut result = TwoOptResult {
            iterations: 0,
            moves_applied: 0,
            initial_distance,
            final_distance: initial_distance,
            converged: false,
            cancelled: false,
        };

        if tour.len() < MIN_POINTS {
            result.converged = true;
            return Ok(result);
        }

        log::info!(
            "2-opt: {:?}, at most {} sweeps, start distance {initial_distance}",
            config.neighborhood,
            config.max_iterations
        );

        let neighbors = match config.neighborhood {
            Neighborhood::Exhaustive => None,
            Neighborhood::Nearest(m) => Some(NeighborLists::build(tour, m)),
        };

        let mut distance = initial_distance;
        for _ in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    result.cancelled = true;
                    break;
                }
            }

            result.iterations += 1;
            let best = match &neighbors {
                Some(lists) => best_nearest_move(tour, lists),
                None => best_exhaustive_move(tour),
            };

            match best {
                Some((mv, delta)) => {
                    tour.apply(mv);
                    distance += delta;
                    result.moves_applied += 1;
                    log::debug!(
                        "2-opt sweep {}: {mv:?} ({delta}), distance {distance}",
                        result.iterations
                    );
                }
                None => {
                    result.converged = true;
                    break;
                }
            }
        }

        result.final_distance = distance;
        debug_assert_eq!(distance, tour.total_distance());
        log::info!(
            "2-opt: {} moves in {} sweeps, distance {initial_distance} -> {distance}",
            result.moves_applied,
            result.iterations
        );

        Ok(result)
    }
}

/// Keeps the first strictly better candidate; anything >= 0 never wins.
fn keep_best(best: Option<(Move, i64)>, candidate: (Move, i64)) -> Option<(Move, i64)> {
    let threshold = best.map_or(0, |(_, cost)| cost);
    if candidate.1 < threshold {
        Some(candidate)
    } else {
        best
    }
}

fn score(tour: &Tour, i: usize, j: usize) -> Option<(Move, i64)> {
    tour.candidate_move(i, j).map(|mv| (mv, tour.move_cost(mv)))
}

/// Best move over all pairs `(i, j)` with `j` after `i` in the tour
/// (walking from point 0).
fn best_exhaustive_move(tour: &Tour) -> Option<(Move, i64)> {
    tour.iter()
        .flat_map(move |i| {
            std::iter::successors(Some(tour.next(i)), move |&j| Some(tour.next(j)))
                .take_while(|&j| j != 0)
                .map(move |j| (i, j))
        })
        .filter_map(|(i, j)| score(tour, i, j))
        .fold(None, keep_best)
}

/// Best move over all pairs `(i, j)` with `j` in the neighbor list of `i`.
fn best_nearest_move(tour: &Tour, lists: &NeighborLists) -> Option<(Move, i64)> {
    tour.iter()
        .flat_map(move |i| lists.get(i).iter().map(move |&j| (i, j)))
        .filter_map(|(i, j)| score(tour, i, j))
        .fold(None, keep_best)
}
