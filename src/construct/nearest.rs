//! Nearest-neighbor construction.

use super::{check_size, Constructor};
use crate::error::Result;
use crate::tour::Tour;

/// Greedy walk from point 0 to the closest unvisited point.
///
/// Ties go to the lowest index, so the result only depends on the input
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

impl NearestNeighbor {
    /// Visiting order produced by the walk.
    pub fn order(tour: &Tour) -> Vec<usize> {
        let n = tour.len();
        let mut order = Vec::with_capacity(n);
        let mut used = vec![false; n];
        if n == 0 {
            return order;
        }

        order.push(0);
        used[0] = true;
        let mut last = 0;

        for _ in 1..n {
            let mut best: Option<(usize, i64)> = None;
            for j in 0..n {
                if used[j] {
                    continue;
                }
                let d = tour.dist(last, j);
                if best.is_none_or(|(_, best_d)| d < best_d) {
                    best = Some((j, d));
                }
            }
            // n - order.len() unused points remain, so a candidate exists
            let Some((next, _)) = best else { break };
            order.push(next);
            used[next] = true;
            last = next;
        }

        order
    }
}

impl Constructor for NearestNeighbor {
    fn name(&self) -> &str {
        "nearest-neighbor"
    }

    fn build(&self, tour: &mut Tour) -> Result<()> {
        check_size(tour)?;
        log::info!("{}: building tour over {} points", self.name(), tour.len());

        let order = Self::order(tour);
        tour.link_sequence(&order)?;

        log::info!("{}: distance {}", self.name(), tour.total_distance());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;

    #[test]
    fn test_unit_square() {
        let mut tour = Tour::new([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        NearestNeighbor.build(&mut tour).unwrap();
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.order(), vec![0, 1, 2, 3]);
        assert_eq!(tour.total_distance(), 4);
    }

    #[test]
    fn test_follows_closest_point() {
        // input order scrambled along a line
        let mut tour = Tour::new([
            (0.0, 0.0),
            (30.0, 0.0),
            (10.0, 0.0),
            (40.0, 0.0),
            (20.0, 0.0),
        ]);
        NearestNeighbor.build(&mut tour).unwrap();
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.order(), vec![0, 2, 4, 1, 3]);
        assert_eq!(tour.total_distance(), 80);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        // 1 and 2 are equally far from 0
        let tour = Tour::new([(0.0, 0.0), (5.0, 0.0), (-5.0, 0.0), (0.0, 50.0)]);
        assert_eq!(NearestNeighbor::order(&tour), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_duplicate_points() {
        let mut tour = Tour::new([(2.0, 2.0); 5]);
        NearestNeighbor.build(&mut tour).unwrap();
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.total_distance(), 0);
    }

    #[test]
    fn test_rejects_three_points() {
        let mut tour = Tour::new([(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let err = NearestNeighbor.build(&mut tour).unwrap_err();
        assert!(matches!(
            err,
            TspError::TooFewPoints {
                found: 3,
                required: 4
            }
        ));
        // untouched
        assert_eq!(tour.order(), vec![0, 1, 2]);
    }
}
