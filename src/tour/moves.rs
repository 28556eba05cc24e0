//! Relink primitives and their O(1) cost deltas.

use super::types::Tour;

/// A candidate change to a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Exchange the positions of two points ([`Tour::swap`]).
    Swap(usize, usize),
    /// Reverse the path from the first point forward to the second
    /// ([`Tour::reverse_between`]).
    Reverse(usize, usize),
}

impl Tour {
    /// Exchanges the positions of `i` and `j` in the cycle.
    ///
    /// Every other point keeps its relative order. Adjacent pairs need
    /// their own relink since the general four-pointer rewrite would make
    /// the two points reference themselves.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let (i, j) = if self.points[j].next == i {
            (j, i)
        } else {
            (i, j)
        };

        let p = &mut self.points;
        if p[i].next == j {
            let before = p[i].prev;
            let after = p[j].next;

            p[before].next = j;
            p[j].prev = before;
            p[j].next = i;
            p[i].prev = j;
            p[i].next = after;
            p[after].prev = i;
        } else {
            let (i_prev, i_next) = (p[i].prev, p[i].next);
            let (j_prev, j_next) = (p[j].prev, p[j].next);

            p[i].prev = j_prev;
            p[i].next = j_next;
            p[j_prev].next = i;
            p[j_next].prev = i;

            p[j].prev = i_prev;
            p[j].next = i_next;
            p[i_prev].next = j;
            p[i_next].prev = j;
        }
    }

    /// Reverses the path `a -> .. -> b` (walking forward from `a`).
    ///
    /// Edges `(prev(a), a)` and `(b, next(b))` are replaced by
    /// `(prev(a), b)` and `(a, next(b))`. Runs in O(length of the path).
    ///
    /// When `b` is `prev(a)` the path is the whole cycle and the tour is
    /// turned around instead, which leaves its length unchanged.
    pub fn reverse_between(&mut self, a: usize, b: usize) {
        if a != b && self.points[b].next == a {
            for point in &mut self.points {
                std::mem::swap(&mut point.next, &mut point.prev);
            }
            return;
        }
        let before = self.points[a].prev;
        let after = self.points[b].next;

        let mut t = a;
        loop {
            let point = &mut self.points[t];
            std::mem::swap(&mut point.next, &mut point.prev);
            if t == b {
                break;
            }
            // the old `next` now sits in `prev`
            t = point.prev;
        }

        self.points[before].next = b;
        self.points[b].prev = before;
        self.points[a].next = after;
        self.points[after].prev = a;
    }

    /// Change in tour length if `a` and `b` were swapped.
    pub fn swap_cost(&self, a: usize, b: usize) -> i64 {
        if a == b {
            return 0;
        }
        let (a_prev, a_next) = (self.prev(a), self.next(a));
        let (b_prev, b_next) = (self.prev(b), self.next(b));

        if a == b_next {
            let before = self.dist(a_next, a) + self.dist(b, b_prev);
            let after = self.dist(a_next, b) + self.dist(a, b_prev);
            after - before
        } else if a == b_prev {
            let before = self.dist(a_prev, a) + self.dist(b, b_next);
            let after = self.dist(a_prev, b) + self.dist(a, b_next);
            after - before
        } else {
            let before = self.dist(a, a_prev)
                + self.dist(a, a_next)
                + self.dist(b, b_prev)
                + self.dist(b, b_next);
            let after = self.dist(b, a_prev)
                + self.dist(b, a_next)
                + self.dist(a, b_prev)
                + self.dist(a, b_next);
            after - before
        }
    }

    /// Change in tour length if the path `a -> .. -> b` were reversed.
    ///
    /// Zero when the path is the whole cycle (`b == prev(a)`).
    pub fn two_opt_swap_cost(&self, a: usize, b: usize) -> i64 {
        if a != b && self.next(b) == a {
            return 0;
        }
        let a_prev = self.prev(a);
        let b_next = self.next(b);
        self.dist(b, a_prev) + self.dist(a, b_next) - self.dist(a, a_prev) - self.dist(b, b_next)
    }

    /// Scores a move without applying it.
    pub fn move_cost(&self, mv: Move) -> i64 {
        match mv {
            Move::Swap(a, b) => self.swap_cost(a, b),
            Move::Reverse(a, b) => self.two_opt_swap_cost(a, b),
        }
    }

    pub fn apply(&mut self, mv: Move) {
        match mv {
            Move::Swap(a, b) => self.swap(a, b),
            Move::Reverse(a, b) => self.reverse_between(a, b),
        }
    }

    /// The move a local search evaluates for the pair `(a, b)`.
    ///
    /// Returns `None` when `b` is `a` or its predecessor, `Swap` when `b`
    /// follows `a` directly, and `Reverse` otherwise.
    pub fn candidate_move(&self, a: usize, b: usize) -> Option<Move> {
        if a == b || b == self.prev(a) {
            None
        } else if b == self.next(a) {
            Some(Move::Swap(a, b))
        } else {
            Some(Move::Reverse(a, b))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn line(n: usize) -> Tour {
        Tour::new((0..n).map(|i| (i as f64 * 10.0, 0.0)))
    }

    fn scrambled(coords: &[(i32, i32)], seed: u64) -> Tour {
        let mut tour = Tour::new(coords.iter().map(|&(x, y)| (x as f64, y as f64)));
        let mut order: Vec<usize> = (0..tour.len()).collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));
        tour.link_sequence(&order).unwrap();
        tour
    }

    #[test]
    fn test_swap_adjacent_forward() {
        let mut tour = line(5);
        tour.swap(1, 2);
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.order(), vec![0, 2, 1, 3, 4]);
    }

    #[test]
    fn test_swap_adjacent_backward() {
        let mut tour = line(5);
        tour.swap(2, 1);
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.order(), vec![0, 2, 1, 3, 4]);
    }

    #[test]
    fn test_swap_across_closing_edge() {
        let mut tour = line(5);
        tour.swap(4, 0);
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.order(), vec![0, 4, 1, 2, 3]);
    }

    #[test]
    fn test_swap_general() {
        let mut tour = line(6);
        tour.swap(1, 4);
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.order(), vec![0, 4, 2, 3, 1, 5]);
    }

    #[test]
    fn test_swap_two_apart() {
        let mut tour = line(5);
        tour.swap(1, 3);
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.order(), vec![0, 3, 2, 1, 4]);
    }

    #[test]
    fn test_swap_same_point_is_noop() {
        let mut tour = line(4);
        let before = tour.clone();
        tour.swap(2, 2);
        assert_eq!(tour, before);
        assert_eq!(tour.swap_cost(2, 2), 0);
    }

    #[test]
    fn test_reverse_between_inner_segment() {
        let mut tour = line(6);
        tour.reverse_between(1, 4);
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.order(), vec![0, 4, 3, 2, 1, 5]);
    }

    #[test]
    fn test_reverse_between_wrapping_segment() {
        let mut tour = line(6);
        tour.reverse_between(4, 1);
        assert!(tour.is_valid_cycle());
        // 3 -> 1 -> 0 -> 5 -> 4 -> 2
        assert_eq!(tour.order(), vec![0, 5, 4, 2, 3, 1]);
    }

    #[test]
    fn test_reverse_between_single_point() {
        let mut tour = line(5);
        let before = tour.clone();
        tour.reverse_between(2, 2);
        assert_eq!(tour, before);
    }

    #[test]
    fn test_reverse_between_all_but_one() {
        let mut tour = line(5);
        tour.reverse_between(1, 4);
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.order(), vec![0, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_between_whole_cycle_turns_tour_around() {
        let mut tour = line(5);
        let before = tour.total_distance();
        assert_eq!(tour.two_opt_swap_cost(2, 1), 0);
        tour.reverse_between(2, 1);
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.order(), vec![0, 4, 3, 2, 1]);
        assert_eq!(tour.total_distance(), before);
    }

    #[test]
    fn test_two_opt_uncrosses() {
        // 0 -> 2 -> 1 -> 3 on the unit square crosses itself
        let mut tour = Tour::new([(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        tour.link_sequence(&[0, 2, 1, 3]).unwrap();
        let before = tour.total_distance();
        let cost = tour.two_opt_swap_cost(2, 1);
        tour.reverse_between(2, 1);
        assert!(cost < 0);
        assert_eq!(tour.total_distance(), before + cost);
        assert_eq!(tour.total_distance(), 40);
    }

    #[test]
    fn test_candidate_move() {
        let tour = line(6);
        assert_eq!(tour.candidate_move(2, 2), None);
        assert_eq!(tour.candidate_move(2, 1), None);
        assert_eq!(tour.candidate_move(2, 3), Some(Move::Swap(2, 3)));
        assert_eq!(tour.candidate_move(2, 5), Some(Move::Reverse(2, 5)));
        assert_eq!(tour.candidate_move(0, 5), None);
    }

    #[test]
    fn test_duplicate_points_have_zero_cost() {
        let mut tour = Tour::new([(1.0, 1.0); 6]);
        assert_eq!(tour.swap_cost(0, 3), 0);
        assert_eq!(tour.two_opt_swap_cost(1, 4), 0);
        tour.reverse_between(1, 4);
        assert!(tour.is_valid_cycle());
        assert_eq!(tour.total_distance(), 0);
    }

    proptest! {
        #[test]
        fn prop_swap_cost_matches_relink(
            coords in prop::collection::vec((0i32..200, 0i32..200), 4..40),
            seed in any::<u64>(),
            ia in any::<prop::sample::Index>(),
            ib in any::<prop::sample::Index>(),
        ) {
            let mut tour = scrambled(&coords, seed);
            let (a, b) = (ia.index(tour.len()), ib.index(tour.len()));
            let before = tour.total_distance();
            let cost = tour.swap_cost(a, b);
            tour.swap(a, b);
            prop_assert!(tour.is_valid_cycle());
            prop_assert_eq!(tour.total_distance() - before, cost);
        }

        #[test]
        fn prop_two_opt_cost_matches_relink(
            coords in prop::collection::vec((0i32..200, 0i32..200), 4..40),
            seed in any::<u64>(),
            ia in any::<prop::sample::Index>(),
            ib in any::<prop::sample::Index>(),
        ) {
            let mut tour = scrambled(&coords, seed);
            let (a, b) = (ia.index(tour.len()), ib.index(tour.len()));
            let before = tour.total_distance();
            let cost = tour.two_opt_swap_cost(a, b);
            tour.reverse_between(a, b);
            prop_assert!(tour.is_valid_cycle());
            prop_assert_eq!(tour.total_distance() - before, cost);
        }

        #[test]
        fn prop_move_sequence_keeps_single_cycle(
            coords in prop::collection::vec((0i32..50, 0i32..50), 4..25),
            pairs in prop::collection::vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 1..30),
        ) {
            let mut tour = Tour::new(coords.iter().map(|&(x, y)| (x as f64, y as f64)));
            for (ia, ib) in pairs {
                let (a, b) = (ia.index(tour.len()), ib.index(tour.len()));
                if let Some(mv) = tour.candidate_move(a, b) {
                    let before = tour.total_distance();
                    let cost = tour.move_cost(mv);
                    tour.apply(mv);
                    prop_assert!(tour.is_valid_cycle());
                    prop_assert_eq!(tour.total_distance(), before + cost);
                }
            }
        }
    }
}
