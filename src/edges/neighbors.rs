//! Capacity-bounded nearest-neighbor lists.

use super::catalog::EdgeCatalog;
use crate::tour::Tour;

/// For each point, up to `capacity` other points, closest first.
#[derive(Debug, Clone)]
pub struct NeighborLists {
    lists: Vec<Vec<usize>>,
    capacity: usize,
}

impl NeighborLists {
    /// Derives the lists from a sorted catalog over `n` points.
    ///
    /// The capacity is clamped to `n - 1`. Each catalog edge `(a, b)` adds
    /// `b` to `a`'s list and `a` to `b`'s list while the respective list
    /// still has room.
    pub fn from_catalog(catalog: &EdgeCatalog, n: usize, capacity: usize) -> Self {
        let capacity = capacity.min(n.saturating_sub(1));
        let mut lists: Vec<Vec<usize>> = (0..n).map(|_| Vec::with_capacity(capacity)).collect();

        for edge in catalog {
            if lists[edge.a].len() < capacity {
                lists[edge.a].push(edge.b);
            }
            if lists[edge.b].len() < capacity {
                lists[edge.b].push(edge.a);
            }
        }

        Self { lists, capacity }
    }

    /// Builds a fresh catalog for `tour` and derives the lists from it.
    pub fn build(tour: &Tour, capacity: usize) -> Self {
        Self::from_catalog(&EdgeCatalog::new(tour), tour.len(), capacity)
    }

    /// Neighbors of `index`, closest first.
    #[inline]
    pub fn get(&self, index: usize) -> &[usize] {
        &self.lists[index]
    }

    /// Effective capacity after clamping.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of points covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scattered() -> Tour {
        Tour::new([
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 25.0),
            (40.0, 40.0),
            (12.0, 3.0),
            (80.0, 10.0),
        ])
    }

    #[test]
    fn test_capacity_clamped() {
        let tour = scattered();
        let lists = NeighborLists::build(&tour, 300);
        assert_eq!(lists.capacity(), 5);
        for i in 0..tour.len() {
            assert_eq!(lists.get(i).len(), 5, "point {i} should list every other point");
        }
    }

    #[test]
    fn test_lists_sorted_and_exclude_self() {
        let tour = scattered();
        let lists = NeighborLists::build(&tour, 3);
        for i in 0..tour.len() {
            let list = lists.get(i);
            assert!(list.len() <= 3);
            assert!(!list.contains(&i), "point {i} lists itself");
            for w in list.windows(2) {
                assert!(tour.dist(i, w[0]) <= tour.dist(i, w[1]));
            }
        }
    }

    #[test]
    fn test_nearest_first() {
        let tour = scattered();
        let lists = NeighborLists::build(&tour, 2);
        assert_eq!(lists.get(1)[0], 4);
        assert_eq!(lists.get(4)[0], 1);
    }

    #[test]
    fn test_lists_can_be_asymmetric() {
        // 0 -- 1 ---- 2 on a line with one slot each
        let tour = Tour::new([(0.0, 0.0), (1.0, 0.0), (3.0, 0.0), (20.0, 0.0)]);
        let lists = NeighborLists::build(&tour, 1);
        assert_eq!(lists.get(0), &[1]);
        assert_eq!(lists.get(1), &[0]);
        assert_eq!(lists.get(2), &[1]);
        assert!(!lists.get(1).contains(&2));
    }

    #[test]
    fn test_single_point_has_no_neighbors() {
        let tour = Tour::new([(3.0, 3.0)]);
        let lists = NeighborLists::build(&tour, 5);
        assert_eq!(lists.capacity(), 0);
        assert!(lists.get(0).is_empty());
    }
}
