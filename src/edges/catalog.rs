//! All point pairs sorted by distance.

use crate::tour::Tour;

/// An unordered point pair and its rounded length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub dist: i64,
}

impl Edge {
    /// The endpoint opposite to `index`, if `index` is an endpoint.
    #[inline]
    pub fn other(&self, index: usize) -> Option<usize> {
        if self.a == index {
            Some(self.b)
        } else if self.b == index {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Every unordered pair of an instance, shortest first.
///
/// Pairs are enumerated as `(i, j)` with `j < i` and sorted stably, so
/// equal-length edges keep that enumeration order and results are
/// deterministic.
#[derive(Debug, Clone)]
pub struct EdgeCatalog {
    edges: Vec<Edge>,
}

impl EdgeCatalog {
    /// Builds the catalog from the points of `tour`. O(n² log n).
    pub fn new(tour: &Tour) -> Self {
        let n = tour.len();
        let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for a in 0..n {
            for b in 0..a {
                edges.push(Edge {
                    a,
                    b,
                    dist: tour.dist(a, b),
                });
            }
        }
        edges.sort_by_key(|e| e.dist);

        Self { edges }
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Length of the longest pair, `None` for fewer than two points.
    pub fn longest(&self) -> Option<i64> {
        self.edges.last().map(|e| e.dist)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }
}

impl<'a> IntoIterator for &'a EdgeCatalog {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
