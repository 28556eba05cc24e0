//! The linked-cycle tour and its traversal helpers.

use crate::error::{Result, TspError};
use crate::geometry::{distance, Point};

/// A closed tour over every point of an instance.
///
/// Points are stored in input order; the tour order lives only in the
/// `next`/`prev` links. Between mutations the links always form exactly
/// one cycle of length `len()`.
///
/// # Examples
///
/// ```
/// use u_tsp::tour::Tour;
///
/// let tour = Tour::new([(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// assert_eq!(tour.order(), vec![0, 1, 2, 3]);
/// assert_eq!(tour.total_distance(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub(super) points: Vec<Point>,
}

impl Tour {
    /// Creates a tour visiting the points in input order.
    pub fn new<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut points: Vec<Point> = coords
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| Point::new(i, x, y))
            .collect();

        let n = points.len();
        for (i, point) in points.iter_mut().enumerate() {
            point.next = (i + 1).min(n - 1);
            point.prev = i.saturating_sub(1);
        }

        let mut tour = Self { points };
        tour.heal();
        tour
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn point(&self, index: usize) -> &Point {
        &self.points[index]
    }

    /// Successor of `index` in the cycle.
    #[inline]
    pub fn next(&self, index: usize) -> usize {
        self.points[index].next
    }

    /// Predecessor of `index` in the cycle.
    #[inline]
    pub fn prev(&self, index: usize) -> usize {
        self.points[index].prev
    }

    /// Rounded distance between two points of this tour.
    #[inline]
    pub fn dist(&self, a: usize, b: usize) -> i64 {
        distance(&self.points[a], &self.points[b])
    }

    /// Sum of `dist(i, next(i))` over all points.
    pub fn total_distance(&self) -> i64 {
        self.points
            .iter()
            .map(|p| distance(p, &self.points[p.next]))
            .sum()
    }

    /// Closes an open chain by linking its last point back to point 0.
    ///
    /// The chain is open while the last point still links to itself and
    /// point 0 has no predecessor, as left by the input-order linking in
    /// [`Tour::new`]. A closed tour is left as it is, so calling this any
    /// number of times changes nothing after the first.
    pub fn heal(&mut self) {
        let n = self.points.len();
        if n == 0 || self.points[n - 1].next != n - 1 || self.points[0].prev != 0 {
            return;
        }
        self.points[n - 1].next = 0;
        self.points[0].prev = n - 1;
    }

    /// Rewrites every link so that the tour visits `order` in sequence and
    /// returns from the last entry to the first.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidInput`] and leaves the tour untouched if
    /// `order` is not a permutation of `0..len()`.
    pub fn link_sequence(&mut self, order: &[usize]) -> Result<()> {
        let n = self.points.len();
        if order.len() != n {
            return Err(TspError::invalid_input(format!(
                "tour order has {} entries, expected {n}",
                order.len()
            )));
        }
        let mut seen = vec![false; n];
        for &index in order {
            if index >= n || std::mem::replace(&mut seen[index], true) {
                return Err(TspError::invalid_input(format!(
                    "tour order is not a permutation: index {index} is out of range or repeated"
                )));
            }
        }

        for (pos, &index) in order.iter().enumerate() {
            self.points[index].next = order[(pos + 1) % n];
            self.points[index].prev = order[(pos + n - 1) % n];
        }
        Ok(())
    }

    /// Copies the cycle links of `other` (a tour over the same points).
    pub fn copy_links_from(&mut self, other: &Tour) {
        debug_assert_eq!(self.points.len(), other.points.len());
        for (mine, theirs) in self.points.iter_mut().zip(&other.points) {
            mine.next = theirs.next;
            mine.prev = theirs.prev;
        }
    }

    /// Iterates the cycle from point 0 along `next` links.
    pub fn iter(&self) -> TourIter<'_> {
        TourIter {
            tour: self,
            current: 0,
            remaining: self.points.len(),
        }
    }

    /// Point indices in tour order, starting from point 0.
    pub fn order(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Returns `true` if the links form exactly one cycle over all points.
    pub fn is_valid_cycle(&self) -> bool {
        let n = self.points.len();
        if n == 0 {
            return true;
        }

        let linked = self.points.iter().enumerate().all(|(i, p)| {
            p.next < n && p.prev < n && self.points[p.next].prev == i && self.points[p.prev].next == i
        });
        if !linked {
            return false;
        }

        let mut seen = vec![false; n];
        let mut current = 0;
        for _ in 0..n {
            if seen[current] {
                return false;
            }
            seen[current] = true;
            current = self.points[current].next;
        }
        current == 0
    }
}

/// Iterator over a [`Tour`] in cycle order, yielding each index once.
#[derive(Debug, Clone)]
pub struct TourIter<'a> {
    tour: &'a Tour,
    current: usize,
    remaining: usize,
}

impl Iterator for TourIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.current;
        self.current = self.tour.points[index].next;
        self.remaining -= 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for TourIter<'_> {}

impl<'a> IntoIterator for &'a Tour {
    type Item = usize;
    type IntoIter = TourIter<'a>;

    fn into_iter(self) -> TourIter<'a> {
        self.iter()
    }
}
