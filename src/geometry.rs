//! Point storage and TSPLIB-style rounded Euclidean distance.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point of the instance together with its cycle links.
///
/// `index` and the coordinates never change after creation; only `next`
/// and `prev` are rewritten by constructors and improvers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Position of the point in input order.
    pub index: usize,
    pub x: f64,
    pub y: f64,
    /// Index of the successor in the tour.
    pub next: usize,
    /// Index of the predecessor in the tour.
    pub prev: usize,
}

impl Point {
    pub fn new(index: usize, x: f64, y: f64) -> Self {
        Self {
            index,
            x,
            y,
            next: index,
            prev: index,
        }
    }
}

/// Euclidean distance between two points, rounded half-up to an integer.
///
/// Every length in the crate (edge weights, move deltas, tour totals) goes
/// through this function so that values stay comparable.
///
/// # Examples
///
/// ```
/// use u_tsp::geometry::{distance, Point};
///
/// let a = Point::new(0, 0.0, 0.0);
/// let b = Point::new(1, 3.0, 4.0);
/// assert_eq!(distance(&a, &b), 5);
/// ```
#[inline]
pub fn distance(a: &Point, b: &Point) -> i64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    ((dx * dx + dy * dy).sqrt() + 0.5).floor() as i64
}
