//! Tour construction heuristics.
//!
//! - [`NearestNeighbor`]: starting from point 0, always move to the
//!   closest unvisited point. O(n²).
//! - [`GreedyEdge`]: commit globally shortest edges first, subject to
//!   degree <= 2 and no premature cycle. O(n² log n) for the sort plus
//!   O(chain length) per cycle check.
//!
//! Both overwrite every link of the tour they are given and require at
//! least [`MIN_POINTS`] points; smaller instances have only one tour up to
//! orientation and are left to the caller.

mod greedy;
mod nearest;

pub use greedy::GreedyEdge;
pub use nearest::NearestNeighbor;

use crate::error::{Result, TspError};
use crate::tour::Tour;

/// Smallest instance the constructors accept.
pub const MIN_POINTS: usize = 4;

/// Builds an initial tour in place.
pub trait Constructor {
    /// Returns a human-readable name for this constructor.
    fn name(&self) -> &str;

    /// Relinks every point of `tour` into a single cycle.
    fn build(&self, tour: &mut Tour) -> Result<()>;
}

pub(crate) fn check_size(tour: &Tour) -> Result<()> {
    if tour.len() < MIN_POINTS {
        return Err(TspError::TooFewPoints {
            found: tour.len(),
            required: MIN_POINTS,
        });
    }
    Ok(())
}
