//! 2-opt configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// Which partner points a sweep evaluates for each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Neighborhood {
    /// Every point after `i` in tour order (walking until point 0).
    /// O(n²) per sweep.
    Exhaustive,

    /// Only the `m` nearest points of `i`. O(n·m) per sweep.
    Nearest(usize),
}

impl Default for Neighborhood {
    fn default() -> Self {
        Neighborhood::Nearest(300)
    }
}

/// Configuration for [`TwoOptRunner`](super::TwoOptRunner).
///
/// # Examples
///
/// ```
/// use u_tsp::two_opt::{Neighborhood, TwoOptConfig};
///
/// let config = TwoOptConfig::default()
///     .with_max_iterations(300)
///     .with_neighborhood(Neighborhood::Nearest(200));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TwoOptConfig {
    /// Maximum number of sweeps. Each sweep applies at most one move.
    /// 0 leaves the tour untouched.
    pub max_iterations: usize,

    /// Candidate partners per point.
    pub neighborhood: Neighborhood,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            neighborhood: Neighborhood::default(),
        }
    }
}

impl TwoOptConfig {
    /// Exhaustive sweeps with the given budget.
    pub fn exhaustive(max_iterations: usize) -> Self {
        Self {
            max_iterations,
            neighborhood: Neighborhood::Exhaustive,
        }
    }

    /// Neighbor-list sweeps over `m` nearest points with the given budget.
    pub fn nearest(max_iterations: usize, m: usize) -> Self {
        Self {
            max_iterations,
            neighborhood: Neighborhood::Nearest(m),
        }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if let Neighborhood::Nearest(0) = self.neighborhood {
            return Err(TspError::invalid_config(
                "neighbor list capacity must be at least 1",
            ));
        }
        Ok(())
    }
}
