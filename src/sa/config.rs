//! SA configuration, proposal kinds and acceptance rules.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// How the pair of points for a move is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Proposal {
    /// Two uniformly random points, evaluated as a node swap.
    #[default]
    RandomPair,

    /// A random point and one of its `m` nearest points. Non-adjacent
    /// pairs are also scored as a segment reversal and the cheaper of the
    /// two moves is used.
    Nearest(usize),
}

/// Starting temperature of the schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InitialTemperature {
    /// A constant temperature.
    Fixed(f64),

    /// A fraction of the tour length at the start of the run.
    TourFraction(f64),
}

impl Default for InitialTemperature {
    fn default() -> Self {
        InitialTemperature::Fixed(100.0)
    }
}

impl InitialTemperature {
    /// Resolves the temperature for a tour of the given length.
    pub fn resolve(&self, tour_distance: i64) -> f64 {
        match *self {
            InitialTemperature::Fixed(t) => t,
            InitialTemperature::TourFraction(f) => tour_distance as f64 * f,
        }
    }
}

/// Rule deciding whether a worsening move (cost > 0) is taken.
///
/// # References
///
/// - Metropolis et al. (1953), "Equation of State Calculations by Fast
///   Computing Machines"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Acceptance {
    /// Accept iff `cost / t < u` for `u ~ U[0, 1)`.
    #[default]
    Ratio,

    /// Accept iff `u < exp(-cost / t)`. Never accepts once `t <= 0`.
    Metropolis,
}

impl Acceptance {
    /// Decides a worsening move given a uniform draw `u` in `[0, 1)`.
    #[inline]
    pub fn accepts(&self, cost: i64, temperature: f64, u: f64) -> bool {
        match self {
            Acceptance::Ratio => (cost as f64) / temperature < u,
            Acceptance::Metropolis => {
                temperature > 0.0 && u < (-(cost as f64) / temperature).exp()
            }
        }
    }
}

/// Configuration for [`SaRunner`](super::SaRunner).
///
/// The temperature decays by `t -= t * 10 / max_iterations` before every
/// iteration, so it approaches zero by the end of the budget whatever
/// the budget is. Below 10 iterations the factor exceeds 1 and the
/// temperature flips sign every iteration; while it is negative the
/// [`Acceptance::Ratio`] rule takes every worsening move.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::{Acceptance, SaConfig};
///
/// let config = SaConfig::default()
///     .with_max_iterations(4000)
///     .with_acceptance(Acceptance::Metropolis)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
///
/// let guided = SaConfig::guided(300);
/// assert!(guided.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaConfig {
    /// Number of iterations. 0 leaves the tour untouched.
    pub max_iterations: usize,

    pub initial_temperature: InitialTemperature,

    pub proposal: Proposal,

    pub acceptance: Acceptance,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            initial_temperature: InitialTemperature::default(),
            proposal: Proposal::default(),
            acceptance: Acceptance::default(),
            seed: None,
        }
    }
}

impl SaConfig {
    /// Neighbor-guided variant: pairs drawn from the `m` nearest points,
    /// starting at 90% of the tour length.
    pub fn guided(m: usize) -> Self {
        Self {
            initial_temperature: InitialTemperature::TourFraction(0.9),
            proposal: Proposal::Nearest(m),
            ..Self::default()
        }
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: InitialTemperature) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_proposal(mut self, proposal: Proposal) -> Self {
        self.proposal = proposal;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        match self.initial_temperature {
            InitialTemperature::Fixed(t) if !(t.is_finite() && t > 0.0) => {
                return Err(TspError::invalid_config(format!(
                    "initial temperature must be positive and finite, got {t}"
                )));
            }
            InitialTemperature::TourFraction(f) if !(f.is_finite() && f > 0.0) => {
                return Err(TspError::invalid_config(format!(
                    "tour fraction must be positive and finite, got {f}"
                )));
            }
            _ => {}
        }
        if let Proposal::Nearest(0) = self.proposal {
            return Err(TspError::invalid_config(
                "neighbor list capacity must be at least 1",
            ));
        }
        Ok(())
    }
}
