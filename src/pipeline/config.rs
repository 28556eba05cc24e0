//! Pipeline selection.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};
use crate::sa::SaConfig;
use crate::two_opt::TwoOptConfig;

/// Initial tour heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Construction {
    NearestNeighbor,
    GreedyEdge,
}

/// One stage of a pipeline, run in order on the same tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    Construct(Construction),
    TwoOpt(TwoOptConfig),
    Anneal(SaConfig),
}

/// The numbered pipelines selectable from the command line.
///
/// Codes run from 1 to 9; `m` selects the default, code 6.
///
/// # Examples
///
/// ```
/// use u_tsp::pipeline::Algorithm;
///
/// let algorithm: Algorithm = "8".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::GreedyTwoOptAnneal);
/// assert_eq!("m".parse::<Algorithm>().unwrap(), Algorithm::default());
/// assert_eq!(Algorithm::default().code(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// 1: nearest-neighbor only.
    Nearest,
    /// 2: nearest-neighbor, then 2-opt over 200 neighbors for 300 sweeps.
    NearestTwoOpt,
    /// 3: nearest-neighbor, then 10 000 annealing iterations.
    NearestAnneal,
    /// 4: nearest-neighbor, 2-opt as in 2, then 4 000 annealing iterations.
    NearestTwoOptAnneal,
    /// 5: greedy-edge only.
    Greedy,
    /// 6: greedy-edge, then 2-opt over 300 neighbors for 10 000 sweeps.
    #[default]
    GreedyTwoOpt,
    /// 7: greedy-edge, then 1 000 000 annealing iterations.
    GreedyAnneal,
    /// 8: greedy-edge, 2-opt as in 6, then 4 000 annealing iterations.
    GreedyTwoOptAnneal,
    /// 9: greedy-edge, 2-opt as in 6, then 10 000 annealing iterations,
    /// falling back to the plain nearest-neighbor tour if that is shorter.
    BestOf,
}

impl Algorithm {
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Nearest,
        Algorithm::NearestTwoOpt,
        Algorithm::NearestAnneal,
        Algorithm::NearestTwoOptAnneal,
        Algorithm::Greedy,
        Algorithm::GreedyTwoOpt,
        Algorithm::GreedyAnneal,
        Algorithm::GreedyTwoOptAnneal,
        Algorithm::BestOf,
    ];

    /// The command-line code of this pipeline (1..=9).
    pub fn code(&self) -> u8 {
        match self {
            Algorithm::Nearest => 1,
            Algorithm::NearestTwoOpt => 2,
            Algorithm::NearestAnneal => 3,
            Algorithm::NearestTwoOptAnneal => 4,
            Algorithm::Greedy => 5,
            Algorithm::GreedyTwoOpt => 6,
            Algorithm::GreedyAnneal => 7,
            Algorithm::GreedyTwoOptAnneal => 8,
            Algorithm::BestOf => 9,
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.code() == code)
            .ok_or_else(|| {
                TspError::invalid_config(format!("unknown algorithm code {code}, expected 1-9"))
            })
    }

    /// Stages run on the tour, in order.
    ///
    /// For [`Algorithm::BestOf`] these are the stages of the improved tour;
    /// the tour it is compared against is given by [`Algorithm::baseline`].
    pub fn steps(&self) -> Vec<Step> {
        use Construction::{GreedyEdge, NearestNeighbor};

        let short_two_opt = || Step::TwoOpt(TwoOptConfig::nearest(300, 200));
        let long_two_opt = || Step::TwoOpt(TwoOptConfig::nearest(10_000, 300));
        let anneal = |k| Step::Anneal(SaConfig::default().with_max_iterations(k));

        match self {
            Algorithm::Nearest => vec![Step::Construct(NearestNeighbor)],
            Algorithm::NearestTwoOpt => vec![Step::Construct(NearestNeighbor), short_two_opt()],
            Algorithm::NearestAnneal => vec![Step::Construct(NearestNeighbor), anneal(10_000)],
            Algorithm::NearestTwoOptAnneal => vec![
                Step::Construct(NearestNeighbor),
                short_two_opt(),
                anneal(4_000),
            ],
            Algorithm::Greedy => vec![Step::Construct(GreedyEdge)],
            Algorithm::GreedyTwoOpt => vec![Step::Construct(GreedyEdge), long_two_opt()],
            Algorithm::GreedyAnneal => vec![Step::Construct(GreedyEdge), anneal(1_000_000)],
            Algorithm::GreedyTwoOptAnneal => vec![
                Step::Construct(GreedyEdge),
                long_two_opt(),
                anneal(4_000),
            ],
            Algorithm::BestOf => vec![
                Step::Construct(GreedyEdge),
                long_two_opt(),
                anneal(10_000),
            ],
        }
    }

    /// Construction kept aside and compared with the result of
    /// [`Algorithm::steps`]; the shorter of the two tours wins.
    pub fn baseline(&self) -> Option<Construction> {
        match self {
            Algorithm::BestOf => Some(Construction::NearestNeighbor),
            _ => None,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = TspError;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code)
    }
}

impl FromStr for Algorithm {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "m" => Ok(Self::default()),
            code => code
                .parse::<u8>()
                .map_err(|_| {
                    TspError::invalid_config(format!(
                        "algorithm must be a code 1-9 or `m`, got `{code}`"
                    ))
                })
                .and_then(Self::from_code),
        }
    }
}

/// Configuration for [`Solver`](super::Solver).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverConfig {
    pub algorithm: Algorithm,

    /// Seed of the generator shared by every annealing stage. None draws
    /// one from entropy.
    pub seed: Option<u64>,
}

impl SolverConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
