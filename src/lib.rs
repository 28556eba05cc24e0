//! Heuristic solver for the Euclidean Traveling Salesman Problem.
//!
//! Given points in the plane, builds a closed tour visiting each point
//! once and shortens it. Distances are Euclidean, rounded half up to an
//! integer (the TSPLIB `EUC_2D` convention).
//!
//! - [`tour`]: the tour as a doubly linked cycle over the input points,
//!   with node-swap and segment-reversal relinks and their O(1) costs
//! - [`edges`]: the sorted catalog of all point pairs and per-point
//!   nearest-neighbor lists
//! - [`construct`]: nearest-neighbor and greedy-edge initial tours
//! - [`two_opt`]: best-improvement 2-opt, exhaustive or neighbor-bounded
//! - [`sa`]: simulated annealing, plain or neighbor-guided
//! - [`pipeline`]: the fixed construction + improvement sequences
//! - [`io`]: point-set parsing and tour output
//!
//! # Example
//!
//! ```
//! use u_tsp::construct::{Constructor, GreedyEdge};
//! use u_tsp::tour::Tour;
//! use u_tsp::two_opt::{TwoOptConfig, TwoOptRunner};
//!
//! let mut tour = Tour::new([(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0), (5.0, -2.0)]);
//! GreedyEdge.build(&mut tour).unwrap();
//! let result = TwoOptRunner::run(&mut tour, &TwoOptConfig::default()).unwrap();
//! assert!(tour.is_valid_cycle());
//! assert_eq!(result.final_distance, tour.total_distance());
//! ```

pub mod construct;
pub mod edges;
pub mod error;
pub mod geometry;
pub mod io;
pub mod pipeline;
pub mod sa;
pub mod tour;
pub mod two_opt;

pub use error::{Result, TspError};
