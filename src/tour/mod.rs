//! Tour representation.
//!
//! A [`Tour`] is a flat vector of [`Point`](crate::geometry::Point)
//! records whose `next`/`prev` index fields form a single Hamiltonian
//! cycle. Random access by point index stays O(1), which the neighbor
//! lists and the O(1) move costs rely on, while cycle traversal follows
//! the links.
//!
//! Two relink primitives rewrite the cycle in place:
//!
//! - [`Tour::swap`]: exchanges the positions of two points.
//! - [`Tour::reverse_between`]: the 2-opt move, reversing the path
//!   between two points.
//!
//! Both have a matching O(1) delta function ([`Tour::swap_cost`],
//! [`Tour::two_opt_swap_cost`]) so candidate moves can be scored without
//! touching the links.

mod moves;
mod types;

pub use moves::Move;
pub use types::{Tour, TourIter};
