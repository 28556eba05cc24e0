//! Edge catalog and bounded neighbor lists.
//!
//! The [`EdgeCatalog`] enumerates every unordered point pair once and
//! sorts it by rounded distance. Greedy-edge construction walks it
//! directly; [`NeighborLists`] are derived from it for the pruned 2-opt
//! and the guided annealing variant.
//!
//! Neighbor lists fill slots in global edge order, so the relation is not
//! necessarily symmetric: `b` may appear in `a`'s list while `a` is absent
//! from `b`'s list once `b`'s slots filled up with closer points.

mod catalog;
mod neighbors;

pub use catalog::{Edge, EdgeCatalog};
pub use neighbors::NeighborLists;
