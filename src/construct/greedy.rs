//! Greedy-edge construction.

use super::{check_size, Constructor};
use crate::edges::{Edge, EdgeCatalog};
use crate::error::Result;
use crate::tour::Tour;

/// Commits the shortest edges first while every point keeps degree <= 2
/// and no cycle shorter than `n` closes.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEdge;

/// Up to two committed neighbors per point, in commit order.
type Adjacency = Vec<[Option<usize>; 2]>;

impl GreedyEdge {
    /// Selects the `n` tour edges from a sorted catalog, in commit order.
    ///
    /// Until `n - 1` edges are committed the partial selection is a set of
    /// disjoint paths; the last edge joins the two ends of the remaining
    /// path.
    pub fn select_edges(catalog: &EdgeCatalog, n: usize) -> Vec<Edge> {
        let mut selected = Vec::with_capacity(n);
        let mut adjacency: Adjacency = vec![[None, None]; n];
        let mut degree = vec![0u8; n];

        for edge in catalog {
            if selected.len() >= n {
                break;
            }
            if degree[edge.a] > 1 || degree[edge.b] > 1 {
                continue;
            }
            if selected.len() + 1 < n && same_path(&adjacency, edge.a, edge.b) {
                continue;
            }

            adjacency[edge.a][degree[edge.a] as usize] = Some(edge.b);
            adjacency[edge.b][degree[edge.b] as usize] = Some(edge.a);
            degree[edge.a] += 1;
            degree[edge.b] += 1;
            selected.push(*edge);
        }

        debug_assert_eq!(selected.len(), n, "greedy selection left the cycle open");
        selected
    }

    /// Orders the points along the selected edges, starting from point 0.
    fn walk(edges: &[Edge], n: usize) -> Vec<usize> {
        let mut adjacency: Adjacency = vec![[None, None]; n];
        for edge in edges {
            for (from, to) in [(edge.a, edge.b), (edge.b, edge.a)] {
                if let Some(slot) = adjacency[from].iter_mut().find(|s| s.is_none()) {
                    *slot = Some(to);
                }
            }
        }

        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut node = 0;
        visited[0] = true;
        order.push(0);

        while order.len() < n {
            let step = adjacency[node]
                .iter()
                .flatten()
                .copied()
                .find(|&nb| !visited[nb]);
            let Some(next) = step else { break };
            visited[next] = true;
            order.push(next);
            node = next;
        }

        order
    }
}

/// Returns `true` if `to` lies on the path that starts at `from`.
///
/// `from` has degree < 2, so the walk has a single direction and costs
/// O(length of the path).
fn same_path(adjacency: &Adjacency, from: usize, to: usize) -> bool {
    let mut prev = None;
    let mut node = from;
    loop {
        if node == to {
            return true;
        }
        let step = adjacency[node]
            .iter()
            .flatten()
            .copied()
            .find(|&nb| Some(nb) != prev);
        match step {
            Some(next) => {
                prev = Some(node);
                node = next;
            }
            None => return false,
        }
    }
}

impl Constructor for GreedyEdge {
    fn name(&self) -> &str {
        "greedy-edge"
    }

    fn build(&self, tour: &mut Tour) -> Result<()> {
        check_size(tour)?;
        let n = tour.len();
        log::info!("{}: building tour over {n} points", self.name());

        let catalog = EdgeCatalog::new(tour);
        let edges = Self::select_edges(&catalog, n);
        let order = Self::walk(&edges, n);
        debug_assert_eq!(order.len(), n);
        tour.link_sequence(&order)?;

        log::info!("{}: distance {}", self.name(), tour.total_distance());
        Ok(())
    }
}
