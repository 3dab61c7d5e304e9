//! Preconditions for an Eulerian circuit: the edge-bearing vertices form one
//! component, and every vertex has even degree.

use fixedbitset::FixedBitSet;
use tracing::trace;

use crate::graph::Graph;
use crate::search::{Reachability, TraversalOrder};

/// True when all vertices with at least one edge lie in a single component.
/// Isolated vertices never cause failure.
pub fn is_connected_ignoring_isolated(graph: &Graph, order: TraversalOrder) -> bool {
    let mut non_isolated = 0;
    let mut start = None;
    for v in (0..graph.vertex_count()).filter(|&v| !graph.is_isolated(v)) {
        non_isolated += 1;
        start.get_or_insert(v);
    }

    let start = match start {
        Some(v) if non_isolated > 1 => v,
        _ => return true,
    };

    let reach = Reachability::new(graph, start, order);
    let reached = (0..graph.vertex_count())
        .filter(|&v| !graph.is_isolated(v) && reach.marked(v))
        .count();
    trace!(non_isolated, reached, "connectivity");

    reached == non_isolated
}

/// True when no vertex has odd degree. Stops at the first odd vertex.
pub fn all_degrees_even(graph: &Graph) -> bool {
    (0..graph.vertex_count()).all(|v| graph.degree(v) % 2 == 0)
}

pub fn odd_degree_vertices(graph: &Graph) -> Vec<usize> {
    (0..graph.vertex_count())
        .filter(|&v| graph.degree(v) % 2 != 0)
        .collect()
}

/// Number of connected components that contain at least one edge.
pub fn edge_components(graph: &Graph) -> usize {
    let mut marked = FixedBitSet::with_capacity(graph.vertex_count());
    let mut stack = Vec::new();
    let mut components = 0;

    for root in 0..graph.vertex_count() {
        if graph.is_isolated(root) || marked.put(root) {
            continue;
        }
        components += 1;
        stack.push(root);
        while let Some(v) = stack.pop() {
            for w in graph.neighbors(v) {
                if !marked.put(w) {
                    stack.push(w);
                }
            }
        }
    }

    components
}
