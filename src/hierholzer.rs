use fixedbitset::FixedBitSet;
use tracing::{trace, warn};

use crate::graph::Graph;

/// Unused edges of a graph during circuit construction.
///
/// Each vertex keeps a cursor into its adjacency entries; an edge is consumed
/// by setting its id in `used`, which retires it from both endpoint lists at
/// once. Parallel edges have distinct ids and a self-loop's two entries share
/// one, so each logical edge is taken exactly once.
struct WorkingAdjacency<'g> {
    graph: &'g Graph,
    cursor: Vec<usize>,
    used: FixedBitSet,
}

impl<'g> WorkingAdjacency<'g> {
    fn new(graph: &'g Graph) -> Self {
        WorkingAdjacency {
            graph,
            cursor: vec![0; graph.vertex_count()],
            used: FixedBitSet::with_capacity(graph.edge_count()),
        }
    }

    // Consume the next unused edge at `v` and return its other endpoint
    fn take_edge(&mut self, v: usize) -> Option<usize> {
        let incident = self.graph.incident(v);
        while let Some(&(w, id)) = incident.get(self.cursor[v]) {
            self.cursor[v] += 1;
            if !self.used.put(id) {
                return Some(w);
            }
        }
        None
    }

    fn is_drained(&self) -> bool {
        self.used.count_ones(..) == self.graph.edge_count()
    }
}

/// Builds an Eulerian circuit with Hierholzer's algorithm in `O(V + E)`.
///
/// The graph must be connected ignoring isolated vertices and have only
/// even degrees; otherwise the result is some closed walk that misses edges.
/// An edgeless graph yields an empty circuit.
pub fn hierholzer(graph: &Graph) -> Vec<usize> {
    let Some(start) = (0..graph.vertex_count()).find(|&v| !graph.is_isolated(v)) else {
        return Vec::new();
    };

    let mut adjacency = WorkingAdjacency::new(graph);
    let mut stack = vec![start];
    let mut path = Vec::with_capacity(graph.edge_count() + 1);

    while let Some(&current) = stack.last() {
        match adjacency.take_edge(current) {
            Some(next) => stack.push(next),
            None => {
                // Exhausted, so it is final in the circuit
                path.push(current);
                stack.pop();
            }
        }
    }

    if !adjacency.is_drained() {
        warn!(
            used = adjacency.used.count_ones(..),
            edges = graph.edge_count(),
            "circuit does not cover every edge"
        );
    }

    // Vertices were finalized in reverse order
    path.reverse();
    trace!(start, len = path.len(), "hierholzer finished");
    path
}
