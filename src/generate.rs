use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::GraphError;
use crate::graph::Graph;

/// Random Eulerian multigraph made of `walks` closed random walks of
/// `walk_len` edges, all starting and ending at vertex 0.
///
/// Every vertex ends up with even degree and every edge-bearing vertex is
/// connected to vertex 0; vertices no walk touches stay isolated. The same
/// seed always produces the same graph.
pub fn random_eulerian_graph(
    vertex_count: usize,
    walks: usize,
    walk_len: usize,
    seed: u64,
) -> Result<Graph, GraphError> {
    let mut graph = Graph::try_new(vertex_count)?;
    if vertex_count == 0 {
        return Ok(graph);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..walks {
        if walk_len == 0 {
            break;
        }
        let mut current = 0;
        for _ in 1..walk_len {
            let next = rng.gen_range(0..vertex_count);
            graph.add_edge(current, next)?;
            current = next;
        }
        // Close the walk
        graph.add_edge(current, 0)?;
    }

    debug!(vertex_count, edges = graph.edge_count(), seed, "generated graph");
    Ok(graph)
}

/// Renders a graph in the text input format read by [`read_graph`](crate::read_graph).
pub fn to_input_format(graph: &Graph) -> String {
    let mut out = format!("{} {}\n", graph.vertex_count(), graph.edge_count());
    for (v, w) in graph.edges() {
        out.push_str(&format!("{v} {w}\n"));
    }
    out
}
