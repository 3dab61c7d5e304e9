use std::fmt;

use crate::error::GraphError;

/// Identity of one logical edge, dense in `0..edge_count()` by insertion order.
pub type EdgeId = usize;

/// Undirected multigraph over the vertices `0..vertex_count`.
///
/// Every edge is stored once per endpoint, so `w` appears in the list of `v`
/// and `v` in the list of `w`. A self-loop puts two entries in its vertex's
/// list, both carrying the same [`EdgeId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency_list: Vec<Vec<(usize, EdgeId)>>,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// # Panics
    /// If the vertex arena cannot be allocated; see [`Graph::try_new`].
    pub fn new(n: usize) -> Self {
        Graph {
            adjacency_list: vec![Vec::new(); n],
            edges: Vec::new(),
        }
    }

    /// Like [`Graph::new`], but reports an oversized vertex count as an error.
    pub fn try_new(n: usize) -> Result<Self, GraphError> {
        let mut adjacency_list = Vec::new();
        adjacency_list
            .try_reserve_exact(n)
            .map_err(|_| GraphError::TooManyVertices { vertex_count: n })?;
        adjacency_list.resize_with(n, Vec::new);

        Ok(Graph {
            adjacency_list,
            edges: Vec::new(),
        })
    }

    /// Builds a graph from an edge list, failing on the first out-of-range endpoint.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Graph::try_new(n)?;
        for (v, w) in edges {
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }

    // Add an undirected edge between `v` and `w`
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<EdgeId, GraphError> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;

        let id = self.edges.len();
        self.edges.push((v, w));
        self.adjacency_list[v].push((w, id));
        self.adjacency_list[w].push((v, id));
        Ok(id)
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency_list.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of adjacency entries of `v`; self-loops count twice.
    ///
    /// # Panics
    /// If `v >= vertex_count()`.
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency_list[v].len()
    }

    pub fn is_isolated(&self, v: usize) -> bool {
        self.degree(v) == 0
    }

    // Neighbors of `v` with multiplicity, in insertion order
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency_list[v].iter().map(|&(w, _)| w)
    }

    /// Adjacency entries of `v` as `(neighbor, edge id)` pairs.
    pub fn incident(&self, v: usize) -> &[(usize, EdgeId)] {
        &self.adjacency_list[v]
    }

    /// Each logical edge once, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, neighbors) in self.adjacency_list.iter().enumerate() {
            write!(f, "{v}:")?;
            for (w, _) in neighbors {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
