//! Error types for graph construction and circuit verification.

use thiserror::Error;

/// Errors raised while building a [`Graph`](crate::Graph), either directly or
/// from text input. These are reported before any Eulerian check runs.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An edge endpoint is not a vertex of the graph.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// The vertex arena for this many vertices cannot be allocated.
    #[error("cannot allocate a graph with {vertex_count} vertices")]
    TooManyVertices { vertex_count: usize },

    /// The input ended before all expected tokens were read.
    #[error("unexpected end of input: expected {expected}")]
    MissingToken { expected: &'static str },

    /// A token could not be read as a non-negative integer.
    #[error("invalid token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },

    /// Reading the input failed.
    #[error("failed to read graph: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a vertex sequence is not an Eulerian circuit of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    #[error("circuit starts at {first} but ends at {last}")]
    NotClosed { first: usize, last: usize },

    #[error("circuit has {actual} vertices, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    /// A step of the walk uses an edge the graph does not have, or uses one
    /// more often than it occurs.
    #[error("step {from} -> {to} at position {position} does not match an unused edge")]
    UnknownEdge { from: usize, to: usize, position: usize },
}
