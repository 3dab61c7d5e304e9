//! Text input: a vertex count, an edge count, then that many vertex pairs,
//! all whitespace separated. Tokens after the last edge are ignored.

use std::io::Read;
use std::str::FromStr;

use tracing::debug;

use crate::error::GraphError;
use crate::graph::Graph;

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Tokens {
            inner: input.split_whitespace(),
            position: 0,
        }
    }

    fn next_usize(&mut self, expected: &'static str) -> Result<usize, GraphError> {
        let token = self.inner.next().ok_or(GraphError::MissingToken { expected })?;
        let position = self.position;
        self.position += 1;
        token.parse().map_err(|_| GraphError::InvalidToken {
            token: token.to_string(),
            position,
        })
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(input);
        let vertex_count = tokens.next_usize("vertex count")?;
        let edge_count = tokens.next_usize("edge count")?;

        let mut graph = Graph::try_new(vertex_count)?;
        for _ in 0..edge_count {
            let v = tokens.next_usize("edge endpoint")?;
            let w = tokens.next_usize("edge endpoint")?;
            graph.add_edge(v, w)?;
        }

        debug!(vertex_count, edge_count, "parsed graph");
        Ok(graph)
    }
}

/// Reads the whole stream and parses it as a graph.
pub fn read_graph<R: Read>(mut reader: R) -> Result<Graph, GraphError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    input.parse()
}
