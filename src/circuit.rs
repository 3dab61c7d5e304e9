use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::conditions::{all_degrees_even, is_connected_ignoring_isolated};
use crate::error::CircuitError;
use crate::graph::Graph;
use crate::hierholzer::hierholzer;
use crate::search::TraversalOrder;

/// Outcome of the Eulerian precondition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// The edge-bearing vertices span more than one component.
    Disconnected,
    /// At least one vertex has odd degree.
    OddDegreeExists,
    /// Both conditions hold and a circuit was built.
    Success,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Diagnostic::Disconnected => "disconnected (more than one component with edges)",
            Diagnostic::OddDegreeExists => "not eulerian (vertices of odd degree)",
            Diagnostic::Success => "eulerian circuit found",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    /// Traversal used by the connectivity check.
    pub traversal: TraversalOrder,
}

/// A diagnostic together with the circuit it produced. The circuit is empty
/// unless the diagnostic is [`Diagnostic::Success`] and the graph has edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerianCircuit {
    diagnostic: Diagnostic,
    circuit: Vec<usize>,
}

impl EulerianCircuit {
    pub fn compute(graph: &Graph) -> Self {
        Self::compute_with(graph, &Config::default())
    }

    /// Checks connectivity, then parity, and only then builds the circuit.
    pub fn compute_with(graph: &Graph, config: &Config) -> Self {
        let diagnostic = if !is_connected_ignoring_isolated(graph, config.traversal) {
            Diagnostic::Disconnected
        } else if !all_degrees_even(graph) {
            Diagnostic::OddDegreeExists
        } else {
            Diagnostic::Success
        };

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            %diagnostic,
            "checked eulerian conditions"
        );

        let circuit = match diagnostic {
            Diagnostic::Success => hierholzer(graph),
            _ => Vec::new(),
        };
        EulerianCircuit { diagnostic, circuit }
    }

    pub fn diagnostic(&self) -> Diagnostic {
        self.diagnostic
    }

    pub fn circuit(&self) -> &[usize] {
        &self.circuit
    }

    pub fn is_success(&self) -> bool {
        self.diagnostic == Diagnostic::Success
    }

    pub fn into_parts(self) -> (Diagnostic, Vec<usize>) {
        (self.diagnostic, self.circuit)
    }
}

/// Space separated vertex indices, empty when there is no circuit.
impl fmt::Display for EulerianCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.circuit.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

fn edge_key(v: usize, w: usize) -> (usize, usize) {
    (v.min(w), v.max(w))
}

/// Checks that `circuit` is a closed walk using every edge of `graph` exactly once.
///
/// An empty circuit is accepted only for a graph without edges.
///
/// # Errors
/// Returns the first violation found: length, closure, then the first step
/// that does not consume a remaining edge.
pub fn verify_circuit(graph: &Graph, circuit: &[usize]) -> Result<(), CircuitError> {
    let expected = match graph.edge_count() {
        0 => 0,
        e => e + 1,
    };
    if circuit.len() != expected {
        return Err(CircuitError::WrongLength {
            expected,
            actual: circuit.len(),
        });
    }
    if let (Some(&first), Some(&last)) = (circuit.first(), circuit.last()) {
        if first != last {
            return Err(CircuitError::NotClosed { first, last });
        }
    }

    let mut remaining: HashMap<(usize, usize), usize> = HashMap::new();
    for (v, w) in graph.edges() {
        *remaining.entry(edge_key(v, w)).or_insert(0) += 1;
    }

    for (position, step) in circuit.windows(2).enumerate() {
        let (from, to) = (step[0], step[1]);
        match remaining.get_mut(&edge_key(from, to)) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return Err(CircuitError::UnknownEdge { from, to, position }),
        }
    }
    Ok(())
}
