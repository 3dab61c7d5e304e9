//! Eulerian circuits of undirected multigraphs.
//!
//! [`EulerianCircuit::compute`] checks that the edge-bearing vertices are
//! connected and that every degree is even, then builds a circuit with
//! Hierholzer's algorithm.
//!
//! ```
//! use euler_circuit::{Diagnostic, EulerianCircuit, Graph};
//!
//! let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let result = EulerianCircuit::compute(&graph);
//! assert_eq!(result.diagnostic(), Diagnostic::Success);
//! assert_eq!(result.circuit(), &[0, 1, 2, 3, 0]);
//! ```

pub mod circuit;
pub mod conditions;
pub mod error;
pub mod generate;
pub mod graph;
pub mod hierholzer;
pub mod parse;
pub mod search;

pub use circuit::{verify_circuit, Config, Diagnostic, EulerianCircuit};
pub use error::{CircuitError, GraphError};
pub use graph::{EdgeId, Graph};
pub use parse::read_graph;
pub use search::{Reachability, TraversalOrder};
