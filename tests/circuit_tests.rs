use euler_circuit::conditions::{all_degrees_even, is_connected_ignoring_isolated};
use euler_circuit::generate::random_eulerian_graph;
use euler_circuit::{verify_circuit, Diagnostic, EulerianCircuit, Graph, TraversalOrder};
use rstest::rstest;

fn graph(n: usize, edges: &[(usize, usize)]) -> Graph {
    Graph::from_edges(n, edges.iter().copied()).expect("edges in range")
}

/// True when `circuit` is `expected` started at a different point of the cycle.
fn is_rotation(circuit: &[usize], expected: &[usize]) -> bool {
    if circuit.len() != expected.len() || circuit.is_empty() {
        return circuit.len() == expected.len();
    }
    let cycle = &expected[..expected.len() - 1];
    let walk = &circuit[..circuit.len() - 1];
    (0..cycle.len()).any(|shift| {
        walk.iter()
            .enumerate()
            .all(|(i, &v)| cycle[(i + shift) % cycle.len()] == v)
    })
}

#[rstest]
#[case::square(graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]), Diagnostic::Success)]
#[case::triangle_with_pendant(graph(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]), Diagnostic::OddDegreeExists)]
#[case::two_triangles(
    graph(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]),
    Diagnostic::Disconnected
)]
#[case::self_loop_and_isolated(graph(2, &[(0, 0)]), Diagnostic::Success)]
#[case::empty(graph(0, &[]), Diagnostic::Success)]
#[case::edgeless(graph(5, &[]), Diagnostic::Success)]
#[case::bowtie(
    graph(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]),
    Diagnostic::Success
)]
#[case::single_edge(graph(2, &[(0, 1)]), Diagnostic::OddDegreeExists)]
fn diagnostics(#[case] graph: Graph, #[case] expected: Diagnostic) {
    let result = EulerianCircuit::compute(&graph);

    assert_eq!(result.diagnostic(), expected);
    if expected == Diagnostic::Success {
        verify_circuit(&graph, result.circuit()).expect("valid circuit");
    } else {
        assert!(result.circuit().is_empty());
    }
}

#[test]
fn square_is_rotation_of_cycle() {
    let result = EulerianCircuit::compute(&graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]));
    assert!(is_rotation(result.circuit(), &[0, 1, 2, 3, 0]));
}

#[test]
fn self_loop_circuit() {
    let result = EulerianCircuit::compute(&graph(2, &[(0, 0)]));
    assert_eq!(result.into_parts(), (Diagnostic::Success, vec![0, 0]));
}

#[test]
fn empty_graphs_have_empty_circuits() {
    for n in [0, 1, 4] {
        let result = EulerianCircuit::compute(&Graph::new(n));
        assert!(result.is_success());
        assert!(result.circuit().is_empty());
    }
}

#[test]
fn parses_and_solves_text_input() {
    let graph: Graph = "5 6\n0 1\n1 2\n2 0\n2 3\n3 4\n4 2\n".parse().unwrap();
    let result = EulerianCircuit::compute(&graph);
    assert_eq!(result.to_string(), "0 1 2 3 4 2 0");
}

#[test]
fn long_detour_chain_does_not_recurse() {
    // One long cycle; a recursive builder would overflow the stack here
    let n = 200_000;
    let edges = (0..n).map(|v| (v, (v + 1) % n));
    let graph = Graph::from_edges(n, edges).unwrap();

    let result = EulerianCircuit::compute(&graph);
    assert!(result.is_success());
    assert_eq!(result.circuit().len(), n + 1);
}

mod property_tests {
    use super::*;
    use quickcheck::{quickcheck, Arbitrary, Gen};

    #[derive(Clone, Debug)]
    struct ArbitraryEulerian(Graph);

    impl Arbitrary for ArbitraryEulerian {
        fn arbitrary(g: &mut Gen) -> Self {
            let vertices = 1 + usize::arbitrary(g) % 10;
            let walks = usize::arbitrary(g) % 4;
            let walk_len = usize::arbitrary(g) % 8;
            let graph = random_eulerian_graph(vertices, walks, walk_len, u64::arbitrary(g))
                .expect("generated edges in range");
            Self(graph)
        }
    }

    #[derive(Clone, Debug)]
    struct ArbitraryGraph(Graph);

    impl Arbitrary for ArbitraryGraph {
        fn arbitrary(g: &mut Gen) -> Self {
            let vertices = usize::arbitrary(g) % 8;
            let mut graph = Graph::new(vertices);
            if vertices > 0 {
                let edge_count = usize::arbitrary(g) % 12;
                for _ in 0..edge_count {
                    let v = usize::arbitrary(g) % vertices;
                    let w = usize::arbitrary(g) % vertices;
                    graph.add_edge(v, w).expect("edge in range");
                }
            }
            Self(graph)
        }
    }

    /// Places `b` after `a`, sharing no vertex.
    fn disjoint_union(a: &Graph, b: &Graph) -> Graph {
        let offset = a.vertex_count();
        let edges = a
            .edges()
            .chain(b.edges().map(|(v, w)| (v + offset, w + offset)));
        Graph::from_edges(offset + b.vertex_count(), edges).expect("edges in range")
    }

    quickcheck! {
        fn prop_eulerian_graph_yields_verified_circuit(graph: ArbitraryEulerian) -> bool {
            let result = EulerianCircuit::compute(&graph.0);
            let expected_len = match graph.0.edge_count() {
                0 => 0,
                e => e + 1,
            };
            result.is_success()
                && result.circuit().len() == expected_len
                && result.circuit().first() == result.circuit().last()
                && verify_circuit(&graph.0, result.circuit()).is_ok()
        }

        fn prop_success_matches_conditions(graph: ArbitraryGraph) -> bool {
            let eulerian = is_connected_ignoring_isolated(&graph.0, TraversalOrder::DepthFirst)
                && all_degrees_even(&graph.0);
            let result = EulerianCircuit::compute(&graph.0);
            result.is_success() == eulerian
                && (!eulerian || verify_circuit(&graph.0, result.circuit()).is_ok())
        }

        fn prop_odd_vertex_never_succeeds(graph: ArbitraryGraph) -> bool {
            let connected = is_connected_ignoring_isolated(&graph.0, TraversalOrder::BreadthFirst);
            let diagnostic = EulerianCircuit::compute(&graph.0).diagnostic();
            if all_degrees_even(&graph.0) {
                return true;
            }
            if connected {
                diagnostic == Diagnostic::OddDegreeExists
            } else {
                diagnostic == Diagnostic::Disconnected
            }
        }

        fn prop_disjoint_components_are_disconnected(a: ArbitraryEulerian, b: ArbitraryEulerian) -> bool {
            if a.0.edge_count() == 0 || b.0.edge_count() == 0 {
                return true;
            }
            let union = disjoint_union(&a.0, &b.0);
            EulerianCircuit::compute(&union).diagnostic() == Diagnostic::Disconnected
        }

        fn prop_compute_is_idempotent(graph: ArbitraryGraph) -> bool {
            let before = graph.0.clone();
            let first = EulerianCircuit::compute(&graph.0);
            let second = EulerianCircuit::compute(&graph.0);
            first == second && graph.0 == before
        }
    }
}
