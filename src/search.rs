use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use crate::graph::Graph;

/// Order in which [`Reachability`] explores the graph. Both mark the same set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TraversalOrder {
    #[default]
    DepthFirst,
    BreadthFirst,
}

/// Vertices reachable from a start vertex over the static graph.
#[derive(Debug, Clone)]
pub struct Reachability {
    marked: FixedBitSet,
    count: usize,
}

impl Reachability {
    /// Explores from `start`, visiting each vertex at most once.
    ///
    /// # Panics
    /// If `start >= graph.vertex_count()`.
    pub fn new(graph: &Graph, start: usize, order: TraversalOrder) -> Self {
        let mut reach = Reachability {
            marked: FixedBitSet::with_capacity(graph.vertex_count()),
            count: 0,
        };
        match order {
            TraversalOrder::DepthFirst => reach.depth_first(graph, start),
            TraversalOrder::BreadthFirst => reach.breadth_first(graph, start),
        }
        reach
    }

    fn mark(&mut self, v: usize) -> bool {
        if self.marked.put(v) {
            return false;
        }
        self.count += 1;
        true
    }

    fn depth_first(&mut self, graph: &Graph, start: usize) {
        let mut stack = vec![start];
        self.mark(start);

        while let Some(v) = stack.pop() {
            for w in graph.neighbors(v) {
                if self.mark(w) {
                    stack.push(w);
                }
            }
        }
    }

    fn breadth_first(&mut self, graph: &Graph, start: usize) {
        let mut queue = VecDeque::from([start]);
        self.mark(start);

        while let Some(v) = queue.pop_front() {
            for w in graph.neighbors(v) {
                if self.mark(w) {
                    queue.push_back(w);
                }
            }
        }
    }

    pub fn marked(&self, v: usize) -> bool {
        self.marked.contains(v)
    }

    /// Number of marked vertices, `start` included.
    pub fn count(&self) -> usize {
        self.count
    }
}
