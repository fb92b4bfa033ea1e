//! Weighted shortest paths by Dijkstra's algorithm.
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{DistanceMap, ShortestPaths};
use crate::graph::Graph;
use crate::key::NodeKey;
use crate::{Distance, NodeIndex};

/// Weighted distances from a single source.
///
/// Relies on the graph rejecting negative weights. Entries of the priority queue that were
/// superseded by a shorter distance are skipped when popped instead of being removed.
///
/// # Example
///
/// ```
/// # use graphx::{Dijkstra, Graph, ShortestPaths};
/// let mut graph = Graph::undirected();
/// graph.add_edge((0, 0), (0, 1), 10).unwrap();
/// graph.add_edge((0, 0), (1, 0), 1).unwrap();
/// graph.add_edge((1, 0), (0, 1), 1).unwrap();
///
/// let mut dijkstra = Dijkstra::new(&graph);
/// dijkstra.run((0, 0));
/// assert_eq!(dijkstra.min_dist((0, 1)), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Dijkstra<'g> {
    graph: &'g Graph,
    heap: BinaryHeap<Reverse<(Distance, NodeIndex)>>,
    distances: DistanceMap,
}

impl<'g> Dijkstra<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            heap: BinaryHeap::new(),
            distances: DistanceMap::default(),
        }
    }
}

impl<'g> ShortestPaths<'g> for Dijkstra<'g> {
    #[inline]
    fn graph(&self) -> &'g Graph {
        self.graph
    }

    #[inline]
    fn distance_map(&self) -> &DistanceMap {
        &self.distances
    }

    fn run(&mut self, source: impl Into<NodeKey>) {
        let source = source.into();
        let nodes = self.graph.node_count();
        self.heap.clear();

        let Some(start) = self.distances.reset(self.graph, source) else {
            tracing::debug!(%source, nodes, "dijkstra source not in graph");
            return;
        };

        self.heap.push(Reverse((0, start)));
        let (mut settled, mut stale) = (0usize, 0usize);

        while let Some(Reverse((distance, node))) = self.heap.pop() {
            if self.distances.get(node).map_or(false, |d| distance > d) {
                stale += 1;
                continue;
            }
            settled += 1;

            for edge in self.graph.neighbors(node) {
                let candidate = distance.saturating_add(edge.weight);
                let improves = self
                    .distances
                    .get(edge.target)
                    .map_or(true, |current| candidate < current);

                if improves {
                    self.distances.set(edge.target, candidate);
                    self.heap.push(Reverse((candidate, edge.target)));
                }
            }
        }

        tracing::debug!(%source, nodes, settled, stale, "dijkstra finished");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn prefers_cheaper_detour() {
        let mut graph = Graph::directed();
        graph.add_edge(0, 3, 10).unwrap();
        graph.add_edge(0, 1, 2).unwrap();
        graph.add_edge(1, 2, 2).unwrap();
        graph.add_edge(2, 3, 2).unwrap();

        let mut dijkstra = Dijkstra::new(&graph);
        dijkstra.run(0);

        assert_eq!(dijkstra.min_dist(3), Some(6));
        assert_eq!(dijkstra.min_dist(2), Some(4));
    }

    #[test]
    fn zero_weight_edges() {
        let mut graph = Graph::undirected();
        graph.add_edge(0, 1, 0).unwrap();
        graph.add_edge(1, 2, 0).unwrap();
        graph.add_edge(0, 2, 3).unwrap();

        let mut dijkstra = Dijkstra::new(&graph);
        dijkstra.run(0);

        assert_eq!(dijkstra.min_dist(2), Some(0));
    }

    #[test]
    fn parallel_edges_take_cheapest() {
        let mut graph = Graph::directed();
        graph.add_edge((1, 1, 1), (2, 2, 2), 9).unwrap();
        graph.add_edge((1, 1, 1), (2, 2, 2), 4).unwrap();

        let mut dijkstra = Dijkstra::new(&graph);
        dijkstra.run((1, 1, 1));

        assert_eq!(dijkstra.min_dist((2, 2, 2)), Some(4));
        assert!(dijkstra
            .distances()
            .eq([(graph.find((1, 1, 1)).unwrap(), 0), (graph.find((2, 2, 2)).unwrap(), 4)]));
    }

    #[test]
    fn rejected_edge_is_not_traversed() {
        let mut graph = Graph::directed();
        graph.add_edge(0, 1, 3).unwrap();
        assert!(graph.add_edge(1, 2, -5).is_err());

        let mut dijkstra = Dijkstra::new(&graph);
        dijkstra.run(0);

        assert_eq!(dijkstra.min_dist(1), Some(3));
        assert_eq!(dijkstra.min_dist(2), None);
    }
}
