//! Unweighted shortest paths by breadth-first search.
use std::collections::VecDeque;

use bitvec::vec::BitVec;

use super::{DistanceMap, ShortestPaths};
use crate::graph::Graph;
use crate::key::NodeKey;
use crate::memory::EntityIndex;
use crate::{Distance, NodeIndex};

/// Hop distances from a single source.
///
/// Edge weights are ignored: every edge, including each copy of a multi-edge, counts as one hop.
///
/// # Example
///
/// ```
/// # use graphx::{Bfs, Graph, ShortestPaths};
/// let mut graph = Graph::directed();
/// graph.add_edge(0, 1, 100).unwrap();
/// graph.add_edge(1, 2, 100).unwrap();
///
/// let mut bfs = Bfs::new(&graph);
/// bfs.run(0);
/// assert_eq!(bfs.min_dist(2), Some(2));
///
/// bfs.run(2);
/// assert_eq!(bfs.min_dist(0), None);
/// ```
#[derive(Debug, Clone)]
pub struct Bfs<'g> {
    graph: &'g Graph,
    visited: BitVec,
    queue: VecDeque<(NodeIndex, Distance)>,
    distances: DistanceMap,
}

impl<'g> Bfs<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            visited: BitVec::new(),
            queue: VecDeque::new(),
            distances: DistanceMap::default(),
        }
    }
}

impl<'g> ShortestPaths<'g> for Bfs<'g> {
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

        self.visited.clear();
        self.visited.resize(nodes, false);
        self.queue.clear();

        let Some(start) = self.distances.reset(self.graph, source) else {
            tracing::debug!(%source, nodes, "bfs source not in graph");
            return;
        };

        self.visited.set(start.index(), true);
        self.queue.push_back((start, 0));
        let mut reached = 0usize;

        while let Some((node, distance)) = self.queue.pop_front() {
            reached += 1;

            for edge in self.graph.neighbors(node) {
                let target = edge.target.index();
                if self.visited[target] {
                    continue;
                }

                self.visited.set(target, true);
                self.distances.set(edge.target, distance + 1);
                self.queue.push_back((edge.target, distance + 1));
            }
        }

        tracing::debug!(%source, nodes, reached, "bfs finished");
    }
}
