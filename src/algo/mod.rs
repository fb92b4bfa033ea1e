//! Single-source shortest path queries.
//!
//! A query object borrows a [`Graph`] and owns a [`DistanceMap`]. Each call to
//! [`ShortestPaths::run`] discards the previous results, sizes the buffer to the graph's current
//! node count and performs a full traversal. Since the graph stays borrowed for as long as the
//! query object lives, it can not be mutated between a run and the queries that read its results.
pub mod bfs;
pub mod dijkstra;

pub use bfs::Bfs;
pub use dijkstra::Dijkstra;

use std::iter::FusedIterator;

use crate::graph::Graph;
use crate::key::NodeKey;
use crate::memory::{map, SecondaryMap};
use crate::{Distance, NodeIndex};

/// Common interface of the shortest path queries.
pub trait ShortestPaths<'g> {
    /// The graph the query is bound to.
    fn graph(&self) -> &'g Graph;

    /// Results of the most recent run.
    fn distance_map(&self) -> &DistanceMap;

    /// Computes the distances from `source` to every node of the graph.
    ///
    /// A source the graph has never seen is treated as an isolated node: nothing is reachable
    /// from it but its distance to itself is zero.
    fn run(&mut self, source: impl Into<NodeKey>);

    /// Distance from the source of the last run to `target`.
    ///
    /// Returns `None` when the target is unreachable, unknown to the graph, or when no run has
    /// happened yet.
    #[inline]
    fn min_dist(&self, target: impl Into<NodeKey>) -> Option<Distance> {
        self.distance_map().lookup(self.graph(), target.into())
    }

    /// Iterates over the reached nodes and their distances in index order.
    #[inline]
    fn distances(&self) -> Reached<'_> {
        self.distance_map().reached()
    }
}

/// Per-node distance buffer shared by the query implementations.
#[derive(Debug, Clone, Default)]
pub struct DistanceMap {
    distances: SecondaryMap<NodeIndex, Option<Distance>>,
    source: Option<NodeKey>,
}

impl DistanceMap {
    /// Clears the buffer for a run from `source`, sized to the graph's node count.
    ///
    /// Returns the index of the source with its distance set to zero, or `None` if the graph does
    /// not contain it.
    pub(crate) fn reset(&mut self, graph: &Graph, source: NodeKey) -> Option<NodeIndex> {
        self.distances.reset(graph.node_count());
        self.source = Some(source);

        let start = graph.find(source)?;
        self.distances[start] = Some(0);
        Some(start)
    }

    #[inline]
    pub(crate) fn set(&mut self, node: NodeIndex, distance: Distance) {
        self.distances[node] = Some(distance);
    }

    /// The recorded distance of a node, `None` if it was not reached.
    #[inline]
    pub fn get(&self, node: NodeIndex) -> Option<Distance> {
        self.distances.get(node).copied().flatten()
    }

    /// The key the last run started from.
    pub fn source(&self) -> Option<NodeKey> {
        self.source
    }

    /// Number of nodes the buffer was sized for.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    fn lookup(&self, graph: &Graph, target: NodeKey) -> Option<Distance> {
        match graph.find(target) {
            Some(node) => self.get(node),
            None => (self.source == Some(target)).then_some(0),
        }
    }

    fn reached(&self) -> Reached<'_> {
        Reached(self.distances.iter())
    }
}

/// Iterator created by [`ShortestPaths::distances`].
#[derive(Debug, Clone)]
pub struct Reached<'a>(map::Iter<'a, NodeIndex, Option<Distance>>);

impl<'a> Iterator for Reached<'a> {
    type Item = (NodeIndex, Distance);

    fn next(&mut self) -> Option<Self::Item> {
        self.0
            .by_ref()
            .find_map(|(node, distance)| distance.map(|d| (node, d)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.0.size_hint().1)
    }
}

impl<'a> FusedIterator for Reached<'a> {}
