use std::fmt::{self, Debug};
use thiserror::Error;

use crate::interner::Interner;
use crate::key::NodeKey;
use crate::memory::SecondaryMap;
use crate::{NodeIndex, Weight};

/// An outgoing edge in the adjacency list of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// The node the edge points to.
    pub target: NodeIndex,
    /// Non-negative cost of traversing the edge.
    pub weight: Weight,
}

/// Graph over interned node keys with non-negative integer edge weights.
///
/// Nodes are identified by [`NodeKey`]s and addressed internally by the dense [`NodeIndex`]
/// assigned on first use. Every node owns an ordered list of outgoing [`Edge`]s. In an
/// undirected graph each edge is stored once in the list of each endpoint.
#[derive(Clone)]
pub struct Graph {
    directed: bool,
    interner: Interner,
    adjacency: SecondaryMap<NodeIndex, Vec<Edge>>,
    edge_count: usize,
}

impl Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.directed)
            .field("nodes", &self.interner.len())
            .field("adjacency", &self.adjacency)
            .finish()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::directed()
    }
}

impl Graph {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(0, directed)
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Create a new empty graph with preallocated space for `nodes` nodes.
    pub fn with_capacity(nodes: usize, directed: bool) -> Self {
        Self {
            directed,
            interner: Interner::with_capacity(nodes),
            adjacency: SecondaryMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Whether edges are only traversable from source to target.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of distinct nodes in the graph.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.interner.len()
    }

    /// Number of edges successfully added to the graph.
    ///
    /// An undirected edge counts once even though it appears in two adjacency lists.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.interner.is_empty()
    }

    /// Returns the index of a node, adding the node to the graph if it is new.
    pub fn intern(&mut self, key: impl Into<NodeKey>) -> NodeIndex {
        let id = self.interner.intern(key);
        self.adjacency.ensure(id);
        id
    }

    /// Looks up the index of a node without adding it.
    #[inline]
    pub fn find(&self, key: impl Into<NodeKey>) -> Option<NodeIndex> {
        self.interner.find(key)
    }

    /// The canonical key of the node with a given index.
    pub fn key(&self, id: NodeIndex) -> Option<NodeKey> {
        self.interner.key(id)
    }

    /// Add an edge from `u` to `v`, adding either node to the graph if it is new.
    ///
    /// In an undirected graph the reverse edge is recorded as well. A negative weight is rejected
    /// before anything is interned, leaving the graph untouched.
    ///
    /// # Example
    ///
    /// ```
    /// # use graphx::Graph;
    /// let mut graph = Graph::undirected();
    ///
    /// graph.add_edge((0, 0), (0, 1), 3).unwrap();
    /// assert!(graph.add_edge((0, 1), (1, 1), -1).is_err());
    ///
    /// let a = graph.find((0, 0)).unwrap();
    /// let b = graph.find((0, 1)).unwrap();
    /// assert_eq!(graph.neighbors(b)[0].target, a);
    /// assert_eq!(graph.node_count(), 2);
    /// ```
    pub fn add_edge(
        &mut self,
        u: impl Into<NodeKey>,
        v: impl Into<NodeKey>,
        weight: Weight,
    ) -> Result<(), AddEdgeError> {
        let (u, v) = (u.into(), v.into());

        if weight < 0 {
            tracing::debug!(%u, %v, weight, "rejected edge with negative weight");
            return Err(AddEdgeError::NegativeWeight(weight));
        }

        self.insert(u, v, weight);
        Ok(())
    }

    /// Add an edge of weight one from `u` to `v`.
    pub fn add_unit_edge(&mut self, u: impl Into<NodeKey>, v: impl Into<NodeKey>) {
        self.insert(u.into(), v.into(), 1);
    }

    /// Interns both endpoints and records an edge whose weight is already known to be valid.
    fn insert(&mut self, u: NodeKey, v: NodeKey, weight: Weight) {
        let (source, target) = (self.intern(u), self.intern(v));

        self.adjacency[source].push(Edge { target, weight });
        if !self.directed {
            self.adjacency[target].push(Edge {
                target: source,
                weight,
            });
        }

        self.edge_count += 1;
        tracing::trace!(%u, %v, weight, "added edge");
    }

    /// The outgoing edges of a node in insertion order.
    ///
    /// Returns an empty slice for indices that were never issued by this graph.
    #[inline]
    pub fn neighbors(&self, id: NodeIndex) -> &[Edge] {
        &self.adjacency[id]
    }
}

/// Error returned by [Graph::add_edge].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddEdgeError {
    #[error("negative weight {0} is not supported")]
    NegativeWeight(Weight),
}
