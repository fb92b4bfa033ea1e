//! Graphs over composite integer keys with unweighted and weighted shortest paths.
//!
//! Nodes are named by [`NodeKey`]s (an integer, a pair or a triple of integers) which the
//! [`Graph`] interns into dense [`NodeIndex`]es on first use. Query objects such as [`Bfs`] and
//! [`Dijkstra`] borrow a graph, compute single-source distances into a buffer they own, and answer
//! point queries from it.
//!
//! ```
//! use graphx::{Bfs, Dijkstra, Graph, ShortestPaths};
//!
//! let mut graph = Graph::undirected();
//! graph.add_edge(0, 1, 10).unwrap();
//! graph.add_edge(0, 2, 1).unwrap();
//! graph.add_edge(2, 1, 1).unwrap();
//!
//! let mut bfs = Bfs::new(&graph);
//! bfs.run(0);
//! assert_eq!(bfs.min_dist(1), Some(1));
//!
//! let mut dijkstra = Dijkstra::new(&graph);
//! dijkstra.run(0);
//! assert_eq!(dijkstra.min_dist(1), Some(2));
//! assert_eq!(dijkstra.min_dist(99), None);
//! ```
pub mod algo;
pub mod graph;
pub mod interner;
pub mod key;
pub mod memory;

pub use algo::{Bfs, Dijkstra, ShortestPaths};
pub use graph::{AddEdgeError, Edge, Graph};
pub use key::NodeKey;

/// Integer cost of an edge. Graphs only accept non-negative weights.
pub type Weight = i64;

/// Length of a path: a hop count for [`Bfs`], a sum of weights for [`Dijkstra`].
pub type Distance = i64;

/// Dense index of a node, issued in first-seen order by the graph's interner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeIndex(u32);

entity_impl!(NodeIndex, u32);

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
