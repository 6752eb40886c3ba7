//! The graph primitives layer: adjacency/predecessor lookups, degree
//! counters and the three concrete graph shapes the analyzers operate over.
//!
//! These types are the only services the three analyzers require; they are
//! intentionally small and combinatorial rather than a general-purpose graph
//! library.

pub mod directed;
pub mod index;
pub mod multiplex;
pub mod signed;
pub mod traits;
pub mod undirected;

pub use directed::{DirectedGraph, DirectedGraphBuilder};
pub use index::{NodeIndex, NodeMap};
pub use multiplex::{MultiplexLayers, MultiplexLayersBuilder};
pub use signed::{SignedGraph, SignedGraphBuilder, SignedTarget};
pub use traits::{DirectedDegrees, DirectedNeighbors, Graph, UndirectedDegrees, UndirectedNeighbors};
pub use undirected::{UndirectedGraph, UndirectedGraphBuilder};
