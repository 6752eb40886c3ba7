use ahash::AHashMap;

use super::index::{NodeIndex, NodeMap};
use super::traits::{Graph, UndirectedDegrees, UndirectedNeighbors};
use crate::error::{AnalyticsError, Result};

/// A plain weighted undirected graph: the shape used for a single multiplex
/// layer.
///
/// Parallel edges between the same pair collapse into one (the last weight
/// given wins), matching the `networkx.Graph` semantics the original
/// implementation builds on.
#[derive(Clone, Debug, Default)]
pub struct UndirectedGraph {
    nodes: NodeMap,
    adjacency: Vec<Vec<NodeIndex>>,
    weights: Vec<AHashMap<NodeIndex, f64>>,
    edge_count: usize,
}

impl UndirectedGraph {
    pub fn builder() -> UndirectedGraphBuilder {
        UndirectedGraphBuilder::default()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.ids()
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes.iter()
    }

    pub fn node_id(&self, node: NodeIndex) -> &str {
        self.nodes.id(node)
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.nodes.get(id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.get(id).is_some()
    }

    pub fn has_edge(&self, u: NodeIndex, v: NodeIndex) -> bool {
        self.weights[u.index()].contains_key(&v)
    }

    pub fn weight(&self, u: NodeIndex, v: NodeIndex) -> Option<f64> {
        self.weights[u.index()].get(&v).copied()
    }
}

impl Graph for UndirectedGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl UndirectedDegrees for UndirectedGraph {
    fn degree(&self, node: NodeIndex) -> usize {
        self.adjacency[node.index()].len()
    }
}

impl UndirectedNeighbors for UndirectedGraph {
    fn neighbors(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.adjacency[node.index()]
    }
}

/// Builds an [`UndirectedGraph`] from edges given as caller-facing node
/// identifiers, assigning dense indices as new identifiers are encountered.
#[derive(Default)]
pub struct UndirectedGraphBuilder {
    nodes: NodeMap,
    adjacency: Vec<Vec<NodeIndex>>,
    weights: Vec<AHashMap<NodeIndex, f64>>,
}

impl UndirectedGraphBuilder {
    fn ensure_capacity(&mut self, node: NodeIndex) {
        let needed = node.index() + 1;
        if self.adjacency.len() < needed {
            self.adjacency.resize(needed, Vec::new());
            self.weights.resize(needed, AHashMap::new());
        }
    }

    /// Registers a node with no edges, so it appears in the universe even
    /// if it never participates in an edge.
    pub fn add_node(&mut self, id: &str) -> &mut Self {
        let idx = self.nodes.get_or_insert(id);
        self.ensure_capacity(idx);
        self
    }

    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) -> Result<&mut Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(AnalyticsError::InvalidInput {
                reason: format!("edge ({source}, {target}) has invalid weight {weight}"),
            });
        }
        let u = self.nodes.get_or_insert(source);
        let v = self.nodes.get_or_insert(target);
        self.ensure_capacity(u);
        self.ensure_capacity(v);

        if self.weights[u.index()].insert(v, weight).is_none() {
            self.adjacency[u.index()].push(v);
        }
        if u != v && self.weights[v.index()].insert(u, weight).is_none() {
            self.adjacency[v.index()].push(u);
        }
        Ok(self)
    }

    pub fn build(self) -> UndirectedGraph {
        let edge_count = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, m)| {
                m.keys()
                    .filter(|&&v| v.index() >= i)
                    .count()
            })
            .sum();
        UndirectedGraph {
            nodes: self.nodes,
            adjacency: self.adjacency,
            weights: self.weights,
            edge_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_has_three_edges_and_degree_two() {
        let graph = UndirectedGraph::builder()
            .add_edge("a", "b", 1.0)
            .unwrap()
            .add_edge("b", "c", 1.0)
            .unwrap()
            .add_edge("a", "c", 1.0)
            .unwrap()
            .build();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        let a = graph.node_index("a").unwrap();
        assert_eq!(graph.degree(a), 2);
    }

    #[test]
    fn repeated_edge_overwrites_weight() {
        let graph = UndirectedGraph::builder()
            .add_edge("a", "b", 1.0)
            .unwrap()
            .add_edge("a", "b", 2.0)
            .unwrap()
            .build();

        assert_eq!(graph.edge_count(), 1);
        let a = graph.node_index("a").unwrap();
        let b = graph.node_index("b").unwrap();
        assert_eq!(graph.weight(a, b), Some(2.0));
    }
}
