use ahash::AHashMap;

use super::index::{NodeIndex, NodeMap};
use super::traits::{DirectedDegrees, DirectedNeighbors, Graph};
use super::undirected::UndirectedGraph;
use crate::error::{AnalyticsError, Result};

/// A directed graph `D`. Self-loops are permitted; a self-loop `(u, u)`
/// contributes 1 to both `u`'s in-degree and out-degree.
#[derive(Clone, Debug, Default)]
pub struct DirectedGraph {
    nodes: NodeMap,
    out_adjacency: Vec<Vec<NodeIndex>>,
    in_adjacency: Vec<Vec<NodeIndex>>,
    out_weights: Vec<AHashMap<NodeIndex, f64>>,
    edge_count: usize,
}

impl DirectedGraph {
    pub fn builder() -> DirectedGraphBuilder {
        DirectedGraphBuilder::default()
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

    pub fn has_edge(&self, u: NodeIndex, v: NodeIndex) -> bool {
        self.out_weights[u.index()].contains_key(&v)
    }

    pub fn weight(&self, u: NodeIndex, v: NodeIndex) -> Option<f64> {
        self.out_weights[u.index()].get(&v).copied()
    }

    /// The undirected projection of this graph: an edge `(u, v)` or `(v, u)`
    /// becomes a single undirected edge. Used by metrics defined over the
    /// "underlying undirected graph" of a directed input (closeness,
    /// clustering).
    pub fn to_undirected(&self) -> UndirectedGraph {
        let mut builder = UndirectedGraph::builder();
        for id in self.nodes.ids() {
            builder.add_node(id);
        }
        for u in self.nodes.iter() {
            for &v in &self.out_adjacency[u.index()] {
                let weight = self.weight(u, v).unwrap_or(1.0);
                builder
                    .add_edge(self.node_id(u), self.node_id(v), weight)
                    .expect("weights copied from a valid DirectedGraph are valid");
            }
        }
        builder.build()
    }
}

impl Graph for DirectedGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl DirectedDegrees for DirectedGraph {
    fn out_degree(&self, node: NodeIndex) -> usize {
        self.out_adjacency[node.index()].len()
    }

    fn in_degree(&self, node: NodeIndex) -> usize {
        self.in_adjacency[node.index()].len()
    }
}

impl DirectedNeighbors for DirectedGraph {
    fn out_neighbors(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.out_adjacency[node.index()]
    }

    fn in_neighbors(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.in_adjacency[node.index()]
    }
}

#[derive(Default)]
pub struct DirectedGraphBuilder {
    nodes: NodeMap,
    out_adjacency: Vec<Vec<NodeIndex>>,
    in_adjacency: Vec<Vec<NodeIndex>>,
    out_weights: Vec<AHashMap<NodeIndex, f64>>,
}

impl DirectedGraphBuilder {
    fn ensure_capacity(&mut self, node: NodeIndex) {
        let needed = node.index() + 1;
        if self.out_adjacency.len() < needed {
            self.out_adjacency.resize(needed, Vec::new());
            self.in_adjacency.resize(needed, Vec::new());
            self.out_weights.resize(needed, AHashMap::new());
        }
    }

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

        if self.out_weights[u.index()].insert(v, weight).is_none() {
            self.out_adjacency[u.index()].push(v);
            self.in_adjacency[v.index()].push(u);
        }
        Ok(self)
    }

    pub fn build(self) -> DirectedGraph {
        let edge_count = self.out_weights.iter().map(|m| m.len()).sum();
        DirectedGraph {
            nodes: self.nodes,
            out_adjacency: self.out_adjacency,
            in_adjacency: self.in_adjacency,
            out_weights: self.out_weights,
            edge_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dag_degrees() {
        let graph = DirectedGraph::builder()
            .add_edge("a", "b", 1.0)
            .unwrap()
            .add_edge("b", "c", 1.0)
            .unwrap()
            .add_edge("a", "c", 1.0)
            .unwrap()
            .build();

        let a = graph.node_index("a").unwrap();
        let b = graph.node_index("b").unwrap();
        let c = graph.node_index("c").unwrap();
        assert_eq!(graph.out_degree(a), 2);
        assert_eq!(graph.in_degree(c), 2);
        assert_eq!(graph.out_degree(b), 1);
        assert_eq!(graph.out_degree(c), 0);
    }

    #[test]
    fn self_loop_counts_once_each_direction() {
        let graph = DirectedGraph::builder().add_edge("a", "a", 1.0).unwrap().build();
        let a = graph.node_index("a").unwrap();
        assert_eq!(graph.out_degree(a), 1);
        assert_eq!(graph.in_degree(a), 1);
    }
}
