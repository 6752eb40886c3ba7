use ahash::AHashMap;
use nalgebra::DMatrix;

use super::index::{NodeIndex, NodeMap};
use super::traits::{Graph, UndirectedDegrees, UndirectedNeighbors};
use crate::error::{AnalyticsError, Result};

/// A signed edge endpoint: the neighbor, its sign, and its weight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SignedTarget {
    pub target: NodeIndex,
    pub sign: i8,
    pub weight: f64,
}

/// A signed undirected graph `G±`: every edge carries a mandatory sign in
/// `{+1, -1}` and an optional weight (default `1.0`).
///
/// Construction is validated eagerly — a [`SignedGraphBuilder`] rejects a
/// malformed sign or a negative/non-finite weight as soon as it is given,
/// per the "validate inputs eagerly at analyzer construction" policy.
#[derive(Clone, Debug, Default)]
pub struct SignedGraph {
    nodes: NodeMap,
    adjacency: Vec<Vec<NodeIndex>>,
    edges: Vec<AHashMap<NodeIndex, (i8, f64)>>,
    edge_list: Vec<(NodeIndex, NodeIndex, i8, f64)>,
}

impl SignedGraph {
    pub fn builder() -> SignedGraphBuilder {
        SignedGraphBuilder::default()
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
        self.edges[u.index()].contains_key(&v)
    }

    pub fn sign(&self, u: NodeIndex, v: NodeIndex) -> Option<i8> {
        self.edges[u.index()].get(&v).map(|(s, _)| *s)
    }

    pub fn weight(&self, u: NodeIndex, v: NodeIndex) -> Option<f64> {
        self.edges[u.index()].get(&v).map(|(_, w)| *w)
    }

    /// All edges as `(u, v, sign, weight)`, each unordered pair listed once,
    /// in the order edges were inserted.
    pub fn edges(&self) -> &[(NodeIndex, NodeIndex, i8, f64)] {
        &self.edge_list
    }

    /// `node`'s neighbors paired with the sign and weight of the connecting
    /// edge, in adjacency order.
    pub fn signed_neighbors(&self, node: NodeIndex) -> Vec<SignedTarget> {
        self.adjacency[node.index()]
            .iter()
            .map(|&target| {
                let (sign, weight) = self.edges[node.index()][&target];
                SignedTarget { target, sign, weight }
            })
            .collect()
    }

    /// Builds the dense signed adjacency matrix `A` with `A[i, j] =
    /// sign(i, j)` (0 where no edge exists).
    pub fn signed_adjacency_matrix(&self) -> DMatrix<f64> {
        let n = self.node_count();
        let mut a = DMatrix::<f64>::zeros(n, n);
        for &(u, v, sign, _weight) in &self.edge_list {
            a[(u.index(), v.index())] = sign as f64;
            a[(v.index(), u.index())] = sign as f64;
        }
        a
    }
}

impl Graph for SignedGraph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_list.len()
    }
}

impl UndirectedDegrees for SignedGraph {
    fn degree(&self, node: NodeIndex) -> usize {
        self.adjacency[node.index()].len()
    }
}

impl UndirectedNeighbors for SignedGraph {
    fn neighbors(&self, node: NodeIndex) -> &[NodeIndex] {
        &self.adjacency[node.index()]
    }
}

/// Builds a [`SignedGraph`], rejecting malformed edges up front.
#[derive(Default)]
pub struct SignedGraphBuilder {
    nodes: NodeMap,
    adjacency: Vec<Vec<NodeIndex>>,
    edges: Vec<AHashMap<NodeIndex, (i8, f64)>>,
    edge_list: Vec<(NodeIndex, NodeIndex, i8, f64)>,
}

impl SignedGraphBuilder {
    fn ensure_capacity(&mut self, node: NodeIndex) {
        let needed = node.index() + 1;
        if self.adjacency.len() < needed {
            self.adjacency.resize(needed, Vec::new());
            self.edges.resize(needed, AHashMap::new());
        }
    }

    pub fn add_node(&mut self, id: &str) -> &mut Self {
        let idx = self.nodes.get_or_insert(id);
        self.ensure_capacity(idx);
        self
    }

    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        sign: i8,
        weight: f64,
    ) -> Result<&mut Self> {
        if sign != 1 && sign != -1 {
            return Err(AnalyticsError::InvalidInput {
                reason: format!("edge ({source}, {target}) has invalid sign {sign}"),
            });
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(AnalyticsError::InvalidInput {
                reason: format!("edge ({source}, {target}) has invalid weight {weight}"),
            });
        }

        let u = self.nodes.get_or_insert(source);
        let v = self.nodes.get_or_insert(target);
        self.ensure_capacity(u);
        self.ensure_capacity(v);

        if self.edges[u.index()].insert(v, (sign, weight)).is_none() {
            self.adjacency[u.index()].push(v);
        } else {
            // overwrite in place in the edge list too
            if let Some(entry) = self
                .edge_list
                .iter_mut()
                .find(|(a, b, _, _)| (*a == u && *b == v) || (*a == v && *b == u))
            {
                entry.2 = sign;
                entry.3 = weight;
            }
            if u != v {
                self.edges[v.index()].insert(u, (sign, weight));
            }
            return Ok(self);
        }
        if u != v {
            self.edges[v.index()].insert(u, (sign, weight));
            self.adjacency[v.index()].push(u);
        }
        self.edge_list.push((u, v, sign, weight));
        Ok(self)
    }

    pub fn build(self) -> SignedGraph {
        SignedGraph {
            nodes: self.nodes,
            adjacency: self.adjacency,
            edges: self.edges,
            edge_list: self.edge_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_sign() {
        let result = SignedGraph::builder().add_edge("a", "b", 0, 1.0).map(|_| ());
        assert!(result.is_err());
    }

    #[test]
    fn rejects_negative_weight() {
        let result = SignedGraph::builder()
            .add_edge("a", "b", 1, -1.0)
            .map(|_| ());
        assert!(result.is_err());
    }

    #[test]
    fn positive_triangle_builds() {
        let graph = SignedGraph::builder()
            .add_edge("a", "b", 1, 1.0)
            .unwrap()
            .add_edge("b", "c", 1, 1.0)
            .unwrap()
            .add_edge("a", "c", 1, 1.0)
            .unwrap()
            .build();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn signed_neighbors_carries_sign_and_weight() {
        let graph = SignedGraph::builder()
            .add_edge("a", "b", -1, 2.0)
            .unwrap()
            .build();
        let a = graph.node_index("a").unwrap();
        let b = graph.node_index("b").unwrap();
        let neighbors = graph.signed_neighbors(a);
        assert_eq!(neighbors, vec![SignedTarget { target: b, sign: -1, weight: 2.0 }]);
    }
}
