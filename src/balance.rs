//! Signed-network structural balance: frustration index, triangle balance,
//! and spectral bipartition into two balance clusters.

use ahash::AHashSet;
use log::info;
use std::time::Instant;

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::graph::signed::SignedGraph;
use crate::graph::{Graph, NodeIndex, UndirectedNeighbors};
use crate::primitives::spectral::{fiedler_vector, signed_laplacian};

/// Above this node count, [`SignedBalanceAnalyzer::frustration_index`] stops
/// enumerating bipartitions exactly and falls back to the spectral
/// approximation.
pub const EXACT_FRUSTRATION_NODE_LIMIT: usize = 20;

/// Full structural balance analysis of a signed graph.
#[derive(Clone, Debug, PartialEq)]
pub struct StructuralBalanceResult {
    pub is_balanced: bool,
    pub frustration_index: usize,
    pub frustrated_edges: Vec<(String, String)>,
    pub balance_ratio: f64,
    pub positive_cluster: AHashSet<String>,
    pub negative_cluster: AHashSet<String>,
}

/// Triangle-based balance analysis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleAnalysis {
    pub total_triangles: usize,
    pub balanced_triangles: usize,
    pub frustrated_triangles: usize,
    pub balance_ratio: f64,
}

/// Analyzer for a single signed undirected graph `G±`.
///
/// Construction never fails here because [`SignedGraph`] validates signs
/// and weights eagerly at build time; every method on this analyzer is
/// total over well-formed input.
pub struct SignedBalanceAnalyzer<'g> {
    graph: &'g SignedGraph,
}

impl<'g> SignedBalanceAnalyzer<'g> {
    pub fn new(graph: &'g SignedGraph) -> Self {
        Self { graph }
    }

    /// The minimum number of sign violations over all bipartitions: exact
    /// for `n <= 20` (full `2^n` enumeration), a spectral upper bound
    /// otherwise.
    pub fn frustration_index(&self, token: &CancellationToken) -> Result<usize> {
        let n = self.graph.node_count();
        if n == 0 {
            return Ok(0);
        }
        if n <= EXACT_FRUSTRATION_NODE_LIMIT {
            self.frustration_index_exact(token)
        } else {
            Ok(self.frustration_index_spectral())
        }
    }

    fn frustration_index_exact(&self, token: &CancellationToken) -> Result<usize> {
        let n = self.graph.node_count();
        let start = Instant::now();
        let mut min_frustration = usize::MAX;

        for mask in 0u64..(1u64 << n) {
            let partition: AHashSet<NodeIndex> = (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(NodeIndex::new)
                .collect();
            let frustrated = self.count_frustrated_edges(&partition);
            min_frustration = min_frustration.min(frustrated);
            token.check()?;
        }

        info!(
            "computed exact frustration index {min_frustration} for {n} nodes in {:?}",
            start.elapsed()
        );
        Ok(min_frustration)
    }

    fn frustration_index_spectral(&self) -> usize {
        let (positive, _negative) = self.spectral_partition();
        self.count_frustrated_edges(&positive)
    }

    fn count_frustrated_edges(&self, partition: &AHashSet<NodeIndex>) -> usize {
        self.graph
            .edges()
            .iter()
            .filter(|&&(u, v, sign, _weight)| {
                let same = partition.contains(&u) == partition.contains(&v);
                (sign == 1 && !same) || (sign == -1 && same)
            })
            .count()
    }

    /// The Fiedler-sign bipartition: `(A, B)` where `A` holds nodes with a
    /// non-negative Fiedler-vector entry (ties resolve to `A`). Degenerates
    /// to all-nodes-in-`A` when `n < 2` or the eigensolve is ill-defined.
    fn spectral_partition(&self) -> (AHashSet<NodeIndex>, AHashSet<NodeIndex>) {
        let adjacency = self.graph.signed_adjacency_matrix();
        let laplacian = signed_laplacian(&adjacency);

        match fiedler_vector(&laplacian) {
            Some(fiedler) => {
                let mut positive = AHashSet::default();
                let mut negative = AHashSet::default();
                for node in self.graph.node_indices() {
                    if fiedler[node.index()] >= 0.0 {
                        positive.insert(node);
                    } else {
                        negative.insert(node);
                    }
                }
                (positive, negative)
            }
            None => (self.graph.node_indices().collect(), AHashSet::default()),
        }
    }

    /// The edges that the spectral bipartition identifies as frustrated.
    pub fn find_frustrated_edges(&self) -> Vec<(String, String)> {
        let (positive, _) = self.spectral_partition();
        self.graph
            .edges()
            .iter()
            .filter(|&&(u, v, sign, _weight)| {
                let same = positive.contains(&u) == positive.contains(&v);
                (sign == 1 && !same) || (sign == -1 && same)
            })
            .map(|&(u, v, _, _)| (self.graph.node_id(u).to_string(), self.graph.node_id(v).to_string()))
            .collect()
    }

    /// Enumerates every unordered triangle and classifies it as balanced
    /// (0 or 2 negative edges) or frustrated (1 or 3 negative edges).
    pub fn analyze_triangles(&self) -> TriangleAnalysis {
        let mut total = 0usize;
        let mut frustrated = 0usize;

        for u in self.graph.node_indices() {
            let greater: Vec<NodeIndex> = self
                .graph
                .neighbors(u)
                .iter()
                .copied()
                .filter(|&v| v > u)
                .collect();

            for i in 0..greater.len() {
                for j in (i + 1)..greater.len() {
                    let (v, w) = (greater[i], greater[j]);
                    if !self.graph.has_edge(v, w) {
                        continue;
                    }
                    total += 1;
                    let neg_count = [
                        self.graph.sign(u, v),
                        self.graph.sign(u, w),
                        self.graph.sign(v, w),
                    ]
                    .into_iter()
                    .filter(|s| *s == Some(-1))
                    .count();
                    if neg_count == 1 || neg_count == 3 {
                        frustrated += 1;
                    }
                }
            }
        }

        let balanced = total - frustrated;
        TriangleAnalysis {
            total_triangles: total,
            balanced_triangles: balanced,
            frustrated_triangles: frustrated,
            balance_ratio: if total > 0 {
                balanced as f64 / total as f64
            } else {
                1.0
            },
        }
    }

    /// Comprehensive structural balance analysis combining the frustration
    /// index, frustrated edges, triangle analysis and spectral clusters.
    pub fn compute_structural_balance(&self, token: &CancellationToken) -> Result<StructuralBalanceResult> {
        if self.graph.node_count() == 0 {
            return Ok(StructuralBalanceResult {
                is_balanced: true,
                frustration_index: 0,
                frustrated_edges: Vec::new(),
                balance_ratio: 1.0,
                positive_cluster: AHashSet::default(),
                negative_cluster: AHashSet::default(),
            });
        }

        let frustration = self.frustration_index(token)?;
        let frustrated_edges = self.find_frustrated_edges();
        let triangles = self.analyze_triangles();
        let (positive, negative) = self.spectral_partition();

        Ok(StructuralBalanceResult {
            is_balanced: frustration == 0,
            frustration_index: frustration,
            frustrated_edges,
            balance_ratio: triangles.balance_ratio,
            positive_cluster: positive.into_iter().map(|n| self.graph.node_id(n).to_string()).collect(),
            negative_cluster: negative.into_iter().map(|n| self.graph.node_id(n).to_string()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SignedGraph;

    fn positive_triangle() -> SignedGraph {
        SignedGraph::builder()
            .add_edge("a", "b", 1, 1.0)
            .unwrap()
            .add_edge("b", "c", 1, 1.0)
            .unwrap()
            .add_edge("a", "c", 1, 1.0)
            .unwrap()
            .build()
    }

    #[test]
    fn positive_triangle_is_balanced() {
        let graph = positive_triangle();
        let analyzer = SignedBalanceAnalyzer::new(&graph);
        let token = CancellationToken::none();

        assert_eq!(analyzer.frustration_index(&token).unwrap(), 0);
        let triangles = analyzer.analyze_triangles();
        assert_eq!(triangles.total_triangles, 1);
        assert_eq!(triangles.balanced_triangles, 1);
        assert_eq!(triangles.frustrated_triangles, 0);
    }

    #[test]
    fn one_negative_edge_frustrates_the_triangle() {
        let graph = SignedGraph::builder()
            .add_edge("a", "b", 1, 1.0)
            .unwrap()
            .add_edge("b", "c", 1, 1.0)
            .unwrap()
            .add_edge("a", "c", -1, 1.0)
            .unwrap()
            .build();
        let analyzer = SignedBalanceAnalyzer::new(&graph);
        let token = CancellationToken::none();

        assert_eq!(analyzer.frustration_index(&token).unwrap(), 1);
        let triangles = analyzer.analyze_triangles();
        assert_eq!(triangles.frustrated_triangles, 1);

        let result = analyzer.compute_structural_balance(&token).unwrap();
        assert_eq!(result.frustrated_edges, vec![("a".to_string(), "c".to_string())]);
    }

    #[test]
    fn two_disjoint_positive_triangles_are_fully_balanced() {
        let graph = SignedGraph::builder()
            .add_edge("a", "b", 1, 1.0)
            .unwrap()
            .add_edge("b", "c", 1, 1.0)
            .unwrap()
            .add_edge("a", "c", 1, 1.0)
            .unwrap()
            .add_edge("d", "e", 1, 1.0)
            .unwrap()
            .add_edge("e", "f", 1, 1.0)
            .unwrap()
            .add_edge("d", "f", 1, 1.0)
            .unwrap()
            .build();
        let analyzer = SignedBalanceAnalyzer::new(&graph);
        let token = CancellationToken::none();

        assert_eq!(analyzer.frustration_index(&token).unwrap(), 0);
        let triangles = analyzer.analyze_triangles();
        assert_eq!(triangles.balance_ratio, 1.0);
    }

    #[test]
    fn empty_graph_has_zero_frustration() {
        let graph = SignedGraph::builder().build();
        let analyzer = SignedBalanceAnalyzer::new(&graph);
        let result = analyzer
            .compute_structural_balance(&CancellationToken::none())
            .unwrap();
        assert_eq!(result.frustration_index, 0);
        assert!(result.is_balanced);
    }
}
