//! Multiplex centrality: per-layer classical centralities, cross-layer
//! aggregation, versatility, participation, supra-matrix PageRank, and
//! layer correlation.

use ahash::AHashMap;
use log::debug;

use crate::error::{AnalyticsError, Result};
use crate::graph::{Graph, MultiplexLayers, UndirectedDegrees, UndirectedNeighbors};
use crate::primitives::centrality::{
    betweenness_centrality, closeness_centrality, clustering_coefficients, degree_centrality,
    eigenvector_centrality, pagerank,
};

/// Classical centralities computed for one layer, aligned to the layer's
/// own node ordering (not the universe).
#[derive(Clone, Debug, PartialEq)]
pub struct LayerCentralities {
    pub degree: Vec<f64>,
    pub betweenness: Vec<f64>,
    pub closeness: Vec<f64>,
    pub eigenvector: Vec<f64>,
    pub pagerank: Vec<f64>,
}

/// How per-layer degree centralities are combined into one score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AggregationMethod {
    /// Weighted sum of per-layer normalized degree centrality.
    Aggregate,
    /// Maximum normalized degree centrality across layers.
    Max,
    /// Harmonic mean over layers where the node is present with positive
    /// normalized degree.
    Harmonic,
}

/// Tunables for [`MultiplexCentralityAnalyzer::compute_multiplex_pagerank`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MultiplexPageRankConfig {
    pub inter_layer_weight: f64,
    pub damping: f64,
    pub max_iter: usize,
    pub tol: f64,
}

impl Default for MultiplexPageRankConfig {
    fn default() -> Self {
        Self {
            inter_layer_weight: 0.5,
            damping: 0.85,
            max_iter: 100,
            tol: 1e-6,
        }
    }
}

/// Per-node rollup across all layers.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeMultiplexAnalysis {
    pub versatility: f64,
    pub participation: f64,
    pub aggregate_centrality: f64,
}

/// Analyzer over a multiplex layering, computed relative to the union of
/// node identifiers across all layers (the "universe").
pub struct MultiplexCentralityAnalyzer<'g> {
    layers: &'g MultiplexLayers,
}

impl<'g> MultiplexCentralityAnalyzer<'g> {
    pub fn new(layers: &'g MultiplexLayers) -> Self {
        Self { layers }
    }

    /// Classical centralities for a single named layer, in that layer's own
    /// node order.
    pub fn compute_layer_centralities(&self, layer: &str) -> Result<LayerCentralities> {
        let graph = self.layers.layer(layer)?;
        Ok(LayerCentralities {
            degree: degree_centrality(graph),
            betweenness: betweenness_centrality(graph),
            closeness: closeness_centrality(graph),
            eigenvector: eigenvector_centrality(graph),
            pagerank: pagerank(graph),
        })
    }

    /// `versatility(v) = |{layers containing v}| / |L|`.
    pub fn compute_versatility(&self, node_id: &str) -> f64 {
        let layer_count = self.layers.layer_count();
        if layer_count == 0 {
            return 0.0;
        }
        let present = self
            .layers
            .layers()
            .filter(|(_, graph)| graph.contains_node(node_id))
            .count();
        present as f64 / layer_count as f64
    }

    /// How evenly a node's total degree is distributed across layers.
    pub fn compute_participation_coefficient(&self, node_id: &str) -> f64 {
        let layer_count = self.layers.layer_count();
        if layer_count <= 1 {
            return 0.0;
        }

        let degrees: Vec<usize> = self
            .layers
            .layers()
            .map(|(_, graph)| {
                graph
                    .node_index(node_id)
                    .map(|idx| graph.degree(idx))
                    .unwrap_or(0)
            })
            .collect();
        let total: usize = degrees.iter().sum();
        if total == 0 {
            return 0.0;
        }

        let sum_sq: f64 = degrees
            .iter()
            .map(|&d| {
                let share = d as f64 / total as f64;
                share * share
            })
            .sum();
        let l = layer_count as f64;
        let p = (l / (l - 1.0)) * (1.0 - sum_sq);
        p.clamp(0.0, 1.0)
    }

    /// Aggregates per-layer normalized degree centrality into one score,
    /// using `layer_weights` for [`AggregationMethod::Aggregate`] (default
    /// uniform, renormalized to sum to 1; ignored by `weights` not covering
    /// every layer — missing layers get weight 0).
    pub fn compute_multiplex_centrality(
        &self,
        node_id: &str,
        method: AggregationMethod,
        layer_weights: Option<&AHashMap<String, f64>>,
    ) -> f64 {
        let per_layer_degree_centrality: Vec<(String, f64)> = self
            .layers
            .layers()
            .map(|(name, graph)| {
                let n = graph.node_count();
                let normalized = if n <= 1 {
                    0.0
                } else {
                    graph
                        .node_index(node_id)
                        .map(|idx| graph.degree(idx) as f64 / (n - 1) as f64)
                        .unwrap_or(0.0)
                };
                (name.to_string(), normalized)
            })
            .collect();

        match method {
            AggregationMethod::Aggregate => {
                let weights = self.normalized_weights(layer_weights);
                per_layer_degree_centrality
                    .iter()
                    .map(|(name, c)| weights.get(name).copied().unwrap_or(0.0) * c)
                    .sum()
            }
            AggregationMethod::Max => per_layer_degree_centrality
                .iter()
                .map(|(_, c)| *c)
                .fold(0.0_f64, f64::max),
            AggregationMethod::Harmonic => {
                let positive: Vec<f64> = per_layer_degree_centrality
                    .into_iter()
                    .map(|(_, c)| c)
                    .filter(|&c| c > 0.0)
                    .collect();
                if positive.is_empty() {
                    0.0
                } else {
                    let reciprocal_sum: f64 = positive.iter().map(|c| 1.0 / c).sum();
                    positive.len() as f64 / reciprocal_sum
                }
            }
        }
    }

    fn normalized_weights(&self, layer_weights: Option<&AHashMap<String, f64>>) -> AHashMap<String, f64> {
        let names: Vec<&str> = self.layers.layer_names().collect();
        let raw: Vec<f64> = match layer_weights {
            Some(weights) => names
                .iter()
                .map(|name| weights.get(*name).copied().unwrap_or(0.0))
                .collect(),
            None => vec![1.0; names.len()],
        };
        let total: f64 = raw.iter().sum();
        let mut normalized = AHashMap::default();
        if total > 0.0 {
            for (name, w) in names.iter().zip(raw.iter()) {
                normalized.insert(name.to_string(), w / total);
            }
        }
        normalized
    }

    /// The supra-matrix multiplex PageRank: power iteration over the
    /// `|universe| * |layers|`-dimensional block transition matrix.
    ///
    /// Returns a value per universe node, summing to 1.
    pub fn compute_multiplex_pagerank(&self, config: &MultiplexPageRankConfig) -> Vec<f64> {
        let n = self.layers.universe_size();
        let l = self.layers.layer_count();
        if n == 0 || l == 0 {
            return vec![0.0; n];
        }
        let dim = n * l;

        let universe: Vec<&str> = self.layers.universe_ids().collect();
        let universe_index: AHashMap<&str, usize> =
            universe.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        let layer_names: Vec<&str> = self.layers.layer_names().collect();

        let slot = |layer: usize, node: usize| layer * n + node;

        // sparse row -> (col, weight) adjacency of the unnormalized supra matrix S
        let mut rows: Vec<Vec<(usize, f64)>> = vec![Vec::new(); dim];

        for (layer_idx, layer_name) in layer_names.iter().enumerate() {
            let graph = self.layers.layer(layer_name).expect("layer name came from this layering");
            for u in graph.node_indices() {
                let u_id = graph.node_id(u);
                let u_universe = universe_index[u_id];
                for &v in graph.neighbors(u) {
                    let v_universe = universe_index[graph.node_id(v)];
                    rows[slot(layer_idx, u_universe)].push((slot(layer_idx, v_universe), 1.0));
                }
            }

            // inter-layer edges: from (layer, v) to (other_layer, v) for every v present
            // in this source layer, regardless of whether v is present in other_layer.
            for node_id in graph.node_ids() {
                let universe_idx = universe_index[node_id];
                for (other_idx, _) in layer_names.iter().enumerate() {
                    if other_idx == layer_idx {
                        continue;
                    }
                    rows[slot(layer_idx, universe_idx)]
                        .push((slot(other_idx, universe_idx), config.inter_layer_weight));
                }
            }
        }

        // Row-normalize into the transition matrix P.
        for row in &mut rows {
            let row_sum: f64 = row.iter().map(|(_, w)| w).sum();
            if row_sum > 0.0 {
                for (_, w) in row.iter_mut() {
                    *w /= row_sum;
                }
            }
        }

        let uniform = 1.0 / dim as f64;
        let mut x = vec![uniform; dim];

        for iteration in 0..config.max_iter {
            let mut next = vec![(1.0 - config.damping) * uniform; dim];
            for (row_idx, row) in rows.iter().enumerate() {
                for &(col, w) in row {
                    next[col] += config.damping * w * x[row_idx];
                }
            }

            let err: f64 = x.iter().zip(next.iter()).map(|(a, b)| (a - b).abs()).sum();
            x = next;
            if err < config.tol {
                debug!("multiplex pagerank converged after {iteration} iterations");
                break;
            }
        }

        let mut aggregated = vec![0.0; n];
        for layer_idx in 0..l {
            for node_idx in 0..n {
                aggregated[node_idx] += x[slot(layer_idx, node_idx)];
            }
        }
        let total: f64 = aggregated.iter().sum();
        if total > 0.0 {
            for value in &mut aggregated {
                *value /= total;
            }
        }
        aggregated
    }

    /// Versatility, participation coefficient, and aggregate centrality for
    /// one universe node.
    pub fn compute_node_analysis(&self, node_id: &str) -> NodeMultiplexAnalysis {
        NodeMultiplexAnalysis {
            versatility: self.compute_versatility(node_id),
            participation: self.compute_participation_coefficient(node_id),
            aggregate_centrality: self.compute_multiplex_centrality(
                node_id,
                AggregationMethod::Aggregate,
                None,
            ),
        }
    }

    /// Universe nodes present in at least `min_layers` layers, in universe
    /// iteration order, paired with their versatility score.
    pub fn find_versatile_nodes(&self, min_layers: usize) -> Vec<(String, f64)> {
        let layer_count = self.layers.layer_count();
        self.layers
            .universe_ids()
            .filter_map(|id| {
                let present = self.layers.layers().filter(|(_, g)| g.contains_node(id)).count();
                if present >= min_layers {
                    let versatility = if layer_count == 0 { 0.0 } else { present as f64 / layer_count as f64 };
                    Some((id.to_string(), versatility))
                } else {
                    None
                }
            })
            .collect()
    }

    /// Pearson correlation matrix of per-layer degree-centrality vectors
    /// over the universe (absent nodes contribute `0`). Returns the identity
    /// for `n <= 1`.
    pub fn compute_layer_correlation(&self) -> Result<Vec<Vec<f64>>> {
        let layer_names: Vec<&str> = self.layers.layer_names().collect();
        let l = layer_names.len();
        let n = self.layers.universe_size();
        if l == 0 {
            return Ok(Vec::new());
        }
        if n <= 1 {
            return Ok((0..l)
                .map(|i| (0..l).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
                .collect());
        }

        let universe: Vec<&str> = self.layers.universe_ids().collect();
        let mut vectors: Vec<Vec<f64>> = Vec::with_capacity(l);
        for name in &layer_names {
            let graph = self.layers.layer(name)?;
            let deg_centrality = degree_centrality(graph);
            let vector: Vec<f64> = universe
                .iter()
                .map(|id| {
                    graph
                        .node_index(id)
                        .map(|idx| deg_centrality[idx.index()])
                        .unwrap_or(0.0)
                })
                .collect();
            vectors.push(vector);
        }

        Ok((0..l)
            .map(|i| (0..l).map(|j| pearson(&vectors[i], &vectors[j])).collect())
            .collect())
    }
}

fn pearson(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len() as f64;
    if n == 0.0 {
        return 0.0;
    }
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        let da = x - mean_a;
        let db = y - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }
    if var_a == 0.0 || var_b == 0.0 {
        return if var_a == 0.0 && var_b == 0.0 { 1.0 } else { 0.0 };
    }
    cov / (var_a.sqrt() * var_b.sqrt())
}

impl AggregationMethod {
    pub fn parse(tag: &str) -> Result<Self> {
        match tag {
            "aggregate" => Ok(Self::Aggregate),
            "max" => Ok(Self::Max),
            "harmonic" => Ok(Self::Harmonic),
            other => Err(AnalyticsError::InvalidInput {
                reason: format!("unknown aggregation method {other:?}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UndirectedGraph;

    fn two_layer_single_edge() -> MultiplexLayers {
        let l1 = UndirectedGraph::builder().add_edge("a", "b", 1.0).unwrap().build();
        let l2 = UndirectedGraph::builder().add_edge("a", "b", 1.0).unwrap().build();
        MultiplexLayers::builder().add_layer("l1", l1).add_layer("l2", l2).build()
    }

    #[test]
    fn versatility_is_one_when_present_everywhere() {
        let layers = two_layer_single_edge();
        let analyzer = MultiplexCentralityAnalyzer::new(&layers);
        assert_eq!(analyzer.compute_versatility("a"), 1.0);
        assert_eq!(analyzer.compute_versatility("missing"), 0.0);
    }

    #[test]
    fn participation_is_zero_with_single_layer_edges() {
        let l1 = UndirectedGraph::builder().add_edge("a", "b", 1.0).unwrap().build();
        let l2 = UndirectedGraph::builder().add_node("c").build();
        let layers = MultiplexLayers::builder().add_layer("l1", l1).add_layer("l2", l2).build();
        let analyzer = MultiplexCentralityAnalyzer::new(&layers);
        assert_eq!(analyzer.compute_participation_coefficient("a"), 0.0);
    }

    #[test]
    fn multiplex_pagerank_sums_to_one_and_is_symmetric_on_symmetric_input() {
        let layers = two_layer_single_edge();
        let analyzer = MultiplexCentralityAnalyzer::new(&layers);
        let config = MultiplexPageRankConfig::default();
        let pr = analyzer.compute_multiplex_pagerank(&config);
        let sum: f64 = pr.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!((pr[0] - pr[1]).abs() < 1e-6);
    }

    #[test]
    fn find_versatile_nodes_filters_by_layer_count_threshold() {
        let l1 = UndirectedGraph::builder().add_edge("a", "b", 1.0).unwrap().build();
        let l2 = UndirectedGraph::builder().add_node("a").build();
        let l3 = UndirectedGraph::builder().add_node("c").build();
        let layers = MultiplexLayers::builder()
            .add_layer("l1", l1)
            .add_layer("l2", l2)
            .add_layer("l3", l3)
            .build();
        let analyzer = MultiplexCentralityAnalyzer::new(&layers);

        let versatile = analyzer.find_versatile_nodes(2);
        assert_eq!(versatile, vec![("a".to_string(), 2.0 / 3.0)]);

        let present_anywhere = analyzer.find_versatile_nodes(1);
        assert_eq!(present_anywhere.len(), 3);
    }

    #[test]
    fn layer_correlation_of_identical_layers_is_one() {
        let layers = two_layer_single_edge();
        let analyzer = MultiplexCentralityAnalyzer::new(&layers);
        let corr = analyzer.compute_layer_correlation().unwrap();
        assert!((corr[0][1] - 1.0).abs() < 1e-6);
    }
}
