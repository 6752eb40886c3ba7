//! Institutional metrics over a directed graph: constraint dominance,
//! latent-subgraph cascades, path dependence, information asymmetry,
//! meta-stability, structural optionality, and endogenous risk.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use ahash::{AHashMap, AHashSet};
use log::info;
use rayon::prelude::*;

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::graph::{DirectedDegrees, DirectedGraph, DirectedNeighbors, Graph, NodeIndex, UndirectedDegrees};
use crate::primitives::centrality::{clustering_coefficients, closeness_from_distances};
use crate::primitives::components::weakly_connected_components;
use crate::primitives::cycles::simple_cycles;
use crate::primitives::paths::{
    bfs_distances_directed, descendants, nodes_at_distance, reachable_within, simple_paths,
};

/// The first-N truncations are fixed design parameters, not tunables; see
/// the module-level scenario notes for why they bound worst-case cost.
const CONSTRAINT_CANDIDATE_LIMIT: usize = 50;
const CONSTRAINT_PATH_CUTOFF: usize = 5;
const LATENT_SUBGRAPH_MIN_SIZE: usize = 2;
const LATENT_TRIGGER_LIMIT: usize = 5;
const CASCADE_MAX_WAVES: usize = 10;
const DEFAULT_CASCADE_THRESHOLD: f64 = 0.5;
const JUNCTION_HISTORY_LIMIT: usize = 10;
const JUNCTION_HISTORY_CUTOFF: usize = 3;
const ASYMMETRY_NODE_LIMIT: usize = 100;
const ASYMMETRY_PAIR_LIMIT: usize = 50;
const ASYMMETRY_GAP_THRESHOLD: f64 = 0.3;
const CYCLE_CAP: usize = 1000;

/// Result of [`InstitutionalMetricsAnalyzer::analyze_constraint_dominance`].
#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintDominanceResult {
    pub scores: AHashMap<String, f64>,
    pub hierarchy: Vec<(String, String)>,
    pub dominant_set: Vec<String>,
    pub switch_likelihood: f64,
    pub total_paths: usize,
}

/// One detected latent subgraph and its cascade simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct LatentSubgraph {
    pub nodes: Vec<String>,
    pub trigger_nodes: Vec<String>,
    pub activation_threshold: f64,
    pub cascade_activated: Vec<String>,
}

/// Result of [`InstitutionalMetricsAnalyzer::detect_latent_subgraphs`].
#[derive(Clone, Debug, PartialEq)]
pub struct LatentSubgraphResult {
    pub main_component_size: usize,
    pub subgraphs: Vec<LatentSubgraph>,
}

/// Result of [`InstitutionalMetricsAnalyzer::analyze_path_dependence`].
#[derive(Clone, Debug, PartialEq)]
pub struct PathDependenceResult {
    pub critical_junctions: Vec<String>,
    pub single_path_dependent_nodes: Vec<String>,
    pub alternative_histories: usize,
    pub lock_in_score: f64,
}

/// Result of [`InstitutionalMetricsAnalyzer::measure_information_asymmetry`].
#[derive(Clone, Debug, PartialEq)]
pub struct InformationAsymmetryResult {
    pub access: AHashMap<String, f64>,
    pub asymmetric_pairs: Vec<(String, String, f64)>,
    pub hubs: Vec<String>,
    pub periphery: Vec<String>,
    pub gini: f64,
}

/// Analyzer over a single directed graph `D`. Layering is accepted by the
/// constructor for interface symmetry with the other analyzers but unused
/// by any current metric.
pub struct InstitutionalMetricsAnalyzer<'g> {
    graph: &'g DirectedGraph,
}

impl<'g> InstitutionalMetricsAnalyzer<'g> {
    pub fn new(graph: &'g DirectedGraph) -> Self {
        Self { graph }
    }

    /// Frequency with which each node in `constraint_nodes` lies on a
    /// bounded-length path between a "decision" node (out-degree >
    /// in-degree) and an "outcome" node (in-degree > out-degree).
    pub fn analyze_constraint_dominance(
        &self,
        constraint_nodes: &[String],
        token: &CancellationToken,
    ) -> Result<ConstraintDominanceResult> {
        let start = Instant::now();
        let decisions: Vec<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|&v| self.graph.out_degree(v) > self.graph.in_degree(v))
            .take(CONSTRAINT_CANDIDATE_LIMIT)
            .collect();
        let outcomes: Vec<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|&v| self.graph.in_degree(v) > self.graph.out_degree(v))
            .take(CONSTRAINT_CANDIDATE_LIMIT)
            .collect();

        let constraint_indices: Vec<NodeIndex> = constraint_nodes
            .iter()
            .filter_map(|id| self.graph.node_index(id))
            .collect();

        let mut raw_scores: AHashMap<NodeIndex, usize> = AHashMap::default();
        let mut total_paths = 0usize;

        for &d in &decisions {
            for &o in &outcomes {
                if d == o {
                    continue;
                }
                let paths = simple_paths(self.graph, d, o, CONSTRAINT_PATH_CUTOFF, token)?;
                for path in &paths {
                    total_paths += 1;
                    let on_path: AHashSet<NodeIndex> = path.iter().copied().collect();
                    for &c in &constraint_indices {
                        if on_path.contains(&c) {
                            *raw_scores.entry(c).or_insert(0) += 1;
                        }
                    }
                }
                token.check()?;
            }
        }

        let mut scores: AHashMap<String, f64> = AHashMap::default();
        for &c in &constraint_indices {
            let raw = *raw_scores.get(&c).unwrap_or(&0) as f64;
            let normalized = if total_paths > 0 { raw / total_paths as f64 } else { 0.0 };
            scores.insert(self.graph.node_id(c).to_string(), normalized);
        }
        // Constraint nodes not present in the graph still get a reported
        // score of 0, so every requested node appears in the result.
        for id in constraint_nodes {
            scores.entry(id.clone()).or_insert(0.0);
        }

        let mut ranked: Vec<(String, f64)> = scores.iter().map(|(k, v)| (k.clone(), *v)).collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut hierarchy = Vec::new();
        for window in ranked.windows(2) {
            if window[1].1 < window[0].1 {
                hierarchy.push((window[0].0.clone(), window[1].0.clone()));
            }
        }

        let values: Vec<f64> = ranked.iter().map(|(_, v)| *v).collect();
        let dominant_threshold = percentile(&sorted(&values), 80.0);
        let dominant_set: Vec<String> = ranked
            .iter()
            .filter(|(_, v)| *v >= dominant_threshold)
            .map(|(k, _)| k.clone())
            .collect();

        let switch_likelihood = if values.len() <= 1 {
            0.0
        } else {
            let max = values.iter().cloned().fold(0.0_f64, f64::max);
            if max <= 0.0 {
                0.0
            } else {
                let median = percentile(&sorted(&values), 50.0);
                (1.0 - (max - median) / max).clamp(0.0, 1.0)
            }
        };

        info!(
            "constraint dominance over {} decisions x {} outcomes found {total_paths} paths in {:?}",
            decisions.len(),
            outcomes.len(),
            start.elapsed()
        );

        Ok(ConstraintDominanceResult {
            scores,
            hierarchy,
            dominant_set,
            switch_likelihood,
            total_paths,
        })
    }

    /// Weakly-connected components other than the largest ("main") that
    /// exceed the minimum latent-subgraph size, with trigger nodes,
    /// activation threshold, and a cascade simulation from the first few
    /// triggers.
    pub fn detect_latent_subgraphs(&self, cascade_threshold: Option<f64>) -> LatentSubgraphResult {
        let theta = cascade_threshold.unwrap_or(DEFAULT_CASCADE_THRESHOLD);
        let mut components = weakly_connected_components(self.graph);
        if components.is_empty() {
            return LatentSubgraphResult {
                main_component_size: 0,
                subgraphs: Vec::new(),
            };
        }

        let main_idx = components
            .iter()
            .enumerate()
            .max_by_key(|(_, c)| c.len())
            .map(|(i, _)| i)
            .unwrap();
        let main: AHashSet<NodeIndex> = components[main_idx].iter().copied().collect();
        let main_size = main.len();
        components.remove(main_idx);

        let mut subgraphs = Vec::new();
        for component in components {
            if component.len() <= LATENT_SUBGRAPH_MIN_SIZE {
                continue;
            }
            let members: AHashSet<NodeIndex> = component.iter().copied().collect();

            let triggers: Vec<NodeIndex> = component
                .iter()
                .copied()
                .filter(|&v| {
                    self.graph.out_neighbors(v).iter().any(|n| main.contains(n))
                        || self.graph.in_neighbors(v).iter().any(|n| main.contains(n))
                })
                .collect();

            let mut main_to_subgraph_weights = Vec::new();
            for &v in &main {
                for &u in self.graph.out_neighbors(v) {
                    if members.contains(&u) {
                        if let Some(w) = self.graph.weight(v, u) {
                            main_to_subgraph_weights.push(w);
                        }
                    }
                }
            }
            let activation_threshold = if main_to_subgraph_weights.is_empty() {
                1.0
            } else {
                1.0 - mean(&main_to_subgraph_weights)
            };

            let seed_triggers: Vec<NodeIndex> =
                triggers.iter().copied().take(LATENT_TRIGGER_LIMIT).collect();
            let activated = self.simulate_cascade(&seed_triggers, theta);

            subgraphs.push(LatentSubgraph {
                nodes: component.iter().map(|&v| self.graph.node_id(v).to_string()).collect(),
                trigger_nodes: triggers.iter().map(|&v| self.graph.node_id(v).to_string()).collect(),
                activation_threshold,
                cascade_activated: if activated.len() > 1 {
                    activated.into_iter().map(|v| self.graph.node_id(v).to_string()).collect()
                } else {
                    Vec::new()
                },
            });
        }

        LatentSubgraphResult {
            main_component_size: main_size,
            subgraphs,
        }
    }

    /// BFS-wave activation cascade: a successor activates once the fraction
    /// of its activated predecessors reaches `theta`. Runs for at most
    /// [`CASCADE_MAX_WAVES`] waves.
    fn simulate_cascade(&self, seeds: &[NodeIndex], theta: f64) -> AHashSet<NodeIndex> {
        let mut activated: AHashSet<NodeIndex> = seeds.iter().copied().collect();
        let mut frontier: Vec<NodeIndex> = seeds.to_vec();

        for _ in 0..CASCADE_MAX_WAVES {
            if frontier.is_empty() {
                break;
            }
            let mut candidates: AHashSet<NodeIndex> = AHashSet::default();
            for &node in &frontier {
                for &successor in self.graph.out_neighbors(node) {
                    if !activated.contains(&successor) {
                        candidates.insert(successor);
                    }
                }
            }

            let mut newly_activated = Vec::new();
            for &candidate in &candidates {
                let in_deg = self.graph.in_degree(candidate);
                if in_deg == 0 {
                    continue;
                }
                let activated_predecessors = self
                    .graph
                    .in_neighbors(candidate)
                    .iter()
                    .filter(|p| activated.contains(p))
                    .count();
                if activated_predecessors as f64 / in_deg as f64 >= theta {
                    newly_activated.push(candidate);
                }
            }

            if newly_activated.is_empty() {
                break;
            }
            for &node in &newly_activated {
                activated.insert(node);
            }
            frontier = newly_activated;
        }

        activated
    }

    /// Nodes whose removal would change downstream reachability
    /// (out-degree >= 2), the descendants reachable via exactly one such
    /// junction, and a composite lock-in score.
    pub fn analyze_path_dependence(&self) -> PathDependenceResult {
        let junctions: Vec<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|&v| self.graph.out_degree(v) >= 2)
            .collect();

        // Each junction's reachability is independent of every other
        // junction's, so this is computed across a rayon thread pool and
        // merged into `reached_via` afterward; the merge is a set union per
        // node, which is commutative and therefore unaffected by whatever
        // order the parallel results arrive in.
        let per_junction: Vec<(NodeIndex, HashSet<NodeIndex>)> = junctions
            .par_iter()
            .flat_map(|&junction| {
                self.graph
                    .out_neighbors(junction)
                    .iter()
                    .map(|&successor| {
                        let mut reached = descendants(self.graph, successor);
                        reached.insert(successor);
                        (junction, reached)
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        let mut reached_via: HashMap<NodeIndex, HashSet<NodeIndex>> = HashMap::new();
        for (junction, reached) in per_junction {
            for node in reached {
                reached_via.entry(node).or_default().insert(junction);
            }
        }

        let single_path_dependent: Vec<NodeIndex> = reached_via
            .iter()
            .filter(|(_, via)| via.len() == 1)
            .map(|(&node, _)| node)
            .collect();

        let alternative_histories: usize = junctions
            .iter()
            .take(JUNCTION_HISTORY_LIMIT)
            .map(|&j| {
                let reachable = reachable_within(self.graph, j, JUNCTION_HISTORY_CUTOFF);
                reachable.saturating_sub(1)
            })
            .sum();

        let n = self.graph.node_count();
        let lock_in_score = if n > 0 {
            single_path_dependent.len() as f64 / n as f64
        } else {
            0.0
        };

        PathDependenceResult {
            critical_junctions: junctions.iter().map(|&v| self.graph.node_id(v).to_string()).collect(),
            single_path_dependent_nodes: single_path_dependent
                .iter()
                .map(|&v| self.graph.node_id(v).to_string())
                .collect(),
            alternative_histories,
            lock_in_score,
        }
    }

    /// Access asymmetry via directed closeness: average of in-closeness and
    /// out-closeness, asymmetric pairs, hub/periphery classification, and
    /// the Gini coefficient of the access distribution.
    pub fn measure_information_asymmetry(&self) -> InformationAsymmetryResult {
        let n = self.graph.node_count();
        let access: Vec<f64> = self
            .graph
            .node_indices()
            .map(|v| {
                let out_distances = bfs_distances_directed(self.graph, v, false);
                let in_distances = bfs_distances_directed(self.graph, v, true);
                let out_closeness = closeness_from_distances(&out_distances, n);
                let in_closeness = closeness_from_distances(&in_distances, n);
                (out_closeness + in_closeness) / 2.0
            })
            .collect();

        let access_by_id: AHashMap<String, f64> = self
            .graph
            .node_indices()
            .map(|v| (self.graph.node_id(v).to_string(), access[v.index()]))
            .collect();

        let sampled: Vec<NodeIndex> = self.graph.node_indices().take(ASYMMETRY_NODE_LIMIT).collect();
        let mut pairs = Vec::new();
        for i in 0..sampled.len() {
            for j in (i + 1)..sampled.len() {
                let (u, v) = (sampled[i], sampled[j]);
                let gap = (access[u.index()] - access[v.index()]).abs();
                if gap > ASYMMETRY_GAP_THRESHOLD {
                    pairs.push((
                        self.graph.node_id(u).to_string(),
                        self.graph.node_id(v).to_string(),
                        gap,
                    ));
                }
            }
        }
        pairs.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
        pairs.truncate(ASYMMETRY_PAIR_LIMIT);

        let sorted_access = sorted(&access);
        let hub_threshold = percentile(&sorted_access, 90.0);
        let periphery_threshold = percentile(&sorted_access, 10.0);
        let hubs: Vec<String> = self
            .graph
            .node_indices()
            .filter(|v| access[v.index()] >= hub_threshold)
            .map(|v| self.graph.node_id(v).to_string())
            .collect();
        let periphery: Vec<String> = self
            .graph
            .node_indices()
            .filter(|v| access[v.index()] <= periphery_threshold)
            .map(|v| self.graph.node_id(v).to_string())
            .collect();

        InformationAsymmetryResult {
            access: access_by_id,
            asymmetric_pairs: pairs,
            hubs,
            periphery,
            gini: gini_coefficient(&sorted_access),
        }
    }

    /// A composite of degree-distribution entropy (over `D`'s total
    /// in+out degree) and clustering-coefficient dispersion (over the
    /// undirected projection of `D`). `0` for `n <= 1`.
    pub fn compute_meta_stability(&self) -> f64 {
        let n = self.graph.node_count();
        if n <= 1 {
            return 0.0;
        }

        let degrees: Vec<usize> = self
            .graph
            .node_indices()
            .map(|v| self.graph.in_degree(v) + self.graph.out_degree(v))
            .collect();
        let mut histogram: HashMap<usize, usize> = HashMap::new();
        for &d in &degrees {
            *histogram.entry(d).or_insert(0) += 1;
        }
        let entropy: f64 = histogram
            .values()
            .map(|&count| {
                let p = count as f64 / n as f64;
                -p * p.ln()
            })
            .sum();
        let normalized_entropy = entropy / (n as f64).ln();

        let projection = self.graph.to_undirected();
        let clustering = clustering_coefficients(&projection);
        let clustering_std = population_std(&clustering);

        ((normalized_entropy + clustering_std) / 2.0).clamp(0.0, 1.0)
    }

    /// `opt(v) = (3*r1 + 2*r2 + r3) / (6 * (n - 1))` where `rk` is the count
    /// of nodes at exact forward distance `k`. `0` for `n <= 1`.
    pub fn analyze_structural_optionality(&self) -> AHashMap<String, f64> {
        let n = self.graph.node_count();
        self.graph
            .node_indices()
            .map(|v| {
                let score = if n <= 1 {
                    0.0
                } else {
                    let r1 = nodes_at_distance(self.graph, v, 1).len() as f64;
                    let r2 = nodes_at_distance(self.graph, v, 2).len() as f64;
                    let r3 = nodes_at_distance(self.graph, v, 3).len() as f64;
                    (3.0 * r1 + 2.0 * r2 + r3) / (6.0 * (n - 1) as f64)
                };
                (self.graph.node_id(v).to_string(), score)
            })
            .collect()
    }

    /// Cycle-participation and in-degree concentration, combined
    /// `0.7 * participation_share + 0.3 * in_degree_share`.
    pub fn detect_endogenous_risk(&self, token: &CancellationToken) -> Result<AHashMap<String, f64>> {
        let start = Instant::now();
        let cycles = simple_cycles(self.graph, CYCLE_CAP, token)?;
        let mut participation: AHashMap<NodeIndex, usize> = AHashMap::default();
        for cycle in &cycles {
            for &node in cycle {
                *participation.entry(node).or_insert(0) += 1;
            }
        }
        let max_participation = participation.values().copied().max().unwrap_or(1).max(1);
        let max_in_degree = self
            .graph
            .node_indices()
            .map(|v| self.graph.in_degree(v))
            .max()
            .unwrap_or(1)
            .max(1);

        info!(
            "endogenous risk found {} cycles (cap {CYCLE_CAP}) in {:?}",
            cycles.len(),
            start.elapsed()
        );

        Ok(self
            .graph
            .node_indices()
            .map(|v| {
                let part = *participation.get(&v).unwrap_or(&0) as f64;
                let in_deg = self.graph.in_degree(v) as f64;
                let risk = 0.7 * (part / max_participation as f64) + 0.3 * (in_deg / max_in_degree as f64);
                (self.graph.node_id(v).to_string(), risk)
            })
            .collect())
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    out
}

/// Linear-interpolation percentile over an already-sorted slice, matching
/// `numpy.percentile`'s default.
fn percentile(sorted_values: &[f64], p: f64) -> f64 {
    if sorted_values.is_empty() {
        return 0.0;
    }
    if sorted_values.len() == 1 {
        return sorted_values[0];
    }
    let rank = (p / 100.0) * (sorted_values.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted_values[lower];
    }
    let frac = rank - lower as f64;
    sorted_values[lower] + (sorted_values[upper] - sorted_values[lower]) * frac
}

/// `G = sum((2i - n + 1) * s_i) / (n * sum(s_i))` over 0-based `i`, clamped
/// to `[0, 1]`.
fn gini_coefficient(sorted_values: &[f64]) -> f64 {
    let n = sorted_values.len();
    if n == 0 {
        return 0.0;
    }
    let total: f64 = sorted_values.iter().sum();
    if total == 0.0 {
        return 0.0;
    }
    let numerator: f64 = sorted_values
        .iter()
        .enumerate()
        .map(|(i, s)| (2.0 * i as f64 - n as f64 + 1.0) * s)
        .sum();
    (numerator / (n as f64 * total)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn dag() -> DirectedGraph {
        DirectedGraph::builder()
            .add_edge("a", "b", 1.0)
            .unwrap()
            .add_edge("b", "c", 1.0)
            .unwrap()
            .add_edge("a", "c", 1.0)
            .unwrap()
            .build()
    }

    #[test]
    fn dag_has_no_cycle_participation_in_endogenous_risk() {
        // A DAG contributes no cycle-participation term; whatever risk
        // remains comes entirely from the in-degree-concentration term.
        let graph = dag();
        let analyzer = InstitutionalMetricsAnalyzer::new(&graph);
        let risk = analyzer.detect_endogenous_risk(&CancellationToken::none()).unwrap();
        let a = graph.node_index("a").unwrap();
        assert_eq!(risk[graph.node_id(a)], 0.0);
    }

    #[test]
    fn dag_lock_in_score_matches_scenario() {
        let graph = dag();
        let analyzer = InstitutionalMetricsAnalyzer::new(&graph);
        let result = analyzer.analyze_path_dependence();
        assert_eq!(result.critical_junctions, vec!["a".to_string()]);
        assert!((result.lock_in_score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn hub_and_spoke_has_positive_gini_and_hub() {
        let mut builder = DirectedGraph::builder();
        for i in 0..10 {
            builder.add_edge("h", &format!("leaf{i}"), 1.0).unwrap();
        }
        let graph = builder.build();
        let analyzer = InstitutionalMetricsAnalyzer::new(&graph);
        let result = analyzer.measure_information_asymmetry();
        assert!(result.gini > 0.0);
        assert!(result.hubs.contains(&"h".to_string()));
    }

    #[test]
    fn constraint_dominance_on_hub_and_spoke() {
        let mut builder = DirectedGraph::builder();
        for i in 0..3 {
            builder.add_edge("h", &format!("leaf{i}"), 1.0).unwrap();
        }
        let graph = builder.build();
        let analyzer = InstitutionalMetricsAnalyzer::new(&graph);
        let result = analyzer
            .analyze_constraint_dominance(&["h".to_string()], &CancellationToken::none())
            .unwrap();
        assert_eq!(result.scores.get("h").copied().unwrap_or(0.0), 1.0);
    }

    #[test]
    fn switch_likelihood_is_zero_for_a_single_constraint_node() {
        let mut builder = DirectedGraph::builder();
        for i in 0..3 {
            builder.add_edge("h", &format!("leaf{i}"), 1.0).unwrap();
        }
        let graph = builder.build();
        let analyzer = InstitutionalMetricsAnalyzer::new(&graph);
        let result = analyzer
            .analyze_constraint_dominance(&["h".to_string()], &CancellationToken::none())
            .unwrap();
        assert_eq!(result.switch_likelihood, 0.0);
    }

    #[test]
    fn meta_stability_is_in_unit_range() {
        let graph = dag();
        let analyzer = InstitutionalMetricsAnalyzer::new(&graph);
        let value = analyzer.compute_meta_stability();
        assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn meta_stability_degree_entropy_uses_total_degree_on_reciprocated_edge() {
        let mut builder = DirectedGraph::builder();
        builder.add_edge("a", "b", 1.0).unwrap();
        builder.add_edge("b", "a", 1.0).unwrap();
        builder.add_edge("b", "c", 1.0).unwrap();
        let graph = builder.build();
        let analyzer = InstitutionalMetricsAnalyzer::new(&graph);
        let value = analyzer.compute_meta_stability();
        assert!((0.0..=1.0).contains(&value));
    }
}
