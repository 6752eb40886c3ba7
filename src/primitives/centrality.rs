//! Classical single-graph centrality measures, computed the way `networkx`
//! defines them (unweighted BFS for closeness/betweenness, power iteration
//! for eigenvector/PageRank) since the original implementation this crate
//! supersedes is built directly on those definitions.

use log::{debug, warn};

use crate::graph::undirected::UndirectedGraph;
use crate::graph::{Graph, NodeIndex, UndirectedDegrees, UndirectedNeighbors};
use crate::primitives::paths::bfs_distances_undirected;

/// Eigenvector-centrality power iteration is capped at this many rounds;
/// non-convergence falls back to an all-zero vector.
const EIGENVECTOR_MAX_ITER: usize = 1000;
const EIGENVECTOR_TOL: f64 = 1e-6;

/// PageRank power iteration defaults, matching `networkx.pagerank`.
const PAGERANK_MAX_ITER: usize = 100;
const PAGERANK_TOL: f64 = 1e-6;
const PAGERANK_DAMPING: f64 = 0.85;

/// `degree(v) / (n - 1)`, `0` for `n <= 1`.
pub fn degree_centrality(graph: &UndirectedGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return vec![0.0; n];
    }
    graph
        .node_indices()
        .map(|v| graph.degree(v) as f64 / (n - 1) as f64)
        .collect()
}

/// Closeness centrality with the Wasserman-Faust improvement for
/// disconnected graphs, matching `networkx.closeness_centrality`'s default.
pub fn closeness_centrality(graph: &UndirectedGraph) -> Vec<f64> {
    let n = graph.node_count();
    let mut result = vec![0.0; n];
    if n <= 1 {
        return result;
    }

    for v in graph.node_indices() {
        let distances = bfs_distances_undirected(graph, v);
        result[v.index()] = closeness_from_distances(&distances, n);
    }
    result
}

/// The Wasserman-Faust closeness value for one node given its BFS distance
/// vector (as produced by [`bfs_distances_undirected`] or
/// [`crate::primitives::paths::bfs_distances_directed`]) and the total node
/// count `n`.
pub fn closeness_from_distances(distances: &[Option<usize>], n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let reachable: Vec<usize> = distances.iter().filter_map(|d| *d).collect();
    let total: usize = reachable.iter().sum();
    let reached = reachable.len();
    if total == 0 {
        return 0.0;
    }
    let raw = (reached - 1) as f64 / total as f64;
    let wf = (reached - 1) as f64 / (n - 1) as f64;
    raw * wf
}

/// Brandes' algorithm for unweighted betweenness centrality, normalized by
/// `2 / ((n - 1) * (n - 2))` as `networkx` does for undirected graphs.
pub fn betweenness_centrality(graph: &UndirectedGraph) -> Vec<f64> {
    let n = graph.node_count();
    let mut betweenness = vec![0.0_f64; n];
    if n <= 2 {
        return betweenness;
    }

    for s in graph.node_indices() {
        let mut stack = Vec::new();
        let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
        let mut sigma = vec![0.0_f64; n];
        let mut dist = vec![-1_i64; n];
        sigma[s.index()] = 1.0;
        dist[s.index()] = 0;

        let mut queue = std::collections::VecDeque::new();
        queue.push_back(s);
        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for &w in graph.neighbors(v) {
                if dist[w.index()] < 0 {
                    dist[w.index()] = dist[v.index()] + 1;
                    queue.push_back(w);
                }
                if dist[w.index()] == dist[v.index()] + 1 {
                    sigma[w.index()] += sigma[v.index()];
                    predecessors[w.index()].push(v);
                }
            }
        }

        let mut delta = vec![0.0_f64; n];
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w.index()] {
                delta[v.index()] += (sigma[v.index()] / sigma[w.index()]) * (1.0 + delta[w.index()]);
            }
            if w != s {
                betweenness[w.index()] += delta[w.index()];
            }
        }
    }

    let scale = 2.0 / ((n - 1) as f64 * (n - 2) as f64);
    for value in &mut betweenness {
        *value *= scale;
    }
    betweenness
}

/// Power-iteration eigenvector centrality. Returns the zero vector if the
/// iteration does not converge within [`EIGENVECTOR_MAX_ITER`] rounds.
pub fn eigenvector_centrality(graph: &UndirectedGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }

    let mut x = vec![1.0 / (n as f64).sqrt(); n];

    for iteration in 0..EIGENVECTOR_MAX_ITER {
        let mut next = vec![0.0; n];
        for v in graph.node_indices() {
            for &u in graph.neighbors(v) {
                next[v.index()] += x[u.index()];
            }
        }
        let norm: f64 = next.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm == 0.0 {
            warn!("eigenvector centrality hit a zero vector at iteration {iteration}");
            return vec![0.0; n];
        }
        for value in &mut next {
            *value /= norm;
        }

        let diff: f64 = x.iter().zip(next.iter()).map(|(a, b)| (a - b).abs()).sum();
        x = next;
        if diff < n as f64 * EIGENVECTOR_TOL {
            debug!("eigenvector centrality converged after {iteration} iterations");
            return x;
        }
    }

    warn!("eigenvector centrality failed to converge within {EIGENVECTOR_MAX_ITER} iterations");
    vec![0.0; n]
}

/// PageRank over an undirected graph, treating each edge as reciprocal
/// directed edges. Falls back to the uniform distribution `1/n` if power
/// iteration does not converge within [`PAGERANK_MAX_ITER`] rounds.
pub fn pagerank(graph: &UndirectedGraph) -> Vec<f64> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    let uniform = 1.0 / n as f64;

    let degrees: Vec<usize> = graph.node_indices().map(|v| graph.degree(v)).collect();
    let mut x = vec![uniform; n];

    for iteration in 0..PAGERANK_MAX_ITER {
        let dangling_mass: f64 = PAGERANK_DAMPING
            * graph
                .node_indices()
                .filter(|v| degrees[v.index()] == 0)
                .map(|v| x[v.index()])
                .sum::<f64>();

        let mut next = vec![dangling_mass * uniform + (1.0 - PAGERANK_DAMPING) * uniform; n];
        for v in graph.node_indices() {
            if degrees[v.index()] == 0 {
                continue;
            }
            let share = PAGERANK_DAMPING * x[v.index()] / degrees[v.index()] as f64;
            for &u in graph.neighbors(v) {
                next[u.index()] += share;
            }
        }

        let err: f64 = x.iter().zip(next.iter()).map(|(a, b)| (a - b).abs()).sum();
        x = next;
        if err < n as f64 * PAGERANK_TOL {
            debug!("pagerank converged after {iteration} iterations");
            return x;
        }
    }

    warn!("pagerank failed to converge within {PAGERANK_MAX_ITER} iterations, using uniform fallback");
    vec![uniform; n]
}

/// Local clustering coefficient per node: the fraction of a node's
/// neighbor pairs that are themselves connected.
pub fn clustering_coefficients(graph: &UndirectedGraph) -> Vec<f64> {
    graph
        .node_indices()
        .map(|v| {
            let neighbors = graph.neighbors(v);
            let k = neighbors.len();
            if k < 2 {
                return 0.0;
            }
            let mut links = 0usize;
            for i in 0..neighbors.len() {
                for j in (i + 1)..neighbors.len() {
                    if graph.has_edge(neighbors[i], neighbors[j]) {
                        links += 1;
                    }
                }
            }
            let possible = k * (k - 1) / 2;
            links as f64 / possible as f64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::UndirectedGraph;

    fn triangle() -> UndirectedGraph {
        UndirectedGraph::builder()
            .add_edge("a", "b", 1.0)
            .unwrap()
            .add_edge("b", "c", 1.0)
            .unwrap()
            .add_edge("a", "c", 1.0)
            .unwrap()
            .build()
    }

    #[test]
    fn degree_centrality_of_triangle_is_one() {
        let graph = triangle();
        for c in degree_centrality(&graph) {
            assert!((c - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn pagerank_of_triangle_is_uniform_and_sums_to_one() {
        let graph = triangle();
        let pr = pagerank(&graph);
        let sum: f64 = pr.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        for p in pr {
            assert!((p - 1.0 / 3.0).abs() < 1e-3);
        }
    }

    #[test]
    fn clustering_of_triangle_is_one() {
        let graph = triangle();
        for c in clustering_coefficients(&graph) {
            assert!((c - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn betweenness_of_path_graph_peaks_at_center() {
        let graph = UndirectedGraph::builder()
            .add_edge("a", "b", 1.0)
            .unwrap()
            .add_edge("b", "c", 1.0)
            .unwrap()
            .build();
        let b = graph.node_index("b").unwrap();
        let bc = betweenness_centrality(&graph);
        assert!(bc[b.index()] > 0.0);
    }
}
