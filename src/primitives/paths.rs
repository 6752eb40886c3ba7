//! Bounded path enumeration and reachability primitives.
//!
//! Simple-path and cycle enumeration both use an iterative DFS with an
//! explicit visited stack rather than recursion, so the call depth is
//! trivially bounded by the cutoff regardless of how deep the graph is.

use std::collections::{HashSet, VecDeque};

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::graph::undirected::UndirectedGraph;
use crate::graph::{DirectedGraph, DirectedNeighbors, NodeIndex, UndirectedNeighbors};

/// Shortest-path distances (in hops) from `source` to every reachable node
/// in an unweighted undirected graph, via BFS.
pub fn bfs_distances_undirected(graph: &UndirectedGraph, source: NodeIndex) -> Vec<Option<usize>> {
    let mut distances = vec![None; graph.node_count()];
    distances[source.index()] = Some(0);
    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        let d = distances[node.index()].unwrap();
        for &next in graph.neighbors(node) {
            if distances[next.index()].is_none() {
                distances[next.index()] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}

/// Shortest-path distances from `source` following directed edges.
/// `use_in_edges = true` follows in-neighbors instead of out-neighbors,
/// which is how in-closeness is computed (BFS over the reversed graph).
pub fn bfs_distances_directed(
    graph: &DirectedGraph,
    source: NodeIndex,
    use_in_edges: bool,
) -> Vec<Option<usize>> {
    let mut distances = vec![None; graph.node_count()];
    distances[source.index()] = Some(0);
    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        let d = distances[node.index()].unwrap();
        let neighbors: &[NodeIndex] = if use_in_edges {
            graph.in_neighbors(node)
        } else {
            graph.out_neighbors(node)
        };
        for &next in neighbors {
            if distances[next.index()].is_none() {
                distances[next.index()] = Some(d + 1);
                queue.push_back(next);
            }
        }
    }
    distances
}

/// The number of distinct nodes reachable from `source` by following
/// outgoing edges within `cutoff` hops, including `source` itself
/// (mirrors `len(nx.single_source_shortest_path(graph, source, cutoff))`).
pub fn reachable_within(graph: &DirectedGraph, source: NodeIndex, cutoff: usize) -> usize {
    let mut visited = HashSet::new();
    visited.insert(source);
    let mut frontier = vec![source];

    for _ in 0..cutoff {
        let mut next_frontier = Vec::new();
        for &node in &frontier {
            for &next in graph.out_neighbors(node) {
                if visited.insert(next) {
                    next_frontier.push(next);
                }
            }
        }
        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }
    visited.len()
}

/// All nodes at exactly distance `k` from `source` via outgoing edges.
pub fn nodes_at_distance(graph: &DirectedGraph, source: NodeIndex, k: usize) -> Vec<NodeIndex> {
    if k == 0 {
        return vec![source];
    }
    let mut visited = HashSet::new();
    visited.insert(source);
    let mut frontier = vec![source];

    for _ in 0..k {
        let mut next_frontier = Vec::new();
        for &node in &frontier {
            for &next in graph.out_neighbors(node) {
                if visited.insert(next) {
                    next_frontier.push(next);
                }
            }
        }
        frontier = next_frontier;
        if frontier.is_empty() {
            break;
        }
    }
    frontier
}

/// All nodes reachable from `source` by following outgoing edges,
/// excluding `source` itself even if it lies on a cycle back to itself.
pub fn descendants(graph: &DirectedGraph, source: NodeIndex) -> HashSet<NodeIndex> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back(source);
    visited.insert(source);

    while let Some(node) = queue.pop_front() {
        for &next in graph.out_neighbors(node) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    visited.remove(&source);
    visited
}

/// Enumerates every simple path from `source` to `target` with at most
/// `cutoff` edges, using an iterative DFS with an explicit frame stack.
/// Honors `token` between completed paths.
pub fn simple_paths(
    graph: &DirectedGraph,
    source: NodeIndex,
    target: NodeIndex,
    cutoff: usize,
    token: &CancellationToken,
) -> Result<Vec<Vec<NodeIndex>>> {
    let mut paths = Vec::new();
    if source == target {
        return Ok(paths);
    }

    // Each stack frame tracks the current path prefix and the cursor into
    // the next node's out-neighbor list still to explore.
    let mut path = vec![source];
    let mut on_path: HashSet<NodeIndex> = HashSet::from([source]);
    let mut cursors = vec![0usize];

    while !path.is_empty() {
        let depth = path.len() - 1;
        let node = *path.last().unwrap();
        let neighbors = graph.out_neighbors(node);
        let cursor = cursors[depth];

        if cursor >= neighbors.len() || depth >= cutoff {
            path.pop();
            on_path.remove(&node);
            cursors.pop();
            continue;
        }
        cursors[depth] += 1;
        let next = neighbors[cursor];

        if next == target {
            let mut found = path.clone();
            found.push(next);
            paths.push(found);
            token.check()?;
            continue;
        }
        if on_path.contains(&next) || depth + 1 >= cutoff {
            continue;
        }
        path.push(next);
        on_path.insert(next);
        cursors.push(0);
    }

    Ok(paths)
}
