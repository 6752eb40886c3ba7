use std::collections::VecDeque;

use crate::graph::{DirectedGraph, DirectedNeighbors, NodeIndex};

/// Weakly connected components of a directed graph: components found by
/// treating every edge as undirected, returned in the order their first
/// member was discovered (i.e. canonical node-insertion order of the
/// component's earliest node).
pub fn weakly_connected_components(graph: &DirectedGraph) -> Vec<Vec<NodeIndex>> {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for start in 0..n {
        let start = NodeIndex::new(start);
        if visited[start.index()] {
            continue;
        }

        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        visited[start.index()] = true;

        while let Some(node) = queue.pop_front() {
            component.push(node);
            for &next in graph.out_neighbors(node) {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    queue.push_back(next);
                }
            }
            for &prev in graph.in_neighbors(node) {
                if !visited[prev.index()] {
                    visited[prev.index()] = true;
                    queue.push_back(prev);
                }
            }
        }
        components.push(component);
    }

    components
}
