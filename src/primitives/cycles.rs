use std::collections::HashSet;

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::graph::{DirectedGraph, DirectedNeighbors, NodeIndex};

/// Enumerates simple cycles of a directed graph, capped at the first
/// `cap` cycles found.
///
/// Traversal order: start nodes are tried in the graph's canonical
/// insertion order; from each start node, a DFS follows out-neighbors in
/// their insertion order, restricted to nodes with an index `>= start` (the
/// standard trick to avoid rediscovering the same cycle rooted at an
/// earlier node). Self-loops count as length-1 cycles. Honors `token`
/// between cycles.
pub fn simple_cycles(
    graph: &DirectedGraph,
    cap: usize,
    token: &CancellationToken,
) -> Result<Vec<Vec<NodeIndex>>> {
    let mut cycles = Vec::new();
    let n = graph.node_count();

    'outer: for start_idx in 0..n {
        let start = NodeIndex::new(start_idx);

        // Self-loop.
        if graph.out_neighbors(start).contains(&start) {
            cycles.push(vec![start]);
            token.check()?;
            if cycles.len() >= cap {
                break 'outer;
            }
        }

        let mut path = vec![start];
        let mut on_path: HashSet<NodeIndex> = HashSet::from([start]);
        let mut cursors = vec![0usize];

        while !path.is_empty() {
            let depth = path.len() - 1;
            let node = *path.last().unwrap();
            let neighbors = graph.out_neighbors(node);
            let cursor = cursors[depth];

            if cursor >= neighbors.len() {
                path.pop();
                on_path.remove(&node);
                cursors.pop();
                continue;
            }
            cursors[depth] += 1;
            let next = neighbors[cursor];

            if next.index() < start_idx {
                continue;
            }
            if next == start {
                if path.len() > 1 {
                    cycles.push(path.clone());
                    token.check()?;
                    if cycles.len() >= cap {
                        break 'outer;
                    }
                }
                continue;
            }
            if on_path.contains(&next) {
                continue;
            }
            path.push(next);
            on_path.insert(next);
            cursors.push(0);
        }
    }

    Ok(cycles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dag_has_no_cycles() {
        let graph = DirectedGraph::builder()
            .add_edge("a", "b", 1.0)
            .unwrap()
            .add_edge("b", "c", 1.0)
            .unwrap()
            .add_edge("a", "c", 1.0)
            .unwrap()
            .build();

        let cycles = simple_cycles(&graph, 1000, &CancellationToken::none()).unwrap();
        assert!(cycles.is_empty());
    }

    #[test]
    fn finds_triangle_cycle() {
        let graph = DirectedGraph::builder()
            .add_edge("a", "b", 1.0)
            .unwrap()
            .add_edge("b", "c", 1.0)
            .unwrap()
            .add_edge("c", "a", 1.0)
            .unwrap()
            .build();

        let cycles = simple_cycles(&graph, 1000, &CancellationToken::none()).unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 3);
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = DirectedGraph::builder().add_edge("a", "a", 1.0).unwrap().build();
        let cycles = simple_cycles(&graph, 1000, &CancellationToken::none()).unwrap();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 1);
    }
}
