//! End-to-end tests for signed-network structural balance, covering the
//! literal scenarios from the component specification.

use multiplex_analytics::prelude::*;

#[test]
fn triangle_of_three_positive_edges_is_balanced() {
    let graph = SignedGraph::builder()
        .add_edge("a", "b", 1, 1.0)
        .unwrap()
        .add_edge("b", "c", 1, 1.0)
        .unwrap()
        .add_edge("a", "c", 1, 1.0)
        .unwrap()
        .build();

    let analyzer = SignedBalanceAnalyzer::new(&graph);
    let result = analyzer
        .compute_structural_balance(&CancellationToken::none())
        .unwrap();

    assert!(result.is_balanced);
    assert_eq!(result.frustration_index, 0);
}

#[test]
fn triangle_with_one_negative_edge_frustrates_exactly_that_edge() {
    let graph = SignedGraph::builder()
        .add_edge("a", "b", 1, 1.0)
        .unwrap()
        .add_edge("b", "c", 1, 1.0)
        .unwrap()
        .add_edge("a", "c", -1, 1.0)
        .unwrap()
        .build();

    let analyzer = SignedBalanceAnalyzer::new(&graph);
    let result = analyzer
        .compute_structural_balance(&CancellationToken::none())
        .unwrap();

    assert_eq!(result.frustration_index, 1);
    assert_eq!(result.frustrated_edges, vec![("a".to_string(), "c".to_string())]);
}

#[test]
fn two_disjoint_positive_triangles_have_zero_frustration_and_full_balance_ratio() {
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
    let result = analyzer
        .compute_structural_balance(&CancellationToken::none())
        .unwrap();

    assert_eq!(result.frustration_index, 0);
    assert_eq!(result.balance_ratio, 1.0);
    // Every node lands in exactly one of the two clusters.
    assert_eq!(result.positive_cluster.len() + result.negative_cluster.len(), 6);
}

#[test]
fn flipping_an_edge_sign_changes_frustration_by_at_most_one() {
    let positive = SignedGraph::builder()
        .add_edge("a", "b", 1, 1.0)
        .unwrap()
        .add_edge("b", "c", 1, 1.0)
        .unwrap()
        .add_edge("a", "c", 1, 1.0)
        .unwrap()
        .build();
    let flipped = SignedGraph::builder()
        .add_edge("a", "b", 1, 1.0)
        .unwrap()
        .add_edge("b", "c", 1, 1.0)
        .unwrap()
        .add_edge("a", "c", -1, 1.0)
        .unwrap()
        .build();

    let before = SignedBalanceAnalyzer::new(&positive)
        .frustration_index(&CancellationToken::none())
        .unwrap();
    let after = SignedBalanceAnalyzer::new(&flipped)
        .frustration_index(&CancellationToken::none())
        .unwrap();

    let delta = (after as i64 - before as i64).abs();
    assert!(delta <= 1);
}

#[test]
fn cancellation_during_exact_enumeration_fails_the_call() {
    let mut builder = SignedGraph::builder();
    for i in 0..10 {
        builder.add_edge(&format!("n{i}"), &format!("n{}", i + 1), 1, 1.0).unwrap();
    }
    let graph = builder.build();
    let token = CancellationToken::new();
    token.cancel();

    let analyzer = SignedBalanceAnalyzer::new(&graph);
    let result = analyzer.frustration_index(&token);
    assert_eq!(result, Err(AnalyticsError::Cancelled));
}
