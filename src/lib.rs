//! A multiplex signed-network analytics engine.
//!
//! Three analyzers operate over two graph shapes:
//!
//! - [`balance::SignedBalanceAnalyzer`] computes the frustration index,
//!   signed-triangle balance, and a spectral bipartition of a signed
//!   undirected graph.
//! - [`centrality_multiplex::MultiplexCentralityAnalyzer`] computes per-layer
//!   classical centralities, cross-layer aggregates, versatility,
//!   participation, and a supra-matrix multiplex PageRank.
//! - [`institutional::InstitutionalMetricsAnalyzer`] computes
//!   constraint-dominance, latent-subgraph cascades, path dependence,
//!   information asymmetry, meta-stability, structural optionality, and
//!   endogenous risk over a directed graph.
//!
//! All three are pull-based: build a graph once, hand it to an analyzer,
//! call query methods. No background work, no mutation of inputs.

pub mod balance;
pub mod cancel;
pub mod centrality_multiplex;
pub mod error;
pub mod graph;
pub mod input;
pub mod institutional;
pub mod primitives;

/// Re-exports of the types most callers need, so `use multiplex_analytics::prelude::*`
/// covers the common case.
pub mod prelude {
    pub use crate::balance::{SignedBalanceAnalyzer, StructuralBalanceResult, TriangleAnalysis};
    pub use crate::cancel::CancellationToken;
    pub use crate::centrality_multiplex::{
        AggregationMethod, LayerCentralities, MultiplexCentralityAnalyzer, MultiplexPageRankConfig,
        NodeMultiplexAnalysis,
    };
    pub use crate::error::{AnalyticsError, Result};
    pub use crate::graph::{DirectedGraph, MultiplexLayers, NodeIndex, SignedGraph, UndirectedGraph};
    pub use crate::input::{build_directed_graph, build_signed_graph, build_undirected_graph, EdgeRecord, SignValue};
    #[cfg(feature = "serde")]
    pub use crate::input::parse_edge_records_json;
    pub use crate::institutional::{
        ConstraintDominanceResult, InformationAsymmetryResult, InstitutionalMetricsAnalyzer,
        LatentSubgraphResult, PathDependenceResult,
    };
}
