//! Graph construction from edge records: the one interface a front-end
//! collaborator is expected to call into this crate through.

use ahash::AHashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, Result};
use crate::graph::{DirectedGraph, SignedGraph, UndirectedGraph};

/// A `sign` value as it arrives from an external source: a numeric `+1`/`-1`
/// or the string forms `"POSITIVE"`/`"NEGATIVE"`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Clone, Debug, PartialEq)]
pub enum SignValue {
    Numeric(i8),
    Text(String),
}

impl SignValue {
    /// Resolves to `+1` or `-1`. Unrecognized string forms default to `+1`
    /// rather than erroring, per the ingestion contract.
    pub fn resolve(&self) -> i8 {
        match self {
            SignValue::Numeric(n) if *n == -1 => -1,
            SignValue::Numeric(_) => 1,
            SignValue::Text(s) if s.eq_ignore_ascii_case("negative") => -1,
            SignValue::Text(_) => 1,
        }
    }
}

/// One edge as ingested from an external graph store: source, target, an
/// optional sign (absent for plain weighted graphs), an optional weight, and
/// any extra attributes the caller wants preserved alongside the edge.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sign: Option<SignValue>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: AHashMap<String, String>,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            sign: None,
            weight: None,
            attributes: AHashMap::default(),
        }
    }

    pub fn with_sign(mut self, sign: SignValue) -> Self {
        self.sign = Some(sign);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Builds a [`SignedGraph`] from edge records. A missing `sign` is treated
/// as `+1` (same default as an unrecognized string form), matching the
/// ingestion contract's "unknowns default to +1" rule.
pub fn build_signed_graph(records: &[EdgeRecord]) -> Result<SignedGraph> {
    let mut builder = SignedGraph::builder();
    for record in records {
        let sign = record.sign.as_ref().map(SignValue::resolve).unwrap_or(1);
        let weight = record.weight.unwrap_or(1.0);
        builder.add_edge(&record.source, &record.target, sign, weight)?;
    }
    Ok(builder.build())
}

/// Builds a [`DirectedGraph`] from edge records, ignoring any `sign`.
pub fn build_directed_graph(records: &[EdgeRecord]) -> Result<DirectedGraph> {
    let mut builder = DirectedGraph::builder();
    for record in records {
        let weight = record.weight.unwrap_or(1.0);
        builder.add_edge(&record.source, &record.target, weight)?;
    }
    Ok(builder.build())
}

/// Builds an [`UndirectedGraph`] from edge records, ignoring any `sign`.
pub fn build_undirected_graph(records: &[EdgeRecord]) -> Result<UndirectedGraph> {
    let mut builder = UndirectedGraph::builder();
    for record in records {
        let weight = record.weight.unwrap_or(1.0);
        builder.add_edge(&record.source, &record.target, weight)?;
    }
    Ok(builder.build())
}

/// Parses a JSON array of edge records, the shape a front-end typically
/// receives from an external graph store before handing it to
/// [`build_signed_graph`] / [`build_directed_graph`] / [`build_undirected_graph`].
#[cfg(feature = "serde")]
pub fn parse_edge_records_json(json: &str) -> Result<Vec<EdgeRecord>> {
    serde_json::from_str(json).map_err(|err| AnalyticsError::InvalidInput {
        reason: format!("malformed edge record JSON: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn unknown_sign_string_defaults_to_positive() {
        let value = SignValue::Text("UNKNOWN".to_string());
        assert_eq!(value.resolve(), 1);
    }

    #[test]
    fn negative_string_resolves_to_minus_one() {
        let value = SignValue::Text("NEGATIVE".to_string());
        assert_eq!(value.resolve(), -1);
    }

    #[test]
    fn missing_sign_defaults_to_positive_in_signed_graph() {
        let records = vec![EdgeRecord::new("a", "b")];
        let graph = build_signed_graph(&records).unwrap();
        let a = graph.node_index("a").unwrap();
        let b = graph.node_index("b").unwrap();
        assert_eq!(graph.sign(a, b), Some(1));
    }

    #[test]
    fn build_directed_graph_from_records() {
        let records = vec![
            EdgeRecord::new("a", "b").with_weight(2.0),
            EdgeRecord::new("b", "c"),
        ];
        let graph = build_directed_graph(&records).unwrap();
        assert_eq!(graph.node_count(), 3);
        let a = graph.node_index("a").unwrap();
        let b = graph.node_index("b").unwrap();
        assert_eq!(graph.weight(a, b), Some(2.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn edge_records_round_trip_through_json() {
        let json = r#"[
            {"source": "a", "target": "b", "sign": "NEGATIVE", "weight": 2.5},
            {"source": "b", "target": "c", "sign": 1}
        ]"#;
        let records = parse_edge_records_json(json).unwrap();
        let graph = build_signed_graph(&records).unwrap();
        let a = graph.node_index("a").unwrap();
        let b = graph.node_index("b").unwrap();
        assert_eq!(graph.sign(a, b), Some(-1));
        assert_eq!(graph.weight(a, b), Some(2.5));
    }
}
