use indexmap::IndexMap;

use super::index::NodeMap;
use super::traits::{Graph, UndirectedDegrees};
use super::undirected::UndirectedGraph;
use crate::error::{AnalyticsError, Result};

/// A multiplex layering `L`: a name-ordered map from layer name to an
/// undirected graph, plus the union of all node identifiers (the
/// "universe").
///
/// Layer insertion order is preserved and is observable in results that
/// aggregate across layers in iteration order (supra-PageRank).
#[derive(Clone, Debug, Default)]
pub struct MultiplexLayers {
    layers: IndexMap<String, UndirectedGraph>,
    universe: NodeMap,
}

impl MultiplexLayers {
    pub fn builder() -> MultiplexLayersBuilder {
        MultiplexLayersBuilder::default()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.keys().map(String::as_str)
    }

    pub fn layer(&self, name: &str) -> Result<&UndirectedGraph> {
        self.layers
            .get(name)
            .ok_or_else(|| AnalyticsError::UnknownLayer {
                layer: name.to_string(),
            })
    }

    pub fn layers(&self) -> impl Iterator<Item = (&str, &UndirectedGraph)> {
        self.layers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn universe_size(&self) -> usize {
        self.universe.len()
    }

    pub fn universe_ids(&self) -> impl Iterator<Item = &str> {
        self.universe.ids()
    }

    /// Degree of `node_id` in layer `layer`, or `0` if the node is absent
    /// from that layer. Fails if the layer is unknown.
    pub fn degree_in_layer(&self, layer: &str, node_id: &str) -> Result<usize> {
        let graph = self.layer(layer)?;
        Ok(graph
            .node_index(node_id)
            .map(|idx| graph.degree(idx))
            .unwrap_or(0))
    }
}

#[derive(Default)]
pub struct MultiplexLayersBuilder {
    layers: IndexMap<String, UndirectedGraph>,
}

impl MultiplexLayersBuilder {
    pub fn add_layer(&mut self, name: &str, graph: UndirectedGraph) -> &mut Self {
        self.layers.insert(name.to_string(), graph);
        self
    }

    pub fn build(self) -> MultiplexLayers {
        let mut universe = NodeMap::new();
        for graph in self.layers.values() {
            for id in graph.node_ids() {
                universe.get_or_insert(id);
            }
        }
        MultiplexLayers {
            layers: self.layers,
            universe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn universe_is_union_of_layers() {
        let l1 = UndirectedGraph::builder().add_edge("a", "b", 1.0).unwrap().build();
        let l2 = UndirectedGraph::builder().add_edge("b", "c", 1.0).unwrap().build();

        let multiplex = MultiplexLayers::builder()
            .add_layer("l1", l1)
            .add_layer("l2", l2)
            .build();

        assert_eq!(multiplex.layer_count(), 2);
        assert_eq!(multiplex.universe_size(), 3);
        assert_eq!(multiplex.degree_in_layer("l1", "a").unwrap(), 1);
        assert_eq!(multiplex.degree_in_layer("l1", "c").unwrap(), 0);
        assert!(multiplex.layer("missing").is_err());
    }
}
