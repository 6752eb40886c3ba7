use indexmap::IndexSet;

/// A dense, zero-based handle for a node inside a single graph snapshot.
///
/// `NodeIndex` values are only meaningful relative to the [`NodeMap`] (or
/// graph) that produced them; they are not stable across graphs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(u32);

impl NodeIndex {
    pub(crate) fn new(idx: usize) -> Self {
        NodeIndex(idx as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A bijection between caller-facing node identifiers and the dense
/// [`NodeIndex`] space a graph operates on internally, preserving the
/// insertion order of the identifiers it was given.
///
/// Insertion order is load-bearing: every "first-N" truncation documented in
/// the spec (constraint-dominance's first 50, latent-subgraph's first 5
/// triggers, asymmetric pairs' first 100 nodes, ...) is defined over this
/// order.
#[derive(Clone, Debug, Default)]
pub struct NodeMap {
    ids: IndexSet<String>,
}

impl NodeMap {
    pub fn new() -> Self {
        Self {
            ids: IndexSet::new(),
        }
    }

    /// Returns the existing index for `id`, inserting it at the next free
    /// slot if it hasn't been seen before.
    pub fn get_or_insert(&mut self, id: &str) -> NodeIndex {
        if let Some(idx) = self.ids.get_index_of(id) {
            return NodeIndex::new(idx);
        }
        let (idx, _) = self.ids.insert_full(id.to_string());
        NodeIndex::new(idx)
    }

    pub fn get(&self, id: &str) -> Option<NodeIndex> {
        self.ids.get_index_of(id).map(NodeIndex::new)
    }

    pub fn id(&self, node: NodeIndex) -> &str {
        self.ids
            .get_index(node.index())
            .expect("NodeIndex out of range for this NodeMap")
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Node indices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        (0..self.ids.len()).map(NodeIndex::new)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
