//! Identity index from design-node id to created scene object.

use indexmap::IndexMap;

/// Mapping `DesignNode.id -> scene handle` for one conversion call.
///
/// Entries keep recording order; a node is recorded after its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionIndex<H> {
    entries: IndexMap<String, H>,
}

impl<H> Default for ConversionIndex<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> ConversionIndex<H> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Record the object created for a node.
    pub fn record(&mut self, id: impl Into<String>, handle: H) {
        self.entries.insert(id.into(), handle);
    }

    /// Move every entry of `other` into this index.
    pub fn merge(&mut self, other: ConversionIndex<H>) {
        self.entries.extend(other.entries);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Node ids in recording order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &H)> {
        self.entries.iter().map(|(id, handle)| (id.as_str(), handle))
    }
}

impl<H: Copy> ConversionIndex<H> {
    /// Get the handle created for a node.
    pub fn get(&self, id: &str) -> Option<H> {
        self.entries.get(id).copied()
    }

    /// Handles in recording order.
    pub fn handles(&self) -> impl Iterator<Item = H> + '_ {
        self.entries.values().copied()
    }
}
