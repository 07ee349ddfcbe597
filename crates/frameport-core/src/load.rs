//! Loading design documents from JSON.
//!
//! A document is a single node, an array of nodes, or `{ "nodes": [...] }`.
//! Loading fully materializes the tree; conversion never sees partial input.

use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::LoadError;
use crate::node::DesignNode;

/// Result type for document loading.
pub type Result<T> = std::result::Result<T, LoadError>;

/// An ordered list of top-level design nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignDocument {
    pub nodes: Vec<DesignNode>,
}

impl DesignDocument {
    pub fn new(nodes: Vec<DesignNode>) -> Self {
        Self { nodes }
    }

    /// Total number of nodes across all roots.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(DesignNode::node_count).sum()
    }
}

#[derive(Deserialize)]
struct Wrapped {
    nodes: Vec<DesignNode>,
}

/// Pick the document form from the JSON shape.
///
/// Every node field is optional, so any object would deserialize as a single
/// node. An object with a `nodes` key is always the wrapper form and its
/// errors are reported as such.
fn from_value(value: Value) -> Result<DesignDocument> {
    let wrapped = value.as_object().is_some_and(|map| map.contains_key("nodes"));
    let nodes = if wrapped {
        serde_json::from_value::<Wrapped>(value)?.nodes
    } else if value.is_array() {
        serde_json::from_value::<Vec<DesignNode>>(value)?
    } else {
        vec![serde_json::from_value::<DesignNode>(value)?]
    };

    if nodes.is_empty() {
        return Err(LoadError::EmptyDocument);
    }
    let doc = DesignDocument { nodes };
    debug!(roots = doc.nodes.len(), nodes = doc.node_count(), "loaded design document");
    Ok(doc)
}

/// Parse a document from a JSON string.
pub fn parse_document(json: &str) -> Result<DesignDocument> {
    from_value(serde_json::from_str(json)?)
}

/// Parse a document from JSON bytes.
pub fn parse_document_slice(bytes: &[u8]) -> Result<DesignDocument> {
    from_value(serde_json::from_slice(bytes)?)
}

/// Read and parse a document from a reader.
pub fn read_document(mut reader: impl Read) -> Result<DesignDocument> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_document_slice(&bytes)
}
