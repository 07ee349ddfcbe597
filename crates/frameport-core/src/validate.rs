//! Structural validation of design nodes.
//!
//! Validation never repairs input. A node either passes or yields a
//! [`ModelError`] describing the first violation found on it.

use indexmap::IndexSet;

use crate::errors::ModelError;
use crate::node::DesignNode;

/// The set of node ids seen so far in a tree or forest.
#[derive(Debug, Clone, Default)]
pub struct IdSet {
    ids: IndexSet<String>,
}

impl IdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Claim an id. Returns false if it was already claimed.
    pub fn insert(&mut self, id: &str) -> bool {
        self.ids.insert(id.to_string())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Validate a single node (not its children) and claim its id.
///
/// The id is only claimed when every other check passes.
pub fn validate_node(node: &DesignNode, ids: &mut IdSet) -> Result<(), ModelError> {
    if node.id.is_empty() {
        return Err(ModelError::EmptyId {
            name: node.name.clone(),
        });
    }

    let id = || node.id.clone();
    let geometry = &node.geometry;

    if !geometry.is_finite() {
        return Err(ModelError::NonFiniteGeometry { id: id() });
    }
    if geometry.width < 0.0 || geometry.height < 0.0 {
        return Err(ModelError::NegativeSize {
            id: id(),
            width: geometry.width,
            height: geometry.height,
        });
    }
    if node.corner_radius.is_some_and(|r| r.has_invalid_corner()) {
        return Err(ModelError::NegativeCornerRadius { id: id() });
    }
    if let Some(border) = node.border.filter(|b| b.width.is_nan() || b.width < 0.0) {
        return Err(ModelError::NegativeBorderWidth {
            id: id(),
            width: border.width,
        });
    }
    if let Some(shadow) = node.shadow.filter(|s| s.blur.is_nan() || s.blur < 0.0) {
        return Err(ModelError::NegativeShadowBlur {
            id: id(),
            blur: shadow.blur,
        });
    }

    if !ids.insert(&node.id) {
        return Err(ModelError::DuplicateId { id: id() });
    }
    Ok(())
}

/// Validate a whole tree, returning every violation in pre-order.
///
/// Children of an invalid node are still checked.
pub fn validate_tree(root: &DesignNode) -> Vec<ModelError> {
    validate_forest(std::slice::from_ref(root))
}

/// Validate several roots that share one id namespace.
pub fn validate_forest(roots: &[DesignNode]) -> Vec<ModelError> {
    let mut ids = IdSet::new();
    roots
        .iter()
        .flat_map(DesignNode::walk)
        .filter_map(|node| validate_node(node, &mut ids).err())
        .collect()
}
