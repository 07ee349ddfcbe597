//! Error types for the design node model.

use thiserror::Error;

/// A structural violation in a design node.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("node {name:?} has an empty id")]
    EmptyId { name: String },

    #[error("duplicate node id: {id}")]
    DuplicateId { id: String },

    #[error("node {id} has non-finite geometry")]
    NonFiniteGeometry { id: String },

    #[error("node {id} has negative size {width}x{height}")]
    NegativeSize { id: String, width: f32, height: f32 },

    #[error("node {id} has a negative corner radius")]
    NegativeCornerRadius { id: String },

    #[error("node {id} has negative border width {width}")]
    NegativeBorderWidth { id: String, width: f32 },

    #[error("node {id} has negative shadow blur {blur}")]
    NegativeShadowBlur { id: String, blur: f32 },
}

impl ModelError {
    /// The id of the offending node (empty for [`ModelError::EmptyId`]).
    pub fn node_id(&self) -> &str {
        match self {
            ModelError::EmptyId { .. } => "",
            ModelError::DuplicateId { id }
            | ModelError::NonFiniteGeometry { id }
            | ModelError::NegativeSize { id, .. }
            | ModelError::NegativeCornerRadius { id }
            | ModelError::NegativeBorderWidth { id, .. }
            | ModelError::NegativeShadowBlur { id, .. } => id,
        }
    }
}

/// Errors while loading a design document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error while reading document: {0}")]
    Io(#[from] std::io::Error),

    #[error("document contains no nodes")]
    EmptyDocument,
}
