//! Error types for the conversion engine.

use thiserror::Error;

use frameport_core::ModelError;
use frameport_scene::SceneError;

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// A failure that aborts conversion of a tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The root node is malformed; nothing was created for it.
    #[error("invalid input at node {id:?}: {source}")]
    InvalidInput {
        id: String,
        #[source]
        source: ModelError,
    },

    /// The scene graph rejected an operation while converting node `id`.
    #[error("scene graph rejected node {id:?}: {source}")]
    Collaborator {
        id: String,
        #[source]
        source: SceneError,
    },
}

impl ConvertError {
    pub(crate) fn invalid(source: ModelError) -> Self {
        ConvertError::InvalidInput {
            id: source.node_id().to_string(),
            source,
        }
    }

    pub(crate) fn collaborator(id: &str, source: SceneError) -> Self {
        ConvertError::Collaborator {
            id: id.to_string(),
            source,
        }
    }

    /// The id of the node being converted when the error occurred.
    pub fn node_id(&self) -> &str {
        match self {
            ConvertError::InvalidInput { id, .. } | ConvertError::Collaborator { id, .. } => id,
        }
    }
}
