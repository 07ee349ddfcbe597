//! Design node model for the frameport conversion engine.
//!
//! This crate provides the passive input side of a conversion:
//! - [`DesignNode`] trees with geometry, colors and style groups
//! - JSON loading that tolerates the spellings design tools export
//! - Structural validation with [`ModelError`]
//!
//! Nothing here talks to a scene graph; see `frameport-convert` for that.

pub mod errors;
pub mod load;
pub mod node;
pub mod types;
pub mod validate;

pub use errors::{LoadError, ModelError};
pub use load::{parse_document, parse_document_slice, read_document, DesignDocument};
pub use node::{DesignNode, NodeKind, Walk};
pub use types::{Border, Color, CornerRadius, Geometry, Shadow};
pub use validate::{validate_forest, validate_node, validate_tree, IdSet};
