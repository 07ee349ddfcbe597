//! Scene-graph collaborator interface for frameport.
//!
//! This crate defines the contract between the conversion engine and a
//! retained-mode presentation layer. It contains no conversion logic.
//!
//! - [`SceneGraph`]: the port a target runtime implements
//! - Facet and placement value types passed across the port
//! - [`MemoryScene`]: an in-memory implementation for headless use

use thiserror::Error;

mod facet;
mod graph;
mod memory;

pub use facet::{
    FillFacet, FontHandle, InteractiveFacet, Placement, StateColors, TextAlignment, TextFacet,
};
pub use graph::SceneGraph;
pub use memory::{AppliedStyle, MemoryScene, ObjectId, ObjectSnapshot, SceneObject};

/// Result type for scene-graph operations.
pub type Result<T> = std::result::Result<T, SceneError>;

/// An operation rejected by the scene graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The handle does not refer to a live object.
    #[error("invalid handle: {0}")]
    InvalidHandle(String),

    /// Parenting would make an object its own ancestor.
    #[error("cannot parent {child} under {parent}: would create a cycle")]
    Cycle { child: String, parent: String },

    /// The object already carries a facet of this kind.
    #[error("{facet} facet already attached to {handle}")]
    DuplicateFacet { facet: &'static str, handle: String },

    /// A target-specific refusal.
    #[error("scene rejected operation: {0}")]
    Rejected(String),
}
