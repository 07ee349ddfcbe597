//! The scene-graph port consumed by the conversion engine.

use std::fmt::Debug;
use std::hash::Hash;

use crate::facet::{FillFacet, InteractiveFacet, Placement, TextFacet};
use crate::Result;

/// Retained-mode scene graph contract.
///
/// Implementors own object lifetimes. The engine only issues creation,
/// parenting, facet attachment and (on explicit request) destruction calls.
///
/// # Ordering
///
/// `set_parent` appends the object to the end of the parent's child list.
/// `list_children` returns children in that order. Targets whose stacking is
/// order dependent draw later children on top.
pub trait SceneGraph {
    /// Reference to an object owned by the scene.
    type Handle: Copy + Eq + Hash + Debug;

    /// Create a detached object with the given name.
    fn create_object(&mut self, name: &str) -> Result<Self::Handle>;

    /// Attach `handle` as the last child of `parent`.
    fn set_parent(&mut self, handle: Self::Handle, parent: Self::Handle) -> Result<()>;

    /// Set position, size and anchoring.
    fn set_placement(&mut self, handle: Self::Handle, placement: &Placement) -> Result<()>;

    fn attach_fill_facet(&mut self, handle: Self::Handle, facet: &FillFacet) -> Result<()>;

    fn attach_text_facet(&mut self, handle: Self::Handle, facet: &TextFacet) -> Result<()>;

    fn attach_interactive_facet(
        &mut self,
        handle: Self::Handle,
        facet: &InteractiveFacet,
    ) -> Result<()>;

    /// Destroy an object and everything beneath it.
    fn destroy_object(&mut self, handle: Self::Handle) -> Result<()>;

    /// Direct children of a container, in child order.
    fn list_children(&self, container: Self::Handle) -> Result<Vec<(String, Self::Handle)>>;
}
