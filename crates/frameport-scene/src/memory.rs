//! In-memory retained scene graph.
//!
//! [`MemoryScene`] implements [`SceneGraph`] by tracking objects in an
//! ordered map without any rendering. It backs tests, benchmarks and the CLI,
//! and doubles as a reference for what a real target has to provide.

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::trace;

use frameport_core::{Border, CornerRadius, Shadow};

use crate::facet::{FillFacet, InteractiveFacet, Placement, TextFacet};
use crate::graph::SceneGraph;
use crate::{Result, SceneError};

/// Handle to an object in a [`MemoryScene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ObjectId(pub u64);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A visual effect written by a style strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum AppliedStyle {
    RoundedCorners(CornerRadius),
    Border(Border),
    Shadow(Shadow),
}

/// One object in the scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub parent: Option<ObjectId>,
    pub children: Vec<ObjectId>,
    pub placement: Option<Placement>,
    pub fill: Option<FillFacet>,
    pub text: Option<TextFacet>,
    pub interactive: Option<InteractiveFacet>,
    pub styles: SmallVec<[AppliedStyle; 3]>,
}

impl SceneObject {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// Handle-free description of a subtree, comparable across runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSnapshot {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillFacet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextFacet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive: Option<InteractiveFacet>,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub styles: SmallVec<[AppliedStyle; 3]>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ObjectSnapshot>,
}

impl ObjectSnapshot {
    /// Number of objects in this snapshot, including itself.
    pub fn object_count(&self) -> usize {
        1 + self.children.iter().map(ObjectSnapshot::object_count).sum::<usize>()
    }
}

/// An in-memory retained scene graph.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    objects: IndexMap<ObjectId, SceneObject>,
    next_id: u64,
}

impl MemoryScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a top-level container (a canvas) to convert into.
    pub fn create_container(&mut self, name: &str) -> ObjectId {
        self.insert(name)
    }

    fn insert(&mut self, name: &str) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.insert(id, SceneObject::new(name));
        id
    }

    fn object(&self, id: ObjectId) -> Result<&SceneObject> {
        self.objects
            .get(&id)
            .ok_or_else(|| SceneError::InvalidHandle(id.to_string()))
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut SceneObject> {
        self.objects
            .get_mut(&id)
            .ok_or_else(|| SceneError::InvalidHandle(id.to_string()))
    }

    /// Get an object by handle.
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Number of live objects, containers included.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over all live objects in creation order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }

    /// Direct children of an object.
    pub fn children(&self, id: ObjectId) -> &[ObjectId] {
        self.objects
            .get(&id)
            .map(|o| o.children.as_slice())
            .unwrap_or(&[])
    }

    /// Find the first direct child of `parent` with the given name.
    pub fn find_child(&self, parent: ObjectId, name: &str) -> Option<ObjectId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|child| self.objects.get(child).is_some_and(|o| o.name == name))
    }

    /// Number of objects beneath `id`, excluding `id` itself.
    pub fn descendant_count(&self, id: ObjectId) -> usize {
        self.children(id)
            .iter()
            .map(|child| 1 + self.descendant_count(*child))
            .sum()
    }

    /// Record a visual effect on an object.
    pub fn apply_style(&mut self, id: ObjectId, style: AppliedStyle) -> Result<()> {
        self.object_mut(id)?.styles.push(style);
        Ok(())
    }

    /// Capture a subtree without handles.
    pub fn snapshot(&self, id: ObjectId) -> Option<ObjectSnapshot> {
        let object = self.objects.get(&id)?;
        Some(ObjectSnapshot {
            name: object.name.clone(),
            placement: object.placement,
            fill: object.fill,
            text: object.text.clone(),
            interactive: object.interactive,
            styles: object.styles.clone(),
            children: object
                .children
                .iter()
                .filter_map(|child| self.snapshot(*child))
                .collect(),
        })
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    fn is_self_or_ancestor(&self, ancestor: ObjectId, id: ObjectId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.objects.get(&node).and_then(|o| o.parent);
        }
        false
    }

    fn detach(&mut self, id: ObjectId) {
        let parent = self.objects.get_mut(&id).and_then(|o| o.parent.take());
        if let Some(parent) = parent.and_then(|p| self.objects.get_mut(&p)) {
            parent.children.retain(|child| *child != id);
        }
    }
}

impl SceneGraph for MemoryScene {
    type Handle = ObjectId;

    fn create_object(&mut self, name: &str) -> Result<ObjectId> {
        let id = self.insert(name);
        trace!(%id, name, "created object");
        Ok(id)
    }

    fn set_parent(&mut self, handle: ObjectId, parent: ObjectId) -> Result<()> {
        self.object(handle)?;
        self.object(parent)?;
        if self.is_self_or_ancestor(handle, parent) {
            return Err(SceneError::Cycle {
                child: handle.to_string(),
                parent: parent.to_string(),
            });
        }

        self.detach(handle);
        self.object_mut(parent)?.children.push(handle);
        self.object_mut(handle)?.parent = Some(parent);
        Ok(())
    }

    fn set_placement(&mut self, handle: ObjectId, placement: &Placement) -> Result<()> {
        self.object_mut(handle)?.placement = Some(*placement);
        Ok(())
    }

    fn attach_fill_facet(&mut self, handle: ObjectId, facet: &FillFacet) -> Result<()> {
        let object = self.object_mut(handle)?;
        if object.fill.is_some() {
            return Err(SceneError::DuplicateFacet {
                facet: "fill",
                handle: handle.to_string(),
            });
        }
        object.fill = Some(*facet);
        Ok(())
    }

    fn attach_text_facet(&mut self, handle: ObjectId, facet: &TextFacet) -> Result<()> {
        let object = self.object_mut(handle)?;
        if object.text.is_some() {
            return Err(SceneError::DuplicateFacet {
                facet: "text",
                handle: handle.to_string(),
            });
        }
        object.text = Some(facet.clone());
        Ok(())
    }

    fn attach_interactive_facet(
        &mut self,
        handle: ObjectId,
        facet: &InteractiveFacet,
    ) -> Result<()> {
        let object = self.object_mut(handle)?;
        if object.interactive.is_some() {
            return Err(SceneError::DuplicateFacet {
                facet: "interactive",
                handle: handle.to_string(),
            });
        }
        object.interactive = Some(*facet);
        Ok(())
    }

    fn destroy_object(&mut self, handle: ObjectId) -> Result<()> {
        self.object(handle)?;
        self.detach(handle);

        let mut pending = vec![handle];
        while let Some(id) = pending.pop() {
            if let Some(object) = self.objects.shift_remove(&id) {
                pending.extend(object.children);
            }
        }
        trace!(%handle, "destroyed object");
        Ok(())
    }

    fn list_children(&self, container: ObjectId) -> Result<Vec<(String, ObjectId)>> {
        let object = self.object(container)?;
        Ok(object
            .children
            .iter()
            .filter_map(|child| self.objects.get(child).map(|o| (o.name.clone(), *child)))
            .collect())
    }
}
