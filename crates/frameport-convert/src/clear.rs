//! Removal of previously generated objects.

use tracing::debug;

use frameport_scene::{SceneError, SceneGraph};

/// Destroy every direct child of `parent` whose name starts with `prefix`.
///
/// Children are visited from last to first. Returns how many were removed.
/// An empty prefix matches every child.
pub fn clear_generated<S: SceneGraph>(
    scene: &mut S,
    parent: S::Handle,
    prefix: &str,
) -> Result<usize, SceneError> {
    let children = scene.list_children(parent)?;

    let mut removed = 0;
    for (name, handle) in children.into_iter().rev() {
        if name.starts_with(prefix) {
            scene.destroy_object(handle)?;
            removed += 1;
        }
    }

    debug!(parent = ?parent, prefix, removed, "cleared generated objects");
    Ok(removed)
}
