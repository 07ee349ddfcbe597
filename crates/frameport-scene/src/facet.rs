//! Parameters passed across the scene-graph boundary.

use glam::Vec2;
use serde::Serialize;

use frameport_core::Color;

/// Placement of a scene object relative to its parent.
///
/// `anchor` and `pivot` are normalized in the target's own axis convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// Offset from the parent's anchor point to this object's pivot
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Normalized anchor inside the parent
    pub anchor: Vec2,
    /// Normalized pivot inside this object
    pub pivot: Vec2,
}

impl Placement {
    /// Placement whose anchor and pivot are the same normalized point.
    pub fn anchored(position: Vec2, size: Vec2, anchor: Vec2) -> Self {
        Self {
            position,
            size,
            anchor,
            pivot: anchor,
        }
    }
}

/// Solid image/fill facet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FillFacet {
    /// `None` keeps the target's default graphic color
    pub color: Option<Color>,
}

/// Opaque reference to a font asset in the target runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FontHandle(pub String);

impl FontHandle {
    pub fn new(name: impl Into<String>) -> Self {
        FontHandle(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where text sits inside its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TextAlignment {
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    #[default]
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

/// Text facet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextFacet {
    pub content: String,
    /// `None` keeps the target's default text color
    pub color: Option<Color>,
    /// `None` keeps the target's default font size
    pub font_size: Option<u32>,
    pub font: FontHandle,
    pub alignment: TextAlignment,
}

/// Colors for the rest, highlighted and pressed states of a pressable object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateColors {
    pub normal: Color,
    pub highlighted: Color,
    pub pressed: Color,
}

/// Interactive (pressable) facet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct InteractiveFacet {
    /// `None` keeps the target's default color transition
    pub colors: Option<StateColors>,
}
