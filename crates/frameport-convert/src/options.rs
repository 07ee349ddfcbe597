//! Conversion options and coordinate-space translation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use frameport_core::Geometry;
use frameport_scene::Placement;

/// Prefix given to every generated object name unless configured otherwise.
pub const DEFAULT_NAME_PREFIX: &str = "Design_";

/// Direction of the target's Y axis.
///
/// Design space always has a top-left origin with Y increasing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AxisPolicy {
    /// Target Y increases upward; design `y` is negated.
    #[default]
    YUp,
    /// Target Y increases downward; design `y` is kept.
    YDown,
}

impl AxisPolicy {
    /// The parent's top-left corner in the target's normalized anchor space.
    pub fn top_left_anchor(self) -> Vec2 {
        match self {
            AxisPolicy::YUp => Vec2::new(0.0, 1.0),
            AxisPolicy::YDown => Vec2::ZERO,
        }
    }

    /// Translate design-space geometry into a top-left anchored placement.
    pub fn place(self, geometry: &Geometry) -> Placement {
        let position = match self {
            AxisPolicy::YUp => Vec2::new(geometry.x, -geometry.y),
            AxisPolicy::YDown => Vec2::new(geometry.x, geometry.y),
        };
        let size = Vec2::new(geometry.width, geometry.height);
        Placement::anchored(position, size, self.top_left_anchor())
    }
}

/// Options for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Y axis convention of the target
    pub axis: AxisPolicy,
    /// Prefix for generated object names, used by `clear_generated`
    pub name_prefix: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            axis: AxisPolicy::default(),
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
        }
    }
}

impl ConvertOptions {
    pub fn with_axis(mut self, axis: AxisPolicy) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Name of the object generated for a node with the given name.
    pub fn object_name(&self, node_name: &str) -> String {
        format!("{}{}", self.name_prefix, node_name)
    }
}
