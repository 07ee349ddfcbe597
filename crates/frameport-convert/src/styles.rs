//! Pluggable visual-effect strategies.
//!
//! Rounded corners, borders and shadows are capabilities the target may or
//! may not provide. Each slot is either [`Capability::Available`] or
//! [`Capability::NotAvailable`]; the engine checks the slot explicitly and
//! reports a missing one instead of failing the conversion.

use std::fmt;

use frameport_core::{Border, CornerRadius, Shadow};
use frameport_scene::{AppliedStyle, MemoryScene, ObjectId, SceneError, SceneGraph};

/// The visual effects that can be delegated to a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    RoundedCorners,
    Border,
    Shadow,
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StyleKind::RoundedCorners => "rounded corners",
            StyleKind::Border => "border",
            StyleKind::Shadow => "shadow",
        })
    }
}

/// Applies one visual effect with parameters `P` to a scene object.
pub trait StyleStrategy<S: SceneGraph, P> {
    fn apply(&self, scene: &mut S, handle: S::Handle, params: &P) -> Result<(), SceneError>;
}

impl<S, P, F> StyleStrategy<S, P> for F
where
    S: SceneGraph,
    F: Fn(&mut S, S::Handle, &P) -> Result<(), SceneError>,
{
    fn apply(&self, scene: &mut S, handle: S::Handle, params: &P) -> Result<(), SceneError> {
        self(scene, handle, params)
    }
}

/// Whether a target provides a capability.
pub enum Capability<T> {
    Available(T),
    NotAvailable,
}

impl<T> Capability<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }
}

impl<T> fmt::Debug for Capability<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Available(_) => f.write_str("Available"),
            Capability::NotAvailable => f.write_str("NotAvailable"),
        }
    }
}

/// A strategy slot for effect parameters `P`.
pub type StrategySlot<S, P> = Capability<Box<dyn StyleStrategy<S, P>>>;

/// The three style strategy slots of a converter.
pub struct StyleStrategies<S: SceneGraph> {
    pub corners: StrategySlot<S, CornerRadius>,
    pub border: StrategySlot<S, Border>,
    pub shadow: StrategySlot<S, Shadow>,
}

impl<S: SceneGraph> Default for StyleStrategies<S> {
    fn default() -> Self {
        Self::none()
    }
}

impl<S: SceneGraph> StyleStrategies<S> {
    /// No strategy available for any effect.
    pub fn none() -> Self {
        Self {
            corners: Capability::NotAvailable,
            border: Capability::NotAvailable,
            shadow: Capability::NotAvailable,
        }
    }

    pub fn with_corners(mut self, strategy: impl StyleStrategy<S, CornerRadius> + 'static) -> Self {
        self.corners = Capability::Available(Box::new(strategy));
        self
    }

    pub fn with_border(mut self, strategy: impl StyleStrategy<S, Border> + 'static) -> Self {
        self.border = Capability::Available(Box::new(strategy));
        self
    }

    pub fn with_shadow(mut self, strategy: impl StyleStrategy<S, Shadow> + 'static) -> Self {
        self.shadow = Capability::Available(Box::new(strategy));
        self
    }

    /// Whether the strategy for `kind` is registered.
    pub fn supports(&self, kind: StyleKind) -> bool {
        match kind {
            StyleKind::RoundedCorners => self.corners.is_available(),
            StyleKind::Border => self.border.is_available(),
            StyleKind::Shadow => self.shadow.is_available(),
        }
    }
}

impl<S: SceneGraph> fmt::Debug for StyleStrategies<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleStrategies")
            .field("corners", &self.corners)
            .field("border", &self.border)
            .field("shadow", &self.shadow)
            .finish()
    }
}

/// Records effects on a [`MemoryScene`] object as [`AppliedStyle`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordStyle;

impl StyleStrategy<MemoryScene, CornerRadius> for RecordStyle {
    fn apply(
        &self,
        scene: &mut MemoryScene,
        handle: ObjectId,
        radius: &CornerRadius,
    ) -> Result<(), SceneError> {
        scene.apply_style(handle, AppliedStyle::RoundedCorners(*radius))
    }
}

impl StyleStrategy<MemoryScene, Border> for RecordStyle {
    fn apply(
        &self,
        scene: &mut MemoryScene,
        handle: ObjectId,
        border: &Border,
    ) -> Result<(), SceneError> {
        scene.apply_style(handle, AppliedStyle::Border(*border))
    }
}

impl StyleStrategy<MemoryScene, Shadow> for RecordStyle {
    fn apply(
        &self,
        scene: &mut MemoryScene,
        handle: ObjectId,
        shadow: &Shadow,
    ) -> Result<(), SceneError> {
        scene.apply_style(handle, AppliedStyle::Shadow(*shadow))
    }
}

impl StyleStrategies<MemoryScene> {
    /// Every effect recorded on the in-memory scene.
    pub fn recording() -> Self {
        Self::none()
            .with_corners(RecordStyle)
            .with_border(RecordStyle)
            .with_shadow(RecordStyle)
    }
}
