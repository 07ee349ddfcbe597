//! The conversion engine.
//!
//! Walks a design tree depth-first in pre-order. For every node it creates
//! one scene object, places it, attaches the facets its kind calls for,
//! converts its children under it in order, and records the node in the
//! identity index.

use tracing::{debug, info, warn};

use frameport_core::{validate_node, Color, DesignNode, IdSet, NodeKind};
use frameport_scene::{
    FillFacet, InteractiveFacet, SceneError, SceneGraph, StateColors, TextAlignment, TextFacet,
};

use crate::clear::clear_generated;
use crate::error::{ConvertError, Result};
use crate::fonts::FontRegistry;
use crate::index::ConversionIndex;
use crate::options::ConvertOptions;
use crate::report::{ConversionReport, Diagnostic, DiagnosticKind};
use crate::styles::{Capability, StrategySlot, StyleKind, StyleStrategies};

/// Brightness of the highlighted state relative to the rest color.
pub const HIGHLIGHTED_BRIGHTNESS: f32 = 0.8;

/// Brightness of the pressed state relative to the rest color.
pub const PRESSED_BRIGHTNESS: f32 = 0.6;

/// Derive the three interaction-state colors from a base color.
pub fn interaction_colors(base: Color) -> StateColors {
    StateColors {
        normal: base,
        highlighted: base.scale_brightness(HIGHLIGHTED_BRIGHTNESS),
        pressed: base.scale_brightness(PRESSED_BRIGHTNESS),
    }
}

/// Result of converting one tree.
#[derive(Debug, Clone)]
pub struct Conversion<H> {
    /// The object created for the root node
    pub root: H,
    /// Every converted node of this tree
    pub index: ConversionIndex<H>,
    pub report: ConversionReport,
}

/// Result of converting several roots.
#[derive(Debug, Clone)]
pub struct ForestConversion<H> {
    /// One outcome per input root, in input order
    pub outcomes: Vec<Result<H>>,
    /// Every converted node of every successful root
    pub index: ConversionIndex<H>,
    pub report: ConversionReport,
}

impl<H: Copy> ForestConversion<H> {
    /// Handles of the roots that converted.
    pub fn converted_roots(&self) -> impl Iterator<Item = H> + '_ {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().ok().copied())
    }

    /// Errors of the roots that did not.
    pub fn failures(&self) -> impl Iterator<Item = &ConvertError> {
        self.outcomes.iter().filter_map(|outcome| outcome.as_ref().err())
    }
}

/// Converts design trees into objects of a scene graph `S`.
///
/// A converter is configured once and reused; conversion borrows it
/// immutably and the scene mutably.
#[derive(Debug)]
pub struct Converter<S: SceneGraph> {
    options: ConvertOptions,
    fonts: FontRegistry,
    styles: StyleStrategies<S>,
}

impl<S: SceneGraph> Default for Converter<S> {
    fn default() -> Self {
        Self::new(ConvertOptions::default(), FontRegistry::default())
    }
}

impl<S: SceneGraph> Converter<S> {
    /// Create a converter with no style strategies.
    pub fn new(options: ConvertOptions, fonts: FontRegistry) -> Self {
        Self {
            options,
            fonts,
            styles: StyleStrategies::none(),
        }
    }

    /// Replace the style strategies.
    pub fn with_styles(mut self, styles: StyleStrategies<S>) -> Self {
        self.styles = styles;
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn styles(&self) -> &StyleStrategies<S> {
        &self.styles
    }

    /// Convert one tree under `parent`.
    ///
    /// Fails with [`ConvertError::InvalidInput`] if the root itself is
    /// malformed (nothing is created), or [`ConvertError::Collaborator`] if
    /// the scene graph rejects an operation (the partially built tree is
    /// destroyed). Malformed descendants are skipped and reported.
    pub fn convert(
        &self,
        scene: &mut S,
        root: &DesignNode,
        parent: S::Handle,
    ) -> Result<Conversion<S::Handle>> {
        self.convert_root(scene, root, parent, &mut IdSet::new())
    }

    /// Convert several roots under `parent`, in order.
    ///
    /// Ids must be unique across all roots. A failing root is reported and
    /// skipped; roots before it stay converted.
    pub fn convert_forest(
        &self,
        scene: &mut S,
        roots: &[DesignNode],
        parent: S::Handle,
    ) -> ForestConversion<S::Handle> {
        let mut ids = IdSet::new();
        let mut forest = ForestConversion {
            outcomes: Vec::with_capacity(roots.len()),
            index: ConversionIndex::new(),
            report: ConversionReport::new(),
        };

        for root in roots {
            match self.convert_root(scene, root, parent, &mut ids) {
                Ok(conversion) => {
                    forest.index.merge(conversion.index);
                    forest.report.extend(conversion.report);
                    forest.outcomes.push(Ok(conversion.root));
                }
                Err(err) => {
                    warn!(node = %root.id, error = %err, "root not converted");
                    forest.report.push(Diagnostic::from(&err));
                    forest.outcomes.push(Err(err));
                }
            }
        }

        info!(
            roots = roots.len(),
            converted = forest.outcomes.iter().filter(|o| o.is_ok()).count(),
            objects = forest.index.len(),
            diagnostics = forest.report.len(),
            "forest conversion finished"
        );
        forest
    }

    /// Remove previously generated objects under `parent`, then convert `roots`.
    pub fn regenerate(
        &self,
        scene: &mut S,
        roots: &[DesignNode],
        parent: S::Handle,
    ) -> std::result::Result<ForestConversion<S::Handle>, SceneError> {
        clear_generated(scene, parent, &self.options.name_prefix)?;
        Ok(self.convert_forest(scene, roots, parent))
    }

    fn convert_root(
        &self,
        scene: &mut S,
        root: &DesignNode,
        parent: S::Handle,
        ids: &mut IdSet,
    ) -> Result<Conversion<S::Handle>> {
        validate_node(root, ids).map_err(ConvertError::invalid)?;

        let mut pass = Pass {
            converter: self,
            scene,
            ids,
            index: ConversionIndex::new(),
            report: ConversionReport::new(),
            created_root: None,
        };

        match pass.build(root, parent) {
            Ok(built) => {
                debug!(node = %root.id, objects = pass.index.len(), "tree converted");
                Ok(Conversion {
                    root: built.handle,
                    index: pass.index,
                    report: pass.report,
                })
            }
            Err(err) => {
                pass.rollback();
                Err(err)
            }
        }
    }
}

/// What a converted node contributes to its parent's decisions.
struct Built<H> {
    handle: H,
    has_text: bool,
}

/// State of one root's conversion.
struct Pass<'a, S: SceneGraph> {
    converter: &'a Converter<S>,
    scene: &'a mut S,
    ids: &'a mut IdSet,
    index: ConversionIndex<S::Handle>,
    report: ConversionReport,
    created_root: Option<S::Handle>,
}

impl<'a, S: SceneGraph> Pass<'a, S> {
    /// Convert an already validated node and its subtree.
    fn build(&mut self, node: &DesignNode, parent: S::Handle) -> Result<Built<S::Handle>> {
        let converter = self.converter;
        let scene_err = |source| ConvertError::collaborator(&node.id, source);

        let name = converter.options.object_name(&node.name);
        let handle = self.scene.create_object(&name).map_err(scene_err)?;
        self.created_root.get_or_insert(handle);
        if let Err(source) = self.scene.set_parent(handle, parent) {
            // Detached, so outside the subtree a rollback destroys.
            self.discard(handle);
            return Err(scene_err(source));
        }

        let placement = converter.options.axis.place(&node.geometry);
        self.scene.set_placement(handle, &placement).map_err(scene_err)?;

        let has_text = match node.kind {
            NodeKind::Frame | NodeKind::Rectangle | NodeKind::Instance | NodeKind::Component => {
                self.attach_fill(node, handle)?;
                false
            }
            NodeKind::Text => {
                self.attach_text(node, handle)?;
                true
            }
            NodeKind::Unknown => false,
        };

        let mut text_child = false;
        for child in &node.children {
            if let Err(err) = validate_node(child, self.ids) {
                warn!(parent = %node.id, error = %err, "skipping invalid subtree");
                self.report
                    .push(Diagnostic::new(child.id.clone(), DiagnosticKind::InvalidInput(err)));
                continue;
            }
            text_child |= self.build(child, handle)?.has_text;
        }

        if matches!(node.kind, NodeKind::Instance | NodeKind::Component) {
            // A pressable without a label keeps the target's default transition.
            let base = node.fill.unwrap_or(Color::WHITE);
            let colors = text_child.then(|| interaction_colors(base));
            self.scene
                .attach_interactive_facet(handle, &InteractiveFacet { colors })
                .map_err(scene_err)?;
        }

        self.index.record(node.id.clone(), handle);
        debug!(node = %node.id, kind = %node.kind, object = ?handle, "converted node");
        Ok(Built { handle, has_text })
    }

    fn attach_fill(&mut self, node: &DesignNode, handle: S::Handle) -> Result<()> {
        let converter = self.converter;
        let styles = &converter.styles;

        self.scene
            .attach_fill_facet(handle, &FillFacet { color: node.fill })
            .map_err(|source| ConvertError::collaborator(&node.id, source))?;

        if let Some(radius) = node.corner_radius.filter(|r| r.is_rounded()) {
            self.apply_style(node, handle, StyleKind::RoundedCorners, &styles.corners, &radius)?;
        }
        if let Some(border) = node.border.filter(|b| b.width > 0.0) {
            self.apply_style(node, handle, StyleKind::Border, &styles.border, &border)?;
        }
        if let Some(shadow) = node.shadow {
            self.apply_style(node, handle, StyleKind::Shadow, &styles.shadow, &shadow)?;
        }
        Ok(())
    }

    fn apply_style<P>(
        &mut self,
        node: &DesignNode,
        handle: S::Handle,
        kind: StyleKind,
        slot: &StrategySlot<S, P>,
        params: &P,
    ) -> Result<()> {
        match slot {
            Capability::Available(strategy) => strategy
                .apply(self.scene, handle, params)
                .map_err(|source| ConvertError::collaborator(&node.id, source)),
            Capability::NotAvailable => {
                warn!(node = %node.id, style = %kind, "style strategy not available");
                self.report
                    .push(Diagnostic::new(node.id.clone(), DiagnosticKind::UnsupportedStyle(kind)));
                Ok(())
            }
        }
    }

    fn attach_text(&mut self, node: &DesignNode, handle: S::Handle) -> Result<()> {
        let content = match node.text.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => node.name.as_str(),
        };

        let converter = self.converter;
        let fonts = &converter.fonts;
        let font = match node.font_family.as_deref().filter(|family| !family.is_empty()) {
            Some(family) => {
                let resolution = fonts.resolve(family);
                if !resolution.is_mapped() {
                    info!(node = %node.id, family, "no font mapping, using default");
                    self.report.push(Diagnostic::new(
                        node.id.clone(),
                        DiagnosticKind::MissingFontMapping {
                            family: family.to_string(),
                        },
                    ));
                }
                resolution.into_handle()
            }
            None => fonts.default_font().clone(),
        };

        let font_size = node
            .font_size
            .filter(|size| size.is_finite() && *size > 0.0)
            .map(|size| (size.round() as u32).max(1));

        let facet = TextFacet {
            content: content.to_string(),
            color: node.fill,
            font_size,
            font,
            alignment: TextAlignment::MiddleCenter,
        };
        self.scene
            .attach_text_facet(handle, &facet)
            .map_err(|source| ConvertError::collaborator(&node.id, source))
    }

    /// Destroy an object that never made it into the tree.
    fn discard(&mut self, handle: S::Handle) {
        if self.created_root == Some(handle) {
            self.created_root = None;
        }
        if let Err(err) = self.scene.destroy_object(handle) {
            warn!(object = ?handle, error = %err, "could not discard detached object");
        }
    }

    /// Destroy whatever this pass attached to the scene.
    fn rollback(&mut self) {
        if let Some(root) = self.created_root.take() {
            if let Err(err) = self.scene.destroy_object(root) {
                warn!(object = ?root, error = %err, "could not roll back partial tree");
            }
        }
    }
}
