//! Design-tree to scene-graph conversion engine.
//!
//! This crate turns a [`DesignNode`](frameport_core::DesignNode) tree into an
//! equivalent tree of objects in any [`SceneGraph`](frameport_scene::SceneGraph).
//!
//! # Architecture
//!
//! 1. **Validation**: each node is checked before anything is created for it
//! 2. **Placement**: design-space geometry is mapped through an [`AxisPolicy`]
//! 3. **Dispatch**: the node kind decides which facets are attached
//! 4. **Recursion**: children are converted in input order under their parent
//! 5. **Indexing**: every converted node is recorded in a [`ConversionIndex`]
//!
//! Rounded corners, borders and shadows go through [`StyleStrategies`];
//! a missing strategy is reported in the [`ConversionReport`], not raised.
//!
//! # Example
//!
//! ```ignore
//! use frameport_convert::{Converter, ConvertOptions, FontRegistry};
//! use frameport_scene::MemoryScene;
//!
//! let doc = frameport_core::parse_document(json)?;
//! let mut scene = MemoryScene::new();
//! let canvas = scene.create_container("Canvas");
//!
//! let converter = Converter::new(ConvertOptions::default(), FontRegistry::default());
//! let forest = converter.convert_forest(&mut scene, &doc.nodes, canvas);
//! for diagnostic in &forest.report {
//!     println!("{diagnostic}");
//! }
//! ```

mod clear;
mod engine;
mod error;
mod fonts;
mod index;
mod options;
mod report;
mod styles;

pub use clear::clear_generated;
pub use engine::{
    interaction_colors, Conversion, Converter, ForestConversion, HIGHLIGHTED_BRIGHTNESS,
    PRESSED_BRIGHTNESS,
};
pub use error::{ConvertError, Result};
pub use fonts::{FontRegistry, FontResolution, FontTable, DEFAULT_FONT};
pub use index::ConversionIndex;
pub use options::{AxisPolicy, ConvertOptions, DEFAULT_NAME_PREFIX};
pub use report::{ConversionReport, Diagnostic, DiagnosticKind};
pub use styles::{Capability, RecordStyle, StrategySlot, StyleKind, StyleStrategies, StyleStrategy};
