//! Font family resolution.
//!
//! The registry is built once, populated by the caller, and handed to the
//! converter. Lookups never fail: unmapped families resolve to the default.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use frameport_scene::FontHandle;

/// Font used when a family has no mapping and none was configured.
pub const DEFAULT_FONT: &str = "Arial.ttf";

/// Outcome of a font lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontResolution {
    /// The family was registered.
    Mapped(FontHandle),
    /// The family was unknown; the registry default is used.
    Fallback(FontHandle),
}

impl FontResolution {
    pub fn is_mapped(&self) -> bool {
        matches!(self, FontResolution::Mapped(_))
    }

    pub fn handle(&self) -> &FontHandle {
        match self {
            FontResolution::Mapped(handle) | FontResolution::Fallback(handle) => handle,
        }
    }

    pub fn into_handle(self) -> FontHandle {
        match self {
            FontResolution::Mapped(handle) | FontResolution::Fallback(handle) => handle,
        }
    }
}

/// Serialized form of a font registry.
///
/// ```json
/// { "default": "Roboto.ttf", "fonts": { "Inter": "Inter-Regular.ttf" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub fonts: IndexMap<String, String>,
}

/// A family-name to font mapping with a guaranteed default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRegistry {
    fonts: IndexMap<String, FontHandle>,
    default: FontHandle,
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new(FontHandle::new(DEFAULT_FONT))
    }
}

impl FontRegistry {
    /// Create an empty registry with the given default font.
    pub fn new(default: FontHandle) -> Self {
        Self {
            fonts: IndexMap::new(),
            default,
        }
    }

    /// Build a registry from a font table.
    pub fn from_table(table: FontTable) -> Self {
        let mut registry = match table.default {
            Some(default) => Self::new(FontHandle::new(default)),
            None => Self::default(),
        };
        for (family, font) in table.fonts {
            registry.register(family, FontHandle::new(font));
        }
        registry
    }

    /// Parse a JSON font table.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::from_table)
    }

    /// Register (or replace) the font for a family.
    pub fn register(&mut self, family: impl Into<String>, font: FontHandle) {
        self.fonts.insert(family.into(), font);
    }

    /// Builder form of [`FontRegistry::register`].
    pub fn with_font(mut self, family: impl Into<String>, font: FontHandle) -> Self {
        self.register(family, font);
        self
    }

    /// Resolve a family name. Matching is exact.
    pub fn resolve(&self, family: &str) -> FontResolution {
        match self.fonts.get(family) {
            Some(font) => FontResolution::Mapped(font.clone()),
            None => FontResolution::Fallback(self.default.clone()),
        }
    }

    pub fn default_font(&self) -> &FontHandle {
        &self.default
    }

    pub fn contains(&self, family: &str) -> bool {
        self.fonts.contains_key(family)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
