//! Non-fatal findings collected during a conversion.

use std::fmt;

use frameport_core::ModelError;
use frameport_scene::SceneError;

use crate::error::ConvertError;
use crate::styles::StyleKind;

/// What was found.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticKind {
    /// A malformed node; its subtree was skipped.
    InvalidInput(ModelError),
    /// A root whose conversion the scene graph aborted.
    Collaborator(SceneError),
    /// A style was requested but no strategy is available; only that style was skipped.
    UnsupportedStyle(StyleKind),
    /// A font family had no mapping; the default font was used.
    MissingFontMapping { family: String },
}

/// A finding attached to the node it concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub node_id: String,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(node_id: impl Into<String>, kind: DiagnosticKind) -> Self {
        Self {
            node_id: node_id.into(),
            kind,
        }
    }

    /// True for malformed input and scene failures, false for capability
    /// gaps and informational notes.
    pub fn is_error(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticKind::InvalidInput(_) | DiagnosticKind::Collaborator(_)
        )
    }
}

impl From<&ConvertError> for Diagnostic {
    fn from(err: &ConvertError) -> Self {
        match err {
            ConvertError::InvalidInput { id, source } => {
                Diagnostic::new(id.clone(), DiagnosticKind::InvalidInput(source.clone()))
            }
            ConvertError::Collaborator { id, source } => {
                Diagnostic::new(id.clone(), DiagnosticKind::Collaborator(source.clone()))
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::InvalidInput(err) => write!(f, "invalid input: {err}"),
            DiagnosticKind::Collaborator(err) => {
                write!(f, "scene graph failure at node {:?}: {err}", self.node_id)
            }
            DiagnosticKind::UnsupportedStyle(style) => {
                write!(f, "node {:?}: {style} not available, skipped", self.node_id)
            }
            DiagnosticKind::MissingFontMapping { family } => {
                write!(f, "node {:?}: no font mapped for {family:?}, using default", self.node_id)
            }
        }
    }
}

/// Ordered list of diagnostics from one conversion call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionReport {
    diagnostics: Vec<Diagnostic>,
}

impl ConversionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append every diagnostic of `other`.
    pub fn extend(&mut self, other: ConversionReport) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Styles that were skipped, with the node they were requested on.
    pub fn unsupported_styles(&self) -> impl Iterator<Item = (&str, StyleKind)> {
        self.diagnostics.iter().filter_map(|d| match d.kind {
            DiagnosticKind::UnsupportedStyle(style) => Some((d.node_id.as_str(), style)),
            _ => None,
        })
    }

    /// Diagnostics concerning one node.
    pub fn for_node<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics.iter().filter(move |d| d.node_id == id)
    }
}

impl<'a> IntoIterator for &'a ConversionReport {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}
