//! The design node tree.
//!
//! A [`DesignNode`] is passive data: identity, a kind tag, geometry, optional
//! styling and an ordered list of children. Child order is the layer order of
//! the source document (later entries are drawn on top) and is preserved
//! exactly as supplied.

use serde::{Deserialize, Serialize};

use crate::types::{Border, Color, CornerRadius, Geometry, Shadow};

/// The kind tag of a design node.
///
/// Parsed case-insensitively; anything unrecognized becomes [`NodeKind::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum NodeKind {
    Frame,
    Rectangle,
    Text,
    Instance,
    Component,
    #[default]
    Unknown,
}

impl NodeKind {
    /// Parse a kind tag, ignoring case and surrounding whitespace.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "frame" => NodeKind::Frame,
            "rectangle" => NodeKind::Rectangle,
            "text" => NodeKind::Text,
            "instance" => NodeKind::Instance,
            "component" => NodeKind::Component,
            _ => NodeKind::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Frame => "Frame",
            NodeKind::Rectangle => "Rectangle",
            NodeKind::Text => "Text",
            NodeKind::Instance => "Instance",
            NodeKind::Component => "Component",
            NodeKind::Unknown => "Unknown",
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        NodeKind::parse(&tag)
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of an imported design tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawNode", rename_all = "camelCase")]
pub struct DesignNode {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub geometry: Geometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<CornerRadius>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DesignNode>,
}

impl DesignNode {
    /// Create a node with the given identity and no styling.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn frame(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Frame)
    }

    pub fn rectangle(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Rectangle)
    }

    pub fn text(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Text)
    }

    pub fn instance(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Instance)
    }

    pub fn component(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, NodeKind::Component)
    }

    /// Set the geometry.
    pub fn with_geometry(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.geometry = Geometry::new(x, y, width, height);
        self
    }

    /// Set the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set the text content.
    pub fn with_content(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the font family and size.
    pub fn with_font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font_family = Some(family.into());
        self.font_size = Some(size);
        self
    }

    pub fn with_corner_radius(mut self, radius: CornerRadius) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Append a child (drawn above earlier children).
    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = DesignNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// True when a corner radius group is present with any positive corner.
    pub fn has_corner_radius(&self) -> bool {
        self.corner_radius.is_some_and(|r| r.is_rounded())
    }

    /// True when a border with positive width is present.
    pub fn has_border(&self) -> bool {
        self.border.is_some_and(|b| b.width > 0.0)
    }

    /// Iterate over this node and all descendants in pre-order.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }
}

/// Pre-order iterator over a design subtree.
pub struct Walk<'a> {
    stack: Vec<&'a DesignNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a DesignNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Wire form of a node, accepting the flat spellings design tools export.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default, alias = "type")]
    kind: Option<NodeKind>,
    #[serde(default)]
    geometry: Option<Geometry>,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
    #[serde(default)]
    width: f32,
    #[serde(default)]
    height: f32,
    #[serde(default, alias = "color")]
    fill: Option<Color>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    font_size: Option<f32>,
    #[serde(default)]
    font_family: Option<String>,
    #[serde(default)]
    corner_radius: Option<CornerRadius>,
    #[serde(default)]
    border: Option<Border>,
    #[serde(default)]
    shadow: Option<Shadow>,
    #[serde(default)]
    effects: Option<RawEffects>,
    #[serde(default)]
    children: Option<Vec<DesignNode>>,
}

#[derive(Deserialize)]
struct RawEffects {
    #[serde(default)]
    shadow: Option<Shadow>,
}

impl From<RawNode> for DesignNode {
    fn from(raw: RawNode) -> Self {
        let geometry = raw
            .geometry
            .unwrap_or(Geometry::new(raw.x, raw.y, raw.width, raw.height));
        // Exporters write 0 for an unset font size.
        let font_size = raw.font_size.filter(|size| *size != 0.0);
        let shadow = raw.shadow.or(raw.effects.and_then(|e| e.shadow));

        DesignNode {
            id: raw.id,
            name: raw.name,
            kind: raw.kind.unwrap_or_default(),
            geometry,
            fill: raw.fill,
            text: raw.text,
            font_size,
            font_family: raw.font_family,
            corner_radius: raw.corner_radius,
            border: raw.border,
            shadow,
            children: raw.children.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_is_case_insensitive() {
        assert_eq!(NodeKind::parse("FRAME"), NodeKind::Frame);
        assert_eq!(NodeKind::parse("rectangle"), NodeKind::Rectangle);
        assert_eq!(NodeKind::parse(" Text "), NodeKind::Text);
        assert_eq!(NodeKind::parse("INSTANCE"), NodeKind::Instance);
        assert_eq!(NodeKind::parse("Component"), NodeKind::Component);
        assert_eq!(NodeKind::parse("vector"), NodeKind::Unknown);
        assert_eq!(NodeKind::parse(""), NodeKind::Unknown);
    }

    #[test]
    fn test_deserialize_flat_node() {
        let json = r##"{
            "id": "1:2",
            "name": "Card",
            "type": "FRAME",
            "x": 10, "y": 20, "width": 100, "height": 50,
            "color": {"r": 1.0, "g": 1.0, "b": 1.0, "a": 1.0},
            "fontSize": 0,
            "effects": {"shadow": {"x": 2, "y": 4, "blur": 6, "color": "#00000080"}},
            "children": null,
            "somethingElse": true
        }"##;
        let node: DesignNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.id, "1:2");
        assert_eq!(node.kind, NodeKind::Frame);
        assert_eq!(node.geometry, Geometry::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(node.fill, Some(Color::WHITE));
        assert_eq!(node.font_size, None);
        assert_eq!(
            node.shadow,
            Some(Shadow::new(2.0, 4.0, 6.0, Color::rgba(0, 0, 0, 128)))
        );
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_deserialize_nested_geometry_wins() {
        let json = r#"{
            "id": "a", "name": "A", "kind": "text",
            "geometry": {"x": 1, "y": 2, "width": 3, "height": 4},
            "x": 99
        }"#;
        let node: DesignNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Text);
        assert_eq!(node.geometry, Geometry::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_children_order_preserved() {
        let json = r#"{
            "id": "root", "name": "Root", "type": "frame",
            "children": [
                {"id": "c", "name": "C"},
                {"id": "a", "name": "A"},
                {"id": "b", "name": "B", "children": [{"id": "b1", "name": "B1"}]}
            ]
        }"#;
        let node: DesignNode = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = node.walk().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["root", "c", "a", "b", "b1"]);
        assert_eq!(node.children[0].kind, NodeKind::Unknown);
        assert_eq!(node.node_count(), 5);
    }

    #[test]
    fn test_serialize_round_trip() {
        let node = DesignNode::instance("btn", "Button")
            .with_geometry(0.0, 0.0, 120.0, 40.0)
            .with_fill(Color::rgb(200, 100, 50))
            .with_corner_radius(CornerRadius::uniform(4.0))
            .with_child(DesignNode::text("lbl", "Label").with_content("OK"));

        let json = serde_json::to_string(&node).unwrap();
        let back: DesignNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_style_helpers() {
        let plain = DesignNode::frame("f", "F");
        assert!(!plain.has_corner_radius());
        assert!(!plain.has_border());

        let styled = plain
            .with_corner_radius(CornerRadius::new(0.0, 0.0, 0.0, 3.0))
            .with_border(Border::new(1.0, Color::BLACK));
        assert!(styled.has_corner_radius());
        assert!(styled.has_border());
    }
}
