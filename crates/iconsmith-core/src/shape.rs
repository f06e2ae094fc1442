//! Shape tree definitions.
//!
//! This module defines the closed set of shape elements an icon may be built
//! from and the tree structure that holds one icon's composition.
//!
//! # Overview
//!
//! - [`ShapeKind`]: Enum of every supported element kind, with its markup tag
//!   name and its `react-native-svg` component name
//! - [`ShapeNode`]: One element of a shape tree: kind, ordered attributes and
//!   ordered children
//! - [`Attributes`]: Insertion-ordered attribute map
//!
//! # Example
//!
//! ```
//! use iconsmith_core::shape::{ShapeKind, ShapeNode};
//!
//! let path = ShapeNode::new(ShapeKind::Path)
//!     .with_attribute("d", "M0 0h24v24H0z")
//!     .with_attribute("fill", "#333333");
//! let group = ShapeNode::new(ShapeKind::Group).with_child(path);
//!
//! assert_eq!(group.children().len(), 1);
//! assert_eq!(group.children()[0].attribute("fill"), Some("#333333"));
//! ```

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use thiserror::Error;

/// Attribute map of a single element, in document order.
pub type Attributes = IndexMap<String, String>;

/// Error returned when a tag name does not name a supported shape element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported shape element `{0}`")]
pub struct UnsupportedShapeKind(pub String);

/// The supported shape element kinds.
///
/// The set is closed: any other element is rejected when markup is turned
/// into a [`ShapeNode`] tree. Declaration order is the order in which
/// component names are listed in generated import lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    /// `<path>`
    Path,
    /// `<g>`
    Group,
    /// `<symbol>`
    Symbol,
    /// `<defs>`
    Defs,
    /// `<circle>`
    Circle,
    /// `<rect>`
    Rect,
    /// `<linearGradient>`
    LinearGradient,
    /// `<stop>`
    Stop,
    /// `<mask>`
    Mask,
}

impl ShapeKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [ShapeKind; 9] = [
        Self::Path,
        Self::Group,
        Self::Symbol,
        Self::Defs,
        Self::Circle,
        Self::Rect,
        Self::LinearGradient,
        Self::Stop,
        Self::Mask,
    ];

    /// Returns the markup tag name for this kind.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Group => "g",
            Self::Symbol => "symbol",
            Self::Defs => "defs",
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::LinearGradient => "linearGradient",
            Self::Stop => "stop",
            Self::Mask => "mask",
        }
    }

    /// Returns the `react-native-svg` component rendering this kind.
    pub fn component_name(&self) -> &'static str {
        match self {
            Self::Path => "Path",
            Self::Group => "G",
            Self::Symbol => "Symbol",
            Self::Defs => "Defs",
            Self::Circle => "Circle",
            Self::Rect => "Rect",
            Self::LinearGradient => "LinearGradient",
            Self::Stop => "Stop",
            Self::Mask => "Mask",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = UnsupportedShapeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag_name() == s)
            .ok_or_else(|| UnsupportedShapeKind(s.to_string()))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// One element of an icon's shape tree.
///
/// A node is built once from parsed markup and is not modified while it is
/// compiled. A node without attributes is a *degenerate wrapper*: it only
/// groups its children and never produces markup of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeNode {
    kind: ShapeKind,
    attributes: Attributes,
    children: Vec<ShapeNode>,
}

impl ShapeNode {
    /// Create a node of the given kind with no attributes and no children.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Create a node from all of its parts.
    pub fn from_parts(kind: ShapeKind, attributes: Attributes, children: Vec<ShapeNode>) -> Self {
        Self {
            kind,
            attributes,
            children,
        }
    }

    /// Returns a copy of this node with the attribute appended.
    ///
    /// Setting an attribute that already exists replaces its value and keeps
    /// its original position.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Returns a copy of this node with the child appended.
    pub fn with_child(mut self, child: ShapeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Returns a copy of this node with all children appended in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = ShapeNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns the element kind.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the attributes in document order.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the value of a single attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the children in document order.
    pub fn children(&self) -> &[ShapeNode] {
        &self.children
    }

    /// Returns `true` if this node carries no attributes of its own.
    pub fn is_degenerate(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_from_tag_name() {
        assert_eq!("g".parse::<ShapeKind>(), Ok(ShapeKind::Group));
        assert_eq!("path".parse::<ShapeKind>(), Ok(ShapeKind::Path));
        assert_eq!(
            "linearGradient".parse::<ShapeKind>(),
            Ok(ShapeKind::LinearGradient)
        );
    }

    #[test]
    fn test_shape_kind_rejects_unknown_tags() {
        assert_eq!(
            "text".parse::<ShapeKind>(),
            Err(UnsupportedShapeKind("text".to_string()))
        );
        // Tag names are case sensitive
        assert!("Path".parse::<ShapeKind>().is_err());
        assert!("lineargradient".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_shape_kind_round_trips_through_tag_name() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.tag_name().parse::<ShapeKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_shape_kind_component_names() {
        assert_eq!(ShapeKind::Group.component_name(), "G");
        assert_eq!(ShapeKind::Rect.component_name(), "Rect");
        assert_eq!(ShapeKind::Stop.component_name(), "Stop");
    }

    #[test]
    fn test_unsupported_shape_kind_message() {
        let err = "foreignObject".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported shape element `foreignObject`");
    }

    #[test]
    fn test_shape_node_keeps_attribute_order() {
        let node = ShapeNode::new(ShapeKind::Path)
            .with_attribute("fill", "#fff")
            .with_attribute("d", "M0 0")
            .with_attribute("opacity", ".1");

        let names: Vec<_> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(names, ["fill", "d", "opacity"]);
    }

    #[test]
    fn test_shape_node_replacing_attribute_keeps_position() {
        let node = ShapeNode::new(ShapeKind::Path)
            .with_attribute("fill", "#fff")
            .with_attribute("d", "M0 0")
            .with_attribute("fill", "#000");

        let names: Vec<_> = node.attributes().keys().map(String::as_str).collect();
        assert_eq!(names, ["fill", "d"]);
        assert_eq!(node.attribute("fill"), Some("#000"));
    }

    #[test]
    fn test_shape_node_degenerate() {
        let wrapper =
            ShapeNode::new(ShapeKind::Group).with_child(ShapeNode::new(ShapeKind::Path));
        assert!(wrapper.is_degenerate());

        let group = ShapeNode::new(ShapeKind::Group).with_attribute("fill", "none");
        assert!(!group.is_degenerate());
    }
}
