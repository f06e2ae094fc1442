//! Icon definitions.
//!
//! An [`IconDefinition`] identifies one generated icon. Icons come from two
//! sources:
//!
//! - [`IconSource::Symbol`]: a `<symbol>` of a sprite, compiled from its
//!   [`ShapeNode`] tree
//! - [`IconSource::Local`]: a standalone `.svg` file whose markup is embedded
//!   verbatim and rendered by `SvgXml` or `SvgCss`

use crate::shape::ShapeNode;

/// One icon of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDefinition {
    id: String,
    source: IconSource,
}

impl IconDefinition {
    /// Create an icon from a sprite symbol.
    ///
    /// # Arguments
    ///
    /// * `id` - Raw symbol identifier, unique within the batch.
    /// * `symbol` - The symbol's viewBox and shape tree.
    pub fn symbol(id: impl Into<String>, symbol: SymbolIcon) -> Self {
        Self {
            id: id.into(),
            source: IconSource::Symbol(symbol),
        }
    }

    /// Create an icon from a standalone vector file.
    ///
    /// # Arguments
    ///
    /// * `id` - File name without extension.
    /// * `svg` - The file's markup and style mode.
    pub fn local(id: impl Into<String>, svg: LocalSvg) -> Self {
        Self {
            id: id.into(),
            source: IconSource::Local(svg),
        }
    }

    /// Returns the raw source identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns where this icon's content comes from.
    pub fn source(&self) -> &IconSource {
        &self.source
    }
}

/// Content of an icon, by origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconSource {
    /// A symbol of a sprite, compiled from its shape tree.
    Symbol(SymbolIcon),
    /// A standalone file, embedded as raw markup.
    Local(LocalSvg),
}

/// A sprite symbol: its declared viewBox and its shape tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolIcon {
    view_box: String,
    root: ShapeNode,
}

impl SymbolIcon {
    /// Create a symbol icon.
    ///
    /// `root` is the `<symbol>` node itself; only its children are rendered,
    /// inside a viewport carrying `view_box`. The viewBox string is not
    /// validated.
    pub fn new(view_box: impl Into<String>, root: ShapeNode) -> Self {
        Self {
            view_box: view_box.into(),
            root,
        }
    }

    /// Returns the declared viewBox.
    pub fn view_box(&self) -> &str {
        &self.view_box
    }

    /// Returns the `<symbol>` node.
    pub fn root(&self) -> &ShapeNode {
        &self.root
    }
}

/// How a standalone file is rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LocalSvgStyle {
    /// Plain markup rendered with `SvgXml`.
    #[default]
    Xml,
    /// Markup with an embedded stylesheet, rendered with `SvgCss`.
    Css,
}

impl LocalSvgStyle {
    /// Returns the `react-native-svg` component rendering this style.
    pub fn component_name(&self) -> &'static str {
        match self {
            Self::Xml => "SvgXml",
            Self::Css => "SvgCss",
        }
    }
}

/// A standalone vector file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSvg {
    markup: String,
    style: LocalSvgStyle,
}

impl LocalSvg {
    /// Create a standalone file entry.
    pub fn new(markup: impl Into<String>, style: LocalSvgStyle) -> Self {
        Self {
            markup: markup.into(),
            style,
        }
    }

    /// Returns the markup embedded in the generated component.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Returns the rendering style.
    pub fn style(&self) -> LocalSvgStyle {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeKind;

    #[test]
    fn test_symbol_icon() {
        let root = ShapeNode::new(ShapeKind::Symbol).with_attribute("id", "icon-home");
        let icon = IconDefinition::symbol("icon-home", SymbolIcon::new("0 0 1024 1024", root));

        assert_eq!(icon.id(), "icon-home");
        match icon.source() {
            IconSource::Symbol(symbol) => {
                assert_eq!(symbol.view_box(), "0 0 1024 1024");
                assert_eq!(symbol.root().kind(), ShapeKind::Symbol);
            }
            IconSource::Local(_) => panic!("Expected symbol source"),
        }
    }

    #[test]
    fn test_local_svg_defaults_to_xml() {
        assert_eq!(LocalSvgStyle::default(), LocalSvgStyle::Xml);
        assert_eq!(LocalSvgStyle::Xml.component_name(), "SvgXml");
        assert_eq!(LocalSvgStyle::Css.component_name(), "SvgCss");
    }
}
