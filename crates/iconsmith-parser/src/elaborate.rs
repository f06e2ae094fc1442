//! Elaboration of parsed markup into icon definitions.
//!
//! This module walks the [`Element`] tree produced by the markup parser and
//! builds the shape trees of every sprite symbol. Unsupported elements and
//! incomplete symbols are reported through a [`DiagnosticCollector`] so that
//! one run lists every problem of a sprite before it is rejected.

use log::{debug, trace};

use iconsmith_core::{
    icon::{IconDefinition, LocalSvg, LocalSvgStyle, SymbolIcon},
    shape::{Attributes, ShapeKind, ShapeNode},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    markup::Element,
};

/// Check that a document's root element is `<svg>`.
fn expect_svg_root(root: &Element<'_>) -> Result<(), ParseError> {
    if root.name == "svg" {
        return Ok(());
    }

    Err(Diagnostic::error(format!(
        "expected `<svg>` as the root element, found `<{}>`",
        root.name
    ))
    .with_code(ErrorCode::E102)
    .with_label(root.name_span, "root element")
    .into())
}

/// The icons of a sprite, with the warnings raised while reading it.
#[derive(Debug, Clone, Default)]
pub struct ParsedSprite {
    icons: Vec<IconDefinition>,
    warnings: Vec<Diagnostic>,
}

impl ParsedSprite {
    /// Returns the icons in document order.
    pub fn icons(&self) -> &[IconDefinition] {
        &self.icons
    }

    /// Returns the warning diagnostics of the sprite.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Consume the sprite, keeping only its icons.
    pub fn into_icons(self) -> Vec<IconDefinition> {
        self.icons
    }
}

/// Build the icon definitions of a sprite document.
///
/// Only `<symbol>` children of the root are icons. Other children (such as a
/// shared `<defs>` block) are skipped with a `W100` warning.
///
/// # Errors
///
/// Returns every unsupported element, symbol without `id` and symbol without
/// `viewBox` found in the sprite.
pub(crate) fn elaborate_sprite(root: &Element<'_>) -> Result<ParsedSprite, ParseError> {
    expect_svg_root(root)?;

    let mut collector = DiagnosticCollector::new();
    let mut icons = Vec::new();

    for child in &root.children {
        if child.name != "symbol" {
            debug!(element = child.name; "Skipping sprite element outside of a symbol");
            collector.emit(
                Diagnostic::warning(format!("element `{}` is outside of any symbol", child.name))
                    .with_code(ErrorCode::W100)
                    .with_label(child.name_span, "skipped")
                    .with_help("only `<symbol>` children of the sprite become icons"),
            );
            continue;
        }
        if let Some(icon) = elaborate_symbol(child, &mut collector) {
            icons.push(icon);
        }
    }

    let warnings = collector.finish()?;

    debug!(icons = icons.len(), warnings = warnings.len(); "Elaborated sprite symbols");
    Ok(ParsedSprite { icons, warnings })
}

fn elaborate_symbol(symbol: &Element<'_>, collector: &mut DiagnosticCollector) -> Option<IconDefinition> {
    let id = symbol.attribute("id");
    let view_box = symbol.attribute("viewBox");

    if id.is_none() {
        collector.emit(
            Diagnostic::error("symbol has no `id` attribute")
                .with_code(ErrorCode::E201)
                .with_label(symbol.name_span, "symbol without id")
                .with_help("every symbol needs an id to name its component"),
        );
    }
    if view_box.is_none() {
        collector.emit(
            Diagnostic::error("symbol has no `viewBox` attribute")
                .with_code(ErrorCode::E202)
                .with_label(symbol.name_span, "symbol without viewBox"),
        );
    }

    // Children are checked even when the symbol itself is incomplete
    let root = shape_node(ShapeKind::Symbol, symbol, collector);

    let id = id?;
    trace!(id, children = root.children().len(); "Elaborated symbol");
    Some(IconDefinition::symbol(id, SymbolIcon::new(view_box?, root)))
}

fn shape_node(kind: ShapeKind, element: &Element<'_>, collector: &mut DiagnosticCollector) -> ShapeNode {
    let attributes: Attributes = element
        .attributes
        .iter()
        .map(|attribute| (attribute.name.to_string(), attribute.value.to_string()))
        .collect();

    let children = element
        .children
        .iter()
        .filter_map(|child| match child.name.parse::<ShapeKind>() {
            Ok(kind) => Some(shape_node(kind, child, collector)),
            Err(err) => {
                collector.emit(
                    Diagnostic::error(err.to_string())
                        .with_code(ErrorCode::E200)
                        .with_label(child.name_span, "not a supported shape element")
                        .with_secondary_label(element.name_span, "inside this element")
                        .with_help(supported_kinds_help()),
                );
                None
            }
        })
        .collect();

    ShapeNode::from_parts(kind, attributes, children)
}

fn supported_kinds_help() -> String {
    let names: Vec<_> = ShapeKind::ALL.iter().map(ShapeKind::tag_name).collect();
    format!("supported elements are: {}", names.join(", "))
}

/// Build the definition of a standalone vector file.
///
/// The root element's markup is embedded verbatim; anything around it (XML
/// declaration, comments) is dropped. A file containing a `<style>` element
/// is rendered with `SvgCss`.
pub(crate) fn elaborate_local(
    name: &str,
    root: &Element<'_>,
    source: &str,
) -> Result<IconDefinition, ParseError> {
    expect_svg_root(root)?;

    let style = if root.contains("style") {
        LocalSvgStyle::Css
    } else {
        LocalSvgStyle::Xml
    };
    let markup = &source[root.span.range()];

    debug!(name, style = style.component_name(); "Elaborated local svg");
    Ok(IconDefinition::local(name, LocalSvg::new(markup, style)))
}
