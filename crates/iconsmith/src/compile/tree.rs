//! Shape tree compilation.
//!
//! Turns a [`ShapeNode`] tree into nested `react-native-svg` markup. Each
//! child of a node is rendered in one of three ways:
//!
//! - **Self-closing**: a child with attributes and no children
//! - **Container**: a child with attributes and children, which are compiled
//!   four columns deeper
//! - **Degenerate**: a child without attributes emits no tag; its children
//!   are rendered in its place at the same depth
//!
//! Attributes do not follow the nesting: every attribute line sits four
//! columns past the indent the compilation started from.

use std::collections::BTreeSet;

use iconsmith_core::{
    icon::SymbolIcon,
    shape::{ShapeKind, ShapeNode},
};

use super::attributes::{ColorSlots, serialize_attributes};

/// Indentation of the `<Svg>` root inside a generated component.
pub const ICON_INDENT: usize = 4;

/// Output of [`compile_tree`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompiledTree {
    markup: String,
    shape_kinds: BTreeSet<ShapeKind>,
}

impl CompiledTree {
    /// Returns the rendered markup of the node's children.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Returns every kind found below the node, in declaration order.
    pub fn shape_kinds(&self) -> &BTreeSet<ShapeKind> {
        &self.shape_kinds
    }
}

/// Render the children of `node`.
///
/// Tags are written at `indent + 2`; container contents recurse with
/// `indent + 4`. Attributes stay at `indent + 4` at every depth. Fill colors
/// take slots from `slots` in depth-first document order.
pub fn compile_tree(node: &ShapeNode, indent: usize, slots: &mut ColorSlots) -> CompiledTree {
    let mut tree = CompiledTree::default();
    let layout = Layout {
        indent,
        attribute_indent: indent + 4,
    };
    compile_children(node, layout, slots, &mut tree);
    tree
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    indent: usize,
    attribute_indent: usize,
}

impl Layout {
    fn deeper(self) -> Self {
        Self {
            indent: self.indent + 4,
            ..self
        }
    }
}

fn compile_children(node: &ShapeNode, layout: Layout, slots: &mut ColorSlots, tree: &mut CompiledTree) {
    let tag_indent = layout.indent + 2;

    for child in node.children() {
        tree.shape_kinds.insert(child.kind());

        if child.is_degenerate() {
            compile_children(child, layout, slots, tree);
            continue;
        }

        let tag = child.kind().component_name();
        let attributes = serialize_attributes(child.attributes(), layout.attribute_indent, slots);

        tree.markup.push_str(&format!("{:tag_indent$}<{tag}{attributes}\n", ""));
        if child.children().is_empty() {
            tree.markup.push_str(&format!("{:tag_indent$}/>\n", ""));
        } else {
            tree.markup.push_str(&format!("{:tag_indent$}>\n", ""));
            compile_children(child, layout.deeper(), slots, tree);
            tree.markup.push_str(&format!("{:tag_indent$}</{tag}>\n", ""));
        }
    }
}

/// A compiled symbol icon, ready to be injected into a component template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledMarkup {
    markup: String,
    shape_kinds: BTreeSet<ShapeKind>,
    color_slots: ColorSlots,
}

impl CompiledMarkup {
    /// Returns the `<Svg>` element with the icon's shapes inside.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Returns the shape kinds the component must import.
    pub fn shape_kinds(&self) -> &BTreeSet<ShapeKind> {
        &self.shape_kinds
    }

    /// Returns the color slots of the icon.
    pub fn color_slots(&self) -> &ColorSlots {
        &self.color_slots
    }
}

/// Compile a symbol into a `<Svg>` root wrapping its shapes.
///
/// Every icon starts with a fresh set of color slots.
pub fn compile_icon(symbol: &SymbolIcon) -> CompiledMarkup {
    let mut color_slots = ColorSlots::new();
    let tree = compile_tree(symbol.root(), ICON_INDENT, &mut color_slots);

    let markup = format!(
        "\n{:ICON_INDENT$}<Svg viewBox=\"{}\" width={{size}} height={{size}} {{...rest}}>\n{}{:ICON_INDENT$}</Svg>\n",
        "",
        symbol.view_box(),
        tree.markup,
        "",
    );

    CompiledMarkup {
        markup,
        shape_kinds: tree.shape_kinds,
        color_slots,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn path(d: &str) -> ShapeNode {
        ShapeNode::new(ShapeKind::Path).with_attribute("d", d)
    }

    #[test]
    fn test_self_closing_child() {
        let root = ShapeNode::new(ShapeKind::Symbol).with_child(path("M0"));
        let tree = compile_tree(&root, 4, &mut ColorSlots::new());

        assert_eq!(tree.markup(), "      <Path\n        d=\"M0\"\n      />\n");
        assert_eq!(tree.shape_kinds().iter().copied().collect::<Vec<_>>(), [ShapeKind::Path]);
    }

    #[test]
    fn test_two_level_example() {
        let root = ShapeNode::new(ShapeKind::Symbol).with_child(
            ShapeNode::new(ShapeKind::Group)
                .with_attribute("fill", "none")
                .with_child(
                    ShapeNode::new(ShapeKind::Path)
                        .with_attribute("fill", "#ABCDEF")
                        .with_attribute("stroke-width", "2"),
                ),
        );
        let mut slots = ColorSlots::new();
        let tree = compile_tree(&root, 4, &mut slots);

        let expected = concat!(
            "      <G\n",
            "        fill='none'\n",
            "      >\n",
            "          <Path\n",
            "        fill={getIconColor(color, 0, '#ABCDEF')}\n",
            "        strokeWidth=\"2\"\n",
            "          />\n",
            "      </G>\n",
        );
        assert_eq!(tree.markup(), expected);
        assert_eq!(slots.defaults(), ["#ABCDEF"]);
        assert_eq!(
            tree.shape_kinds().iter().copied().collect::<Vec<_>>(),
            [ShapeKind::Path, ShapeKind::Group]
        );
    }

    #[test]
    fn test_attributes_keep_fixed_column() {
        let root = ShapeNode::new(ShapeKind::Symbol).with_child(
            ShapeNode::new(ShapeKind::Group)
                .with_attribute("opacity", "1")
                .with_child(
                    ShapeNode::new(ShapeKind::Group)
                        .with_attribute("opacity", "2")
                        .with_child(path("M2")),
                ),
        );
        let tree = compile_tree(&root, 4, &mut ColorSlots::new());

        let attribute_columns: Vec<usize> = tree
            .markup()
            .lines()
            .filter(|line| line.contains('='))
            .map(|line| line.len() - line.trim_start().len())
            .collect();
        assert_eq!(attribute_columns, [8, 8, 8]);
        assert!(tree.markup().contains("              <Path\n        d=\"M2\"\n              />\n"));
    }

    #[test]
    fn test_degenerate_wrapper_emits_no_tag() {
        let root = ShapeNode::new(ShapeKind::Symbol).with_child(
            ShapeNode::new(ShapeKind::Group)
                .with_child(path("M1"))
                .with_child(ShapeNode::new(ShapeKind::Defs)),
        );
        let tree = compile_tree(&root, 4, &mut ColorSlots::new());

        assert_eq!(tree.markup(), "      <Path\n        d=\"M1\"\n      />\n");
        assert!(!tree.markup().contains("<G"));
        assert!(!tree.markup().contains("<Defs"));
        // Kinds of degenerate nodes are still collected
        assert_eq!(
            tree.shape_kinds().iter().copied().collect::<Vec<_>>(),
            [ShapeKind::Path, ShapeKind::Group, ShapeKind::Defs]
        );
    }

    #[test]
    fn test_children_in_document_order() {
        let root = ShapeNode::new(ShapeKind::Symbol)
            .with_child(ShapeNode::new(ShapeKind::Rect).with_attribute("fill", "#1"))
            .with_child(ShapeNode::new(ShapeKind::Path).with_attribute("fill", "#2"))
            .with_child(ShapeNode::new(ShapeKind::Rect).with_attribute("fill", "#3"));
        let mut slots = ColorSlots::new();
        let tree = compile_tree(&root, 0, &mut slots);

        let rect = tree.markup().find("'#1'").unwrap();
        let path = tree.markup().find("'#2'").unwrap();
        let second_rect = tree.markup().find("'#3'").unwrap();
        assert!(rect < path && path < second_rect);
        assert_eq!(slots.defaults(), ["#1", "#2", "#3"]);
    }

    #[test]
    fn test_compile_icon() {
        let root = ShapeNode::new(ShapeKind::Symbol)
            .with_attribute("id", "icon-dot")
            .with_attribute("viewBox", "0 0 24 24")
            .with_child(
                ShapeNode::new(ShapeKind::Circle)
                    .with_attribute("r", "4")
                    .with_attribute("fill", "#333333"),
            );
        let compiled = compile_icon(&SymbolIcon::new("0 0 24 24", root));

        let expected = concat!(
            "\n",
            "    <Svg viewBox=\"0 0 24 24\" width={size} height={size} {...rest}>\n",
            "      <Circle\n",
            "        r=\"4\"\n",
            "        fill={getIconColor(color, 0, '#333333')}\n",
            "      />\n",
            "    </Svg>\n",
        );
        assert_eq!(compiled.markup(), expected);
        assert_eq!(compiled.color_slots().len(), 1);
        assert!(!compiled.shape_kinds().contains(&ShapeKind::Symbol));
    }

    #[test]
    fn test_empty_symbol() {
        let compiled = compile_icon(&SymbolIcon::new("0 0 1 1", ShapeNode::new(ShapeKind::Symbol)));

        assert_eq!(
            compiled.markup(),
            "\n    <Svg viewBox=\"0 0 1 1\" width={size} height={size} {...rest}>\n    </Svg>\n"
        );
        assert!(compiled.shape_kinds().is_empty());
    }

    /// Build a random tree whose fills are numbered in depth-first order.
    fn shape_tree() -> impl Strategy<Value = ShapeNode> {
        let leaf = prop_oneof![
            Just(ShapeNode::new(ShapeKind::Path).with_attribute("fill", "#000")),
            Just(ShapeNode::new(ShapeKind::Path).with_attribute("fill", "none")),
            Just(ShapeNode::new(ShapeKind::Circle).with_attribute("r", "1")),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            (
                prop::collection::vec(inner, 0..4),
                prop_oneof![Just(None), Just(Some("none")), Just(Some("#111"))],
            )
                .prop_map(|(children, fill)| {
                    let group = ShapeNode::new(ShapeKind::Group).with_children(children);
                    match fill {
                        Some(fill) => group.with_attribute("fill", fill),
                        None => group,
                    }
                })
        })
    }

    fn count_slotted_fills(node: &ShapeNode) -> usize {
        let own = usize::from(node.attribute("fill").is_some_and(|fill| fill != "none"));
        own + node.children().iter().map(count_slotted_fills).sum::<usize>()
    }

    fn max_tag_depth(node: &ShapeNode) -> usize {
        node.children()
            .iter()
            .map(|child| {
                let depth = max_tag_depth(child);
                if child.is_degenerate() { depth } else { depth + 1 }
            })
            .max()
            .unwrap_or(0)
    }

    proptest! {
        #[test]
        fn color_slots_follow_document_order(tree in shape_tree()) {
            let root = ShapeNode::new(ShapeKind::Symbol).with_child(tree);
            let mut slots = ColorSlots::new();
            let compiled = compile_tree(&root, 4, &mut slots);

            prop_assert_eq!(slots.len(), count_slotted_fills(&root));

            // Slot indices appear in the markup in increasing order
            let indices: Vec<usize> = compiled
                .markup()
                .match_indices("getIconColor(color, ")
                .map(|(at, needle)| {
                    let rest = &compiled.markup()[at + needle.len()..];
                    rest[..rest.find(',').unwrap()].parse().unwrap()
                })
                .collect();
            prop_assert_eq!(indices, (0..slots.len()).collect::<Vec<_>>());

            // Compiling again is deterministic
            let again = compile_tree(&root, 4, &mut ColorSlots::new());
            prop_assert_eq!(again, compiled);
        }

        #[test]
        fn markup_is_balanced(tree in shape_tree()) {
            let root = ShapeNode::new(ShapeKind::Symbol).with_child(tree);
            let compiled = compile_tree(&root, 4, &mut ColorSlots::new());

            let opened = compiled.markup().lines().filter(|line| line.trim_start() == ">").count();
            let closed = compiled.markup().lines().filter(|line| line.trim_start().starts_with("</")).count();
            prop_assert_eq!(opened, closed);

            // Tag depth equals the number of attribute-carrying ancestors
            let deepest = compiled
                .markup()
                .lines()
                .filter(|line| line.trim_start().starts_with('<') && !line.trim_start().starts_with("</"))
                .map(|line| line.len() - line.trim_start().len())
                .max();
            match max_tag_depth(&root) {
                0 => prop_assert_eq!(deepest, None),
                depth => prop_assert_eq!(deepest, Some(6 + 4 * (depth - 1))),
            }
        }
    }
}
