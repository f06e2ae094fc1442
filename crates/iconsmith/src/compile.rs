//! Compilation of shape trees into component markup.
//!
//! - [`attributes`] - Attribute serialization and color slot assignment
//! - [`tree`] - Recursive tree rendering and the `<Svg>` root wrapper

pub mod attributes;
pub mod tree;

pub use attributes::{ColorSlot, ColorSlots, serialize_attributes};
pub use tree::{CompiledMarkup, CompiledTree, compile_icon, compile_tree};
