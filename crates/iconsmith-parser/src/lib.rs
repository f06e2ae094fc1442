//! # Iconsmith Parser
//!
//! Parser for icon sources. This crate turns the text of an SVG sprite, a
//! symbol script or a standalone SVG file into [`IconDefinition`]s.
//!
//! ## Usage
//!
//! ```
//! # use iconsmith_parser::{parse_sprite, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r##"
//!         <svg>
//!           <symbol id="icon-home" viewBox="0 0 1024 1024">
//!             <path d="M512 128L64 512h128v384h640V512h128z" fill="#333333"/>
//!           </symbol>
//!         </svg>
//!     "##;
//!
//!     let sprite = parse_sprite(source)?;
//!     assert_eq!(sprite.icons()[0].id(), "icon-home");
//!     Ok(())
//! }
//! ```

mod elaborate;
mod error;
mod markup;
mod span;

pub use elaborate::ParsedSprite;
pub use error::{Diagnostic, ErrorCode, Label, ParseError, Severity};
pub use span::Span;

use log::info;

use iconsmith_core::icon::IconDefinition;

use markup::DocumentMode;

/// Parse a sprite into one icon definition per `<symbol>`.
///
/// The source is either an SVG document or a symbol script: a JavaScript
/// file embedding the sprite document in a string. The pipeline is:
///
/// 1. **Markup** - Parse the document into an element tree
/// 2. **Elaborate** - Build a shape tree for every symbol
///
/// # Errors
///
/// Returns a [`ParseError`] carrying every diagnostic found. Markup errors
/// stop at the first problem; shape errors are collected across the whole
/// sprite.
pub fn parse_sprite(source: &str) -> Result<ParsedSprite, ParseError> {
    // Step 1: Markup
    let root = markup::parse_document(source, DocumentMode::Embedded)?;

    // Step 2: Elaborate
    let sprite = elaborate::elaborate_sprite(&root)?;

    info!(icons = sprite.icons().len(), warnings = sprite.warnings().len(); "Parsed sprite");
    Ok(sprite)
}

/// Parse a standalone SVG file.
///
/// # Arguments
///
/// * `name` - The icon name, usually the file name without its extension.
/// * `source` - The file contents.
///
/// # Errors
///
/// Returns a [`ParseError`] if the file is not a well-formed SVG document.
pub fn parse_local_svg(name: &str, source: &str) -> Result<IconDefinition, ParseError> {
    let root = markup::parse_document(source, DocumentMode::Markup)?;
    elaborate::elaborate_local(name, &root, source)
}
