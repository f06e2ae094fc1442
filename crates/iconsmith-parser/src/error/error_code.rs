//! Error codes for the Iconsmith diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Markup errors
//! - `E1xx` - Document structure errors
//! - `E2xx` - Shape validation errors
//! - `W1xx` - Sprite warnings

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Markup Errors (E0xx)
    // =========================================================================
    /// Unterminated comment, CDATA section, declaration or processing
    /// instruction.
    E001,

    /// Malformed tag.
    ///
    /// A tag was opened with `<` but its name, attributes or terminator could
    /// not be read.
    E002,

    /// Unterminated attribute value.
    ///
    /// An attribute value was opened with a quote but never closed.
    E003,

    /// Mismatched closing tag.
    ///
    /// A closing tag does not name the innermost open element.
    E004,

    /// Unclosed element.
    ///
    /// The input ended while an element was still open.
    E005,

    // =========================================================================
    // Document Structure Errors (E1xx)
    // =========================================================================
    /// No `<svg>` document found.
    ///
    /// A symbol script did not contain an embedded `<svg>` document.
    E100,

    /// Unexpected content after the root element.
    E101,

    /// Root element is not `<svg>`.
    E102,

    // =========================================================================
    // Shape Validation Errors (E2xx)
    // =========================================================================
    /// Unsupported shape element.
    ///
    /// An element inside a symbol is not one of the supported shape kinds.
    E200,

    /// Symbol without `id`.
    E201,

    /// Symbol without `viewBox`.
    E202,

    // =========================================================================
    // Sprite Warnings (W1xx)
    // =========================================================================
    /// Element outside of a symbol.
    ///
    /// A child of the sprite root is not a `<symbol>` and belongs to no icon.
    /// It is skipped.
    W100,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::W100 => "W100",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated markup section",
            ErrorCode::E002 => "malformed tag",
            ErrorCode::E003 => "unterminated attribute value",
            ErrorCode::E004 => "mismatched closing tag",
            ErrorCode::E005 => "unclosed element",
            ErrorCode::E100 => "no svg document found",
            ErrorCode::E101 => "unexpected content after root element",
            ErrorCode::E102 => "root element is not svg",
            ErrorCode::E200 => "unsupported shape element",
            ErrorCode::E201 => "symbol without id",
            ErrorCode::E202 => "symbol without viewBox",
            ErrorCode::W100 => "element outside of a symbol",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
