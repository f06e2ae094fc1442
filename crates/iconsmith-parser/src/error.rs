//! Error and diagnostic system for the Iconsmith parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. All diagnostics of one input file are wrapped in
//! [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use iconsmith_parser::{Diagnostic, ErrorCode, Span};
//!
//! let diag = Diagnostic::error("unsupported shape element `text`")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(120..124), "not a supported shape")
//!     .with_help("supported elements: path, g, symbol, defs, circle, rect, linearGradient, stop, mask");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
