//! Error types for Iconsmith operations.
//!
//! This module provides the main error type [`IconsmithError`] which wraps
//! the error conditions of every stage of icon generation.

use std::io;

use thiserror::Error;

use iconsmith_core::naming::NamingError;
use iconsmith_parser::ParseError;

use crate::template::TemplateError;

/// The main error type for Iconsmith operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the source text and its name next to the
/// structured diagnostics, so that callers can render labeled snippets.
#[derive(Debug, Error)]
pub enum IconsmithError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse {
        err: ParseError,
        src: String,
        name: String,
    },

    #[error(transparent)]
    Naming(#[from] NamingError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IconsmithError {
    /// Create a new `Parse` error with the associated source and its name.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
            name: name.into(),
        }
    }
}
