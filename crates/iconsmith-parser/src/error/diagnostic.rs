//! The core diagnostic type.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, multiple labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// The severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Aborts the batch.
    Error,
    /// Reported, but the input is still usable.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E200]: unsupported shape element `text`
///   --> iconfont.svg:4:6
///    |
///  4 |     <text x="0" y="12">A</text>
///    |      ^^^^ not a supported shape
///    |
///    = help: supported elements: path, g, symbol, defs, circle, rect, linearGradient, stop, mask
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use iconsmith_parser::{Diagnostic, ErrorCode};
    /// # use iconsmith_parser::Span;
    ///
    /// let diag = Diagnostic::error("symbol has no `viewBox` attribute")
    ///     .with_code(ErrorCode::E202)
    ///     .with_label(Span::new(5..11), "symbol defined here")
    ///     .with_help("add a `viewBox` attribute to the symbol");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "error[E200]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_defaults() {
        let diag = Diagnostic::error("malformed tag");

        assert!(diag.severity().is_error());
        assert_eq!(diag.message(), "malformed tag");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("mismatched closing tag `</g>`")
            .with_code(ErrorCode::E004)
            .with_label(Span::new(40..41), "expected `</path>`")
            .with_secondary_label(Span::new(10..14), "element opened here")
            .with_help("close elements in the order they were opened");

        assert_eq!(diag.code(), Some(ErrorCode::E004));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(diag.labels()[1].is_secondary());
        assert_eq!(
            diag.help(),
            Some("close elements in the order they were opened")
        );
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("unsupported shape element `text`").with_code(ErrorCode::E200);
        assert_eq!(
            diag.to_string(),
            "error[E200]: unsupported shape element `text`"
        );

        let diag = Diagnostic::warning("element `style` is outside of any symbol").with_code(ErrorCode::W100);
        assert!(!diag.severity().is_error());
        assert_eq!(
            diag.to_string(),
            "warning[W100]: element `style` is outside of any symbol"
        );
    }
}
