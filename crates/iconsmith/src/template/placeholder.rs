//! Named placeholders of component templates.

use std::{fmt, str::FromStr};

/// A `#name#` marker in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Identifier of the generated component.
    ComponentName,
    /// Default icon size.
    Size,
    /// The aggregator's `case` entries.
    Cases,
    /// Names imported from `react-native-svg`.
    SvgComponents,
    /// Lookup keys as a union of string literals.
    Names,
    /// Lookup keys as an array literal.
    NamesArray,
    /// One default import per component.
    Imports,
    /// One re-export per component.
    Exports,
    /// The rendered element tree of an icon.
    IconContent,
    /// The embedded markup of a standalone icon.
    Xml,
    /// Import of the color helper.
    Helper,
}

impl Placeholder {
    /// Every placeholder.
    pub const ALL: [Placeholder; 11] = [
        Self::ComponentName,
        Self::Size,
        Self::Cases,
        Self::SvgComponents,
        Self::Names,
        Self::NamesArray,
        Self::Imports,
        Self::Exports,
        Self::IconContent,
        Self::Xml,
        Self::Helper,
    ];

    /// Returns the name written between the `#` delimiters.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ComponentName => "componentName",
            Self::Size => "size",
            Self::Cases => "cases",
            Self::SvgComponents => "svgComponents",
            Self::Names => "names",
            Self::NamesArray => "namesArray",
            Self::Imports => "imports",
            Self::Exports => "exports",
            Self::IconContent => "iconContent",
            Self::Xml => "xml",
            Self::Helper => "helper",
        }
    }
}

impl FromStr for Placeholder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|p| p.name() == s).ok_or(())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}#", self.name())
    }
}
