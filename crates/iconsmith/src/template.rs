//! Component templates.
//!
//! Generated sources are produced by filling the `#name#` markers of a small
//! set of templates. This module provides:
//!
//! - [`Placeholder`] - The named markers a template may contain
//! - [`TemplateAssembler`] - Validated, single-pass marker substitution
//! - [`TemplateStore`] - Where template text comes from, either compiled in
//!   ([`EmbeddedTemplates`]) or read from a directory ([`DirectoryTemplates`])
//! - [`TemplateKind`] - The templates a generation run uses

mod assembler;
mod placeholder;
mod store;

pub use assembler::TemplateAssembler;
pub use placeholder::Placeholder;
pub use store::{DirectoryTemplates, EmbeddedTemplates, TemplateStore};

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::config::TargetFormat;

/// Template errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("no template named `{0}`")]
    Missing(String),

    #[error("failed to read template `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown placeholder `#{name}#` in template `{template}`")]
    UnknownPlaceholder { template: String, name: String },

    #[error("placeholder `{placeholder}` of template `{template}` has no content")]
    Unresolved {
        template: String,
        placeholder: Placeholder,
    },

    #[error("template `{template}` has no `{placeholder}` marker for the generated content")]
    Orphan {
        template: String,
        placeholder: Placeholder,
    },
}

/// The templates used to generate an icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Component of a sprite symbol.
    SingleIcon,
    /// Component of a standalone file.
    LocalSingleIcon,
    /// The aggregator component.
    Icon,
    /// Declarations of an icon component, for the JavaScript target.
    SingleIconDeclaration,
    /// Declarations of the aggregator, for the JavaScript target.
    IconDeclaration,
    /// The color helper module.
    Helper,
    /// Declarations of the color helper, for the JavaScript target.
    HelperDeclaration,
}

impl TemplateKind {
    /// Returns the template file name for `target`.
    pub fn file_name(&self, target: TargetFormat) -> &'static str {
        match (self, target) {
            (Self::SingleIcon, TargetFormat::TypeScript) => "SingleIcon.tsx",
            (Self::SingleIcon, TargetFormat::JavaScript) => "SingleIcon.js",
            (Self::LocalSingleIcon, TargetFormat::TypeScript) => "LocalSingleIcon.tsx",
            (Self::LocalSingleIcon, TargetFormat::JavaScript) => "LocalSingleIcon.js",
            (Self::Icon, TargetFormat::TypeScript) => "Icon.tsx",
            (Self::Icon, TargetFormat::JavaScript) => "Icon.js",
            (Self::Helper, TargetFormat::TypeScript) => "helper.ts",
            (Self::Helper, TargetFormat::JavaScript) => "helper.js",
            (Self::SingleIconDeclaration, _) => "SingleIcon.d.ts",
            (Self::IconDeclaration, _) => "Icon.d.ts",
            (Self::HelperDeclaration, _) => "helper.d.ts",
        }
    }
}
