//! Placeholder substitution.

use indexmap::IndexMap;
use log::trace;

use super::{Placeholder, TemplateError};

#[derive(Debug)]
struct Content {
    text: String,
    required: bool,
}

/// Fills the placeholders of one template.
///
/// Substitution is a single pass over the template: inserted content is
/// never scanned for markers, and the order in which values are set does
/// not matter. A placeholder may appear several times; every occurrence
/// receives the same content.
///
/// # Example
///
/// ```
/// # use iconsmith::template::{Placeholder, TemplateAssembler};
/// let source = TemplateAssembler::new("IconDemo.js", "let #componentName# = #size#;")
///     .set(Placeholder::ComponentName, "IconDemo")
///     .set(Placeholder::Size, "18")
///     .set_optional(Placeholder::Helper, "import './helper';")
///     .finish()
///     .unwrap();
///
/// assert_eq!(source, "let IconDemo = 18;");
/// ```
#[derive(Debug)]
pub struct TemplateAssembler<'t> {
    name: &'t str,
    template: &'t str,
    contents: IndexMap<Placeholder, Content>,
}

impl<'t> TemplateAssembler<'t> {
    /// Start assembling `template`, identified by `name` in errors.
    pub fn new(name: &'t str, template: &'t str) -> Self {
        Self {
            name,
            template,
            contents: IndexMap::new(),
        }
    }

    /// Provide content that the template must consume.
    pub fn set(self, placeholder: Placeholder, text: impl Into<String>) -> Self {
        self.insert(placeholder, text.into(), true)
    }

    /// Provide content that is dropped if the template has no marker for it.
    pub fn set_optional(self, placeholder: Placeholder, text: impl Into<String>) -> Self {
        self.insert(placeholder, text.into(), false)
    }

    fn insert(mut self, placeholder: Placeholder, text: String, required: bool) -> Self {
        self.contents.insert(placeholder, Content { text, required });
        self
    }

    /// Substitute every marker.
    ///
    /// # Errors
    ///
    /// - [`TemplateError::UnknownPlaceholder`] for a marker that names no
    ///   placeholder;
    /// - [`TemplateError::Unresolved`] for a marker without content;
    /// - [`TemplateError::Orphan`] for required content without a marker.
    pub fn finish(self) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(self.template.len());
        let mut consumed = Vec::new();
        let mut rest = self.template;

        while let Some(start) = rest.find('#') {
            output.push_str(&rest[..start]);
            let after = &rest[start + 1..];

            let Some(name) = marker_name(after) else {
                output.push('#');
                rest = after;
                continue;
            };

            let placeholder = name
                .parse::<Placeholder>()
                .map_err(|()| TemplateError::UnknownPlaceholder {
                    template: self.name.to_string(),
                    name: name.to_string(),
                })?;
            let content = self
                .contents
                .get(&placeholder)
                .ok_or_else(|| TemplateError::Unresolved {
                    template: self.name.to_string(),
                    placeholder,
                })?;

            output.push_str(&content.text);
            consumed.push(placeholder);
            rest = &after[name.len() + 1..];
        }
        output.push_str(rest);

        if let Some((&placeholder, _)) = self
            .contents
            .iter()
            .find(|(placeholder, content)| content.required && !consumed.contains(*placeholder))
        {
            return Err(TemplateError::Orphan {
                template: self.name.to_string(),
                placeholder,
            });
        }

        trace!(template = self.name, markers = consumed.len(); "Assembled template");
        Ok(output)
    }
}

/// Returns the marker name at the start of `text` if `text` starts with
/// `name#`, where `name` is a letter followed by letters or digits.
fn marker_name(text: &str) -> Option<&str> {
    if !text.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let len = text
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(text.len());
    text[len..].starts_with('#').then(|| &text[..len])
}
