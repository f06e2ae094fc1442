//! Template sources.

use std::{
    borrow::Cow,
    fs, io,
    path::PathBuf,
};

use log::debug;

use super::TemplateError;

/// A source of template text, looked up by file name.
pub trait TemplateStore {
    /// Returns the text of the template named `file_name`.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] if the template does not exist or cannot
    /// be read.
    fn load(&self, file_name: &str) -> Result<Cow<'static, str>, TemplateError>;
}

/// Templates compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl TemplateStore for EmbeddedTemplates {
    fn load(&self, file_name: &str) -> Result<Cow<'static, str>, TemplateError> {
        let text = match file_name {
            "SingleIcon.tsx" => include_str!("../../templates/SingleIcon.tsx"),
            "SingleIcon.js" => include_str!("../../templates/SingleIcon.js"),
            "SingleIcon.d.ts" => include_str!("../../templates/SingleIcon.d.ts"),
            "LocalSingleIcon.tsx" => include_str!("../../templates/LocalSingleIcon.tsx"),
            "LocalSingleIcon.js" => include_str!("../../templates/LocalSingleIcon.js"),
            "Icon.tsx" => include_str!("../../templates/Icon.tsx"),
            "Icon.js" => include_str!("../../templates/Icon.js"),
            "Icon.d.ts" => include_str!("../../templates/Icon.d.ts"),
            "helper.ts" => include_str!("../../templates/helper.ts"),
            "helper.js" => include_str!("../../templates/helper.js"),
            "helper.d.ts" => include_str!("../../templates/helper.d.ts"),
            _ => return Err(TemplateError::Missing(file_name.to_string())),
        };
        Ok(Cow::Borrowed(text))
    }
}

/// Templates read from a directory.
///
/// Files missing from the directory fall back to the embedded templates, so
/// a directory only needs to contain the templates it overrides.
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    /// Create a store reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateStore for DirectoryTemplates {
    fn load(&self, file_name: &str) -> Result<Cow<'static, str>, TemplateError> {
        let path = self.dir.join(file_name);

        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path:? = path; "Using template override");
                Ok(Cow::Owned(text))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => EmbeddedTemplates.load(file_name),
            Err(source) => Err(TemplateError::Read { path, source }),
        }
    }
}
