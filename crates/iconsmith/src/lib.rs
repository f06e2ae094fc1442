//! Iconsmith - Compile SVG icon sprites into `react-native-svg` components.
//!
//! Parsing, compilation, and template assembly for icon sets. Every symbol of
//! a sprite becomes one component whose fill colors can be overridden at
//! runtime, standalone `.svg` files become components embedding their markup,
//! and an aggregator component dispatches on icon names.

pub mod cases;
pub mod compile;
pub mod config;
pub mod template;

mod error;
mod generate;

pub use iconsmith_core::{icon, naming, shape};
pub use iconsmith_parser::ParsedSprite;

pub use error::IconsmithError;
pub use generate::{GeneratedFile, GeneratedIconSet};

use std::{fs, io, path::Path};

use log::{debug, info, trace, warn};

use iconsmith_core::icon::IconDefinition;

use config::AppConfig;
use generate::Generator;
use template::{DirectoryTemplates, EmbeddedTemplates, TemplateStore};

/// Builder for parsing icon sources and generating components.
///
/// # Examples
///
/// ```rust
/// use iconsmith::{IconSetBuilder, config::AppConfig};
///
/// let source = r##"<svg><symbol id="icon-dot" viewBox="0 0 24 24"><circle r="4" fill="#333"/></symbol></svg>"##;
///
/// let builder = IconSetBuilder::new(AppConfig::default());
///
/// // Parse the sprite into icon definitions
/// let sprite = builder.parse_sprite("iconfont.svg", source)
///     .expect("Failed to parse");
///
/// // Compile every icon into component sources
/// let icon_set = builder.generate(sprite.icons())
///     .expect("Failed to generate");
///
/// assert!(icon_set.file("IconDot.js").is_some());
/// ```
pub struct IconSetBuilder {
    config: AppConfig,
    templates: Box<dyn TemplateStore>,
}

impl Default for IconSetBuilder {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl IconSetBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// Templates are read from the configured template directory when one
    /// is set, and from the embedded templates otherwise.
    pub fn new(config: AppConfig) -> Self {
        let templates: Box<dyn TemplateStore> = match config.output().template_dir() {
            Some(dir) => Box::new(DirectoryTemplates::new(dir)),
            None => Box::new(EmbeddedTemplates),
        };

        Self { config, templates }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a sprite document or symbol script.
    ///
    /// Warnings of the sprite are returned with its icons; rendering them is
    /// up to the caller.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the source, used in error reports
    /// * `source` - The sprite text
    ///
    /// # Errors
    ///
    /// Returns `IconsmithError::Parse` with every diagnostic of the sprite.
    pub fn parse_sprite(&self, name: &str, source: &str) -> Result<ParsedSprite, IconsmithError> {
        info!(name; "Parsing sprite");

        let sprite = iconsmith_parser::parse_sprite(source)
            .map_err(|err| IconsmithError::new_parse_error(err, source, name))?;

        if !sprite.warnings().is_empty() {
            warn!(name, warnings = sprite.warnings().len(); "Sprite parsed with warnings");
        }
        debug!(icons = sprite.icons().len(); "Sprite parsed successfully");
        Ok(sprite)
    }

    /// Parse one standalone file.
    ///
    /// # Errors
    ///
    /// Returns `IconsmithError::Parse` if the file is not a well-formed SVG
    /// document.
    pub fn parse_local_svg(&self, name: &str, source: &str) -> Result<IconDefinition, IconsmithError> {
        iconsmith_parser::parse_local_svg(name, source)
            .map_err(|err| IconsmithError::new_parse_error(err, source, format!("{name}.svg")))
    }

    /// Read every `.svg` file of `dir`, sorted by file name.
    ///
    /// A missing directory yields no icons. Each icon is named after its
    /// file name without the extension.
    ///
    /// # Errors
    ///
    /// Returns `IconsmithError::Io` if the directory or a file cannot be
    /// read, and `IconsmithError::Parse` for a malformed file.
    pub fn read_local_svgs(&self, dir: &Path) -> Result<Vec<IconDefinition>, IconsmithError> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(dir:? = dir; "No local svg directory");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "svg") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut icons = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                debug!(path:? = path; "Skipping local svg with a non UTF-8 name");
                continue;
            };
            trace!(path:? = path; "Reading local svg");
            let source = fs::read_to_string(&path)?;
            icons.push(self.parse_local_svg(name, &source)?);
        }

        info!(dir:? = dir, icons = icons.len(); "Local svgs loaded");
        Ok(icons)
    }

    /// Compile icons into the files of an icon set.
    ///
    /// The whole set is produced in memory; the first failing icon aborts
    /// the batch.
    ///
    /// # Errors
    ///
    /// Returns `IconsmithError` for an invalid configuration, an invalid
    /// prefix pattern, or a template that does not fit the generated content.
    pub fn generate(&self, icons: &[IconDefinition]) -> Result<GeneratedIconSet, IconsmithError> {
        let output = self.config.output();
        if output.default_icon_size() == 0 {
            return Err(IconsmithError::Config(
                "default_icon_size must be greater than zero".to_string(),
            ));
        }

        let prefix = self.config.naming().prefix_pattern()?;

        info!(icons = icons.len(), target:? = output.target(); "Generating icon set");
        let generator = Generator::new(
            output.target(),
            output.default_icon_size(),
            prefix,
            self.templates.as_ref(),
        );
        generator.generate(icons)
    }
}
