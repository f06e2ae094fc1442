//! Configuration types for Iconsmith icon generation.
//!
//! All types implement [`serde::Deserialize`] and every section and field is
//! defaulted, so an empty document is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`SourceConfig`] - Where the sprite and standalone files are read from.
//! - [`OutputConfig`] - Where and in which [`TargetFormat`] components are written.
//! - [`NamingConfig`] - How component names and lookup keys are derived.
//!
//! # Example
//!
//! ```
//! # use iconsmith::config::{AppConfig, TargetFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.output().target(), TargetFormat::JavaScript);
//! assert_eq!(config.output().default_icon_size(), 18);
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use iconsmith_core::naming::{NamingError, PrefixPattern};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Input section.
    #[serde(default)]
    source: SourceConfig,

    /// Output section.
    #[serde(default)]
    output: OutputConfig,

    /// Naming section.
    #[serde(default)]
    naming: NamingConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(source: SourceConfig, output: OutputConfig, naming: NamingConfig) -> Self {
        Self {
            source,
            output,
            naming,
        }
    }

    /// Returns the source configuration.
    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the naming configuration.
    pub fn naming(&self) -> &NamingConfig {
        &self.naming
    }

    /// Returns a copy with the sprite file replaced.
    pub fn with_symbol_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source.symbol_file = Some(path.into());
        self
    }

    /// Returns a copy with the output directory replaced.
    pub fn with_save_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output.save_dir = path.into();
        self
    }
}

/// Input locations.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Sprite document or symbol script.
    #[serde(default)]
    symbol_file: Option<PathBuf>,

    /// Directory of standalone `.svg` files.
    #[serde(default = "default_local_svgs")]
    local_svgs: PathBuf,
}

impl SourceConfig {
    /// Creates a new [`SourceConfig`].
    ///
    /// # Arguments
    ///
    /// * `symbol_file` - Sprite document or symbol script, if any.
    /// * `local_svgs` - Directory of standalone files. A missing directory
    ///   means there are no standalone icons.
    pub fn new(symbol_file: Option<PathBuf>, local_svgs: impl Into<PathBuf>) -> Self {
        Self {
            symbol_file,
            local_svgs: local_svgs.into(),
        }
    }

    /// Returns the sprite file, if configured.
    pub fn symbol_file(&self) -> Option<&Path> {
        self.symbol_file.as_deref()
    }

    /// Returns the standalone file directory.
    pub fn local_svgs(&self) -> &Path {
        &self.local_svgs
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            symbol_file: None,
            local_svgs: default_local_svgs(),
        }
    }
}

fn default_local_svgs() -> PathBuf {
    PathBuf::from("./localSvgs")
}

/// Flavor of the generated sources.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    /// `.js` components with `.d.ts` declarations next to them.
    #[default]
    JavaScript,
    /// `.tsx` components.
    TypeScript,
}

impl TargetFormat {
    /// Returns the extension of component files.
    pub fn component_extension(&self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "tsx",
        }
    }

    /// Returns the extension of plain modules such as the color helper.
    pub fn module_extension(&self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
        }
    }

    /// Returns `true` for the TypeScript target.
    pub fn is_typescript(&self) -> bool {
        matches!(self, Self::TypeScript)
    }
}

/// Output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the generated files.
    #[serde(default = "default_save_dir")]
    save_dir: PathBuf,

    /// Flavor of the generated sources.
    #[serde(default)]
    target: TargetFormat,

    /// Size used when a component is rendered without a `size` prop.
    #[serde(default = "default_icon_size")]
    default_icon_size: u32,

    /// Directory overriding the embedded templates.
    #[serde(default)]
    template_dir: Option<PathBuf>,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with no template override.
    pub fn new(save_dir: impl Into<PathBuf>, target: TargetFormat, default_icon_size: u32) -> Self {
        Self {
            save_dir: save_dir.into(),
            target,
            default_icon_size,
            template_dir: None,
        }
    }

    /// Returns a copy that reads templates from `dir` first.
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    /// Returns the output directory.
    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Returns the target format.
    pub fn target(&self) -> TargetFormat {
        self.target
    }

    /// Returns the default icon size.
    pub fn default_icon_size(&self) -> u32 {
        self.default_icon_size
    }

    /// Returns the template override directory, if configured.
    pub fn template_dir(&self) -> Option<&Path> {
        self.template_dir.as_deref()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(default_save_dir(), TargetFormat::default(), default_icon_size())
    }
}

fn default_save_dir() -> PathBuf {
    PathBuf::from("./src/iconfont")
}

fn default_icon_size() -> u32 {
    18
}

/// Naming settings.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NamingConfig {
    /// Regular expression trimmed from the start of symbol ids to form
    /// lookup keys, also used as the component name prefix of standalone
    /// icons.
    #[serde(default)]
    trim_icon_prefix: Option<String>,
}

impl NamingConfig {
    /// Creates a new [`NamingConfig`].
    pub fn new(trim_icon_prefix: Option<String>) -> Self {
        Self { trim_icon_prefix }
    }

    /// Returns the configured prefix pattern text.
    pub fn trim_icon_prefix(&self) -> Option<&str> {
        self.trim_icon_prefix.as_deref()
    }

    /// Compiles the configured prefix pattern.
    ///
    /// An empty pattern is treated as no pattern.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError`] if the pattern is not a valid regular
    /// expression.
    pub fn prefix_pattern(&self) -> Result<Option<PrefixPattern>, NamingError> {
        self.trim_icon_prefix
            .as_deref()
            .filter(|pattern| !pattern.is_empty())
            .map(PrefixPattern::new)
            .transpose()
    }
}
