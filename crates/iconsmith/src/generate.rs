//! Generation of the component sources of an icon set.
//!
//! Every icon is compiled and assembled in memory. Nothing is written until
//! the caller asks for it with [`GeneratedIconSet::write_to`], so a failing
//! icon never leaves a half-written output directory behind.

use std::{fs, iter, path::Path};

use log::{debug, info, warn};

use iconsmith_core::{
    icon::{IconDefinition, IconSource, LocalSvg, SymbolIcon},
    naming::{ComponentName, PrefixPattern, derive_component_name, derive_local_component_name},
    shape::ShapeKind,
};

use crate::{
    cases::{CaseTable, InstanceKey},
    compile::compile_icon,
    config::TargetFormat,
    error::IconsmithError,
    template::{Placeholder, TemplateAssembler, TemplateKind, TemplateStore},
};

const HELPER_IMPORT: &str = "import { getIconColor } from './helper';";

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    file_name: String,
    contents: String,
}

impl GeneratedFile {
    fn new(file_name: impl Into<String>, contents: String) -> Self {
        Self {
            file_name: file_name.into(),
            contents,
        }
    }

    /// Returns the file name, relative to the output directory.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the file contents.
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

/// Every file of a generated icon set.
#[derive(Debug, Clone, Default)]
pub struct GeneratedIconSet {
    files: Vec<GeneratedFile>,
    icon_count: usize,
}

impl GeneratedIconSet {
    /// Returns the files in generation order.
    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    /// Returns the file named `file_name`, if generated.
    pub fn file(&self, file_name: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.file_name == file_name)
    }

    /// Returns the number of icon components.
    pub fn icon_count(&self) -> usize {
        self.icon_count
    }

    /// Replace the contents of `dir` with the generated files.
    ///
    /// The directory is created if needed. Files already in it are removed;
    /// subdirectories are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`IconsmithError::Io`] if the directory cannot be prepared or
    /// a file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<(), IconsmithError> {
        fs::create_dir_all(dir)?;

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                debug!(path:? = entry.path(); "Removing stale output file");
                fs::remove_file(entry.path())?;
            }
        }

        for file in &self.files {
            fs::write(dir.join(&file.file_name), &file.contents)?;
        }

        info!(dir:? = dir, files = self.files.len(); "All icons have been written");
        Ok(())
    }
}

/// Compiles icons and fills templates for one target.
pub(crate) struct Generator<'a> {
    target: TargetFormat,
    size: String,
    prefix: Option<PrefixPattern>,
    templates: &'a dyn TemplateStore,
}

impl<'a> Generator<'a> {
    pub fn new(
        target: TargetFormat,
        default_icon_size: u32,
        prefix: Option<PrefixPattern>,
        templates: &'a dyn TemplateStore,
    ) -> Self {
        Self {
            target,
            size: default_icon_size.to_string(),
            prefix,
            templates,
        }
    }

    /// Generate every file of the icon set.
    ///
    /// Symbol and standalone icons are numbered separately for their
    /// instance keys; all other output follows the order of `icons`.
    pub fn generate(&self, icons: &[IconDefinition]) -> Result<GeneratedIconSet, IconsmithError> {
        let mut files = self.helper_files()?;
        let mut cases = CaseTable::new();
        let mut components = Vec::with_capacity(icons.len());
        let mut symbol_count = 0;
        let mut local_count = 0;

        for icon in icons {
            let (names, instance_key, contents) = match icon.source() {
                IconSource::Symbol(symbol) => {
                    symbol_count += 1;
                    let names = derive_component_name(icon.id(), self.prefix.as_ref());
                    let contents = self.symbol_component(names.component_name(), symbol)?;
                    (names, InstanceKey::Symbol(symbol_count), contents)
                }
                IconSource::Local(svg) => {
                    local_count += 1;
                    let names = derive_local_component_name(icon.id(), self.prefix.as_ref());
                    let contents = self.local_component(names.component_name(), svg)?;
                    (names, InstanceKey::Local(local_count), contents)
                }
            };
            let (component_name, lookup_key) = names.into_parts();

            if cases.contains_key(&lookup_key) {
                warn!(lookup_key, icon_id = icon.id(); "Duplicate lookup key, the first icon wins");
            }

            files.push(GeneratedFile::new(
                format!("{component_name}.{}", self.target.component_extension()),
                contents,
            ));
            if !self.target.is_typescript() {
                files.push(GeneratedFile::new(
                    format!("{component_name}.d.ts"),
                    self.component_declaration(&component_name)?,
                ));
            }

            info!(icon_id = icon.id(), component = component_name.as_str(); "Generated icon");
            cases.add_entry(lookup_key, component_name.clone(), instance_key);
            components.push(component_name);
        }

        files.extend(self.aggregator_files(&cases, &components)?);

        Ok(GeneratedIconSet {
            files,
            icon_count: components.len(),
        })
    }

    fn assemble(
        &self,
        kind: TemplateKind,
        fill: impl FnOnce(TemplateAssembler<'_>) -> TemplateAssembler<'_>,
    ) -> Result<String, IconsmithError> {
        let file_name = kind.file_name(self.target);
        let template = self.templates.load(file_name)?;
        Ok(fill(TemplateAssembler::new(file_name, &template)).finish()?)
    }

    /// Names imported from `react-native-svg`: the `Svg` root when
    /// `svg_root` is set, then the prop types, then `names`.
    fn svg_components(&self, svg_root: bool, names: impl IntoIterator<Item = &'static str>) -> String {
        let mut components = Vec::new();
        if svg_root {
            components.push("Svg");
        }
        if self.target.is_typescript() {
            components.push("GProps");
        }
        components.extend(names);
        components.join(", ")
    }

    fn symbol_component(&self, name: &ComponentName, symbol: &SymbolIcon) -> Result<String, IconsmithError> {
        let compiled = compile_icon(symbol);
        let svg_components = self.svg_components(
            true,
            compiled.shape_kinds().iter().map(ShapeKind::component_name),
        );

        debug!(
            component = name.as_str(),
            color_slots = compiled.color_slots().len();
            "Compiled symbol"
        );

        self.assemble(TemplateKind::SingleIcon, |assembler| {
            assembler
                .set(Placeholder::ComponentName, name.as_str())
                .set(Placeholder::Size, &self.size)
                .set(Placeholder::SvgComponents, svg_components)
                .set(Placeholder::IconContent, compiled.markup())
                .set_optional(Placeholder::Helper, HELPER_IMPORT)
        })
    }

    fn local_component(&self, name: &ComponentName, svg: &LocalSvg) -> Result<String, IconsmithError> {
        let renderer = svg.style().component_name();
        let xml = format!("const xml = `\n{}\n`", escape_template_literal(svg.markup()));
        let content =
            format!("\n    <{renderer} xml={{xml}} width={{size}} height={{size}} {{...rest}} />\n");

        self.assemble(TemplateKind::LocalSingleIcon, |assembler| {
            assembler
                .set(Placeholder::ComponentName, name.as_str())
                .set(Placeholder::Size, &self.size)
                .set(Placeholder::SvgComponents, self.svg_components(false, [renderer]))
                .set(Placeholder::IconContent, content)
                .set_optional(Placeholder::Xml, xml)
        })
    }

    fn component_declaration(&self, name: &ComponentName) -> Result<String, IconsmithError> {
        self.assemble(TemplateKind::SingleIconDeclaration, |assembler| {
            assembler.set(Placeholder::ComponentName, name.as_str())
        })
    }

    fn aggregator_files(
        &self,
        cases: &CaseTable,
        components: &[ComponentName],
    ) -> Result<Vec<GeneratedFile>, IconsmithError> {
        let imports = components
            .iter()
            .map(|name| format!("import {name} from './{name}';"))
            .collect::<Vec<_>>()
            .join("\n");
        let exports = components
            .iter()
            .map(|name| format!("export {{ default as {name} }} from './{name}';"))
            .collect::<Vec<_>>()
            .join("\n");
        let quoted: Vec<_> = cases
            .entries()
            .iter()
            .map(|entry| format!("'{}'", entry.lookup_key()))
            .collect();
        let names = if quoted.is_empty() {
            "never".to_string()
        } else {
            quoted.join(" | ")
        };
        let names_array = format!("[{}]", quoted.join(", "));

        let index = self.assemble(TemplateKind::Icon, |assembler| {
            let assembler = assembler
                .set(Placeholder::Size, &self.size)
                .set(Placeholder::Cases, cases.render())
                .set(Placeholder::Imports, imports)
                .set(Placeholder::Exports, &exports)
                .set(Placeholder::NamesArray, names_array);
            if self.target.is_typescript() {
                assembler
                    .set(Placeholder::SvgComponents, self.svg_components(false, iter::empty()))
                    .set(Placeholder::Names, &names)
            } else {
                assembler
            }
        })?;

        let mut files = vec![GeneratedFile::new(
            format!("index.{}", self.target.component_extension()),
            index,
        )];

        if !self.target.is_typescript() {
            let declaration = self.assemble(TemplateKind::IconDeclaration, |assembler| {
                assembler
                    .set(Placeholder::Exports, &exports)
                    .set(Placeholder::Names, &names)
            })?;
            files.push(GeneratedFile::new("index.d.ts", declaration));
        }

        Ok(files)
    }

    fn helper_files(&self) -> Result<Vec<GeneratedFile>, IconsmithError> {
        let mut files = vec![GeneratedFile::new(
            format!("helper.{}", self.target.module_extension()),
            self.assemble(TemplateKind::Helper, |assembler| assembler)?,
        )];

        if !self.target.is_typescript() {
            files.push(GeneratedFile::new(
                "helper.d.ts",
                self.assemble(TemplateKind::HelperDeclaration, |assembler| assembler)?,
            ));
        }

        Ok(files)
    }
}

/// Escape markup for embedding in a JavaScript template literal.
fn escape_template_literal(markup: &str) -> String {
    markup
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
