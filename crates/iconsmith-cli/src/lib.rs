//! Iconsmith CLI library
//!
//! This module contains the core CLI logic for the Iconsmith icon generator.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use iconsmith::{IconSetBuilder, IconsmithError};
use iconsmith_parser::Diagnostic;

use config::ConfigError;

/// Run the Iconsmith CLI application
///
/// Reads the symbol sprite and the local SVG directory, compiles every icon
/// and replaces the contents of the output directory with the result. Nothing
/// is written unless the whole batch compiles.
///
/// # Errors
///
/// Returns `IconsmithError` for:
/// - File I/O errors
/// - Configuration loading errors, including a missing symbol file
/// - Parsing errors
/// - Naming and template errors
pub fn run(args: &Args) -> Result<(), IconsmithError> {
    info!(
        input_path:? = args.input,
        output_path:? = args.output;
        "Generating icons"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(input) = &args.input {
        app_config = app_config.with_symbol_file(input);
    }
    if let Some(output) = &args.output {
        app_config = app_config.with_save_dir(output);
    }

    let Some(symbol_file) = app_config.source().symbol_file().map(|path| path.to_path_buf()) else {
        return Err(ConfigError::Validation(
            "no symbol file given; pass an input path or set `source.symbol_file`".to_string(),
        )
        .into());
    };

    let source = fs::read_to_string(&symbol_file)?;

    let builder = IconSetBuilder::new(app_config);
    let name = symbol_file.display().to_string();
    let sprite = builder.parse_sprite(&name, &source)?;
    report_warnings(&name, &source, sprite.warnings());

    let mut icons = sprite.into_icons();
    icons.extend(builder.read_local_svgs(builder.config().source().local_svgs())?);

    let icon_set = builder.generate(&icons)?;
    let save_dir = builder.config().output().save_dir();
    icon_set.write_to(save_dir)?;

    info!(
        save_dir = save_dir.display().to_string(),
        icons = icon_set.icon_count();
        "Icons generated successfully"
    );

    Ok(())
}

/// Render sprite warnings through the log, one report per warning.
fn report_warnings(name: &str, source: &str, warnings: &[Diagnostic]) {
    let reporter = miette::GraphicalReportHandler::new();

    for reportable in error_adapter::warning_reportables(warnings, name, source) {
        let mut writer = String::new();
        match reporter.render_report(&mut writer, &reportable) {
            Ok(()) => warn!("{writer}"),
            Err(_) => warn!("{reportable}"),
        }
    }
}
