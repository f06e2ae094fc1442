//! Command-line argument definitions for the Iconsmith CLI.
//!
//! Arguments select the symbol file, the output directory and the
//! configuration file, and control logging verbosity. Paths given here
//! override the matching configuration entries.

use clap::Parser;

/// Command-line arguments for the Iconsmith icon generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the symbol sprite (SVG document or icon-font script)
    #[arg(help = "Path to the symbol file, overrides `source.symbol_file`")]
    pub input: Option<String>,

    /// Directory the components are written to
    #[arg(short, long, help = "Output directory, overrides `output.save_dir`")]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
