//! CLI command definitions and handlers

pub(crate) mod analyze;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mindex - maintainability metrics for JavaScript
///
/// Analyzes a single source file and reports variable-scope counts,
/// nesting-weighted complexity, comment density, and a composite
/// maintainability index.
#[derive(Parser, Debug)]
#[command(name = "mindex")]
#[command(
    version,
    about = "Maintainability metrics for a JavaScript source file",
    long_about = "Mindex parses one JavaScript source unit and reports eight metrics: \
global/local/const variable counts, a nesting-weighted complexity score, lines of \
code, inline-comment count, comment density, and a composite maintainability index.",
    after_help = "\
Examples:
  mindex app.js                          Analyze a file
  mindex analyze app.js --format json    JSON output for scripting
  cat app.js | mindex analyze -          Read source from stdin
  mindex app.js --fail-above 80          Exit 1 when the index exceeds 80 (CI mode)"
)]
pub struct Cli {
    /// Path to a JavaScript source file ('-' reads stdin)
    #[arg(global = true, default_value = "-")]
    pub path: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a JavaScript file and print its maintainability metrics
    #[command(after_help = "\
Examples:
  mindex analyze app.js                  Analyze a file
  mindex analyze app.js --format json    JSON output for scripting
  mindex analyze app.js -o report.json --format json
  mindex analyze app.js --fail-above 80  CI gate on the index")]
    Analyze {
        /// Output format: text, json
        #[arg(long, short = 'f', value_parser = ["text", "json"])]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 when the maintainability index exceeds this value
        #[arg(long)]
        fail_above: Option<f64>,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Analyze {
            format,
            output,
            fail_above,
        }) => analyze::run(&cli.path, format.as_deref(), output.as_deref(), fail_above),
        // Bare `mindex <path>` analyzes with defaults.
        None => analyze::run(&cli.path, None, None, None),
    }
}
