//! Mindex - maintainability metrics for JavaScript
//!
//! A fast, local-first analyzer that parses a single JavaScript source
//! file and reports variable-scope counts, nesting-weighted complexity,
//! comment density, and a composite maintainability index.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let cli = mindex::cli::Cli::parse();

    // Initialize logging; the report owns stdout, so logs go to stderr.
    // RUST_LOG takes precedence over --log-level.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    mindex::cli::run(cli)
}
