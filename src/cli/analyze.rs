//! Analyze command implementation
//!
//! This command performs one full analysis run:
//! 1. Read the source (file or stdin)
//! 2. Parse and lower it through the parser boundary
//! 3. Walk the tree, accumulating the metric counters
//! 4. Fold the counters and the comment feed into the report
//! 5. Render (text, json) and write the result
//! 6. Apply the --fail-above gate to the exit code

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

use crate::config::load_project_config;
use crate::reporters::{self, OutputFormat};

pub fn run(
    path: &Path,
    format: Option<&str>,
    output: Option<&Path>,
    fail_above: Option<f64>,
) -> Result<()> {
    let (source, config_dir) = read_source(path)?;
    let config = load_project_config(&config_dir);

    let format = match format.or(config.defaults.format.as_deref()) {
        Some(name) => OutputFormat::from_str(name)?,
        None => OutputFormat::Text,
    };
    let fail_above = fail_above.or(config.defaults.fail_above);

    let report = crate::analyze_source(&source)
        .with_context(|| format!("failed to analyze {}", path.display()))?;

    let rendered = reporters::render(&report, format)?;
    match output {
        Some(file) => {
            std::fs::write(file, &rendered)
                .with_context(|| format!("failed to write {}", file.display()))?;
            info!(path = %file.display(), "report written");
        }
        None => print!("{rendered}"),
    }

    if let Some(threshold) = fail_above {
        if report.maintainability_index > threshold {
            eprintln!(
                "maintainability index {:.2} exceeds threshold {:.2}",
                report.maintainability_index, threshold
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Read the source unit and resolve the directory searched for
/// `mindex.toml`.
fn read_source(path: &Path) -> Result<(String, PathBuf)> {
    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read source from stdin")?;
        let cwd = std::env::current_dir().context("failed to resolve working directory")?;
        Ok((source, cwd))
    } else {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file: {}", path.display()))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok((source, dir))
    }
}
