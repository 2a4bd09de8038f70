//! Project configuration
//!
//! Loads optional CLI defaults from a `mindex.toml` next to the
//! analyzed file (or the working directory when reading stdin).
//! Explicit CLI flags win over config values.
//!
//! # Configuration Format
//!
//! ```toml
//! # mindex.toml
//!
//! [defaults]
//! format = "json"
//! fail_above = 80.0
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Root of `mindex.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub defaults: Defaults,
}

/// CLI defaults, overridden by explicit flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Output format: "text" or "json".
    pub format: Option<String>,
    /// Fail the run when the maintainability index exceeds this value.
    pub fail_above: Option<f64>,
}

/// Load `mindex.toml` from `dir`, falling back to defaults.
///
/// A malformed or unreadable file is reported and ignored so a stray
/// config never blocks analysis.
pub fn load_project_config(dir: &Path) -> ProjectConfig {
    let path = dir.join("mindex.toml");
    if !path.exists() {
        return ProjectConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(raw) => match toml::from_str(&raw) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded project config");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring malformed config");
                ProjectConfig::default()
            }
        },
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read config");
            ProjectConfig::default()
        }
    }
}
