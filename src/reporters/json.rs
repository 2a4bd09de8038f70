//! JSON reporter
//!
//! Outputs the full Report as pretty-printed JSON. Useful for machine
//! consumption, piping to jq, or further processing.

use anyhow::Result;

use crate::models::Report;

/// Render report as JSON
pub fn render(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
