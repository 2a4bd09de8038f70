//! Mindex - maintainability metrics for JavaScript
//!
//! Parses one JavaScript source unit, walks its syntax tree, and
//! computes global/local/const variable counts, a nesting-weighted
//! cognitive-complexity score, comment density, and a composite
//! maintainability index.

pub mod ast;
pub mod cli;
pub mod config;
pub mod metrics;
pub mod models;
pub mod parser;
pub mod reporters;

use crate::models::Report;
use crate::parser::ParseError;

/// Analyze one source unit end to end.
///
/// The traversal state is created inside this call and consumed when the
/// report is assembled, so two inputs can never share counters.
pub fn analyze_source(source: &str) -> Result<Report, ParseError> {
    let unit = parser::parse_source(source)?;
    let state = metrics::traverse(&unit.program);
    Ok(Report::from_traversal(state, unit.line_comments))
}
