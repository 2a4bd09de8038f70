//! Text (terminal) reporter

use anyhow::Result;

use crate::models::Report;

/// Render the eight metrics as `label: value` lines, in report order.
pub fn render(report: &Report) -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!("global variables: {}\n", report.global_variables));
    out.push_str(&format!("local variables: {}\n", report.local_variables));
    out.push_str(&format!("const variables: {}\n", report.const_variables));
    out.push_str(&format!("complexity: {}\n", report.complexity));
    out.push_str(&format!("lines of code: {}\n", report.lines_of_code));
    out.push_str(&format!("inline comments: {}\n", report.inline_comments));
    out.push_str(&format!("comment density: {:.2}\n", report.comment_density));
    out.push_str(&format!(
        "maintainability index: {:.2}\n",
        report.maintainability_index
    ));
    Ok(out)
}
