//! Report model assembled after one traversal

use serde::{Deserialize, Serialize};

use crate::metrics::{comment_density, maintainability_index, TraversalState};

/// The eight derived values of one analysis run, in report order.
/// Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub global_variables: u32,
    pub local_variables: u32,
    pub const_variables: u32,
    /// Weighted complexity with the final line count folded in.
    pub complexity: f64,
    pub lines_of_code: u32,
    pub inline_comments: u32,
    pub comment_density: f64,
    pub maintainability_index: f64,
}

impl Report {
    /// Fold the final counters and the comment feed into a report.
    ///
    /// The line count joins the weighted sum exactly once, here, never
    /// during the walk. Taking the state by value retires it: a new run
    /// must start from a fresh traversal.
    pub fn from_traversal(state: TraversalState, inline_comments: u32) -> Self {
        let complexity = state.weighted_complexity + f64::from(state.lines_of_code);
        let density = comment_density(inline_comments, state.lines_of_code);
        let index = maintainability_index(
            state.global_vars,
            state.local_vars,
            state.const_vars,
            complexity,
            density,
        );
        Self {
            global_variables: state.global_vars,
            local_variables: state.local_vars,
            const_variables: state.const_vars,
            complexity,
            lines_of_code: state.lines_of_code,
            inline_comments,
            comment_density: density,
            maintainability_index: index,
        }
    }
}
