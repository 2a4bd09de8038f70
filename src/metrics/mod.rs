//! Metric accumulation and derivation
//!
//! The traversal engine walks the lowered tree once, mutating a per-run
//! [`TraversalState`]; the calculators derive comment density and the
//! maintainability index from the final counters.

mod calc;
mod engine;
mod state;
pub mod weights;

pub use calc::{comment_density, maintainability_index};
pub use engine::traverse;
pub use state::TraversalState;
