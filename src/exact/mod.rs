//! Exact solver: memoized exhaustive search.
//!
//! Guarantees the minimal spread or a proof that no full assignment
//! exists. Every item must be placed; unlike the approximate pipeline
//! there is no discard path. Cost grows exponentially with the item
//! count, so this solver is for small instances and for calibrating the
//! approximate one.

mod runner;
mod state;

pub use runner::{ExactResult, ExactSolver, SolveStatus};
pub use state::SearchKey;
