//! Approximate solver: kernelization, greedy construction, local search.
//!
//! The pipeline trades optimality for speed. [`partition`] removes items
//! no bin could ever take, [`assign`] builds a largest-value-first start,
//! and [`refine`] moves and swaps items between the extreme bins until no
//! accepted operation remains. [`ApproxSolver`] wires the three together;
//! the stages are public for callers that want to intervene in between.
//!
//! The result may leave items out. Capacity is never violated and the
//! reported objective is exactly the spread of the returned bins.

mod config;
mod greedy;
mod kernel;
mod refine;
mod runner;

pub use config::{AcceptancePolicy, ApproxConfig};
pub use greedy::assign;
pub use kernel::{partition, Partition};
pub use refine::{refine, RefineStats};
pub use runner::{ApproxResult, ApproxSolver};
