//! Benchmark harness around the two solvers.
//!
//! [`run_battery`] sweeps generated instances across sizes and profiles,
//! timing the exact solver against the approximate pipeline and scoring
//! the optimality gap; [`render_csv`] / [`render_summary`] turn the
//! records into shareable output; [`find_breakpoint`] locates the size
//! where exact search outgrows a wall-clock budget.
//!
//! Timing here is plain wall clock around whole solver calls. The
//! solvers themselves stay budget-free; every limit lives in this layer.

mod battery;
mod breakpoint;
mod report;

pub use battery::{run_battery, BatteryConfig, ExactTrial, TrialRecord};
pub use breakpoint::{
    find_breakpoint, BreakpointConfig, BreakpointProbe, BreakpointResult,
};
pub use report::{render_csv, render_summary};
