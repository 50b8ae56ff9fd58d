//! Shared problem model: items, bins, and the balance objective.
//!
//! Both solvers consume an [`Instance`] and are judged by [`spread`],
//! the gap between the richest and poorest bin by accumulated value.
//! [`Bin`] carries the full assignment for the approximate pipeline;
//! [`BinLoad`] is the compressed per-bin state the exact search keys on.

mod bin;
mod item;

pub use bin::{spread, Bin, BinLoad};
pub use item::{Instance, Item};
