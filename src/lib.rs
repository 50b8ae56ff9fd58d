//! Capacity-constrained fair-load assignment.
//!
//! Weighted, valued items are assigned to capacity-limited bins so that
//! no bin exceeds its weight capacity and the *spread* — the richest
//! bin's value total minus the poorest's — is as small as possible. Two
//! solving strategies cover the accuracy/scale trade-off:
//!
//! - **Exact** ([`exact::ExactSolver`]): memoized recursive search that
//!   returns the provably minimal spread or proves that no full
//!   assignment exists. Exponential worst case, meant for small
//!   instances and for calibrating the approximate pipeline.
//! - **Approximate** ([`approx::ApproxSolver`]): kernelization, a
//!   largest-value-first greedy constructor, and a move/swap local
//!   search between the extreme bins. Fast and capacity-safe, but it
//!   may leave items out and settles for local optima.
//!
//! The [`generator`] and [`experiment`] modules carry the evaluation
//! harness: profiled synthetic instances, an exact-vs-approximate
//! battery with CSV and tabular reports, and a wall-clock breakpoint
//! probe that locates where exact search stops being practical.
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem.
//! Solvers are pure, synchronous computations over the [`model`] types:
//! no internal threads, no internal time limits, no I/O. Concurrency,
//! budgets, and persistence belong to consumers at higher layers; the
//! [`experiment`] module is the one in-crate consumer and keeps its
//! wall-clock handling on its own side of that line.

pub mod approx;
pub mod exact;
pub mod experiment;
pub mod generator;
pub mod model;
