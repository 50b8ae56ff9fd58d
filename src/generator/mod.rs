//! Synthetic instance generation for benchmarks and experiments.
//!
//! Four [`CaseProfile`]s cover the regimes the solvers behave differently
//! in; [`random_instance`] draws a reproducible instance from any `Rng`,
//! so experiments seed a [`rand::rngs::StdRng`] and replay exactly.

mod cases;
mod profile;

pub use cases::{random_instance, BIN_CAPACITY};
pub use profile::CaseProfile;
