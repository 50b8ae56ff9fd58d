//! Approximate pipeline execution.
//!
//! # Algorithm
//!
//! 1. Kernelize: set aside items no bin could ever take
//! 2. Greedy: largest value first into the poorest fitting bin
//! 3. Refine: move/swap local search until no accepted operation remains
//!
//! The pipeline always finishes and never violates a capacity, at the
//! price of optimality and of possibly leaving items out. Both kinds of
//! left-out items are reported separately so callers can tell "hopeless"
//! from "crowded out".

use crate::model::{spread, Bin, Instance, Item};

use super::config::ApproxConfig;
use super::greedy;
use super::kernel;
use super::refine::{self, RefineStats};

/// Result of one approximate solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApproxResult {
    /// Spread after refinement, over all bins including empty ones.
    pub objective: i64,
    /// Final bins with their assigned items.
    pub bins: Vec<Bin>,
    /// Kernel-feasible items crowded out during greedy construction.
    pub unassigned: Vec<Item>,
    /// Items rejected by kernelization (heavier than every bin).
    pub infeasible: Vec<Item>,
    /// Spread straight after greedy construction, before refinement.
    pub greedy_objective: i64,
    /// Operator counters from the refinement run.
    pub refine: RefineStats,
}

impl ApproxResult {
    /// Items placed across all bins.
    pub fn assigned_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.items.len()).sum()
    }

    /// Items left out for any reason: kernel-rejected plus crowded out.
    pub fn discarded_count(&self) -> usize {
        self.infeasible.len() + self.unassigned.len()
    }
}

/// Kernelization, greedy construction, and local-search refinement.
///
/// # Examples
///
/// ```
/// use u_balance::approx::{ApproxConfig, ApproxSolver};
/// use u_balance::model::Instance;
///
/// let instance = Instance::new(vec![(6, 1), (4, 1), (2, 1)], vec![50, 50]);
/// let result = ApproxSolver::solve(&instance, &ApproxConfig::default()).unwrap();
/// assert_eq!(result.objective, 0);
/// assert_eq!(result.discarded_count(), 0);
/// ```
pub struct ApproxSolver;

impl ApproxSolver {
    /// Runs the full pipeline on a validated instance.
    pub fn solve(instance: &Instance, config: &ApproxConfig) -> Result<ApproxResult, String> {
        instance.validate()?;

        let partition = kernel::partition(&instance.items, &instance.capacities);
        let (mut bins, unassigned) = greedy::assign(partition.feasible, &instance.capacities);
        let greedy_objective = spread(bins.iter().map(|bin| bin.value));
        let refine = refine::refine(&mut bins, config.acceptance);
        let objective = spread(bins.iter().map(|bin| bin.value));

        Ok(ApproxResult {
            objective,
            bins,
            unassigned,
            infeasible: partition.infeasible,
            greedy_objective,
            refine,
        })
    }
}
