//! Memoized exhaustive search over item-to-bin assignments.
//!
//! # Algorithm
//!
//! Recursive descent on the item index. Each state branches over every
//! bin with room for the current item; placing all items scores the
//! assignment as the spread of the final loads, and a state where no bin
//! fits the item is a dead end. The best outcome per state is cached
//! under its [`SearchKey`], so paths that reach identical per-bin totals
//! through different item orders are explored once.
//!
//! The search is complete: the returned objective is minimal, and an
//! infeasible verdict means no full assignment exists at all. Worst-case
//! cost is exponential in the item count (branching factor = bin count);
//! memoization collapses converging paths but guarantees nothing. There
//! is no internal time limit, callers that need one must impose it from
//! outside (the experiment battery caps the instance size instead).

use std::collections::HashMap;

use crate::model::{spread, BinLoad, Instance, Item};

use super::state::SearchKey;

/// Terminal classification of an exact solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveStatus {
    /// A full assignment exists and the reported objective is minimal.
    Optimal,
    /// No assignment places every item within the capacities.
    Infeasible,
}

/// Result of one exact solve.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactResult {
    /// Whether an optimal assignment was found.
    pub status: SolveStatus,
    /// Minimal spread; `None` exactly when infeasible.
    pub objective: Option<i64>,
    /// Per-bin totals of the optimal assignment, empty when infeasible.
    pub loads: Vec<BinLoad>,
    /// Branching states explored (terminal evaluations not counted).
    pub states_expanded: usize,
    /// Lookups answered from the memo instead of recursing.
    pub memo_hits: usize,
}

impl ExactResult {
    /// Convenience for `status == SolveStatus::Optimal`.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }
}

/// Exhaustive solver: provably optimal or provably infeasible.
///
/// # Examples
///
/// ```
/// use u_balance::exact::{ExactSolver, SolveStatus};
/// use u_balance::model::Instance;
///
/// let instance = Instance::new(vec![(6, 1), (4, 1), (2, 1)], vec![50, 50]);
/// let result = ExactSolver::solve(&instance).unwrap();
/// assert_eq!(result.status, SolveStatus::Optimal);
/// assert_eq!(result.objective, Some(0));
/// ```
pub struct ExactSolver;

impl ExactSolver {
    /// Solves the instance to optimality.
    ///
    /// Malformed input (no bins, negative numbers) errors out before the
    /// search starts. An instance with zero items is optimal at spread 0.
    pub fn solve(instance: &Instance) -> Result<ExactResult, String> {
        instance.validate()?;

        let mut search = Search {
            items: &instance.items,
            capacities: &instance.capacities,
            memo: HashMap::new(),
            states_expanded: 0,
            memo_hits: 0,
        };
        let mut loads = vec![BinLoad::default(); instance.bin_count()];
        let outcome = search.run(0, &mut loads);

        Ok(match outcome {
            Some((objective, loads)) => ExactResult {
                status: SolveStatus::Optimal,
                objective: Some(objective),
                loads: loads.into_vec(),
                states_expanded: search.states_expanded,
                memo_hits: search.memo_hits,
            },
            None => ExactResult {
                status: SolveStatus::Infeasible,
                objective: None,
                loads: Vec::new(),
                states_expanded: search.states_expanded,
                memo_hits: search.memo_hits,
            },
        })
    }
}

/// Best objective and final loads reachable from a state, `None` when
/// every branch is blocked.
type Outcome = Option<(i64, Box<[BinLoad]>)>;

struct Search<'a> {
    items: &'a [Item],
    capacities: &'a [i64],
    memo: HashMap<SearchKey, Outcome>,
    states_expanded: usize,
    memo_hits: usize,
}

impl Search<'_> {
    fn run(&mut self, index: usize, loads: &mut [BinLoad]) -> Outcome {
        if index == self.items.len() {
            let objective = spread(loads.iter().map(|load| load.value));
            return Some((objective, loads.to_vec().into_boxed_slice()));
        }

        let key = SearchKey::new(index, loads);
        if let Some(cached) = self.memo.get(&key) {
            self.memo_hits += 1;
            return cached.clone();
        }
        self.states_expanded += 1;

        let item = &self.items[index];
        let mut best: Outcome = None;
        for bin in 0..self.capacities.len() {
            if loads[bin].weight + item.weight > self.capacities[bin] {
                continue;
            }
            loads[bin].value += item.value;
            loads[bin].weight += item.weight;
            let outcome = self.run(index + 1, loads);
            loads[bin].value -= item.value;
            loads[bin].weight -= item.weight;

            if let Some((objective, final_loads)) = outcome {
                let improves = match &best {
                    Some((incumbent, _)) => objective < *incumbent,
                    None => true,
                };
                if improves {
                    best = Some((objective, final_loads));
                }
            }
        }

        // Dead ends are cached too; re-reaching one skips the re-proof.
        self.memo.insert(key, best.clone());
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::{ApproxConfig, ApproxSolver};
    use proptest::prelude::*;

    fn solve(pairs: Vec<(i64, i64)>, capacities: Vec<i64>) -> ExactResult {
        ExactSolver::solve(&Instance::new(pairs, capacities)).unwrap()
    }

    /// Reference optimum by full enumeration, no memo, no pruning.
    fn brute_force(instance: &Instance) -> Option<i64> {
        let bins = instance.bin_count();
        let n = instance.item_count();
        let mut best: Option<i64> = None;
        let mut assignment = vec![0usize; n];
        loop {
            let mut loads = vec![BinLoad::default(); bins];
            let mut feasible = true;
            for (item, &bin) in instance.items.iter().zip(&assignment) {
                loads[bin].value += item.value;
                loads[bin].weight += item.weight;
                if loads[bin].weight > instance.capacities[bin] {
                    feasible = false;
                    break;
                }
            }
            if feasible {
                let objective = spread(loads.iter().map(|load| load.value));
                best = Some(best.map_or(objective, |b| b.min(objective)));
            }

            let mut digit = 0;
            loop {
                if digit == n {
                    return best;
                }
                assignment[digit] += 1;
                if assignment[digit] < bins {
                    break;
                }
                assignment[digit] = 0;
                digit += 1;
            }
        }
    }

    #[test]
    fn test_exact_rejects_invalid_instance() {
        assert!(ExactSolver::solve(&Instance::new(vec![(1, 1)], vec![])).is_err());
        assert!(ExactSolver::solve(&Instance::new(vec![(1, -1)], vec![50])).is_err());
    }

    #[test]
    fn test_exact_empty_items_is_optimal_zero() {
        let result = solve(vec![], vec![50, 50, 50]);
        assert_eq!(result.status, SolveStatus::Optimal);
        assert_eq!(result.objective, Some(0));
        assert_eq!(result.loads.len(), 3);
        assert!(result.loads.iter().all(|l| l.value == 0 && l.weight == 0));
    }

    #[test]
    fn test_exact_single_bin_spread_is_zero_or_infeasible() {
        let fits = solve(vec![(5, 10), (5, 10)], vec![20]);
        assert_eq!(fits.objective, Some(0), "one bin always has zero spread");

        let too_heavy = solve(vec![(5, 10), (5, 10)], vec![15]);
        assert_eq!(too_heavy.status, SolveStatus::Infeasible);
        assert_eq!(too_heavy.objective, None);
        assert!(too_heavy.loads.is_empty());
    }

    #[test]
    fn test_exact_oversized_item_is_infeasible() {
        let result = solve(vec![(10, 60)], vec![50]);
        assert_eq!(result.status, SolveStatus::Infeasible);
    }

    #[test]
    fn test_exact_greedy_trap_optimum_is_seventy() {
        // 370 total value over three bins cannot level out; pairing the
        // 90 and 80 against the two 100 singletons is the best split.
        let pairs = vec![(100, 10), (100, 10), (90, 10), (80, 10)];
        let result = solve(pairs.clone(), vec![50, 50, 50]);
        assert_eq!(result.status, SolveStatus::Optimal);
        assert_eq!(result.objective, Some(70));

        let mut values: Vec<i64> = result.loads.iter().map(|l| l.value).collect();
        values.sort_unstable();
        assert_eq!(values, vec![100, 100, 170]);

        let reference = brute_force(&Instance::new(pairs, vec![50, 50, 50]));
        assert_eq!(reference, Some(70), "enumeration agrees");
    }

    #[test]
    fn test_exact_loads_are_consistent_with_input() {
        let pairs = vec![(9, 4), (8, 4), (7, 4), (6, 4), (5, 4)];
        let result = solve(pairs.clone(), vec![10, 10, 10]);
        assert_eq!(result.status, SolveStatus::Optimal);
        assert_eq!(result.loads.len(), 3);

        let total_value: i64 = pairs.iter().map(|&(v, _)| v).sum();
        let total_weight: i64 = pairs.iter().map(|&(_, w)| w).sum();
        assert_eq!(result.loads.iter().map(|l| l.value).sum::<i64>(), total_value);
        assert_eq!(result.loads.iter().map(|l| l.weight).sum::<i64>(), total_weight);
        for load in &result.loads {
            assert!(load.weight <= 10);
        }

        let objective = result.objective.unwrap();
        assert_eq!(objective, spread(result.loads.iter().map(|l| l.value)));
    }

    #[test]
    fn test_exact_memo_collapses_permuted_paths() {
        // Identical items reach the same loads in many item orders; the
        // memo must answer most of those paths.
        let result = solve(vec![(5, 1), (5, 1), (5, 1), (5, 1)], vec![50, 50]);
        assert_eq!(result.objective, Some(0));
        assert!(result.states_expanded > 0);
        assert!(
            result.memo_hits > 0,
            "expected memo hits on permutation-heavy input, got {}",
            result.memo_hits
        );
    }

    proptest! {
        #[test]
        fn test_exact_matches_brute_force(
            pairs in prop::collection::vec((0..=30i64, 0..=15i64), 0..7),
            capacities in prop::collection::vec(0..=20i64, 1..4),
        ) {
            let instance = Instance::new(pairs, capacities);
            let result = ExactSolver::solve(&instance).unwrap();
            let reference = brute_force(&instance);
            prop_assert_eq!(result.objective, reference);
            match reference {
                Some(optimum) => {
                    prop_assert_eq!(result.status, SolveStatus::Optimal);
                    prop_assert_eq!(result.loads.len(), instance.bin_count());
                    for (load, &capacity) in result.loads.iter().zip(&instance.capacities) {
                        prop_assert!(load.weight <= capacity);
                    }
                    prop_assert_eq!(spread(result.loads.iter().map(|l| l.value)), optimum);
                }
                None => {
                    prop_assert_eq!(result.status, SolveStatus::Infeasible);
                    prop_assert!(result.loads.is_empty());
                }
            }
        }

        #[test]
        fn test_exact_never_worse_than_approx(
            pairs in prop::collection::vec((0..=30i64, 0..=15i64), 0..7),
            capacities in prop::collection::vec(0..=20i64, 1..4),
        ) {
            let instance = Instance::new(pairs, capacities);
            let exact = ExactSolver::solve(&instance).unwrap();
            let approx = ApproxSolver::solve(&instance, &ApproxConfig::default()).unwrap();

            // Only comparable when the pipeline placed every item; a
            // discarded item shrinks the approximate spread unfairly.
            if let (Some(optimum), 0) = (exact.objective, approx.discarded_count()) {
                prop_assert!(
                    approx.objective >= optimum,
                    "approximation beat the optimum: {} < {}",
                    approx.objective,
                    optimum
                );
            }
        }
    }
}
