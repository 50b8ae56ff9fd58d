//! Search-state encoding for the memoized recursion.

use crate::model::BinLoad;

/// Memoization key: next item index plus the per-bin loads flattened to
/// `[value0, weight0, value1, weight1, ...]`.
///
/// Two assignment histories that meet at the same key are interchangeable
/// for everything that follows: remaining feasibility depends only on the
/// accumulated weights, the final objective only on the accumulated
/// values. Which items produced the totals is irrelevant, and that is
/// precisely the redundancy the memo removes.
///
/// Bins are not reordered before encoding. Loads that are permutations of
/// each other count as distinct states; capacities may differ per bin, so
/// position matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchKey {
    index: usize,
    loads: Box<[i64]>,
}

impl SearchKey {
    /// Encodes the state reached before deciding item `index`.
    pub fn new(index: usize, loads: &[BinLoad]) -> Self {
        let mut flat = Vec::with_capacity(loads.len() * 2);
        for load in loads {
            flat.push(load.value);
            flat.push(load.weight);
        }
        Self {
            index,
            loads: flat.into_boxed_slice(),
        }
    }
}
