//! Move/swap local search between the extreme bins.
//!
//! # Algorithm
//!
//! Each pass locates the richest and the poorest bin by value (first
//! occurrence on ties). It then tries, in order:
//!
//! 1. **Move**: the first item in the richest bin that fits the poorest
//!    bin's remaining capacity and passes the acceptance test
//! 2. **Swap**: the first item pair (richest x poorest, both capacity
//!    checks after the exchange) that passes the acceptance test
//!
//! An applied operation restarts the pass from fresh extremes. The loop
//! ends when the spread hits zero or neither operator finds an accepted
//! candidate.
//!
//! Acceptance requires the transferred value to lie strictly between
//! zero and the current richest-poorest difference, so both new totals
//! land strictly inside the old interval: the overall spread never
//! increases, and with integer values the loop terminates.

use crate::model::Bin;

use super::config::AcceptancePolicy;

/// Counters from one refinement run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefineStats {
    /// Items relocated from a richest bin to a poorest bin.
    pub moves: usize,
    /// Item exchanges between a richest and a poorest bin.
    pub swaps: usize,
    /// Passes that examined the operators, the final empty-handed pass
    /// included. A start already at spread zero counts none.
    pub passes: usize,
}

/// Refines an assignment in place until no accepted operation remains.
///
/// Bins keep their capacities and stay within them; only item placement
/// changes. Unassigned items are out of scope here, the refiner never
/// revisits them.
pub fn refine(bins: &mut [Bin], policy: AcceptancePolicy) -> RefineStats {
    let mut stats = RefineStats::default();
    loop {
        let Some((richest, poorest)) = extremes(bins) else {
            break;
        };
        let current_diff = bins[richest].value - bins[poorest].value;
        if current_diff == 0 {
            break;
        }
        stats.passes += 1;

        if let Some(index) = find_move(bins, richest, poorest, current_diff, policy) {
            let item = bins[richest].remove(index);
            bins[poorest].push(item);
            stats.moves += 1;
            continue;
        }

        if let Some((rich_index, poor_index)) = find_swap(bins, richest, poorest, current_diff, policy)
        {
            let outgoing = bins[richest].items[rich_index].clone();
            let incoming = bins[poorest].replace(poor_index, outgoing);
            bins[richest].replace(rich_index, incoming);
            stats.swaps += 1;
            continue;
        }

        break;
    }
    stats
}

/// Indices of the first richest and first poorest bin, `None` when there
/// are no bins.
fn extremes(bins: &[Bin]) -> Option<(usize, usize)> {
    let first = bins.first()?;
    let mut richest = 0;
    let mut poorest = 0;
    let mut max = first.value;
    let mut min = first.value;
    for (index, bin) in bins.iter().enumerate().skip(1) {
        if bin.value > max {
            max = bin.value;
            richest = index;
        }
        if bin.value < min {
            min = bin.value;
            poorest = index;
        }
    }
    Some((richest, poorest))
}

/// First item in the richest bin whose relocation fits and is accepted.
/// Items that fit but fail the acceptance test are passed over.
fn find_move(
    bins: &[Bin],
    richest: usize,
    poorest: usize,
    current_diff: i64,
    policy: AcceptancePolicy,
) -> Option<usize> {
    let rich = &bins[richest];
    let poor = &bins[poorest];
    for (index, item) in rich.items.iter().enumerate() {
        if poor.weight + item.weight > poor.capacity {
            continue;
        }
        let new_rich = rich.value - item.value;
        let new_poor = poor.value + item.value;
        if accepts(bins, richest, poorest, new_rich, new_poor, current_diff, policy) {
            return Some(index);
        }
    }
    None
}

/// First (richest, poorest) item pair whose exchange respects both
/// capacities and is accepted.
fn find_swap(
    bins: &[Bin],
    richest: usize,
    poorest: usize,
    current_diff: i64,
    policy: AcceptancePolicy,
) -> Option<(usize, usize)> {
    let rich = &bins[richest];
    let poor = &bins[poorest];
    for (rich_index, rich_item) in rich.items.iter().enumerate() {
        for (poor_index, poor_item) in poor.items.iter().enumerate() {
            let rich_weight = rich.weight - rich_item.weight + poor_item.weight;
            let poor_weight = poor.weight - poor_item.weight + rich_item.weight;
            if rich_weight > rich.capacity || poor_weight > poor.capacity {
                continue;
            }
            let new_rich = rich.value - rich_item.value + poor_item.value;
            let new_poor = poor.value - poor_item.value + rich_item.value;
            if accepts(bins, richest, poorest, new_rich, new_poor, current_diff, policy) {
                return Some((rich_index, poor_index));
            }
        }
    }
    None
}

fn accepts(
    bins: &[Bin],
    richest: usize,
    poorest: usize,
    new_rich_value: i64,
    new_poor_value: i64,
    current_diff: i64,
    policy: AcceptancePolicy,
) -> bool {
    match policy {
        AcceptancePolicy::TwoBinDelta => (new_rich_value - new_poor_value).abs() < current_diff,
        AcceptancePolicy::GlobalSpread => {
            let mut min = i64::MAX;
            let mut max = i64::MIN;
            for (index, bin) in bins.iter().enumerate() {
                let value = if index == richest {
                    new_rich_value
                } else if index == poorest {
                    new_poor_value
                } else {
                    bin.value
                };
                min = min.min(value);
                max = max.max(value);
            }
            max - min < current_diff
        }
    }
}
