//! Largest-value-first constructive assignment.
//!
//! # Algorithm
//!
//! 1. Sort items by value descending, ties kept in input order
//! 2. Give each item to the fitting bin with the lowest accumulated
//!    value, ties to the lowest bin index
//! 3. Items no bin can take go to the unassigned list
//!
//! This is the fairness cousin of longest-processing-time-first
//! scheduling: committing the large values while every bin is still a
//! candidate keeps the totals level, and the small values left at the
//! end patch the residual differences.
//!
//! # References
//!
//! - Graham, R. L. (1969). "Bounds on Multiprocessing Timing Anomalies"

use std::cmp::Reverse;

use crate::model::{Bin, Item};

/// Builds the initial assignment.
///
/// `items` should already be kernelized; anything returned in the second
/// tuple slot fit the largest bin in principle but found every bin's
/// remaining capacity exhausted at its turn. Decisions here are
/// irrevocable, improving them is the refiner's job.
pub fn assign(mut items: Vec<Item>, capacities: &[i64]) -> (Vec<Bin>, Vec<Item>) {
    items.sort_by_key(|item| (Reverse(item.value), item.original_index));

    let mut bins: Vec<Bin> = capacities.iter().map(|&c| Bin::new(c)).collect();
    let mut unassigned = Vec::new();

    for item in items {
        let target = bins
            .iter()
            .enumerate()
            .filter(|(_, bin)| bin.fits(&item))
            .min_by_key(|&(index, bin)| (bin.value, index))
            .map(|(index, _)| index);

        match target {
            Some(index) => bins[index].push(item),
            None => unassigned.push(item),
        }
    }

    (bins, unassigned)
}
