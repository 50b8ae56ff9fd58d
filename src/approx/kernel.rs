//! Kernelization: strip items that no bin could ever take.
//!
//! An item heavier than the largest capacity cannot be placed by any
//! assignment, so downstream stages never need to consider it. Filtering
//! once up front keeps the greedy and refinement loops free of dead
//! candidates and gives callers a precise list of what was hopeless.

use crate::model::Item;

/// Outcome of the kernelization pass.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    /// Items whose weight fits at least the largest bin.
    pub feasible: Vec<Item>,
    /// Items heavier than every bin, unplaceable regardless of order.
    pub infeasible: Vec<Item>,
}

/// Splits items by placeability against the largest capacity.
///
/// The boundary is inclusive: an item exactly as heavy as the largest
/// capacity is feasible. With no bins at all every item is infeasible.
/// Input order is preserved within both halves.
pub fn partition(items: &[Item], capacities: &[i64]) -> Partition {
    let max_capacity = capacities.iter().copied().max();
    let mut feasible = Vec::with_capacity(items.len());
    let mut infeasible = Vec::new();
    for item in items {
        match max_capacity {
            Some(capacity) if item.weight <= capacity => feasible.push(item.clone()),
            _ => infeasible.push(item.clone()),
        }
    }
    Partition {
        feasible,
        infeasible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Instance;

    #[test]
    fn test_kernel_partitions_by_largest_capacity() {
        let instance = Instance::new(vec![(10, 60), (10, 30), (10, 45)], vec![20, 40]);
        let partition = partition(&instance.items, &instance.capacities);
        assert_eq!(partition.feasible.len(), 1);
        assert_eq!(partition.feasible[0].original_index, 1);
        let rejected: Vec<usize> = partition
            .infeasible
            .iter()
            .map(|i| i.original_index)
            .collect();
        assert_eq!(rejected, vec![0, 2]);
    }

    #[test]
    fn test_kernel_boundary_weight_is_feasible() {
        let instance = Instance::new(vec![(10, 50)], vec![50]);
        let partition = partition(&instance.items, &instance.capacities);
        assert_eq!(partition.feasible.len(), 1, "weight == capacity must pass");
        assert!(partition.infeasible.is_empty());
    }

    #[test]
    fn test_kernel_no_bins_rejects_everything() {
        let instance = Instance::new(vec![(10, 1), (20, 2)], vec![]);
        let partition = partition(&instance.items, &instance.capacities);
        assert!(partition.feasible.is_empty());
        assert_eq!(partition.infeasible.len(), 2);
    }

    #[test]
    fn test_kernel_preserves_input_order() {
        let instance = Instance::new(vec![(1, 5), (2, 99), (3, 5), (4, 99), (5, 5)], vec![50]);
        let partition = partition(&instance.items, &instance.capacities);
        let kept: Vec<usize> = partition
            .feasible
            .iter()
            .map(|i| i.original_index)
            .collect();
        assert_eq!(kept, vec![0, 2, 4]);
    }
}
