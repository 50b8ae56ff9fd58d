//! Random instance construction.

use rand::Rng;

use crate::model::Instance;

use super::CaseProfile;

/// Weight capacity of every generated bin.
///
/// Held fixed across profiles so that difficulty comes from the item
/// distribution, not from capacity variation.
pub const BIN_CAPACITY: i64 = 50;

/// Generates an instance with `n` items and `num_bins` uniform bins.
///
/// Item values and weights are drawn from the profile's ranges. The
/// greedy-trap profile always emits its four-item prefix, so for `n < 4`
/// the instance carries the full prefix rather than a truncated one.
pub fn random_instance<R: Rng>(
    n: usize,
    num_bins: usize,
    profile: CaseProfile,
    rng: &mut R,
) -> Instance {
    let mut pairs: Vec<(i64, i64)> = Vec::with_capacity(n);
    match profile {
        CaseProfile::Normal => {
            for _ in 0..n {
                pairs.push((rng.random_range(10..=100), rng.random_range(1..=20)));
            }
        }
        CaseProfile::Tight => {
            for _ in 0..n {
                pairs.push((rng.random_range(50..=100), rng.random_range(15..=30)));
            }
        }
        CaseProfile::Tiny => {
            for _ in 0..n {
                pairs.push((rng.random_range(1..=10), rng.random_range(1..=5)));
            }
        }
        CaseProfile::GreedyTrap => {
            pairs.extend([(100, 10), (100, 10), (90, 10), (80, 10)]);
            while pairs.len() < n {
                pairs.push((5, 1));
            }
        }
    }
    Instance::new(pairs, vec![BIN_CAPACITY; num_bins])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generator_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let instance = random_instance(12, 3, CaseProfile::Normal, &mut rng);
        assert_eq!(instance.item_count(), 12);
        assert_eq!(instance.capacities, vec![BIN_CAPACITY; 3]);
        let indices: Vec<usize> = instance.items.iter().map(|i| i.original_index).collect();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
        assert!(instance.validate().is_ok());
    }

    #[test]
    fn test_generator_profile_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = [
            (CaseProfile::Normal, 10..=100, 1..=20),
            (CaseProfile::Tight, 50..=100, 15..=30),
            (CaseProfile::Tiny, 1..=10, 1..=5),
        ];
        for (profile, values, weights) in bounds {
            let instance = random_instance(200, 3, profile, &mut rng);
            for item in &instance.items {
                assert!(
                    values.contains(&item.value),
                    "{} value {} outside {:?}",
                    profile,
                    item.value,
                    values
                );
                assert!(
                    weights.contains(&item.weight),
                    "{} weight {} outside {:?}",
                    profile,
                    item.weight,
                    weights
                );
            }
        }
    }

    #[test]
    fn test_generator_greedy_trap_prefix_and_padding() {
        let mut rng = StdRng::seed_from_u64(1);
        let instance = random_instance(9, 3, CaseProfile::GreedyTrap, &mut rng);
        let pairs: Vec<(i64, i64)> = instance.items.iter().map(|i| (i.value, i.weight)).collect();
        assert_eq!(&pairs[..4], &[(100, 10), (100, 10), (90, 10), (80, 10)]);
        assert!(pairs[4..].iter().all(|&p| p == (5, 1)));
        assert_eq!(pairs.len(), 9);
    }

    #[test]
    fn test_generator_greedy_trap_keeps_prefix_below_four() {
        let mut rng = StdRng::seed_from_u64(1);
        let instance = random_instance(2, 3, CaseProfile::GreedyTrap, &mut rng);
        assert_eq!(instance.item_count(), 4, "prefix is never truncated");
    }

    #[test]
    fn test_generator_is_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first = random_instance(30, 3, CaseProfile::Tight, &mut a);
        let second = random_instance(30, 3, CaseProfile::Tight, &mut b);
        assert_eq!(first, second);
    }
}
