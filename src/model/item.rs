//! Problem input: items and bin capacities.

/// A unit to be assigned to exactly one bin.
///
/// `value` is what the receiving bin accumulates toward the balance
/// objective; `weight` is what it costs against the bin's capacity. The
/// two are independent: a high-value item can be light and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Value contributed to the receiving bin's total.
    pub value: i64,
    /// Weight counted against the receiving bin's capacity.
    pub weight: i64,
    /// Position of this item in the caller's input, kept through every
    /// sort and transfer so results can be traced back.
    pub original_index: usize,
}

/// A complete problem instance: items plus one weight capacity per bin.
///
/// # Examples
///
/// ```
/// use u_balance::model::Instance;
///
/// let instance = Instance::new(vec![(100, 10), (90, 10)], vec![50, 50]);
/// assert!(instance.validate().is_ok());
/// assert_eq!(instance.item_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance {
    /// Items in input order (`original_index` equals the position here).
    pub items: Vec<Item>,
    /// Maximum total weight per bin; `capacities[i]` belongs to bin `i`.
    pub capacities: Vec<i64>,
}

impl Instance {
    /// Builds an instance from `(value, weight)` pairs.
    ///
    /// Each item's `original_index` is its position in `pairs`.
    pub fn new(pairs: Vec<(i64, i64)>, capacities: Vec<i64>) -> Self {
        let items = pairs
            .into_iter()
            .enumerate()
            .map(|(original_index, (value, weight))| Item {
                value,
                weight,
                original_index,
            })
            .collect();
        Self { items, capacities }
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of bins.
    pub fn bin_count(&self) -> usize {
        self.capacities.len()
    }

    /// Checks the instance before any solving starts.
    ///
    /// Rejected outright: an empty bin list, a negative capacity, and a
    /// negative item value or weight. Solvers call this first so malformed
    /// input fails here instead of surfacing as nonsense mid-search. An
    /// instance with zero items is valid (the objective is trivially 0).
    pub fn validate(&self) -> Result<(), String> {
        if self.capacities.is_empty() {
            return Err("instance has no bins".to_string());
        }
        for (bin, &capacity) in self.capacities.iter().enumerate() {
            if capacity < 0 {
                return Err(format!("bin {} has negative capacity ({})", bin, capacity));
            }
        }
        for item in &self.items {
            if item.value < 0 {
                return Err(format!(
                    "item {} has negative value ({})",
                    item.original_index, item.value
                ));
            }
            if item.weight < 0 {
                return Err(format!(
                    "item {} has negative weight ({})",
                    item.original_index, item.weight
                ));
            }
        }
        Ok(())
    }
}
