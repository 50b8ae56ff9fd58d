//! Bin bookkeeping shared by the greedy constructor and the refiner.

use super::Item;

/// The `(value, weight)` totals of one bin.
///
/// This projection is all a solver needs to judge a partial assignment:
/// future feasibility depends only on accumulated weight, the objective
/// only on accumulated value. The exact search keys its memo on rows of
/// these, which is why the full item list is not part of the type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinLoad {
    /// Sum of assigned item values.
    pub value: i64,
    /// Sum of assigned item weights.
    pub weight: i64,
}

/// A capacity-limited container holding assigned items.
///
/// Totals are maintained incrementally alongside the item list, so
/// `value` and `weight` always equal the sums over `items` and
/// `weight <= capacity` holds after every mutation that checks `fits`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bin {
    /// Maximum total weight this bin may hold.
    pub capacity: i64,
    /// Sum of assigned item values.
    pub value: i64,
    /// Sum of assigned item weights.
    pub weight: i64,
    /// Assigned items in assignment order.
    pub items: Vec<Item>,
}

impl Bin {
    /// Creates an empty bin with the given capacity.
    pub fn new(capacity: i64) -> Self {
        Self {
            capacity,
            value: 0,
            weight: 0,
            items: Vec::new(),
        }
    }

    /// Remaining weight capacity.
    pub fn remaining(&self) -> i64 {
        self.capacity - self.weight
    }

    /// Whether the item fits the remaining capacity.
    pub fn fits(&self, item: &Item) -> bool {
        self.weight + item.weight <= self.capacity
    }

    /// Assigns an item and updates the totals.
    pub fn push(&mut self, item: Item) {
        self.value += item.value;
        self.weight += item.weight;
        self.items.push(item);
    }

    /// Removes and returns the item at `index`, updating the totals.
    /// Remaining items keep their relative order.
    pub fn remove(&mut self, index: usize) -> Item {
        let item = self.items.remove(index);
        self.value -= item.value;
        self.weight -= item.weight;
        item
    }

    /// Replaces the item at `index` in place, returning the old one.
    ///
    /// The slot keeps its position, which the swap operator relies on.
    pub fn replace(&mut self, index: usize, item: Item) -> Item {
        self.value += item.value;
        self.weight += item.weight;
        let old = std::mem::replace(&mut self.items[index], item);
        self.value -= old.value;
        self.weight -= old.weight;
        old
    }

    /// The `(value, weight)` projection of this bin.
    pub fn load(&self) -> BinLoad {
        BinLoad {
            value: self.value,
            weight: self.weight,
        }
    }
}

/// Max minus min over a sequence of values; `0` for an empty sequence.
///
/// The balance objective is this applied to per-bin value totals. An
/// instance with no items still has bins, all at value 0, so the empty
/// case only arises for degenerate callers and maps to the same answer.
pub fn spread(values: impl IntoIterator<Item = i64>) -> i64 {
    let mut min = i64::MAX;
    let mut max = i64::MIN;
    let mut any = false;
    for value in values {
        min = min.min(value);
        max = max.max(value);
        any = true;
    }
    if any {
        max - min
    } else {
        0
    }
}
