//! Difficulty profiles for synthetic instances.

use std::fmt;
use std::str::FromStr;

use self::CaseProfile::*;

/// Shape of a generated instance.
///
/// Each profile fixes the value and weight ranges items are drawn from;
/// capacities stay uniform so difficulty varies with the items alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseProfile {
    /// Values 10..=100, weights 1..=20. The everyday mix.
    Normal,
    /// Values 50..=100, weights 15..=30: every item eats 30-60% of a
    /// bin, so only two or three fit and placement order bites.
    Tight,
    /// Values 1..=10, weights 1..=5. Many small items, near-continuous
    /// value totals, easy to level.
    Tiny,
    /// Fixed prefix (100,10) (100,10) (90,10) (80,10) padded with (5,1)
    /// items. Built so a value-first constructive start looks right
    /// until the balance is checked.
    GreedyTrap,
}

impl CaseProfile {
    /// All profiles in report order.
    pub const ALL: [CaseProfile; 4] = [Normal, Tight, GreedyTrap, Tiny];

    /// Lowercase profile name as it appears in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Normal => "normal",
            Tight => "tight",
            Tiny => "tiny",
            GreedyTrap => "greedy_trap",
        }
    }
}

impl fmt::Display for CaseProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Normal),
            "tight" => Ok(Tight),
            "tiny" => Ok(Tiny),
            "greedy_trap" => Ok(GreedyTrap),
            other => Err(format!("unknown case profile: {}", other)),
        }
    }
}
