//! Approximate pipeline configuration.

/// How the refiner judges a candidate move or swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcceptancePolicy {
    /// Compare only the two bins touched by the operation: accept when
    /// the absolute difference between their hypothetical new values is
    /// strictly below the current richest-poorest difference.
    ///
    /// With more than two bins this local test can accept an operation
    /// that leaves the overall spread unchanged (another bin still holds
    /// the extreme). It is cheap, monotone, and the default.
    TwoBinDelta,
    /// Recompute the spread over all bins with the touched pair
    /// substituted, and accept only a strict decrease of that global
    /// value. Stricter and costlier per candidate.
    GlobalSpread,
}

impl Default for AcceptancePolicy {
    fn default() -> Self {
        AcceptancePolicy::TwoBinDelta
    }
}

/// Configuration for the approximate pipeline.
///
/// # Examples
///
/// ```
/// use u_balance::approx::{AcceptancePolicy, ApproxConfig};
///
/// let config = ApproxConfig::default().with_acceptance(AcceptancePolicy::GlobalSpread);
/// assert_eq!(config.acceptance, AcceptancePolicy::GlobalSpread);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ApproxConfig {
    /// Acceptance test applied by the local-search refiner.
    pub acceptance: AcceptancePolicy,
}

impl ApproxConfig {
    /// Sets the refiner's acceptance policy.
    pub fn with_acceptance(mut self, acceptance: AcceptancePolicy) -> Self {
        self.acceptance = acceptance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_config_defaults() {
        let config = ApproxConfig::default();
        assert_eq!(config.acceptance, AcceptancePolicy::TwoBinDelta);
    }

    #[test]
    fn test_approx_config_builder() {
        let config = ApproxConfig::default().with_acceptance(AcceptancePolicy::GlobalSpread);
        assert_eq!(config.acceptance, AcceptancePolicy::GlobalSpread);
    }
}
