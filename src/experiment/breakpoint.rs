//! Wall-clock breakpoint probe for the exact solver.
//!
//! Answers "at what instance size does exact search stop being usable
//! here?" by growing the item count until a single solve exceeds a time
//! limit. The limit is checked around completed calls only, the solver
//! is never interrupted, so the breaching probe may run well past it.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::exact::ExactSolver;
use crate::generator::{random_instance, CaseProfile};

/// Probes faster than this advance the sweep two sizes at a time.
const FAST_GROWTH_CUTOFF: Duration = Duration::from_secs(1);

/// Breakpoint probe configuration.
#[derive(Debug, Clone)]
pub struct BreakpointConfig {
    /// Wall-clock limit a single exact solve must stay under.
    pub time_limit: Duration,
    /// Item count of the first probe.
    pub start_n: usize,
    /// Bins per probe instance.
    pub num_bins: usize,
    /// Profile the probe instances are drawn from.
    pub profile: CaseProfile,
    /// Generator seed; `None` draws a fresh one per run.
    pub seed: Option<u64>,
}

impl Default for BreakpointConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            start_n: 10,
            num_bins: 3,
            profile: CaseProfile::Normal,
            seed: None,
        }
    }
}

impl BreakpointConfig {
    /// Sets the per-solve time limit.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets the first probed item count.
    pub fn with_start_n(mut self, start_n: usize) -> Self {
        self.start_n = start_n;
        self
    }

    /// Sets the number of bins per probe instance.
    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = num_bins;
        self
    }

    /// Sets the probe profile.
    pub fn with_profile(mut self, profile: CaseProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Sets the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_bins == 0 {
            return Err("num_bins must be >= 1".to_string());
        }
        Ok(())
    }
}

/// One timed exact solve.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointProbe {
    /// Item count of the probe instance.
    pub n: usize,
    /// Wall-clock of the solve.
    pub elapsed: Duration,
}

/// Outcome of the breakpoint search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointResult {
    /// First item count whose solve exceeded the limit.
    pub breakpoint_n: usize,
    /// Every probe in order, the breaching one last.
    pub probes: Vec<BreakpointProbe>,
}

/// Grows the item count until one exact solve exceeds the limit.
///
/// Sub-second probes jump two sizes ahead, slower ones advance one at a
/// time, so the sweep crosses the flat region quickly and resolves the
/// knee finely. With exponential solver cost this terminates for any
/// limit.
pub fn find_breakpoint(config: &BreakpointConfig) -> Result<BreakpointResult, String> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let mut n = config.start_n;
    let mut probes = Vec::new();
    loop {
        let instance = random_instance(n, config.num_bins, config.profile, &mut rng);
        let start = Instant::now();
        ExactSolver::solve(&instance)?;
        let elapsed = start.elapsed();
        probes.push(BreakpointProbe { n, elapsed });

        if elapsed > config.time_limit {
            return Ok(BreakpointResult {
                breakpoint_n: n,
                probes,
            });
        }
        n = next_probe_size(n, elapsed);
    }
}

fn next_probe_size(n: usize, elapsed: Duration) -> usize {
    if elapsed < FAST_GROWTH_CUTOFF {
        n + 2
    } else {
        n + 1
    }
}
