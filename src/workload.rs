//! Seeded random workloads.
//!
//! [`bernoulli`] walks the clock one tick at a time and, with probability
//! `p_arrival`, creates a process arriving at that tick. Each process is
//! short with probability `p_short` and long otherwise, and draws a priority
//! rank uniformly from `0..=max_priority`.
//!
//! The same parameters and seed always produce the same list.
//!
//! ```
//! use cpu_schedule::workload::{bernoulli, BernoulliSpec};
//!
//! let spec = BernoulliSpec::new(100).with_p_arrival(0.5);
//! let a = bernoulli(&spec, 7);
//! assert_eq!(a, bernoulli(&spec, 7));
//! assert!(a.windows(2).all(|w| w[0].arrival <= w[1].arrival));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Process, Time};

/// Parameters of a Bernoulli arrival process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BernoulliSpec {
    /// Number of ticks to sample arrivals over.
    pub ticks: Time,
    /// Chance of an arrival at each tick (0.0..=1.0).
    pub p_arrival: f64,
    /// Chance that an arriving process is short.
    pub p_short: f64,
    /// Burst of a short process.
    pub short_burst: Time,
    /// Burst of a long process.
    pub long_burst: Time,
    /// Highest priority rank drawn.
    pub max_priority: i64,
}

impl BernoulliSpec {
    /// Creates a spec over `ticks` with the default mix
    /// (30% arrivals, 30% short jobs of 2 ticks, long jobs of 6 ticks, ranks 0..=4).
    pub fn new(ticks: Time) -> Self {
        Self {
            ticks,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
            max_priority: 4,
        }
    }

    /// Sets the per-tick arrival probability.
    pub fn with_p_arrival(mut self, p: f64) -> Self {
        self.p_arrival = p;
        self
    }

    /// Sets the short-job probability.
    pub fn with_p_short(mut self, p: f64) -> Self {
        self.p_short = p;
        self
    }

    /// Sets the short and long bursts.
    pub fn with_bursts(mut self, short_burst: Time, long_burst: Time) -> Self {
        self.short_burst = short_burst;
        self.long_burst = long_burst;
        self
    }

    /// Sets the highest priority rank.
    pub fn with_max_priority(mut self, max_priority: i64) -> Self {
        self.max_priority = max_priority;
        self
    }
}

/// Generates a process list sorted by arrival with ids `1..=n`.
///
/// Bursts below 1 are raised to 1 and a negative `max_priority` is treated
/// as 0, so the result always passes validation.
pub fn bernoulli(spec: &BernoulliSpec, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    let max_priority = spec.max_priority.max(0);
    let mut processes = Vec::new();

    for t in 0..spec.ticks.max(0) {
        if rng.random::<f64>() < spec.p_arrival {
            let burst = if rng.random::<f64>() < spec.p_short {
                spec.short_burst
            } else {
                spec.long_burst
            };
            let priority = rng.random_range(0..=max_priority);
            let id = processes.len() as i64 + 1;
            processes.push(Process::new(id, burst.max(1), t).with_priority(priority));
        }
    }

    processes
}
