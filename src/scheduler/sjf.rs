//! Non-preemptive Shortest-Job-First and its priority-tie-broken variant.
//!
//! # Algorithm
//!
//! Whenever the processor is free:
//! 1. Admit every process with `arrival <= now`.
//! 2. If nothing is ready, jump the clock to the next arrival (idle, no span).
//! 3. Otherwise pick the best ready process with the engine's [`RuleEngine`].
//! 4. Run it to completion: emit `[now, now + burst)`, record statistics,
//!    mark it complete.
//!
//! Selection happens only at processor-free instants, so a shorter job
//! arriving mid-burst waits for the running one.
//!
//! Both engines share this loop and differ only in the comparator:
//! - [`Sjf`]: burst, then id
//! - [`PrioritySjf`]: burst, then priority rank, then id
//!
//! # Complexity
//! O(n²) comparisons in the worst case (every ready process is scanned at
//! each of n dispatch points).

use log::debug;

use super::{PolicyKind, Scheduler};
use crate::dispatching::RuleEngine;
use crate::models::{Process, Schedule, TimeSlice};
use crate::ready_set::ReadySet;

/// Runs a non-preemptive selection loop driven by `engine`.
fn run_to_completion(kind: PolicyKind, engine: &RuleEngine, processes: &[Process]) -> Schedule {
    let mut schedule = Schedule::new(kind.name());
    let mut ready = ReadySet::new(processes);

    while !ready.all_complete() {
        ready.admit();

        let candidates: Vec<&Process> = ready.ready().collect();
        let Some(pid) = engine.select_best(&candidates).map(|p| p.id) else {
            if ready.skip_idle().is_none() {
                break;
            }
            continue;
        };

        let Some(process) = ready.dispatch(pid) else {
            unreachable!("{kind}: selected process {pid} is not ready at t={}", ready.now());
        };
        let start = ready.now();
        ready.advance_by(process.burst);
        let stop = ready.now();

        debug!("{kind} t={start} dispatch {pid} until {stop}");
        schedule.timeline.push(TimeSlice::new(pid, start, stop));
        schedule.complete(&process, stop);
        ready.mark_complete(pid);
    }

    schedule
}

/// Non-preemptive Shortest-Job-First engine.
///
/// Ties on burst go to the lowest process id.
#[derive(Debug, Clone)]
pub struct Sjf {
    engine: RuleEngine,
}

impl Sjf {
    /// Creates the engine.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::shortest_job_first(),
        }
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Sjf {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Sjf
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        run_to_completion(self.kind(), &self.engine, processes)
    }
}

/// Non-preemptive Shortest-Job-First with priority tie-breaking.
///
/// Ties on burst go to the lowest priority rank, then the lowest id.
#[derive(Debug, Clone)]
pub struct PrioritySjf {
    engine: RuleEngine,
}

impl PrioritySjf {
    /// Creates the engine.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::priority_shortest_job_first(),
        }
    }
}

impl Default for PrioritySjf {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for PrioritySjf {
    fn kind(&self) -> PolicyKind {
        PolicyKind::PrioritySjf
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        run_to_completion(self.kind(), &self.engine, processes)
    }
}
