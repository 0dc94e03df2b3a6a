//! Policy engines and the simulator that drives them.
//!
//! Every engine implements [`Scheduler`]: it reads the same process list,
//! owns all of its per-run state, and returns a fresh [`Schedule`].
//! [`Simulator`] validates the input once and then runs one or more
//! policies over it.
//!
//! | Policy | Engine | Preemptive | Selection |
//! |--------|--------|------------|-----------|
//! | FCFS | [`Fcfs`] | no | input order |
//! | SJF | [`Sjf`] | no | shortest burst, then lowest id |
//! | Priority-SJF | [`PrioritySjf`] | no | shortest burst, then lowest priority rank, then lowest id |
//! | RR | [`RoundRobin`] | yes (quantum) | FIFO queue |
//!
//! # Statistics
//!
//! [`Summary`] reduces a schedule to averages and throughput; see the
//! `stats` module.

mod fcfs;
mod round_robin;
mod sjf;
mod stats;

pub use fcfs::Fcfs;
pub use round_robin::RoundRobin;
pub use sjf::{PrioritySjf, Sjf};
pub use stats::{Accumulator, Summary};

use std::fmt;
use std::thread;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::error::Result;
use crate::models::{Process, Schedule};
use crate::validation::validate_processes;

/// The scheduling policies the simulator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// First-Come-First-Served.
    Fcfs,
    /// Non-preemptive Shortest-Job-First.
    Sjf,
    /// Shortest-Job-First with priority tie-breaking.
    PrioritySjf,
    /// Round-Robin with a fixed quantum.
    RoundRobin,
}

impl PolicyKind {
    /// All policies in reporting order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::PrioritySjf,
        PolicyKind::RoundRobin,
    ];

    /// Short name used in schedules and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::PrioritySjf => "Priority-SJF",
            Self::RoundRobin => "RR",
        }
    }

    /// Report title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-come, first-serve",
            Self::Sjf => "Shortest-job-first",
            Self::PrioritySjf => "Priority",
            Self::RoundRobin => "Round-robin",
        }
    }

    /// Whether the policy can take the processor away from a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Looks a policy up by its short name (as stored in [`Schedule::policy`]).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single-processor scheduling policy.
///
/// Implementations assume validated input (positive bursts, non-negative
/// arrivals, unique ids) and never fail on it.
pub trait Scheduler: Send + Sync + fmt::Debug {
    /// Which policy this engine implements.
    fn kind(&self) -> PolicyKind;

    /// Simulates the policy over `processes`.
    fn schedule(&self, processes: &[Process]) -> Schedule;
}

/// Builds the engine for a policy.
pub fn scheduler_for(kind: PolicyKind, config: &SimConfig) -> Box<dyn Scheduler> {
    match kind {
        PolicyKind::Fcfs => Box::new(Fcfs::new()),
        PolicyKind::Sjf => Box::new(Sjf::new()),
        PolicyKind::PrioritySjf => Box::new(PrioritySjf::new()),
        PolicyKind::RoundRobin => Box::new(RoundRobin::new(config.quantum)),
    }
}

/// Validates input and runs policies over it.
///
/// # Example
///
/// ```
/// use cpu_schedule::config::SimConfig;
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{PolicyKind, Simulator};
///
/// let processes = vec![
///     Process::new(1, 5, 0),
///     Process::new(2, 3, 1),
///     Process::new(3, 2, 2),
/// ];
/// let sim = Simulator::new(SimConfig::default()).unwrap();
/// let schedule = sim.run(PolicyKind::Sjf, &processes).unwrap();
/// assert_eq!(schedule.completion_order(), vec![1, 3, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    /// Creates a simulator after checking the configuration.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Runs one policy.
    pub fn run(&self, kind: PolicyKind, processes: &[Process]) -> Result<Schedule> {
        validate_processes(processes)?;
        Ok(self.run_validated(kind, processes))
    }

    /// Runs every configured policy, one after another.
    pub fn run_all(&self, processes: &[Process]) -> Result<Vec<Schedule>> {
        validate_processes(processes)?;
        Ok(self
            .config
            .policies
            .iter()
            .map(|&kind| self.run_validated(kind, processes))
            .collect())
    }

    /// Runs every configured policy, each on its own thread.
    ///
    /// Results come back in configuration order.
    pub fn run_all_parallel(&self, processes: &[Process]) -> Result<Vec<Schedule>> {
        validate_processes(processes)?;
        let schedules: Vec<Schedule> = thread::scope(|scope| {
            let handles: Vec<_> = self
                .config
                .policies
                .iter()
                .map(|&kind| scope.spawn(move || self.run_validated(kind, processes)))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
                .collect()
        });
        Ok(schedules)
    }

    fn run_validated(&self, kind: PolicyKind, processes: &[Process]) -> Schedule {
        info!("running {} over {} processes", kind, processes.len());
        let schedule = scheduler_for(kind, &self.config).schedule(processes);
        info!(
            "{} finished: {} spans, makespan {}",
            kind,
            schedule.timeline.len(),
            schedule.makespan()
        );
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use crate::validation::ValidationErrorKind;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 5, 0),
            Process::new(2, 3, 1),
            Process::new(3, 2, 2),
        ]
    }

    #[test]
    fn test_policy_names_round_trip() {
        for kind in PolicyKind::ALL {
            assert_eq!(PolicyKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(PolicyKind::from_name("EDF"), None);
        assert_eq!(PolicyKind::RoundRobin.to_string(), "RR");
        assert!(PolicyKind::RoundRobin.is_preemptive());
        assert!(!PolicyKind::Sjf.is_preemptive());
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&PolicyKind::PrioritySjf).unwrap();
        assert_eq!(json, r#""priority-sjf""#);
    }

    #[test]
    fn test_scheduler_for_kinds() {
        let config = SimConfig::default();
        for kind in PolicyKind::ALL {
            assert_eq!(scheduler_for(kind, &config).kind(), kind);
        }
    }

    #[test]
    fn test_run_rejects_invalid_input() {
        let sim = Simulator::default();
        let err = sim
            .run(PolicyKind::Fcfs, &[Process::new(1, 0, 0)])
            .unwrap_err();
        assert!(matches!(err, SimError::Validation(_)));
        assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::InvalidRecord);
    }

    #[test]
    fn test_run_rejects_clock_overflow_instead_of_panicking() {
        let sim = Simulator::default();
        let processes = [Process::new(1, 10, i64::MAX - 5)];
        for kind in PolicyKind::ALL {
            let err = sim.run(kind, &processes).unwrap_err();
            assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::InvalidRecord);
        }
        assert!(sim.run_all_parallel(&processes).is_err());
    }

    #[test]
    fn test_run_all_rejects_duplicates() {
        let sim = Simulator::default();
        let err = sim
            .run_all(&[Process::new(1, 2, 0), Process::new(1, 2, 0)])
            .unwrap_err();
        assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::DuplicateId);
    }

    #[test]
    fn test_run_all_in_policy_order() {
        let sim = Simulator::default();
        let schedules = sim.run_all(&sample()).unwrap();
        let names: Vec<_> = schedules.iter().map(|s| s.policy.as_str()).collect();
        assert_eq!(names, vec!["FCFS", "SJF", "Priority-SJF", "RR"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sim = Simulator::new(SimConfig::default().with_quantum(2)).unwrap();
        let processes = sample();
        assert_eq!(
            sim.run_all(&processes).unwrap(),
            sim.run_all_parallel(&processes).unwrap()
        );
    }

    #[test]
    fn test_empty_input_runs_every_policy() {
        let sim = Simulator::default();
        for schedule in sim.run_all(&[]).unwrap() {
            assert!(schedule.timeline.is_empty());
            assert!(schedule.rows.is_empty());
        }
    }

    #[test]
    fn test_rejects_bad_quantum() {
        let err = Simulator::new(SimConfig::default().with_quantum(0)).unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }
}
