//! Simulation clock and ready-set bookkeeping.
//!
//! [`ReadySet`] tracks every process of one run through four disjoint
//! states over an integer clock:
//!
//! ```text
//! Pending --admit()--> Ready --dispatch()--> Running --mark_complete()--> Completed
//!                        ^                      |
//!                        +------release()-------+
//! ```
//!
//! Pending processes are ordered once by [`RuleEngine::arrival_order`]
//! (earliest arrival, then lowest id) so admission is a pop from the front. Ready processes are keyed the same way, which gives
//! every policy a deterministic view regardless of input order. The clock
//! only moves forward and is driven by the policy loop, never by wall time.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use log::trace;

use crate::dispatching::RuleEngine;
use crate::models::{Process, ProcessId, Time};

/// Per-run clock plus Pending / Ready / Running / Completed sets.
#[derive(Debug)]
pub struct ReadySet<'a> {
    processes: &'a [Process],
    index: HashMap<ProcessId, usize>,
    now: Time,
    pending: VecDeque<usize>,
    ready: BTreeSet<(Time, ProcessId)>,
    running: Option<ProcessId>,
    completed: HashSet<ProcessId>,
}

impl<'a> ReadySet<'a> {
    /// Creates a ready set at `t = 0` with every process pending.
    ///
    /// Ids must be unique; run `validate_processes` first.
    pub fn new(processes: &'a [Process]) -> Self {
        let index = processes
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect();

        let candidates: Vec<&Process> = processes.iter().collect();
        let order = RuleEngine::arrival_order().sort_indices(&candidates);

        Self {
            processes,
            index,
            now: 0,
            pending: order.into(),
            ready: BTreeSet::new(),
            running: None,
            completed: HashSet::with_capacity(processes.len()),
        }
    }

    /// Current simulated time.
    #[inline]
    pub fn now(&self) -> Time {
        self.now
    }

    /// Moves the clock forward by `ticks`.
    pub fn advance_by(&mut self, ticks: Time) {
        debug_assert!(ticks >= 0, "clock cannot run backwards");
        self.now += ticks.max(0);
    }

    /// Moves the clock forward to `t`. Earlier instants are ignored.
    pub fn advance_to(&mut self, t: Time) {
        self.now = self.now.max(t);
    }

    /// Admits every pending process with `arrival <= now`.
    ///
    /// Returns the newly admitted ids in `(arrival, id)` order.
    pub fn admit(&mut self) -> Vec<ProcessId> {
        let mut admitted = Vec::new();
        while let Some(&i) = self.pending.front() {
            let p = &self.processes[i];
            if !p.has_arrived(self.now) {
                break;
            }
            self.pending.pop_front();
            self.ready.insert((p.arrival, p.id));
            admitted.push(p.id);
        }
        if !admitted.is_empty() {
            trace!("t={} admitted {:?}", self.now, admitted);
        }
        admitted
    }

    /// Processes with `arrival <= t` that have not completed, in input order.
    pub fn arrived_by(&self, t: Time) -> impl Iterator<Item = &'a Process> + '_ {
        self.processes
            .iter()
            .filter(move |p| p.has_arrived(t) && !self.completed.contains(&p.id))
    }

    /// Ready (admitted, not running, not completed) processes in `(arrival, id)` order.
    pub fn ready(&self) -> impl Iterator<Item = &'a Process> + '_ {
        let processes = self.processes;
        self.ready
            .iter()
            .filter_map(move |(_, pid)| self.index.get(pid).map(|&i| &processes[i]))
    }

    /// Whether any process is ready.
    pub fn has_ready(&self) -> bool {
        !self.ready.is_empty()
    }

    /// Moves a ready process onto the processor.
    ///
    /// Returns `None` if the process is not ready or another process is
    /// already running.
    pub fn dispatch(&mut self, pid: ProcessId) -> Option<Process> {
        if self.running.is_some() {
            return None;
        }
        let process = *self.get(pid)?;
        if !self.ready.remove(&(process.arrival, pid)) {
            return None;
        }
        self.running = Some(pid);
        Some(process)
    }

    /// Returns the running process to the ready set (preemption).
    pub fn release(&mut self, pid: ProcessId) {
        if self.running == Some(pid) {
            self.running = None;
            if let Some(p) = self.get(pid) {
                self.ready.insert((p.arrival, pid));
            }
        }
    }

    /// The process currently on the processor.
    pub fn running(&self) -> Option<ProcessId> {
        self.running
    }

    /// Marks a process as finished, wherever it currently is.
    pub fn mark_complete(&mut self, pid: ProcessId) {
        if self.running == Some(pid) {
            self.running = None;
        }
        if let Some(p) = self.get(pid) {
            self.ready.remove(&(p.arrival, pid));
        }
        self.completed.insert(pid);
    }

    /// Whether the process has finished.
    pub fn is_complete(&self, pid: ProcessId) -> bool {
        self.completed.contains(&pid)
    }

    /// Whether every process has finished.
    pub fn all_complete(&self) -> bool {
        self.completed.len() == self.processes.len()
    }

    /// Number of processes not yet finished.
    pub fn remaining(&self) -> usize {
        self.processes.len() - self.completed.len()
    }

    /// Arrival time of the next pending process.
    pub fn next_arrival(&self) -> Option<Time> {
        self.pending.front().map(|&i| self.processes[i].arrival)
    }

    /// Skips an idle period by jumping the clock to the next arrival.
    ///
    /// Only moves when nothing is ready or running. Returns the new time,
    /// or `None` when there is nothing left to wait for.
    pub fn skip_idle(&mut self) -> Option<Time> {
        if self.has_ready() || self.running.is_some() {
            return Some(self.now);
        }
        let next = self.next_arrival()?;
        if next > self.now {
            trace!("t={} idle until {}", self.now, next);
        }
        self.advance_to(next);
        Some(self.now)
    }

    /// Looks up a process record by id.
    pub fn get(&self, pid: ProcessId) -> Option<&'a Process> {
        self.index.get(&pid).map(|&i| &self.processes[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(3, 2, 4),
            Process::new(1, 5, 0),
            Process::new(2, 3, 0),
        ]
    }

    #[test]
    fn test_admit_in_arrival_then_id_order() {
        let procs = sample();
        let mut rs = ReadySet::new(&procs);
        assert_eq!(rs.admit(), vec![1, 2]);
        assert_eq!(rs.ready().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(rs.admit().is_empty());

        rs.advance_to(4);
        assert_eq!(rs.admit(), vec![3]);
    }

    #[test]
    fn test_arrived_by() {
        let procs = sample();
        let mut rs = ReadySet::new(&procs);
        assert_eq!(rs.arrived_by(0).count(), 2);
        assert_eq!(rs.arrived_by(4).count(), 3);
        rs.mark_complete(1);
        assert_eq!(rs.arrived_by(4).count(), 2);
    }

    #[test]
    fn test_dispatch_release_complete() {
        let procs = sample();
        let mut rs = ReadySet::new(&procs);
        rs.admit();

        let p = rs.dispatch(2).unwrap();
        assert_eq!(p.burst, 3);
        assert_eq!(rs.running(), Some(2));
        // Processor busy
        assert!(rs.dispatch(1).is_none());

        rs.release(2);
        assert_eq!(rs.running(), None);
        assert_eq!(rs.ready().count(), 2);

        rs.dispatch(2).unwrap();
        rs.mark_complete(2);
        assert!(rs.is_complete(2));
        assert!(!rs.is_complete(1));
        assert_eq!(rs.remaining(), 2);
        assert_eq!(rs.running(), None);
    }

    #[test]
    fn test_dispatch_not_ready() {
        let procs = sample();
        let mut rs = ReadySet::new(&procs);
        // Nothing admitted yet
        assert!(rs.dispatch(1).is_none());
        rs.admit();
        // Not yet arrived
        assert!(rs.dispatch(3).is_none());
        // Unknown id
        assert!(rs.dispatch(42).is_none());
    }

    #[test]
    fn test_skip_idle() {
        let procs = vec![Process::new(1, 1, 5)];
        let mut rs = ReadySet::new(&procs);
        assert!(rs.admit().is_empty());
        assert_eq!(rs.skip_idle(), Some(5));
        assert_eq!(rs.admit(), vec![1]);
        // Ready work → clock stays
        assert_eq!(rs.skip_idle(), Some(5));

        rs.dispatch(1).unwrap();
        rs.advance_by(1);
        rs.mark_complete(1);
        assert!(rs.all_complete());
        assert_eq!(rs.skip_idle(), None);
    }

    #[test]
    fn test_clock_is_monotonic() {
        let procs = sample();
        let mut rs = ReadySet::new(&procs);
        rs.advance_to(6);
        rs.advance_to(2);
        assert_eq!(rs.now(), 6);
        rs.advance_by(3);
        assert_eq!(rs.now(), 9);
    }

    #[test]
    fn test_empty() {
        let mut rs = ReadySet::new(&[]);
        assert!(rs.all_complete());
        assert_eq!(rs.skip_idle(), None);
        assert_eq!(rs.remaining(), 0);
    }
}
