//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! A FIFO queue of process ids plus a per-run table of remaining bursts
//! (the caller's records are never touched):
//!
//! 1. Admit arrivals (by arrival, then id) to the back of the queue.
//! 2. If the queue is empty, jump the clock to the next arrival.
//! 3. Pop the head and run it for `min(quantum, remaining)`.
//! 4. Admit everything that arrived during that span, *then* requeue the
//!    preempted process behind them, or record its completion.
//!
//! Waiting time is derived once at completion
//! (`turnaround - original burst`), not accumulated per requeue.
//!
//! # Fairness
//! Every other process gets at most one quantum between two consecutive
//! dispatches of the same process, so a ready process waits at most
//! `(n - 1) * quantum` for its next turn.

use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use super::{PolicyKind, Scheduler};
use crate::config::DEFAULT_QUANTUM;
use crate::models::{Process, ProcessId, Schedule, Time, TimeSlice};
use crate::ready_set::ReadySet;

/// Round-Robin engine.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Time,
}

impl RoundRobin {
    /// Creates the engine. Quanta below 1 are clamped to 1.
    pub fn new(quantum: Time) -> Self {
        Self {
            quantum: quantum.max(1),
        }
    }

    /// The configured quantum.
    pub fn quantum(&self) -> Time {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

impl Scheduler for RoundRobin {
    fn kind(&self) -> PolicyKind {
        PolicyKind::RoundRobin
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(self.kind().name());
        let mut ready = ReadySet::new(processes);
        let mut queue: VecDeque<ProcessId> = VecDeque::new();
        let mut remaining: HashMap<ProcessId, Time> =
            processes.iter().map(|p| (p.id, p.burst)).collect();

        queue.extend(ready.admit());

        while !ready.all_complete() {
            let Some(pid) = queue.pop_front() else {
                if ready.skip_idle().is_none() {
                    break;
                }
                queue.extend(ready.admit());
                continue;
            };

            let Some(process) = ready.dispatch(pid) else {
                unreachable!("RR: queued process {pid} is not ready at t={}", ready.now());
            };
            let left = remaining.get(&pid).copied().unwrap_or(process.burst);
            let run = self.quantum.min(left);

            let start = ready.now();
            ready.advance_by(run);
            let stop = ready.now();
            let left = left - run;
            remaining.insert(pid, left);

            trace!("RR t={start} run {pid} until {stop}, {left} left");
            schedule.timeline.push(TimeSlice::new(pid, start, stop));

            // Arrivals during the span queue ahead of the preempted process.
            queue.extend(ready.admit());

            if left == 0 {
                debug!("RR t={stop} complete {pid}");
                ready.mark_complete(pid);
                schedule.complete(&process, stop);
            } else {
                ready.release(pid);
                queue.push_back(pid);
            }
        }

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rr_alternates_unit_quantum() {
        let processes = vec![Process::new(1, 2, 0), Process::new(2, 2, 0)];
        let schedule = RoundRobin::new(1).schedule(&processes);

        assert_eq!(
            schedule.timeline.slices(),
            &[
                TimeSlice::new(1, 0, 1),
                TimeSlice::new(2, 1, 2),
                TimeSlice::new(1, 2, 3),
                TimeSlice::new(2, 3, 4),
            ]
        );
        let p1 = schedule.row_for(1).unwrap();
        assert_eq!((p1.completion, p1.turnaround, p1.waiting), (3, 3, 1));
        let p2 = schedule.row_for(2).unwrap();
        assert_eq!((p2.completion, p2.turnaround, p2.waiting), (4, 4, 2));
    }

    #[test]
    fn test_rr_new_arrival_queues_before_requeue() {
        // P2 arrives at 2, during P1's first quantum [0,2)
        let processes = vec![Process::new(1, 4, 0), Process::new(2, 2, 2)];
        let schedule = RoundRobin::new(2).schedule(&processes);

        assert_eq!(
            schedule.timeline.slices(),
            &[
                TimeSlice::new(1, 0, 2),
                TimeSlice::new(2, 2, 4),
                TimeSlice::new(1, 4, 6),
            ]
        );
        assert_eq!(schedule.completion_order(), vec![2, 1]);
    }

    #[test]
    fn test_rr_lone_process_is_one_span() {
        let schedule = RoundRobin::new(1).schedule(&[Process::new(1, 3, 0)]);
        assert_eq!(schedule.timeline.slices(), &[TimeSlice::new(1, 0, 3)]);
        assert_eq!(schedule.row_for(1).unwrap().waiting, 0);
    }

    #[test]
    fn test_rr_idle_gap() {
        let processes = vec![Process::new(1, 1, 0), Process::new(2, 2, 4)];
        let schedule = RoundRobin::new(2).schedule(&processes);
        assert_eq!(
            schedule.timeline.slices(),
            &[TimeSlice::new(1, 0, 1), TimeSlice::new(2, 4, 6)]
        );
        assert_eq!(schedule.row_for(2).unwrap().waiting, 0);
    }

    #[test]
    fn test_rr_simultaneous_arrivals_by_id() {
        let processes = vec![Process::new(3, 1, 0), Process::new(1, 1, 0)];
        let schedule = RoundRobin::new(1).schedule(&processes);
        assert_eq!(schedule.completion_order(), vec![1, 3]);
    }

    #[test]
    fn test_rr_large_quantum_behaves_like_fcfs() {
        let processes = vec![
            Process::new(1, 5, 0),
            Process::new(2, 3, 1),
            Process::new(3, 2, 2),
        ];
        let schedule = RoundRobin::new(100).schedule(&processes);
        assert_eq!(schedule.completion_order(), vec![1, 2, 3]);
        assert_eq!(schedule.row_for(3).unwrap().completion, 10);
    }

    #[test]
    fn test_rr_input_not_mutated() {
        let processes = vec![Process::new(1, 3, 0), Process::new(2, 2, 0)];
        let before = processes.clone();
        let schedule = RoundRobin::new(1).schedule(&processes);
        assert_eq!(processes, before);
        assert_eq!(schedule.row_for(1).unwrap().burst, 3);
    }

    #[test]
    fn test_quantum_clamped() {
        assert_eq!(RoundRobin::new(0).quantum(), 1);
        assert_eq!(RoundRobin::default().quantum(), DEFAULT_QUANTUM);
    }

    #[test]
    fn test_rr_empty() {
        let schedule = RoundRobin::default().schedule(&[]);
        assert!(schedule.is_empty());
        assert!(schedule.timeline.is_empty());
    }
}
