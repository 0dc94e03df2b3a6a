//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! A single pass over the processes **in input order**, tracking the
//! instant the processor becomes free (`service_time`):
//!
//! 1. `start = max(service_time, arrival)`
//! 2. `service_time = start + burst`
//! 3. Emit `[start, service_time)` and a statistics row.
//!
//! The engine does not sort. Input order is expected to be arrival order;
//! anything else is still simulated deterministically (input order wins)
//! but is logged as a warning.
//!
//! It does not use [`ReadySet`](crate::ready_set::ReadySet): the next process
//! is always the next input record, so the only state is `service_time`.
//!
//! # Complexity
//! O(n).

use log::{debug, warn};

use super::{PolicyKind, Scheduler};
use crate::models::{Process, Schedule, Time, TimeSlice};

/// First-Come-First-Served engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Fcfs {
    /// Creates the engine.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for Fcfs {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fcfs
    }

    fn schedule(&self, processes: &[Process]) -> Schedule {
        let mut schedule = Schedule::new(self.kind().name());
        let mut service_time: Time = 0;
        let mut latest_arrival: Option<Time> = None;

        for process in processes {
            if latest_arrival.is_some_and(|t| process.arrival < t) {
                warn!(
                    "FCFS input not in arrival order: process {} arrives at {}",
                    process.id, process.arrival
                );
            }
            latest_arrival = latest_arrival.max(Some(process.arrival));

            let waiting = (service_time - process.arrival).max(0);
            let start = process.arrival + waiting;
            service_time = start + process.burst;

            debug!("FCFS t={start} dispatch {} until {service_time}", process.id);
            schedule
                .timeline
                .push(TimeSlice::new(process.id, start, service_time));
            schedule.complete(process, service_time);
        }

        schedule
    }
}
