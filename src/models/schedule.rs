//! Schedule (result of one policy run).
//!
//! A schedule pairs the execution timeline with one statistics row per
//! process, in the order processes completed.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Time, Timeline};

/// Per-process timing statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRow {
    /// Process identifier.
    pub pid: ProcessId,
    /// Priority rank, copied from the record.
    pub priority: i64,
    /// Original burst, copied from the record.
    pub burst: Time,
    /// Arrival time, copied from the record.
    pub arrival: Time,
    /// Time spent ready but not running.
    pub waiting: Time,
    /// `completion - arrival`.
    pub turnaround: Time,
    /// Instant the last unit of work finished.
    pub completion: Time,
}

impl StatsRow {
    /// Derives a row from a process and its completion time.
    ///
    /// `turnaround = completion - arrival`, `waiting = turnaround - burst`.
    pub fn from_completion(process: &Process, completion: Time) -> Self {
        let turnaround = completion - process.arrival;
        Self {
            pid: process.id,
            priority: process.priority,
            burst: process.burst,
            arrival: process.arrival,
            waiting: turnaround - process.burst,
            turnaround,
            completion,
        }
    }
}

/// The outcome of running one policy over a process list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Short policy name (e.g. "FCFS").
    pub policy: String,
    /// Execution spans in start order.
    pub timeline: Timeline,
    /// Statistics rows in completion order.
    pub rows: Vec<StatsRow>,
}

impl Schedule {
    /// Creates an empty schedule for the named policy.
    pub fn new(policy: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
            timeline: Timeline::new(),
            rows: Vec::new(),
        }
    }

    /// Records a completed process.
    pub fn complete(&mut self, process: &Process, completion: Time) {
        self.rows.push(StatsRow::from_completion(process, completion));
    }

    /// Finds the row for a process.
    pub fn row_for(&self, pid: ProcessId) -> Option<&StatsRow> {
        self.rows.iter().find(|r| r.pid == pid)
    }

    /// Process ids in the order they completed.
    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.rows.iter().map(|r| r.pid).collect()
    }

    /// Latest completion time, or 0 when nothing ran.
    pub fn makespan(&self) -> Time {
        self.rows.iter().map(|r| r.completion).max().unwrap_or(0)
    }

    /// Whether the run scheduled no process.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
