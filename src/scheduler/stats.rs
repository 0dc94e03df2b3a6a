//! Schedule statistics.
//!
//! Reduces the per-process rows of a run to aggregate figures.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average waiting | mean(turnaround - burst) |
//! | Average turnaround | mean(completion - arrival) |
//! | Average response | mean(first dispatch - arrival) |
//! | Throughput | process count / latest completion |
//! | Makespan | latest completion |
//! | Utilization | total burst / makespan |
//!
//! An empty run has no meaningful averages and yields
//! [`SimError::EmptyInput`] instead of dividing by zero.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::models::{Schedule, StatsRow, Time};

/// Aggregate figures for one policy run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of completed processes.
    pub process_count: usize,
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Mean time from arrival to first dispatch.
    pub average_response: f64,
    /// Processes completed per tick.
    pub throughput: f64,
    /// Latest completion time.
    pub makespan: Time,
    /// Sum of all bursts.
    pub total_burst: Time,
    /// Fraction of `[0, makespan)` the processor was busy (0.0..=1.0).
    pub utilization: f64,
}

/// Streaming accumulator over the rows of a run.
///
/// # Example
/// ```
/// use cpu_schedule::models::{Process, StatsRow};
/// use cpu_schedule::scheduler::Accumulator;
///
/// let mut acc = Accumulator::new();
/// acc.record(&StatsRow::from_completion(&Process::new(1, 5, 0), 5));
/// acc.record(&StatsRow::from_completion(&Process::new(2, 3, 1), 8));
/// let summary = acc.finish().unwrap();
/// assert_eq!(summary.makespan, 8);
/// assert!((summary.average_waiting - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    count: usize,
    total_waiting: Time,
    total_turnaround: Time,
    total_response: Time,
    total_burst: Time,
    max_completion: Time,
}

impl Accumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one completed process.
    pub fn record(&mut self, row: &StatsRow) {
        self.count += 1;
        self.total_waiting += row.waiting;
        self.total_turnaround += row.turnaround;
        self.total_burst += row.burst;
        self.max_completion = self.max_completion.max(row.completion);
    }

    /// Adds the response time (first dispatch - arrival) of one process.
    pub fn record_response(&mut self, response: Time) {
        self.total_response += response;
    }

    /// Number of rows recorded so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Produces the summary.
    ///
    /// # Errors
    /// [`SimError::EmptyInput`] when no row was recorded.
    pub fn finish(&self) -> Result<Summary> {
        if self.count == 0 || self.max_completion <= 0 {
            return Err(SimError::EmptyInput);
        }

        let n = self.count as f64;
        let makespan = self.max_completion as f64;

        Ok(Summary {
            process_count: self.count,
            average_waiting: self.total_waiting as f64 / n,
            average_turnaround: self.total_turnaround as f64 / n,
            average_response: self.total_response as f64 / n,
            throughput: n / makespan,
            makespan: self.max_completion,
            total_burst: self.total_burst,
            utilization: self.total_burst as f64 / makespan,
        })
    }
}

impl Summary {
    /// Computes the summary of a schedule.
    ///
    /// Response times come from the first timeline span of each process.
    ///
    /// # Errors
    /// [`SimError::EmptyInput`] when the schedule has no rows.
    pub fn calculate(schedule: &Schedule) -> Result<Self> {
        let mut acc = Accumulator::new();
        for row in &schedule.rows {
            acc.record(row);
            if let Some(first) = schedule.timeline.first_dispatch(row.pid) {
                acc.record_response(first - row.arrival);
            }
        }
        acc.finish()
    }

    /// Summarises a bare row stream (no timeline, so response is reported as 0).
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a StatsRow>) -> Result<Self> {
        let mut acc = Accumulator::new();
        rows.into_iter().for_each(|row| acc.record(row));
        acc.finish()
    }
}
