//! Process (job) model.
//!
//! A process is the unit of work handed to a scheduling policy: it arrives
//! at some instant, needs the processor for a fixed burst, and carries an
//! optional priority rank.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Caller-assigned process identifier.
pub type ProcessId = i64;

/// Simulated time in integer ticks.
pub type Time = i64;

/// An immutable process record.
///
/// Engines never mutate the caller's records; per-run state such as the
/// remaining burst under round-robin is kept by the engine itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Instant the process becomes ready (ticks, `>= 0`).
    pub arrival: Time,
    /// Processor time required (ticks, `> 0`).
    pub burst: Time,
    /// Priority rank (smaller = more urgent). Defaults to 0.
    #[serde(default)]
    pub priority: i64,
}

impl Process {
    /// Creates a process with priority 0.
    ///
    /// Arguments follow the column order of process files: id, burst, arrival.
    pub fn new(id: ProcessId, burst: Time, arrival: Time) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the priority rank.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by time `t`.
    #[inline]
    pub fn has_arrived(&self, t: Time) -> bool {
        self.arrival <= t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(7, 4, 2).with_priority(3);
        assert_eq!(p.id, 7);
        assert_eq!(p.burst, 4);
        assert_eq!(p.arrival, 2);
        assert_eq!(p.priority, 3);
    }

    #[test]
    fn test_has_arrived() {
        let p = Process::new(1, 3, 5);
        assert!(!p.has_arrived(4));
        assert!(p.has_arrived(5));
        assert!(p.has_arrived(6));
    }

    #[test]
    fn test_priority_defaults_when_absent() {
        let p: Process = serde_json::from_str(r#"{"id":1,"arrival":0,"burst":2}"#).unwrap();
        assert_eq!(p.priority, 0);
    }
}
