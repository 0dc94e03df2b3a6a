//! Built-in selection rules.
//!
//! - **ARRIVAL**: earliest arrival
//! - **SJF**: shortest burst
//! - **PRIORITY**: lowest priority rank
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::Process;

/// Earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival
    }
}

/// Shortest burst first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst
    }
}

/// Lowest priority rank first (smaller = more urgent).
#[derive(Debug, Clone, Copy)]
pub struct LowestPriority;

impl SelectionRule for LowestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earliest_arrival() {
        let early = Process::new(2, 9, 1);
        let late = Process::new(1, 1, 4);
        assert!(EarliestArrival.evaluate(&early) < EarliestArrival.evaluate(&late));
    }

    #[test]
    fn test_shortest_burst() {
        let short = Process::new(1, 1, 0);
        let long = Process::new(2, 5, 0);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_lowest_priority() {
        let urgent = Process::new(1, 3, 0).with_priority(1);
        let relaxed = Process::new(2, 3, 0).with_priority(9);
        assert!(LowestPriority.evaluate(&urgent) < LowestPriority.evaluate(&relaxed));
    }
}
