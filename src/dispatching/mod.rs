//! Selection rules and the rule engine that orders processes.
//!
//! Tie-breaking is an explicit comparator rather than an accident of
//! container order: a [`RuleEngine`] applies its rules in sequence, moving
//! to the next rule only on a tie, and finally falls back to the lowest
//! process id.
//!
//! | Engine preset | Rules | Used by |
//! |---------------|-------|---------|
//! | [`RuleEngine::arrival_order`] | arrival, id | ready-set admission (every queue-based policy) |
//! | [`RuleEngine::shortest_job_first`] | burst, id | SJF |
//! | [`RuleEngine::priority_shortest_job_first`] | burst, priority, id | Priority-SJF |
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, RuleEngine};
//! use cpu_schedule::models::Process;
//!
//! // Shortest burst, then lowest priority rank, then lowest id.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_rule(rules::LowestPriority);
//!
//! let a = Process::new(1, 3, 0).with_priority(2);
//! let b = Process::new(2, 3, 0).with_priority(1);
//! assert_eq!(engine.select_best(&[&a, &b]).map(|p| p.id), Some(2));
//! ```

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A rule that ranks processes.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// processes that should be dispatched first.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a process.
    fn evaluate(&self, process: &Process) -> RuleScore;
}
