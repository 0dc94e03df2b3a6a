//! Rule engine for multi-criteria process selection.
//!
//! Composes selection rules lexicographically: the first rule decides,
//! later rules only break its ties, and the process id settles anything
//! still equal, so every ordering is total and reproducible.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{rules, SelectionRule};
use crate::models::Process;

/// A composable, deterministic comparator over processes.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
/// assert_eq!(engine.rule_names(), vec!["SJF"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
}

impl RuleEngine {
    /// Creates an engine with no rules (ordering by id only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest arrival first, ties to the lowest id.
    pub fn arrival_order() -> Self {
        Self::new().with_rule(rules::EarliestArrival)
    }

    /// Shortest burst first, ties to the lowest id.
    pub fn shortest_job_first() -> Self {
        Self::new().with_rule(rules::ShortestBurst)
    }

    /// Shortest burst first, ties to the lowest priority rank, then the lowest id.
    pub fn priority_shortest_job_first() -> Self {
        Self::new()
            .with_rule(rules::ShortestBurst)
            .with_rule(rules::LowestPriority)
    }

    /// Appends a rule. Rules added later only break ties of earlier ones.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Sorts candidates by selection order (first = dispatched first).
    ///
    /// Returns indices into `candidates`.
    pub fn sort_indices(&self, candidates: &[&Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        indices.sort_by(|&a, &b| self.compare(candidates[a], candidates[b]));
        indices
    }

    /// Returns the candidate that should run next.
    pub fn select_best<'p>(&self, candidates: &[&'p Process]) -> Option<&'p Process> {
        candidates
            .iter()
            .copied()
            .reduce(|best, p| match self.compare(p, best) {
                Ordering::Less => p,
                _ => best,
            })
    }

    /// Lexicographic comparison: rules in order, then process id.
    pub fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let ord = rule.evaluate(a).cmp(&rule.evaluate(b));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        a.id.cmp(&b.id)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}
