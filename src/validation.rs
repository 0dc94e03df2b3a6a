//! Input validation for process lists.
//!
//! Checks the records before any policy runs. Detects:
//! - Non-positive burst durations
//! - Negative arrival times
//! - Duplicate process IDs
//! - Workloads whose schedule would not fit in [`Time`]
//!
//! All problems are collected; a run never starts on partially valid input.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A record has a non-positive burst or a negative arrival.
    InvalidRecord,
    /// Two records share the same ID.
    DuplicateId,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. Every burst is `> 0`
/// 2. Every arrival is `>= 0`
/// 3. No two records share an ID
/// 4. The latest possible completion (max arrival + sum of bursts), and the
///    sum of that bound over every process, fit in [`Time`]
///
/// An empty list is valid here; it is reported as `EmptyInput` only when
/// statistics are requested.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRecord,
                format!("Process {} has non-positive burst {}", p.id, p.burst),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRecord,
                format!("Process {} has negative arrival {}", p.id, p.arrival),
            ));
        }
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
    }

    if schedule_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidRecord,
            format!(
                "Workload of {} processes overflows the simulation clock",
                processes.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any clock value a run can reach, or `None` on overflow.
///
/// Per-process statistics are summed over all processes, so the bound times
/// the process count must fit too.
fn schedule_horizon(processes: &[Process]) -> Option<Time> {
    let latest_arrival = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);
    let horizon = processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst.max(0)))?;
    let count = Time::try_from(processes.len()).ok()?;
    horizon.checked_mul(count.max(1))?;
    Some(horizon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_overflow_rejected() {
        let errors = validate_processes(&[Process::new(1, 10, i64::MAX - 5)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidRecord);

        // Each record is fine alone; together the bursts overflow
        let half = i64::MAX / 2 + 1;
        let errors =
            validate_processes(&[Process::new(1, half, 0), Process::new(2, half, 0)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidRecord);
    }

    #[test]
    fn test_statistic_sums_overflow_rejected() {
        // Horizon fits, but summing turnarounds over three processes would not
        let third = i64::MAX / 3;
        let processes = [
            Process::new(1, third, 0),
            Process::new(2, 1, 0),
            Process::new(3, 1, 0),
        ];
        assert!(validate_processes(&processes).is_err());
    }

    #[test]
    fn test_large_workload_within_clock_accepted() {
        let processes = [Process::new(1, 1_000_000, 1_000_000_000), Process::new(2, 5, 0)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_valid_input() {
        let processes = vec![
            Process::new(1, 5, 0),
            Process::new(2, 3, 1).with_priority(2),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_zero_burst() {
        let errors = validate_processes(&[Process::new(1, 0, 0)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidRecord);
        assert!(errors[0].message.contains("burst"));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new(1, 2, -1)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidRecord && e.message.contains("arrival")));
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new(1, 2, 0), Process::new(1, 3, 4)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_multiple_errors() {
        // Negative burst + negative arrival + duplicate
        let processes = vec![Process::new(1, -2, -1), Process::new(1, 3, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
