//! Execution timeline (Gantt record).
//!
//! A timeline is the ordered list of spans during which the processor ran
//! a given process. Spans never overlap and appear in start order. Idle
//! periods are not recorded; they show up as a gap between two spans.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Time};

/// One contiguous execution span `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlice {
    /// Process that held the processor.
    pub pid: ProcessId,
    /// First tick of the span.
    pub start: Time,
    /// Tick at which the processor was released.
    pub stop: Time,
}

impl TimeSlice {
    /// Creates a span.
    pub fn new(pid: ProcessId, start: Time, stop: Time) -> Self {
        Self { pid, start, stop }
    }

    /// Span length in ticks.
    #[inline]
    pub fn duration(&self) -> Time {
        self.stop - self.start
    }
}

/// Ordered, non-overlapping execution spans of one policy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    slices: Vec<TimeSlice>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a span.
    ///
    /// A span that continues the previous one for the same process (same
    /// pid, starts where the last one stopped) is merged into it, so each
    /// entry is a maximal contiguous run. Empty spans are dropped.
    pub fn push(&mut self, slice: TimeSlice) {
        if slice.duration() <= 0 {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            debug_assert!(slice.start >= last.stop, "overlapping span {slice:?} after {last:?}");
            if last.pid == slice.pid && last.stop == slice.start {
                last.stop = slice.stop;
                return;
            }
        }
        self.slices.push(slice);
    }

    /// All spans in start order.
    pub fn slices(&self) -> &[TimeSlice] {
        &self.slices
    }

    /// Iterates spans in start order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeSlice> {
        self.slices.iter()
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no span was recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Total busy time (sum of span durations).
    pub fn busy_time(&self) -> Time {
        self.slices.iter().map(TimeSlice::duration).sum()
    }

    /// Stop time of the last span, or 0 when empty.
    pub fn end(&self) -> Time {
        self.slices.last().map(|s| s.stop).unwrap_or(0)
    }

    /// Spans belonging to one process.
    pub fn slices_for(&self, pid: ProcessId) -> Vec<&TimeSlice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// First instant the process was dispatched.
    pub fn first_dispatch(&self, pid: ProcessId) -> Option<Time> {
        self.slices.iter().find(|s| s.pid == pid).map(|s| s.start)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimeSlice;
    type IntoIter = std::slice::Iter<'a, TimeSlice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}
