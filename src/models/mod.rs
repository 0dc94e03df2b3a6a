//! Scheduling domain models.
//!
//! Plain data shared by every policy: the input record, the execution
//! timeline, and the per-process result rows.
//!
//! | Type | Role |
//! |------|------|
//! | [`Process`] | Immutable input record (id, arrival, burst, priority) |
//! | [`TimeSlice`] / [`Timeline`] | Gantt record of contiguous execution spans |
//! | [`StatsRow`] / [`Schedule`] | Per-process timings and the complete run result |

mod process;
mod schedule;
mod timeline;

pub use process::{Process, ProcessId, Time};
pub use schedule::{Schedule, StatsRow};
pub use timeline::{TimeSlice, Timeline};
