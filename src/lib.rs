//! Classical single-processor CPU scheduling simulator.
//!
//! Runs a list of processes through FCFS, non-preemptive SJF, priority
//! tie-broken SJF and Round-Robin, producing a Gantt timeline and
//! per-process timing statistics for each policy.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `TimeSlice`, `Timeline`,
//!   `StatsRow`, `Schedule`
//! - **`ready_set`**: Arrival admission and the per-run process state machine
//! - **`dispatching`**: Composable selection rules (`EarliestArrival`, `ShortestBurst`,
//!   `LowestPriority`) and the `RuleEngine` that chains them
//! - **`scheduler`**: The policy engines, `Simulator`, and `Summary` statistics
//! - **`validation`**: Input integrity checks (positive bursts, duplicate IDs)
//! - **`config`**, **`input`**, **`report`**, **`workload`**: Configuration,
//!   process file loading, text rendering and random workloads
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::scheduler::{PolicyKind, Simulator, Summary};
//!
//! let processes = vec![
//!     Process::new(1, 5, 0),
//!     Process::new(2, 3, 1),
//!     Process::new(3, 2, 2),
//! ];
//! let schedule = Simulator::default().run(PolicyKind::Fcfs, &processes).unwrap();
//! let summary = Summary::calculate(&schedule).unwrap();
//! assert!((summary.average_waiting - 10.0 / 3.0).abs() < 1e-10);
//! assert!((summary.throughput - 0.3).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", §2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod input;
pub mod models;
pub mod ready_set;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimError};
