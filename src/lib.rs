//! Deterministic CPU scheduling simulation.
//!
//! Replays classic scheduling policies over a fixed set of processes and
//! derives execution timelines, event logs, and performance metrics. All
//! simulation runs on logical integer time units; there is no real
//! concurrency anywhere.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionBlock`, `Timeline`
//! - **`policy`**: The six scheduling policies behind the `Policy` enum
//! - **`events`**: Arrival/start/completion event stream derivation
//! - **`metrics`**: Per-process and average performance metrics
//! - **`validation`**: Precondition checks on parsed process sets
//! - **`input`**: Process description file parsing
//! - **`report`**: Gantt chart, tables, SVG charts, output tee
//!
//! # Usage
//!
//! ```
//! use schedsim::metrics::RunMetrics;
//! use schedsim::models::Process;
//! use schedsim::policy::Policy;
//!
//! let mut processes = vec![
//!     Process::new("P1", 0, 5),
//!     Process::new("P2", 1, 3),
//! ];
//! let timeline = Policy::Fcfs.run(&mut processes, None).unwrap();
//! assert_eq!(timeline.makespan(), 8);
//!
//! let metrics = RunMetrics::compute(&processes, &timeline).unwrap();
//! assert_eq!(metrics.context_switches, 1);
//! ```
//!
//! Policies mutate the process set they are given. To compare policies
//! over one input, run each on its own clone of the set.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod events;
pub mod input;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod report;
pub mod validation;
