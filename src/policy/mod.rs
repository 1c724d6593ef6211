//! Scheduling policies.
//!
//! Six deterministic policies share one contract: consume a process set,
//! set each process's `start_time` and `completion_time`, and return the
//! execution timeline.
//!
//! | Policy | Preemptive | Selection key |
//! |--------|-----------|---------------|
//! | `Fcfs` | No | arrival time |
//! | `Sjf` | No | total burst |
//! | `Srtf` | Per unit | remaining work |
//! | `RoundRobin` | Per quantum | FIFO queue |
//! | `PriorityNp` | No | priority value |
//! | `PriorityP` | Per unit | priority value |
//!
//! Every selection breaks ties by arrival time and then by pid, so any
//! input has exactly one schedule. Each run mutates the set it is given;
//! clone the set per policy when comparing policies.

mod driver;
mod select;

pub mod fcfs;
pub mod priority;
pub mod rr;
pub mod sjf;
pub mod srtf;

use std::fmt;
use std::str::FromStr;

use crate::models::{Process, Timeline};

/// A scheduling policy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First (non-preemptive).
    Sjf,
    /// Shortest-Remaining-Time-First (preemptive).
    Srtf,
    /// Round-robin with a caller-supplied quantum.
    RoundRobin,
    /// Priority scheduling, non-preemptive.
    PriorityNp,
    /// Priority scheduling, preemptive.
    PriorityP,
}

/// Errors raised before a policy's algorithm runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// Round-robin was invoked without a quantum.
    QuantumRequired,
    /// Round-robin was given a zero or negative quantum.
    QuantumNotPositive(i64),
    /// A policy name did not match any known policy.
    UnknownPolicy(String),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::QuantumRequired => write!(f, "quantum required for RR"),
            PolicyError::QuantumNotPositive(q) => {
                write!(f, "quantum must be positive, got {q}")
            }
            PolicyError::UnknownPolicy(name) => write!(f, "unknown algorithm: {name}"),
        }
    }
}

impl std::error::Error for PolicyError {}

impl Policy {
    /// All policies, in comparison-report order.
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Srtf,
        Policy::RoundRobin,
        Policy::PriorityNp,
        Policy::PriorityP,
    ];

    /// The policy's command-line name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Srtf => "SRTF",
            Policy::RoundRobin => "RR",
            Policy::PriorityNp => "PRIO_NP",
            Policy::PriorityP => "PRIO_P",
        }
    }

    /// Whether the policy needs a time quantum.
    pub fn needs_quantum(&self) -> bool {
        matches!(self, Policy::RoundRobin)
    }

    /// Runs the policy over `processes` and returns the execution timeline.
    ///
    /// `quantum` is read only by round-robin, which rejects a missing or
    /// non-positive value before its algorithm starts. Other policies
    /// ignore it. An empty process set yields an empty timeline.
    pub fn run(
        &self,
        processes: &mut [Process],
        quantum: Option<i64>,
    ) -> Result<Timeline, PolicyError> {
        match self {
            Policy::Fcfs => Ok(fcfs::schedule(processes)),
            Policy::Sjf => Ok(sjf::schedule(processes)),
            Policy::Srtf => Ok(srtf::schedule(processes)),
            Policy::RoundRobin => {
                let quantum = quantum.ok_or(PolicyError::QuantumRequired)?;
                if quantum <= 0 {
                    return Err(PolicyError::QuantumNotPositive(quantum));
                }
                Ok(rr::schedule(processes, quantum))
            }
            Policy::PriorityNp => Ok(priority::schedule_nonpreemptive(processes)),
            Policy::PriorityP => Ok(priority::schedule_preemptive(processes)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FCFS" => Ok(Policy::Fcfs),
            "SJF" => Ok(Policy::Sjf),
            "SRTF" => Ok(Policy::Srtf),
            "RR" => Ok(Policy::RoundRobin),
            "PRIO_NP" => Ok(Policy::PriorityNp),
            "PRIO_P" => Ok(Policy::PriorityP),
            other => Err(PolicyError::UnknownPolicy(other.to_string())),
        }
    }
}
