//! Run performance metrics.
//!
//! Computes the standard per-process indicators from a finished run and
//! their run-wide averages.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion − arrival |
//! | Waiting | turnaround − burst |
//! | Response | first dispatch − arrival |
//! | Context switches | adjacent differing-pid block pairs, start-sorted |

use std::fmt;

use serde::Serialize;

use crate::models::{Process, Timeline};

/// Metrics for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub pid: String,
    /// Arrival time.
    pub arrival_time: i64,
    /// Total burst time.
    pub burst_time: i64,
    /// Completion time.
    pub completion_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// Turnaround minus burst: time spent ready but not running.
    pub waiting_time: i64,
    /// First dispatch minus arrival.
    pub response_time: i64,
}

/// Metrics for a whole run: per-process rows plus averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunMetrics {
    /// One row per process, in input order.
    pub per_process: Vec<ProcessMetrics>,
    /// Average turnaround time.
    pub avg_turnaround: f64,
    /// Average waiting time.
    pub avg_waiting: f64,
    /// Average response time.
    pub avg_response: f64,
    /// CPU handoffs counted over the start-sorted timeline.
    pub context_switches: usize,
}

/// Why metrics could not be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Averages over zero processes are undefined.
    NoProcesses,
    /// A process was never started or never completed.
    Incomplete {
        /// The offending process.
        pid: String,
    },
}

impl fmt::Display for MetricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricsError::NoProcesses => {
                write!(f, "cannot compute averages over zero processes")
            }
            MetricsError::Incomplete { pid } => {
                write!(f, "process {pid} has no start or completion time")
            }
        }
    }
}

impl std::error::Error for MetricsError {}

impl RunMetrics {
    /// Computes run metrics from a scheduled process set and its timeline.
    ///
    /// Every process must carry a `start_time` and `completion_time` set
    /// by a policy run. An empty set is refused rather than divided by.
    pub fn compute(processes: &[Process], timeline: &Timeline) -> Result<Self, MetricsError> {
        if processes.is_empty() {
            return Err(MetricsError::NoProcesses);
        }

        let mut per_process = Vec::with_capacity(processes.len());
        let mut total_turnaround = 0i64;
        let mut total_waiting = 0i64;
        let mut total_response = 0i64;

        for process in processes {
            let (start, completion) = match (process.start_time, process.completion_time) {
                (Some(start), Some(completion)) => (start, completion),
                _ => {
                    return Err(MetricsError::Incomplete {
                        pid: process.pid.clone(),
                    })
                }
            };

            let turnaround = completion - process.arrival_time;
            let waiting = turnaround - process.burst_time;
            let response = start - process.arrival_time;

            total_turnaround += turnaround;
            total_waiting += waiting;
            total_response += response;

            per_process.push(ProcessMetrics {
                pid: process.pid.clone(),
                arrival_time: process.arrival_time,
                burst_time: process.burst_time,
                completion_time: completion,
                turnaround_time: turnaround,
                waiting_time: waiting,
                response_time: response,
            });
        }

        let count = processes.len() as f64;
        Ok(Self {
            per_process,
            avg_turnaround: total_turnaround as f64 / count,
            avg_waiting: total_waiting as f64 / count,
            avg_response: total_response as f64 / count,
            context_switches: timeline.context_switches(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Policy;

    #[test]
    fn test_fcfs_example_averages() {
        let mut processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 1),
        ];
        let timeline = Policy::Fcfs.run(&mut processes, None).unwrap();
        let metrics = RunMetrics::compute(&processes, &timeline).unwrap();

        // Waiting: (5-5)=0, (8-1-3)=4, (9-2-1)=6; average 10/3.
        let waits: Vec<i64> = metrics.per_process.iter().map(|m| m.waiting_time).collect();
        assert_eq!(waits, vec![0, 4, 6]);
        assert!((metrics.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert!((metrics.avg_turnaround - (5 + 7 + 7) as f64 / 3.0).abs() < 1e-10);
        assert!((metrics.avg_response - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(metrics.context_switches, 2);
    }

    #[test]
    fn test_turnaround_at_least_burst() {
        let mut processes = vec![
            Process::new("P1", 0, 7).with_priority(2),
            Process::new("P2", 2, 4).with_priority(1),
        ];
        let timeline = Policy::PriorityP.run(&mut processes, None).unwrap();
        let metrics = RunMetrics::compute(&processes, &timeline).unwrap();
        for row in &metrics.per_process {
            assert!(row.turnaround_time >= row.burst_time);
            assert!(row.waiting_time >= 0);
            assert!(row.response_time >= 0);
        }
    }

    #[test]
    fn test_preemption_counted_as_switches() {
        let mut processes = vec![Process::new("P1", 0, 7), Process::new("P2", 2, 4)];
        let timeline = Policy::Srtf.run(&mut processes, None).unwrap();
        let metrics = RunMetrics::compute(&processes, &timeline).unwrap();
        // P1 -> P2 -> P1: preemption and resumption each count.
        assert_eq!(metrics.context_switches, 2);
    }

    #[test]
    fn test_empty_set_refused() {
        assert_eq!(
            RunMetrics::compute(&[], &Timeline::new()),
            Err(MetricsError::NoProcesses)
        );
    }

    #[test]
    fn test_unscheduled_process_refused() {
        let processes = vec![Process::new("P1", 0, 5)];
        let result = RunMetrics::compute(&processes, &Timeline::new());
        assert_eq!(
            result,
            Err(MetricsError::Incomplete {
                pid: "P1".to_string()
            })
        );
    }

    #[test]
    fn test_metrics_serialize() {
        let mut processes = vec![Process::new("P1", 0, 2)];
        let timeline = Policy::Fcfs.run(&mut processes, None).unwrap();
        let metrics = RunMetrics::compute(&processes, &timeline).unwrap();
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["context_switches"], 0);
        assert_eq!(json["per_process"][0]["turnaround_time"], 2);
    }
}
