//! Process model.
//!
//! A process is one schedulable unit: the immutable attributes read from
//! the process file (arrival, burst, priority) plus the mutable state a
//! policy run drives forward (remaining work, first dispatch, completion).
//!
//! # Time Representation
//! All times are integer logical time units relative to t=0. There is no
//! wall-clock anywhere in the simulation.
//!
//! # Priority Convention
//! Lower value = higher priority. Only the two priority policies read it.

use serde::{Deserialize, Serialize};

/// A schedulable process.
///
/// Policies mutate `remaining_time`, `start_time`, `completion_time`, and
/// `completed` while they run; everything else is fixed at construction.
/// Each policy run must own its own copy — clone the set before handing it
/// to a second policy so results never interfere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: String,
    /// Time at which the process becomes runnable.
    pub arrival_time: i64,
    /// Total CPU time required to run to completion.
    pub burst_time: i64,
    /// Scheduling priority (lower = higher priority).
    pub priority: i32,
    /// CPU time still required. Starts at `burst_time`, reaches 0 at completion.
    pub remaining_time: i64,
    /// Time of the first dispatch. Set exactly once.
    pub start_time: Option<i64>,
    /// Time at which the remaining work reached zero.
    pub completion_time: Option<i64>,
    /// Whether the process has run to completion.
    pub completed: bool,
}

impl Process {
    /// Creates a process with default priority 0.
    pub fn new(pid: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            completed: false,
        }
    }

    /// Sets the scheduling priority (lower = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `now` and still has work left.
    #[inline]
    pub fn is_ready(&self, now: i64) -> bool {
        self.arrival_time <= now && !self.completed
    }

    /// Records the first dispatch. Later calls keep the original time.
    pub fn mark_started(&mut self, now: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
    }

    /// Records completion at `now` and zeroes the remaining work.
    pub fn mark_completed(&mut self, now: i64) {
        self.remaining_time = 0;
        self.completion_time = Some(now);
        self.completed = true;
    }

    /// Turnaround time: completion minus arrival. `None` until completed.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Waiting time: turnaround minus burst. `None` until completed.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// Response time: first dispatch minus arrival. `None` until dispatched.
    pub fn response_time(&self) -> Option<i64> {
        self.start_time.map(|s| s - self.arrival_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_initial_state() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.pid, "P1");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, 2);
        assert_eq!(p.remaining_time, 7);
        assert_eq!(p.start_time, None);
        assert_eq!(p.completion_time, None);
        assert!(!p.completed);
    }

    #[test]
    fn test_mark_started_set_once() {
        let mut p = Process::new("P1", 0, 4);
        p.mark_started(2);
        p.mark_started(5);
        assert_eq!(p.start_time, Some(2));
    }

    #[test]
    fn test_mark_completed() {
        let mut p = Process::new("P1", 1, 4);
        p.mark_started(1);
        p.mark_completed(5);
        assert!(p.completed);
        assert_eq!(p.remaining_time, 0);
        assert_eq!(p.completion_time, Some(5));
        assert_eq!(p.turnaround_time(), Some(4));
        assert_eq!(p.waiting_time(), Some(0));
        assert_eq!(p.response_time(), Some(0));
    }

    #[test]
    fn test_is_ready() {
        let mut p = Process::new("P1", 3, 2);
        assert!(!p.is_ready(2));
        assert!(p.is_ready(3));
        p.mark_completed(5);
        assert!(!p.is_ready(6));
    }

    #[test]
    fn test_metrics_unset_before_completion() {
        let p = Process::new("P1", 0, 4);
        assert_eq!(p.turnaround_time(), None);
        assert_eq!(p.waiting_time(), None);
        assert_eq!(p.response_time(), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Process::new("P1", 0, 4);
        let mut copy = original.clone();
        copy.mark_started(0);
        copy.mark_completed(4);
        assert_eq!(original.start_time, None);
        assert!(!original.completed);
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Process::new("P1", 2, 6).with_priority(1);
        let json = serde_json::to_string(&p).unwrap();
        let back: Process = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
