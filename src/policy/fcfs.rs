//! First-Come-First-Served scheduling.
//!
//! Non-preemptive: processes run to completion in arrival order. Simple,
//! but long early arrivals delay everything behind them (convoy effect).

use crate::models::{ExecutionBlock, Process, Timeline};

/// Schedules the set in `(arrival_time, pid)` order, fast-forwarding the
/// clock over any idle gap before the next arrival.
pub fn schedule(processes: &mut [Process]) -> Timeline {
    processes.sort_by(|a, b| {
        (a.arrival_time, a.pid.as_str()).cmp(&(b.arrival_time, b.pid.as_str()))
    });

    let mut timeline = Timeline::new();
    let mut now = 0i64;

    for process in processes.iter_mut() {
        if now < process.arrival_time {
            now = process.arrival_time;
        }

        process.mark_started(now);
        let start = now;
        now += process.burst_time;
        process.mark_completed(now);
        timeline.push(ExecutionBlock::new(start, now, process.pid.clone()));
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(timeline: &Timeline) -> Vec<(i64, i64, &str)> {
        timeline
            .blocks()
            .iter()
            .map(|b| (b.start, b.end, b.pid.as_str()))
            .collect()
    }

    #[test]
    fn test_fcfs_arrival_order() {
        let mut processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3),
            Process::new("P3", 2, 1),
        ];
        let timeline = schedule(&mut processes);
        assert_eq!(
            blocks(&timeline),
            vec![(0, 5, "P1"), (5, 8, "P2"), (8, 9, "P3")]
        );
        // Response times 0, 4, 6.
        let by_pid = |pid: &str| processes.iter().find(|p| p.pid == pid).unwrap();
        assert_eq!(by_pid("P1").response_time(), Some(0));
        assert_eq!(by_pid("P2").response_time(), Some(4));
        assert_eq!(by_pid("P3").response_time(), Some(6));
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let mut processes = vec![Process::new("P1", 0, 2), Process::new("P2", 6, 3)];
        let timeline = schedule(&mut processes);
        assert_eq!(blocks(&timeline), vec![(0, 2, "P1"), (6, 9, "P2")]);
    }

    #[test]
    fn test_fcfs_tie_break_by_pid() {
        let mut processes = vec![Process::new("B", 0, 2), Process::new("A", 0, 2)];
        let timeline = schedule(&mut processes);
        assert_eq!(blocks(&timeline), vec![(0, 2, "A"), (2, 4, "B")]);
    }

    #[test]
    fn test_fcfs_empty() {
        assert!(schedule(&mut []).is_empty());
    }
}
