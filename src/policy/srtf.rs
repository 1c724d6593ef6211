//! Shortest-Remaining-Time-First scheduling (preemptive SJF).
//!
//! The selection is re-evaluated every time unit: a new arrival with less
//! remaining work than the running process takes the CPU immediately.

use crate::models::{Process, Timeline};
use crate::policy::driver::run_unit_stepped;
use crate::policy::select::ShortestRemaining;

/// Schedules by smallest remaining work, preempting at 1-unit granularity.
pub fn schedule(processes: &mut [Process]) -> Timeline {
    run_unit_stepped(processes, &ShortestRemaining)
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
    fn test_srtf_preempts_on_shorter_arrival() {
        let mut processes = vec![Process::new("P1", 0, 7), Process::new("P2", 2, 4)];
        let timeline = schedule(&mut processes);
        // At t=2, P2's remaining 4 < P1's remaining 5: preempt.
        assert_eq!(
            blocks(&timeline),
            vec![(0, 2, "P1"), (2, 6, "P2"), (6, 9, "P1")]
        );
        assert_eq!(processes[0].completion_time, Some(9));
        assert_eq!(processes[1].completion_time, Some(6));
    }

    #[test]
    fn test_srtf_no_preemption_on_equal_remaining() {
        // At t=2, both remaining times are 4; the running process arrived
        // earlier and keeps the CPU.
        let mut processes = vec![Process::new("P1", 0, 6), Process::new("P2", 2, 4)];
        let timeline = schedule(&mut processes);
        assert_eq!(blocks(&timeline), vec![(0, 6, "P1"), (6, 10, "P2")]);
    }

    #[test]
    fn test_srtf_start_time_set_on_first_dispatch_only() {
        let mut processes = vec![Process::new("P1", 0, 7), Process::new("P2", 2, 4)];
        schedule(&mut processes);
        // P1 resumed at t=6 but started at t=0.
        assert_eq!(processes[0].start_time, Some(0));
        assert_eq!(processes[1].start_time, Some(2));
    }

    #[test]
    fn test_srtf_idle_advances_unit_wise() {
        let mut processes = vec![Process::new("P1", 3, 2)];
        let timeline = schedule(&mut processes);
        assert_eq!(blocks(&timeline), vec![(3, 5, "P1")]);
    }
}
