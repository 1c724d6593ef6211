//! Selection rules for minimum-key policies.
//!
//! Four of the six policies share one decision shape: among the processes
//! that have arrived and are not finished, pick the minimum under a policy
//! key. The key differs per policy; the tie-break chain does not.
//!
//! # Score Convention
//! Lower key = dispatched first. Ties are broken by arrival time, then by
//! process id, giving a total order and therefore a unique schedule for
//! any input.

use crate::models::Process;

/// Primary ordering key for a minimum-key policy.
pub(crate) trait SelectionRule {
    /// Rule name for diagnostics.
    fn name(&self) -> &'static str;

    /// The policy key. Lower = dispatched first.
    fn key(&self, process: &Process) -> i64;
}

/// Shortest total burst first (SJF).
pub(crate) struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "shortest-burst"
    }

    fn key(&self, process: &Process) -> i64 {
        process.burst_time
    }
}

/// Shortest remaining work first (SRTF).
pub(crate) struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "shortest-remaining"
    }

    fn key(&self, process: &Process) -> i64 {
        process.remaining_time
    }
}

/// Numerically lowest priority value first (priority scheduling).
pub(crate) struct StrongestPriority;

impl SelectionRule for StrongestPriority {
    fn name(&self) -> &'static str {
        "strongest-priority"
    }

    fn key(&self, process: &Process) -> i64 {
        i64::from(process.priority)
    }
}

/// Index of the next process to dispatch at `now`, or `None` if no process
/// has arrived with work left. Minimum of `(key, arrival_time, pid)`.
pub(crate) fn select_ready(
    processes: &[Process],
    now: i64,
    rule: &impl SelectionRule,
) -> Option<usize> {
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_ready(now))
        .min_by(|(_, a), (_, b)| {
            (rule.key(a), a.arrival_time, a.pid.as_str())
                .cmp(&(rule.key(b), b.arrival_time, b.pid.as_str()))
        })
        .map(|(index, _)| index)
}

/// Earliest arrival among unfinished processes, for idle fast-forwarding.
pub(crate) fn next_arrival(processes: &[Process]) -> Option<i64> {
    processes
        .iter()
        .filter(|p| !p.completed)
        .map(|p| p.arrival_time)
        .min()
}
