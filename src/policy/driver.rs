//! Shared simulation loops for the minimum-key policies.
//!
//! Two drivers cover four policies:
//!
//! - [`run_nonpreemptive`]: SJF and non-preemptive priority. The winner of
//!   each selection runs to completion; the clock fast-forwards to the next
//!   arrival when the CPU would sit idle.
//! - [`run_unit_stepped`]: SRTF and preemptive priority. The selection is
//!   re-evaluated every time unit, so a newly arrived process can preempt
//!   at any instant. Blocks are emitted only when the running process
//!   changes, keeping the timeline proportional to the number of
//!   preemptions rather than to total simulated time.
//!
//! Both loops terminate for every valid input: each iteration either
//! completes a process or strictly advances the clock.

use crate::models::{ExecutionBlock, Process, Timeline};
use crate::policy::select::{next_arrival, select_ready, SelectionRule};

/// Runs each selected process to completion, in `rule` order.
pub(crate) fn run_nonpreemptive(processes: &mut [Process], rule: &impl SelectionRule) -> Timeline {
    let mut timeline = Timeline::new();
    let mut now = 0i64;
    let mut completed = 0usize;

    while completed < processes.len() {
        let index = match select_ready(processes, now, rule) {
            Some(index) => index,
            None => {
                // CPU idle: fast-forward to the earliest unfinished arrival.
                match next_arrival(processes) {
                    Some(arrival) => now = arrival,
                    None => break,
                }
                continue;
            }
        };

        let process = &mut processes[index];
        process.mark_started(now);
        let start = now;
        now += process.burst_time;
        process.mark_completed(now);
        completed += 1;
        timeline.push(ExecutionBlock::new(start, now, process.pid.clone()));
    }

    timeline
}

/// Simulates in 1-unit steps, re-selecting every unit and coalescing
/// consecutive units of the same process into one block.
pub(crate) fn run_unit_stepped(processes: &mut [Process], rule: &impl SelectionRule) -> Timeline {
    let mut timeline = Timeline::new();
    let mut now = 0i64;
    let mut completed = 0usize;
    let mut running: Option<String> = None;
    let mut block_start = 0i64;

    while completed < processes.len() {
        let index = match select_ready(processes, now, rule) {
            Some(index) => index,
            None => {
                // CPU idle. Close any open block so it never spans the gap.
                if let Some(pid) = running.take() {
                    timeline.push(ExecutionBlock::new(block_start, now, pid));
                }
                now += 1;
                continue;
            }
        };

        if running.as_deref() != Some(processes[index].pid.as_str()) {
            if let Some(pid) = running.take() {
                timeline.push(ExecutionBlock::new(block_start, now, pid));
            }
            block_start = now;
            running = Some(processes[index].pid.clone());
        }

        let process = &mut processes[index];
        process.mark_started(now);
        process.remaining_time -= 1;
        now += 1;
        if process.remaining_time == 0 {
            process.mark_completed(now);
            completed += 1;
        }
    }

    if let Some(pid) = running.take() {
        timeline.push(ExecutionBlock::new(block_start, now, pid));
    }

    timeline
}
