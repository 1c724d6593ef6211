//! Round-robin scheduling.
//!
//! A FIFO ready queue with a fixed time slice. Each dispatch runs for
//! `min(quantum, remaining)`; a process preempted by quantum expiry goes to
//! the back of the queue. Arrivals that land during a slice are enqueued
//! before the preempted process is requeued, so a fresh arrival never waits
//! behind the process that was just running.
//!
//! One block is emitted per dispatch; consecutive blocks of the same
//! process are kept distinct.

use std::collections::VecDeque;

use crate::models::{ExecutionBlock, Process, Timeline};

/// Schedules with the given time slice. `quantum` must be positive —
/// callers validate it before this runs.
pub fn schedule(processes: &mut [Process], quantum: i64) -> Timeline {
    debug_assert!(quantum > 0);

    processes.sort_by(|a, b| {
        (a.arrival_time, a.pid.as_str()).cmp(&(b.arrival_time, b.pid.as_str()))
    });

    let mut timeline = Timeline::new();
    let mut now = 0i64;
    let mut completed = 0usize;
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut enqueued = vec![false; processes.len()];

    enqueue_arrivals(processes, now, &mut enqueued, &mut queue);

    while completed < processes.len() {
        let index = match queue.pop_front() {
            Some(index) => index,
            None => {
                // Queue drained with work left: fast-forward to the next arrival.
                match processes
                    .iter()
                    .filter(|p| !p.completed)
                    .map(|p| p.arrival_time)
                    .min()
                {
                    Some(arrival) => now = arrival,
                    None => break,
                }
                enqueue_arrivals(processes, now, &mut enqueued, &mut queue);
                continue;
            }
        };

        let process = &mut processes[index];
        process.mark_started(now);
        let slice = quantum.min(process.remaining_time);
        let start = now;
        now += slice;
        process.remaining_time -= slice;
        let finished = process.remaining_time == 0;
        let pid = process.pid.clone();
        timeline.push(ExecutionBlock::new(start, now, pid));

        // New arrivals enter the queue before the preempted process.
        enqueue_arrivals(processes, now, &mut enqueued, &mut queue);

        if finished {
            processes[index].mark_completed(now);
            completed += 1;
        } else {
            queue.push_back(index);
        }
    }

    timeline
}

/// Enqueues every process that has arrived by `now` and is not yet queued.
/// The slice is `(arrival, pid)`-sorted, so the queue stays FIFO by arrival.
fn enqueue_arrivals(
    processes: &[Process],
    now: i64,
    enqueued: &mut [bool],
    queue: &mut VecDeque<usize>,
) {
    for (index, process) in processes.iter().enumerate() {
        if process.arrival_time <= now && !enqueued[index] {
            queue.push_back(index);
            enqueued[index] = true;
        }
    }
}
