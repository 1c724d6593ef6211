//! Chronological event log derived from a finished run.
//!
//! Expands a process set and its execution timeline into a single ordered
//! stream of arrival, start, and completion events. The stream is totally
//! ordered by `(time, kind, pid)`, so it is deterministic regardless of
//! the order processes were supplied in.

use serde::{Deserialize, Serialize};

use crate::models::{Process, Timeline};

/// Kind of scheduling event.
///
/// Variant order is the tie-break rank at equal times: a process must have
/// arrived before anything else can happen to it, and a finishing process
/// is shown complete before another one starts at the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// The process became runnable.
    Arrival,
    /// The process ran its remaining work to zero.
    Completion,
    /// An execution block for the process began.
    Start,
}

impl EventKind {
    /// Log-line verb for the event.
    pub fn verb(&self) -> &'static str {
        match self {
            EventKind::Arrival => "arrives",
            EventKind::Completion => "completes",
            EventKind::Start => "starts running",
        }
    }
}

/// One scheduling event. The derived `Ord` is the display order:
/// time ascending, then [`EventKind`] rank, then pid.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Event {
    /// When the event happened.
    pub time: i64,
    /// What happened.
    pub kind: EventKind,
    /// The process it happened to.
    pub pid: String,
}

/// Derives the ordered event stream for a finished run.
///
/// Emits one arrival per process, one start per execution block, and one
/// completion per process — attached to the block whose end equals that
/// process's `completion_time`.
pub fn derive_events(processes: &[Process], timeline: &Timeline) -> Vec<Event> {
    let mut events: Vec<Event> = processes
        .iter()
        .map(|p| Event {
            time: p.arrival_time,
            kind: EventKind::Arrival,
            pid: p.pid.clone(),
        })
        .collect();

    for block in timeline.sorted() {
        events.push(Event {
            time: block.start,
            kind: EventKind::Start,
            pid: block.pid.clone(),
        });

        let finished_here = processes
            .iter()
            .any(|p| p.pid == block.pid && p.completion_time == Some(block.end));
        if finished_here {
            events.push(Event {
                time: block.end,
                kind: EventKind::Completion,
                pid: block.pid.clone(),
            });
        }
    }

    events.sort();
    events
}
