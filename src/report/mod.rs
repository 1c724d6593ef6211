//! Text and chart reporting over finished runs.
//!
//! Everything here is presentational: the simulation core hands over a
//! timeline, an event stream, and metrics, and these functions format
//! them. All text renderers return `String` so the caller decides where
//! output goes (stdout, a tee, a test assertion).

pub mod charts;
pub mod gantt;
pub mod tee;

use crate::events::Event;
use crate::metrics::RunMetrics;

/// Formats the event stream as an execution log, one `t=<time>` line per
/// event.
pub fn events_log(events: &[Event]) -> String {
    let mut out = String::from("Execution Log:\n");
    for event in events {
        out.push_str(&format!("t={}: {} {}\n", event.time, event.pid, event.kind.verb()));
    }
    out
}

/// Formats per-process statistics and the run averages as a table.
pub fn stats_table(metrics: &RunMetrics) -> String {
    let mut out = String::from("Per-Process Statistics:\n");
    out.push_str(&format!(
        "{:<5} {:<5} {:<6} {:<6} {:<6} {:<6} {:<6}\n",
        "PID", "Arr", "Burst", "Compl", "Turn", "Wait", "Resp"
    ));
    for row in &metrics.per_process {
        out.push_str(&format!(
            "{:<5} {:<5} {:<6} {:<6} {:<6} {:<6} {:<6}\n",
            row.pid,
            row.arrival_time,
            row.burst_time,
            row.completion_time,
            row.turnaround_time,
            row.waiting_time,
            row.response_time
        ));
    }
    out.push_str(&format!(
        "\nAverages:\nTurnaround: {:.2}\nWaiting: {:.2}\nResponse: {:.2}\n",
        metrics.avg_turnaround, metrics.avg_waiting, metrics.avg_response
    ));
    out
}

/// Formats the ALL-mode summary comparing every policy's averages.
pub fn comparison_table(results: &[(String, RunMetrics)]) -> String {
    let mut out = String::from("Algorithm Comparison Summary:\n");
    out.push_str(&format!(
        "{:<10} {:<15} {:<15} {:<15} {:<18}\n",
        "Algorithm", "Avg Turnaround", "Avg Waiting", "Avg Response", "Context Switches"
    ));
    for (name, metrics) in results {
        out.push_str(&format!(
            "{:<10} {:<15.2} {:<15.2} {:<15.2} {:<18}\n",
            name, metrics.avg_turnaround, metrics.avg_waiting, metrics.avg_response,
            metrics.context_switches
        ));
    }
    out
}
