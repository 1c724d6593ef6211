//! Shortest-Job-First scheduling (non-preemptive).
//!
//! Among the processes that have arrived, the one with the smallest total
//! burst runs to completion. Minimizes average waiting time for a known
//! workload, at the cost of starving long jobs while shorter ones keep
//! arriving.

use crate::models::{Process, Timeline};
use crate::policy::driver::run_nonpreemptive;
use crate::policy::select::ShortestBurst;

/// Schedules by smallest burst among arrived-and-incomplete processes.
pub fn schedule(processes: &mut [Process]) -> Timeline {
    run_nonpreemptive(processes, &ShortestBurst)
}
