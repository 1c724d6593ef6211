//! Priority scheduling, non-preemptive and preemptive.
//!
//! Lower priority value = higher priority. The non-preemptive variant runs
//! the strongest arrived process to completion; the preemptive variant
//! re-evaluates every time unit, so a stronger arrival takes the CPU
//! immediately. Either way, a weak process can be delayed indefinitely
//! while stronger work keeps arriving.

use crate::models::{Process, Timeline};
use crate::policy::driver::{run_nonpreemptive, run_unit_stepped};
use crate::policy::select::StrongestPriority;

/// Non-preemptive priority scheduling.
pub fn schedule_nonpreemptive(processes: &mut [Process]) -> Timeline {
    run_nonpreemptive(processes, &StrongestPriority)
}

/// Preemptive priority scheduling at 1-unit granularity.
pub fn schedule_preemptive(processes: &mut [Process]) -> Timeline {
    run_unit_stepped(processes, &StrongestPriority)
}
