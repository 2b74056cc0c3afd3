//! Non-preemptive First-In-First-Out scheduler.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time, ties by id.
//! 2. Start the clock at the earliest arrival.
//! 3. For each process: if the clock is behind its arrival, emit an idle
//!    slice and jump to the arrival; then run it to completion.
//!
//! # Complexity
//! O(n log n), dominated by the sort.
//!
//! Long processes that arrive early delay every later process
//! (the convoy effect).

use crate::models::{sorted_by_arrival, Process, Slice};

/// Schedules `processes` first-come, first-served without preemption.
///
/// Each process appears in exactly one slice; gaps between a completion
/// and the next arrival are materialized as idle slices. An empty input
/// yields an empty sequence.
///
/// # Example
///
/// ```
/// use proc_sched::models::{Process, Slice};
/// use proc_sched::scheduler::schedule_fifo;
///
/// let procs = vec![Process::new("P1", 0, 5), Process::new("P2", 2, 3)];
/// let slices = schedule_fifo(&procs);
/// assert_eq!(slices, vec![Slice::process("P1", 0, 5), Slice::process("P2", 5, 8)]);
/// ```
pub fn schedule_fifo(processes: &[Process]) -> Vec<Slice> {
    let procs = sorted_by_arrival(processes);
    let mut slices = Vec::with_capacity(procs.len());
    let Some(first) = procs.first() else {
        return slices;
    };

    let mut clock = first.arrival;
    for p in procs {
        if clock < p.arrival {
            slices.push(Slice::idle(clock, p.arrival));
            clock = p.arrival;
        }
        slices.push(Slice::process(&p.id, clock, clock + p.service));
        clock += p.service;
    }

    slices
}
